//! Per-module size breakdown of compiled JavaScript bundles.
//!
//! Bundlers such as webpack prefix every module in their output with a block
//! comment holding the module id (`/* 12 */ function(module, exports) {...}`).
//! This crate finds those comments, matches them against the `modules` list of
//! the build's stats file and measures how many bytes each module occupies.
//!
//! # Examples
//!
//! ```no_run
//! use bundlescope_analyze::{Config, print_summary, run_bundle_analysis};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut cfg = Config::new("dist/server/main.js");
//! cfg.stats = "dist/server/stats.json".into();
//!
//! let result = run_bundle_analysis(&cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! print_summary(&mut stdout, &result)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod analyzer;
mod config;
mod error;
mod markers;
mod reconstruct;
mod reporter;
mod rewriter;
mod types;
mod writer;

// Re-export public API
pub use analyzer::{analyze_source, run_bundle_analysis};
pub use config::{Config, DEFAULT_OUTPUT_DIR, DEFAULT_STATS_PATH};
pub use error::AnalyzeError;
pub use markers::{find_markers, select_markers};
pub use reconstruct::reconstruct_modules;
pub use reporter::print_summary;
pub use rewriter::strip_markers;
pub use types::{AnalysisResult, BundleAnalysis, ModuleReport};
pub use writer::{
    GITIGNORE_SEED, JSON_REPORT, TSV_HEADER, TSV_REPORT, prepare_output_dir, render_json,
    render_tsv, write_reports,
};
