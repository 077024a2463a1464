use anyhow::{Context, Result};
use log::{debug, info};
use std::{env, fs, path::Path};

use bundlescope_core::{Manifest, ModuleIndex, collect_comments, load_manifest, source_type_for};

use crate::{
    config::Config,
    error::AnalyzeError,
    markers::find_markers,
    reconstruct::reconstruct_modules,
    rewriter::strip_markers,
    types::{AnalysisResult, BundleAnalysis},
    writer::{prepare_output_dir, write_reports},
};

/// Runs the whole analysis: reads the stats and bundle files, attributes
/// sizes, optionally rewrites the bundle and writes both reports.
///
/// Nothing is written when the bundle carries no module ID comments.
pub fn run_bundle_analysis(cfg: &Config) -> Result<AnalysisResult> {
    info!("Analyzing bundle {}", cfg.bundle.display());

    let manifest = load_manifest(&cfg.stats)?;
    let source = fs::read_to_string(&cfg.bundle)
        .with_context(|| format!("Failed to read bundle {}", cfg.bundle.display()))?;
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    let cwd = cwd.to_string_lossy();
    debug!("Normalizing identifiers against {}", cwd);

    let analysis = analyze_source(&cfg.bundle, &source, &manifest, &cwd, cfg.rewrite)?;

    let dir = prepare_output_dir(cfg)?;

    if let Some(rewritten) = &analysis.rewritten {
        info!("Rewriting {} without module ID comments", cfg.bundle.display());
        fs::write(&cfg.bundle, rewritten)
            .with_context(|| format!("Failed to rewrite bundle {}", cfg.bundle.display()))?;
    }

    let (json_path, tsv_path) = write_reports(&dir, &analysis.modules)?;
    info!("Wrote {} module reports to {}", analysis.modules.len(), dir.display());

    Ok(AnalysisResult { analysis, json_path, tsv_path })
}

/// Analyzes bundle text already in memory against a loaded manifest.
///
/// `path` only selects the parse mode and names the bundle in errors.
pub fn analyze_source(
    path: &Path,
    source: &str,
    manifest: &Manifest,
    cwd: &str,
    rewrite: bool,
) -> Result<BundleAnalysis> {
    let comments = collect_comments(source, source_type_for(path)).map_err(|e| {
        AnalyzeError::BundleParse { path: path.to_path_buf(), message: e.to_string() }
    })?;
    let markers = find_markers(source, &comments)?;
    info!("Found {} module ID markers", markers.len());

    let index = ModuleIndex::new(&manifest.modules);
    let modules = reconstruct_modules(source, &markers, &index, cwd)?;
    let rewritten = rewrite.then(|| strip_markers(source, &markers));

    Ok(BundleAnalysis {
        modules,
        markers_found: markers.len(),
        bundle_size: source.len(),
        rewritten,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bundlescope_core::ManifestModule;

    const BUNDLE: &str = "module.exports = (function(modules) { return modules; }([\n/* 0 */ function(module, exports, __webpack_require__) {\n  module.exports = __webpack_require__(1);\n},\n/* 1 */ function(module, exports) {\n  module.exports = \"hello\";\n}]));\n";

    fn manifest() -> Manifest {
        Manifest {
            modules: vec![
                ManifestModule {
                    id: 0,
                    name: Some("./src/server.js".to_string()),
                    identifier: "/work/app/node_modules/babel-loader/lib/index.js!/work/app/src/server.js"
                        .to_string(),
                },
                ManifestModule {
                    id: 1,
                    name: Some("./node_modules/greeting/index.js".to_string()),
                    identifier: "/work/app/node_modules/greeting/index.js".to_string(),
                },
            ],
        }
    }

    fn bundle_path() -> &'static Path {
        Path::new("dist/server/main.js")
    }

    #[test]
    fn test_analyze_source() {
        let analysis =
            analyze_source(bundle_path(), BUNDLE, &manifest(), "/work/app", false).unwrap();

        assert_eq!(analysis.markers_found, 2);
        assert_eq!(analysis.bundle_size, BUNDLE.len());
        assert!(analysis.rewritten.is_none());

        let first_end = BUNDLE.find("/* 0 */").unwrap() + "/* 0 */".len();
        let second_start = BUNDLE.find("/* 1 */").unwrap();
        let second_end = second_start + "/* 1 */".len();
        let terminator = BUNDLE.find("}]))").unwrap();

        let m = &analysis.modules;
        assert_eq!(m.len(), 2);
        assert_eq!(m[0].id, 0);
        assert_eq!(m[0].identifier, "./src/server.js");
        assert_eq!(m[0].size, second_start - first_end);
        assert_eq!(m[1].id, 1);
        assert_eq!(m[1].identifier, "~/greeting/index.js");
        assert_eq!(m[1].size, terminator - second_end + 1);
    }

    #[test]
    fn test_analyze_source_rewrite() {
        let analysis =
            analyze_source(bundle_path(), BUNDLE, &manifest(), "/work/app", true).unwrap();
        let rewritten = analysis.rewritten.unwrap();
        assert!(!rewritten.contains("/* 0 */"));
        assert!(!rewritten.contains("/* 1 */"));
    }

    #[test]
    fn test_analyze_source_without_markers() {
        let source = "var x = 1; /* 3 */";
        let err =
            analyze_source(bundle_path(), source, &manifest(), "/work/app", false).unwrap_err();
        assert!(matches!(err.downcast_ref::<AnalyzeError>(), Some(AnalyzeError::NoMarkersFound)));
    }

    #[test]
    fn test_analyze_source_stale_manifest() {
        let stale = Manifest { modules: manifest().modules.into_iter().take(1).collect() };
        let err = analyze_source(bundle_path(), BUNDLE, &stale, "/work/app", false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalyzeError>(),
            Some(AnalyzeError::UnknownModuleId { .. })
        ));
    }
}
