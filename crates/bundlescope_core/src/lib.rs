//! Core utilities for bundlescope.
//!
//! This crate provides the building blocks for attributing bundle bytes to
//! source modules:
//! - Collecting comment tokens from a compiled bundle with oxc
//! - Loading the bundler's stats manifest and indexing it by marker text
//! - Normalizing module identifiers for display

mod constants;
mod identifier;
mod manifest;
mod parser;
mod types;

// Re-export public API
pub use constants::{
    BUNDLE_TERMINATOR, FUNCTION_KEYWORD, LOADER_SEPARATOR, MARKER_FOLLOWERS, NODE_MODULES,
};
pub use identifier::normalize_identifier;
pub use manifest::{ModuleIndex, load_manifest, marker_text};
pub use parser::{collect_comments, source_type_for};
pub use types::{CommentKind, CommentToken, Manifest, ManifestModule};
