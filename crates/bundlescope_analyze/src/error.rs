use std::path::PathBuf;

/// Failures the binary reports distinctly. They travel inside `anyhow::Error`
/// and are recovered with `downcast_ref`.
#[derive(thiserror::Error, Debug)]
pub enum AnalyzeError {
    #[error("bundle doesn't contain comments with module IDs, can't analyze")]
    NoMarkersFound,
    #[error("module ID comment /*{marker}*/ at offset {offset} has no entry in the stats file")]
    UnknownModuleId { marker: String, offset: u32 },
    #[error("failed to parse bundle {}: {message}", .path.display())]
    BundleParse { path: PathBuf, message: String },
}
