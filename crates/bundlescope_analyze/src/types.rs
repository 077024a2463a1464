use serde::Serialize;
use std::path::PathBuf;

/// Size attributed to one module of the bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleReport {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub size: usize,
    /// Normalized identifier
    #[serde(rename = "iden")]
    pub identifier: String,
}

#[derive(Debug, Clone)]
pub struct BundleAnalysis {
    pub modules: Vec<ModuleReport>,
    pub markers_found: usize,
    pub bundle_size: usize,
    /// Bundle text without marker comments, when rewriting was requested
    pub rewritten: Option<String>,
}

impl BundleAnalysis {
    pub fn total_size(&self) -> usize {
        self.modules.iter().map(|m| m.size).sum()
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub analysis: BundleAnalysis,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}
