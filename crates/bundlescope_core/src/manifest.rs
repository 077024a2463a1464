use anyhow::{Context, Result};
use log::{debug, trace};
use std::{collections::HashMap, fs, path::Path};

use crate::types::{Manifest, ManifestModule};

pub fn load_manifest(path: &Path) -> Result<Manifest> {
    debug!("Reading stats manifest: {}", path.display());
    let txt = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stats file {}", path.display()))?;
    let manifest: Manifest = serde_json::from_str(&txt)
        .with_context(|| format!("Failed to parse stats file {}", path.display()))?;
    debug!("Loaded {} modules from {}", manifest.modules.len(), path.display());
    Ok(manifest)
}

/// Renders a module id the way the bundler writes it inside a marker comment.
pub fn marker_text(id: u64) -> String {
    format!(" {} ", id)
}

/// Exact-match lookup from marker comment text to manifest record.
#[derive(Debug)]
pub struct ModuleIndex<'m> {
    by_marker: HashMap<String, &'m ManifestModule>,
}

impl<'m> ModuleIndex<'m> {
    pub fn new(modules: &'m [ManifestModule]) -> Self {
        let mut by_marker = HashMap::with_capacity(modules.len());
        for m in modules {
            // First record wins for duplicated ids
            if by_marker.contains_key(&marker_text(m.id)) {
                trace!("Ignoring duplicate manifest entry for id {}", m.id);
                continue;
            }
            by_marker.insert(marker_text(m.id), m);
        }
        debug!("Indexed {} manifest modules", by_marker.len());
        Self { by_marker }
    }

    /// `marker` is the raw comment value, padding included.
    pub fn lookup(&self, marker: &str) -> Option<&'m ManifestModule> {
        self.by_marker.get(marker).copied()
    }

    pub fn len(&self) -> usize {
        self.by_marker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_marker.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let file_path = dir.join(name);
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn module(id: u64, identifier: &str) -> ManifestModule {
        ManifestModule { id, name: None, identifier: identifier.to_string() }
    }

    #[test]
    fn test_load_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let stats = r#"
{
  "hash": "8b1f6e",
  "version": "3.12.0",
  "modules": [
    { "id": 0, "name": "./src/index.js", "identifier": "/app/src/index.js", "size": 120 },
    { "id": 1, "identifier": "/app/node_modules/lodash/lodash.js" }
  ]
}
"#;
        let file = create_test_file(temp_dir.path(), "stats.json", stats);
        let manifest = load_manifest(&file).unwrap();
        assert_eq!(manifest.modules.len(), 2);
        assert_eq!(manifest.modules[0].name.as_deref(), Some("./src/index.js"));
        assert_eq!(manifest.modules[1].name, None);
        assert_eq!(manifest.modules[1].identifier, "/app/node_modules/lodash/lodash.js");
    }

    #[test]
    fn test_load_manifest_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_manifest(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read stats file"));
    }

    #[test]
    fn test_load_manifest_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(temp_dir.path(), "stats.json", "{ \"modules\": [ { \"id\": ");
        let err = load_manifest(&file).unwrap_err();
        assert!(err.to_string().contains("Failed to parse stats file"));
    }

    #[test]
    fn test_marker_text_padding() {
        assert_eq!(marker_text(0), " 0 ");
        assert_eq!(marker_text(137), " 137 ");
    }

    #[test]
    fn test_lookup_exact_match_only() {
        let modules = vec![module(3, "a.js"), module(12, "b.js")];
        let index = ModuleIndex::new(&modules);
        assert_eq!(index.lookup(" 12 ").map(|m| m.identifier.as_str()), Some("b.js"));
        assert!(index.lookup("12").is_none());
        assert!(index.lookup("  12 ").is_none());
        assert!(index.lookup(" 012 ").is_none());
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let modules = vec![module(5, "first.js"), module(5, "second.js")];
        let index = ModuleIndex::new(&modules);
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup(" 5 ").unwrap().identifier, "first.js");
    }

    #[test]
    fn test_empty_index() {
        let index = ModuleIndex::new(&[]);
        assert!(index.is_empty());
        assert!(index.lookup(" 0 ").is_none());
    }
}
