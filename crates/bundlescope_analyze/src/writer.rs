use anyhow::{Context, Result};
use log::{debug, info};
use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use crate::{config::Config, types::ModuleReport};

pub const JSON_REPORT: &str = "bundle.analyze.json";
pub const TSV_REPORT: &str = "bundle.analyze.tsv";
pub const TSV_HEADER: &str = "Module ID\tFull Path\tIdentity Path\tSize (bytes)\n";
pub const GITIGNORE_SEED: &str = "# Electrode tmp dir\n*\n";

/// Returns the output directory, creating the default one on first use.
pub fn prepare_output_dir(cfg: &Config) -> Result<PathBuf> {
    ensure_output_dir(&cfg.dir, cfg.uses_default_dir())?;
    Ok(cfg.dir.clone())
}

/// Creates `dir` with an ignore-all `.gitignore` when `seed` is set and it is
/// missing. Other directories are left to the caller.
pub(crate) fn ensure_output_dir(dir: &Path, seed: bool) -> Result<()> {
    if !seed || dir.exists() {
        debug!("Using output directory {}", dir.display());
        return Ok(());
    }

    info!("Creating output directory {}", dir.display());
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let gitignore = dir.join(".gitignore");
    fs::write(&gitignore, GITIGNORE_SEED)
        .with_context(|| format!("Failed to write {}", gitignore.display()))?;
    Ok(())
}

pub fn render_json(modules: &[ModuleReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(modules)?)
}

pub fn render_tsv(modules: &[ModuleReport]) -> String {
    modules.iter().fold(TSV_HEADER.to_string(), |mut out, m| {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            m.id,
            m.name.as_deref().unwrap_or_default(),
            m.identifier,
            m.size
        );
        out
    })
}

/// Writes both reports into `dir` and returns their paths (JSON, TSV).
pub fn write_reports(dir: &Path, modules: &[ModuleReport]) -> Result<(PathBuf, PathBuf)> {
    let json_path = dir.join(JSON_REPORT);
    fs::write(&json_path, render_json(modules)?)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    debug!("Wrote {}", json_path.display());

    let tsv_path = dir.join(TSV_REPORT);
    fs::write(&tsv_path, render_tsv(modules))
        .with_context(|| format!("Failed to write {}", tsv_path.display()))?;
    debug!("Wrote {}", tsv_path.display());

    Ok((json_path, tsv_path))
}
