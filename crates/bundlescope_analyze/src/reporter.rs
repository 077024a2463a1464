use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::types::{AnalysisResult, ModuleReport};

const TOP_MODULES: usize = 5;

pub fn print_summary<W: Write>(writer: &mut W, result: &AnalysisResult) -> io::Result<()> {
    let analysis = &result.analysis;
    debug!("Printing summary for {} modules", analysis.modules.len());

    writeln!(
        writer,
        "{} Analyzed {} modules ({} of {} bytes attributed)",
        "✓".green().bold(),
        analysis.modules.len().to_string().cyan(),
        analysis.total_size().to_string().cyan(),
        analysis.bundle_size.to_string().cyan()
    )?;

    let largest = largest_modules(&analysis.modules, TOP_MODULES);
    if !largest.is_empty() {
        writeln!(writer, "\n{}", "Largest modules".bold())?;
        for (idx, m) in largest.iter().enumerate() {
            writeln!(
                writer,
                "  {}. {} ({} bytes) {}",
                idx + 1,
                m.identifier.blue(),
                m.size.to_string().red(),
                format!("#{}", m.id).dimmed()
            )?;
        }
    }

    writeln!(writer, "\n{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "  {}", result.json_path.display())?;
    writeln!(writer, "  {}", result.tsv_path.display())?;

    writer.flush()?;
    Ok(())
}

/// Up to `n` modules by descending size; ties keep bundle order.
fn largest_modules(modules: &[ModuleReport], n: usize) -> Vec<&ModuleReport> {
    let mut sorted: Vec<&ModuleReport> = modules.iter().collect();
    sorted.sort_by(|a, b| b.size.cmp(&a.size));
    sorted.truncate(n);
    sorted
}
