use anyhow::Result;
use bundlescope_analyze::{AnalyzeError, Config};
use clap::Parser;
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "analyze-bundle")]
#[command(about = "Break down a compiled JavaScript bundle by module size", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    let cfg = cli.config;
    debug!("Parsed CLI arguments: {:?}", cfg);

    let start = Instant::now();

    let result = match bundlescope_analyze::run_bundle_analysis(&cfg) {
        Ok(result) => result,
        Err(e) => {
            if let Some(AnalyzeError::NoMarkersFound) = e.downcast_ref::<AnalyzeError>() {
                eprintln!("analyze-bundle: {}", e);
                std::process::exit(1);
            }
            return Err(e);
        }
    };
    info!(
        "Attributed {} bytes to {} modules from {} module ID comments",
        result.analysis.total_size(),
        result.analysis.modules.len(),
        result.analysis.markers_found
    );

    if result.analysis.rewritten.is_some() {
        writeln!(stdout, "analyze-bundle: rewriting bundle without module ID comments")?;
    }

    bundlescope_analyze::print_summary(&mut stdout, &result)?;

    let elapsed_ms = start.elapsed().as_millis();
    writeln!(
        stdout,
        "\n{} Finished in {}ms on {} bytes.",
        "●".bright_blue(),
        elapsed_ms.to_string().cyan(),
        result.analysis.bundle_size.to_string().cyan()
    )?;
    stdout.flush()?;

    Ok(())
}
