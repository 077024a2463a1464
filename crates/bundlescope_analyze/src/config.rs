use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_STATS_PATH: &str = "dist/server/stats.json";
pub const DEFAULT_OUTPUT_DIR: &str = ".etmp";

#[derive(Debug, Clone, Parser)]
#[command(name = "analyze-bundle")]
#[command(about = "Attribute the bytes of a compiled bundle to its source modules")]
pub struct Config {
    /// JS bundle file from webpack
    #[arg(short = 'b', long)]
    pub bundle: PathBuf,

    /// stats JSON file from webpack
    #[arg(short = 's', long, default_value = DEFAULT_STATS_PATH)]
    pub stats: PathBuf,

    /// rewrite the bundle file with module ID comments removed
    #[arg(short = 'r', long)]
    pub rewrite: bool,

    /// directory to write the analyze results
    #[arg(short = 'd', long, default_value = DEFAULT_OUTPUT_DIR)]
    pub dir: PathBuf,
}

impl Config {
    pub fn new(bundle: impl Into<PathBuf>) -> Self {
        Self {
            bundle: bundle.into(),
            stats: PathBuf::from(DEFAULT_STATS_PATH),
            rewrite: false,
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn uses_default_dir(&self) -> bool {
        self.dir.as_os_str() == DEFAULT_OUTPUT_DIR
    }
}
