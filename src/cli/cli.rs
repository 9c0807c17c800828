use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Create directories and empty files from a `tree`-style diagram.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// File holding the diagram; `-` or nothing reads standard input
    #[clap(conflicts_with = "tree")]
    pub diagram: Option<PathBuf>,

    /// Diagram given inline instead of from a file
    #[clap(long, short)]
    pub tree: Option<String>,

    /// Directory under which the root entry is created
    #[clap(long, short, default_value = ".")]
    pub base: PathBuf,

    /// Print the parsed tree without touching the filesystem
    #[clap(long, short = 'n')]
    pub dry_run: bool,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
