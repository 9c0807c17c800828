use std::path::PathBuf;

use crate::application::data::DiagramSource;
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub source: DiagramSource,
    pub base: PathBuf,
    pub dry_run: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            source: DiagramSource::from_args(cli.tree, cli.diagram),
            base: cli.base,
            dry_run: cli.dry_run,
        }
    }
}
