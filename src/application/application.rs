use colored::Colorize;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::application::data::DiagramSourceError;
use crate::materializer::{MaterializeError, materialize, root_path};
use crate::parser::{ParseError, parse_tree};
use crate::tree::Node;
use crate::tree::glyph::SEPARATOR;

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let text = app_config.source.read().await.context(InputSnafu)?;
        let root = parse_tree(&text).context(DiagramParseSnafu)?;
        info!(
            "Parsed {} entries under '{}'",
            root.node_count(),
            root.name()
        );

        if app_config.dry_run {
            print_preview(&root);
            return Ok(());
        }

        materialize(&root, &app_config.base).context(MaterializationSnafu)?;

        let created = root_path(&root, &app_config.base);
        println!(
            "{} {}",
            "File structure successfully created in".green(),
            created.display().to_string().bold()
        );
        Ok(())
    }
}

fn print_preview(root: &Node) {
    for line in root.to_string().lines() {
        if line.ends_with(SEPARATOR) {
            println!("{}", line.blue().bold());
        } else {
            println!("{line}");
        }
    }
    println!(
        "{}",
        format!("{} entries, nothing written (dry run)", root.node_count()).dimmed()
    );
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while reading the diagram"))]
    InputError { source: DiagramSourceError },
    #[snafu(display("Critical failure encountered while parsing the diagram"))]
    DiagramParseError { source: ParseError },
    #[snafu(display("Critical failure encountered while creating the file structure"))]
    MaterializationError { source: MaterializeError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::data::DiagramSource;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const PROJECT: &str = "project/
├── README.md
├── src/
│   ├── index.ts
│   └── utils/
│       └── date.ts
└── .gitignore";

    fn config(text: &str, base: PathBuf, dry_run: bool) -> RuntimeConfig {
        RuntimeConfig {
            source: DiagramSource::Literal(text.to_string()),
            base,
            dry_run,
        }
    }

    #[compio::test]
    async fn builds_structure_from_literal_diagram() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        Application::run(config(PROJECT, temp_dir.path().to_path_buf(), false))
            .await
            .expect("Application run failed");

        let root = temp_dir.path().join("project");
        assert!(root.join("src/utils").is_dir());
        assert!(root.join("src/utils/date.ts").is_file());
        assert!(root.join(".gitignore").is_file());
    }

    #[compio::test]
    async fn current_dir_root_builds_into_base() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let diagram = ".\n├── src/\n│   └── main.rs\n└── Cargo.toml";

        Application::run(config(diagram, temp_dir.path().to_path_buf(), false))
            .await
            .expect("Application run failed");

        assert!(temp_dir.path().join("src/main.rs").is_file());
        assert!(temp_dir.path().join("Cargo.toml").is_file());
    }

    #[compio::test]
    async fn dry_run_touches_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        Application::run(config(PROJECT, temp_dir.path().to_path_buf(), true))
            .await
            .expect("Application run failed");

        assert!(!temp_dir.path().join("project").exists());
    }

    #[compio::test]
    async fn empty_diagram_is_a_parse_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let result = Application::run(config("", temp_dir.path().to_path_buf(), false)).await;

        assert!(matches!(
            result,
            Err(ApplicationError::DiagramParseError {
                source: ParseError::EmptyInput
            })
        ));
    }

    #[compio::test]
    async fn blocked_destination_is_a_materialization_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::write(temp_dir.path().join("project"), "").expect("Failed to create blocker");

        let result = Application::run(config(PROJECT, temp_dir.path().to_path_buf(), false)).await;

        assert!(matches!(
            result,
            Err(ApplicationError::MaterializationError {
                source: MaterializeError::DirectoryCreation { .. }
            })
        ));
    }
}
