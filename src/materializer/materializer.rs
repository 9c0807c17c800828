use std::fs::{DirBuilder, File};
use std::path::{Component, Path, PathBuf};

use snafu::{ResultExt, Snafu, ensure};
use tracing::debug;

use crate::ext::BestEffortPathExt;
use crate::tree::{Node, NodeKind};

/// Creates `node` under `base`: directories recursively, files empty.
///
/// A `.` root, as printed by `tree` for the working directory, stands for
/// `base` itself. Existing directories are reused and existing files are
/// truncated, so running this twice over the same tree leaves the same layout.
/// The walk stops at the first failure and keeps whatever was already created.
pub fn materialize(node: &Node, base: &Path) -> Result<(), MaterializeError> {
    match node.kind() {
        NodeKind::Directory { children } if is_current_dir(node.name()) => {
            create_directory(base)?;
            for child in children {
                materialize_entry(child, base)?;
            }
            Ok(())
        }
        _ => materialize_entry(node, base),
    }
}

/// Path the root of `node` occupies once materialized under `base`.
pub fn root_path(node: &Node, base: &Path) -> PathBuf {
    if node.is_directory() && is_current_dir(node.name()) {
        base.to_path_buf()
    } else {
        base.join(node.name())
    }
}

fn materialize_entry(node: &Node, base: &Path) -> Result<(), MaterializeError> {
    ensure!(
        is_single_component(node.name()),
        InvalidNameSnafu {
            name: node.name(),
            parent: base,
        }
    );
    let path = base.join(node.name());

    match node.kind() {
        NodeKind::Directory { children } => {
            create_directory(&path)?;
            for child in children {
                materialize_entry(child, &path)?;
            }
        }
        NodeKind::File => {
            create_directory(base)?;
            File::create(&path).context(FileCreationSnafu { path: &path })?;
            debug!("Created file {}", path.display());
        }
    }

    Ok(())
}

fn create_directory(path: &Path) -> Result<(), MaterializeError> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(path).context(DirectoryCreationSnafu { path })?;
    debug!("Ensured directory {}", path.display());
    Ok(())
}

fn is_current_dir(name: &str) -> bool {
    matches!(
        Path::new(name).components().collect::<Vec<_>>().as_slice(),
        [Component::CurDir]
    )
}

/// A name must stay inside its parent: exactly one normal path component.
fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.ends_with(std::path::is_separator)
}

#[derive(Debug, Snafu)]
pub enum MaterializeError {
    #[snafu(display("Failed to create directory {}", path.best_effort_path_display()))]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create file {}", path.best_effort_path_display()))]
    FileCreation {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display(
        "Entry name '{}' under {} is not a single path component",
        name,
        parent.best_effort_path_display()
    ))]
    InvalidName { name: String, parent: PathBuf },
}
