use std::fmt;

use super::Node;
use super::glyph::{BranchMarker, SEPARATOR};

/// Renders the tree in the same box-drawing layout the parser reads.
///
/// Directories are printed with a trailing separator so that the output parses
/// back into an equal tree. No trailing newline is written.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_label(f, self)?;
        let mut prefix = String::new();
        write_children(f, self.children(), &mut prefix)
    }
}

fn write_label(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    if node.is_directory() {
        write!(f, "{}{}", node.name(), SEPARATOR)
    } else {
        write!(f, "{}", node.name())
    }
}

fn write_children(f: &mut fmt::Formatter<'_>, children: &[Node], prefix: &mut String) -> fmt::Result {
    for (index, child) in children.iter().enumerate() {
        let marker = BranchMarker::for_position(index + 1 == children.len());
        write!(f, "\n{prefix}{marker}")?;
        write_label(f, child)?;

        if !child.children().is_empty() {
            let restore = prefix.len();
            prefix.push_str(marker.child_indent());
            write_children(f, child.children(), prefix)?;
            prefix.truncate(restore);
        }
    }
    Ok(())
}
