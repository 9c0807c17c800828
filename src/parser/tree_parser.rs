use snafu::{OptionExt, Snafu};
use tracing::{debug, trace, warn};

use crate::parser::line::{EntryLine, root_name};
use crate::tree::Node;

/// A directory whose closing line has not been reached yet.
#[derive(Debug)]
struct OpenDirectory {
    name: String,
    children: Vec<Node>,
}

impl OpenDirectory {
    fn new(name: impl Into<String>) -> Self {
        OpenDirectory {
            name: name.into(),
            children: Vec::new(),
        }
    }

    fn close(self) -> Node {
        Node::directory(self.name, self.children)
    }
}

/// Open directories indexed by level: `stack[0]` is the root and `stack[n]`
/// receives the entries printed at indent level `n`.
#[derive(Debug)]
struct AncestorStack {
    open: Vec<OpenDirectory>,
}

impl AncestorStack {
    fn with_root(name: &str) -> Self {
        AncestorStack {
            open: vec![OpenDirectory::new(name)],
        }
    }

    fn deepest_level(&self) -> usize {
        self.open.len() - 1
    }

    /// Closes every directory deeper than `len - 1`, attaching each to its parent.
    /// The root is never closed here.
    fn truncate(&mut self, len: usize) {
        let len = len.max(1);
        while self.open.len() > len {
            if let Some(closed) = self.open.pop() {
                self.attach(closed.close());
            }
        }
    }

    fn attach(&mut self, node: Node) {
        if let Some(parent) = self.open.last_mut() {
            parent.children.push(node);
        }
    }

    fn open(&mut self, name: &str) {
        self.open.push(OpenDirectory::new(name));
    }

    fn finish(mut self) -> Option<Node> {
        self.truncate(1);
        self.open.pop().map(OpenDirectory::close)
    }
}

/// Builds a [`Node`] tree from a box-drawing diagram.
///
/// The first non-blank line names the root, which is always a directory. Every
/// other line is attached under the open directory matching its indent level.
/// Lines that carry no entry are skipped. A line indented deeper than any open
/// directory is attached to the deepest one instead.
pub fn parse_tree(text: &str) -> Result<Node, ParseError> {
    let mut lines = text.lines().enumerate();

    let root = lines
        .by_ref()
        .map(|(_, line)| line)
        .find(|line| !line.trim().is_empty())
        .and_then(root_name)
        .context(EmptyInputSnafu)?;
    debug!("Parsing diagram rooted at '{root}'");

    let mut stack = AncestorStack::with_root(root);
    let mut previous_level = 0;

    for (index, raw) in lines {
        let line_number = index + 1;
        let Some(entry) = EntryLine::parse(raw) else {
            debug!("Skipping line {line_number}: no entry in {raw:?}");
            continue;
        };

        let mut level = entry.level();
        if level <= previous_level {
            stack.truncate(level + 1);
        }
        if level > stack.deepest_level() {
            warn!(
                "Line {line_number} ('{}') is nested at level {level} without an open parent, attaching at level {}",
                entry.name,
                stack.deepest_level()
            );
            level = stack.deepest_level();
        }
        previous_level = level;
        trace!(
            "Line {line_number}: '{}' at level {level} ({:?})",
            entry.name, entry.marker
        );

        if entry.is_directory {
            stack.open(entry.name);
        } else {
            stack.attach(Node::file(entry.name));
        }
    }

    stack.finish().context(EmptyInputSnafu)
}

#[derive(Debug, Snafu)]
pub enum ParseError {
    #[snafu(display("The diagram is empty: no root entry found"))]
    EmptyInput,
}
