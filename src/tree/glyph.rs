use derive_more::Display;

/// Vertical continuation glyph, one per open ancestor that has later siblings.
pub const VERTICAL: char = '│';

/// Indent unit used below an ancestor that was the last child at its level.
pub const INDENT_BLOCK: &str = "    ";

/// Continuation unit used below an ancestor that still has siblings to come.
pub const VERTICAL_BLOCK: &str = "│   ";

/// Trailing character that marks an entry as a directory.
pub const SEPARATOR: char = '/';

/// The connector drawn in front of every non-root entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BranchMarker {
    /// Entry followed by at least one sibling.
    #[display("├── ")]
    Tee,
    /// Last entry of its directory.
    #[display("└── ")]
    Elbow,
}

impl BranchMarker {
    pub fn for_position(is_last: bool) -> Self {
        if is_last {
            BranchMarker::Elbow
        } else {
            BranchMarker::Tee
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "├── " => Some(BranchMarker::Tee),
            "└── " => Some(BranchMarker::Elbow),
            _ => None,
        }
    }

    /// Indent contributed to the lines of this entry's descendants.
    pub fn child_indent(self) -> &'static str {
        match self {
            BranchMarker::Tee => VERTICAL_BLOCK,
            BranchMarker::Elbow => INDENT_BLOCK,
        }
    }
}
