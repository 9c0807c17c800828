/// What kind of filesystem entry a [`Node`] stands for.
///
/// Only directories carry children, so a file can never own any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory { children: Vec<Node> },
}

/// A single named entry of a diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    kind: NodeKind,
}

impl Node {
    pub fn file(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            kind: NodeKind::File,
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node {
            name: name.into(),
            kind: NodeKind::Directory { children },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Children in diagram order. Always empty for files.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Directory { children } => children,
            NodeKind::File => &[],
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }
}
