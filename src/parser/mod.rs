//! Recovers a [`Node`](crate::tree::Node) hierarchy from `tree`-style diagrams.

mod line;
mod tree_parser;

pub use tree_parser::{ParseError, parse_tree};
