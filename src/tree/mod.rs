//! In-memory representation of a directory hierarchy.
//!
//! A [`Node`] is either a file or a directory owning its children in diagram
//! order. The [`glyph`] module holds the box-drawing vocabulary shared by the
//! parser and the renderer.

pub mod glyph;
mod node;
mod render;

pub use node::{Node, NodeKind};
