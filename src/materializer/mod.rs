//! Writes a [`Node`](crate::tree::Node) tree to disk as directories and empty files.

mod materializer;

pub use materializer::{MaterializeError, materialize, root_path};
