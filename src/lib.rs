//! dirmap - Print a directory tree as nested JSON
//!
//! Walks the current working directory and emits a nested JSON object
//! mapping each entry name to either the literal string `"file"` or,
//! for subdirectories, its own nested object. A fixed set of metadata
//! and dependency-cache directories is skipped.

pub mod error;
pub mod output;
pub mod tree;

pub use error::{DirmapError, Result};
pub use output::{output_tree, to_json, FILE_MARKER};
pub use tree::{build, DirEntry, DirNode};
