//! Tree module - Directory tree data structure and builder

pub mod builder;
pub mod node;

pub use builder::{build, is_ignored, IGNORED_DIRS};
pub use node::{DirEntry, DirNode};
