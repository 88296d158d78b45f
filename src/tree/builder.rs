//! Recursive directory tree builder
//!
//! Enumerates a directory's children in filesystem-reported order,
//! recursing into subdirectories and classifying everything else as a
//! file. A fixed set of directory names is skipped at every level.

use std::fs;
use std::path::Path;

use crate::error::{DirmapError, Result};
use crate::tree::{DirEntry, DirNode};

/// Directory names skipped at every traversal level
///
/// Matched against the entry name only, never the full path, so e.g. a
/// file named `node_modules` nested anywhere is also skipped.
pub const IGNORED_DIRS: &[&str] = &["node_modules", ".next", ".git"];

/// Whether a name is in the fixed ignore set
pub fn is_ignored(name: &str) -> bool {
    IGNORED_DIRS.contains(&name)
}

/// Build the tree rooted at `path`
///
/// The path is assumed to exist and be readable; any filesystem error
/// (missing path, permission denied, I/O failure mid-enumeration)
/// aborts the whole build and propagates to the caller.
pub fn build(path: &Path) -> Result<DirNode> {
    let mut node = DirNode::new();

    let entries = fs::read_dir(path).map_err(|e| DirmapError::read_dir(path, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| DirmapError::read_dir(path, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_ignored(&name) {
            continue;
        }

        let child_path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| DirmapError::metadata(&child_path, e))?;
        if file_type.is_dir() {
            node.insert(name, DirEntry::Dir(build(&child_path)?));
        } else {
            node.insert(name, DirEntry::File);
        }
    }

    Ok(node)
}
