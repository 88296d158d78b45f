//! JSON output for directory trees
//!
//! Renders a tree as JSON with 4-space indentation to stdout,
//! preserving entry order and leaving non-ASCII names unescaped.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::tree::DirNode;

/// Sentinel string marking a non-directory entry
///
/// A real file named `file` maps to `"file": "file"` in the output;
/// there is no escape mechanism for that collision.
pub const FILE_MARKER: &str = "file";

/// Render a tree as JSON with 4-space indentation
pub fn to_json(tree: &DirNode) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tree.serialize(&mut serializer)?;
    // serde_json never emits invalid UTF-8
    Ok(String::from_utf8(buf).expect("serialized JSON is valid UTF-8"))
}

/// Write a tree as JSON to the given writer, with a trailing newline
pub fn write_tree<W: Write>(out: &mut W, tree: &DirNode) -> Result<()> {
    let json = to_json(tree)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

/// Output a directory tree to stdout
pub fn output_tree(tree: &DirNode) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_tree(&mut handle, tree)?;
    handle.flush()?;
    Ok(())
}
