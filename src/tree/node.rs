//! Tree entry (node) definitions

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::output::FILE_MARKER;

/// Classification of a single directory child
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirEntry {
    /// A regular file, or any non-directory object (symlink, special file)
    File,
    /// A subdirectory with its own (possibly empty) children
    Dir(DirNode),
}

impl DirEntry {
    /// Whether this entry is a directory
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Dir(_))
    }
}

/// An ordered mapping from child name to its classification
///
/// Entries keep the order in which they were inserted, which on build
/// is the order the filesystem reported them. Names within one node are
/// unique (guaranteed by the filesystem).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirNode {
    entries: Vec<(String, DirEntry)>,
}

impl DirNode {
    /// Create an empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, preserving insertion order
    pub fn insert(&mut self, name: impl Into<String>, entry: DirEntry) {
        self.entries.push((name.into(), entry));
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Option<&DirEntry> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, e)| e)
    }

    /// Number of entries in this node
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this node has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DirEntry)> {
        self.entries.iter().map(|(n, e)| (n.as_str(), e))
    }
}

impl Serialize for DirEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::File => serializer.serialize_str(FILE_MARKER),
            Self::Dir(node) => node.serialize(serializer),
        }
    }
}

impl Serialize for DirNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}
