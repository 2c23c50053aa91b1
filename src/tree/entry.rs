//! Directory entry definition

use std::path::{Path, PathBuf};

/// Type tag of a listed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single child produced by listing a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Display name (lossy for non-UTF-8 names)
    pub name: String,
    /// File or directory
    pub kind: EntryKind,
    /// Full path to the entry
    pub path: PathBuf,
}

impl DirectoryEntry {
    /// Create an entry named `name` inside `parent`
    pub fn new(parent: &Path, name: impl Into<String>, kind: EntryKind) -> Self {
        let name = name.into();
        let path = parent.join(&name);
        Self { name, kind, path }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
