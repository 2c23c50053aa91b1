//! Directory listing backends
//!
//! The walk only needs two things from the host: the kind of the root path
//! and the immediate children of a directory. `FsSource` answers both from
//! the real filesystem.

use std::fs;
use std::io;
use std::path::Path;

use super::entry::{DirectoryEntry, EntryKind};

/// Read-only access to a directory hierarchy
pub trait DirSource {
    /// Kind of the entry at `path` (symlinks are followed)
    fn kind(&self, path: &Path) -> io::Result<EntryKind>;

    /// Immediate children of `path`, in the order the backend yields them
    fn list(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>>;
}

/// The host filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DirSource for FsSource {
    fn kind(&self, path: &Path) -> io::Result<EntryKind> {
        let meta = fs::metadata(path)?;
        Ok(if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }

    fn list(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        // The ReadDir handle lives only for this call and is closed on every return path.
        fs::read_dir(path)?
            .map(|entry| {
                let entry = entry?;
                // file_type() does not follow symlinks: linked directories are leaves.
                let kind = if entry.file_type()?.is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };
                Ok(DirectoryEntry::new(
                    path,
                    entry.file_name().to_string_lossy(),
                    kind,
                ))
            })
            .collect()
    }
}
