//! Tree module - Directory walking and tree printing

pub mod entry;
pub mod exclusion;
pub mod printer;
pub mod source;

pub use entry::{DirectoryEntry, EntryKind};
pub use exclusion::{ExclusionSet, DEFAULT_EXCLUDES};
pub use printer::{ConnectorMode, ErrorPolicy, PrintOptions, TreePrinter, WalkSummary};
pub use source::{DirSource, FsSource};
