//! Depth-first tree printer
//!
//! Walks a root directory in pre-order and writes one line per visible entry:
//!
//! ```text
//! ├── src
//! │   ├── a.txt
//! │   └── b.txt
//! └── README.md
//! ```
//!
//! The walk keeps an explicit frame stack instead of recursing, so deep
//! hierarchies are bounded by heap rather than call-stack size.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use super::entry::{DirectoryEntry, EntryKind};
use super::exclusion::ExclusionSet;
use super::source::{DirSource, FsSource};
use crate::error::{Result, TreeError};

const TEE: &str = "├── ";
const ELBOW: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// How the sibling that gets the `└── ` connector is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorMode {
    /// Last entry that is actually printed
    #[default]
    Filtered,
    /// Last entry of the raw listing, even if it is excluded
    Raw,
}

impl FromStr for ConnectorMode {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "filtered" => Ok(Self::Filtered),
            "raw" => Ok(Self::Raw),
            _ => Err(()),
        }
    }
}

/// What to do when a nested directory cannot be listed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the whole walk and return the error
    #[default]
    Abort,
    /// Omit the unreadable directory and continue with its siblings
    Skip,
}

impl FromStr for ErrorPolicy {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            _ => Err(()),
        }
    }
}

/// Options for a single walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintOptions {
    pub exclusions: ExclusionSet,
    pub connector: ConnectorMode,
    pub on_error: ErrorPolicy,
    /// Maximum depth to print (None = unlimited, root children are depth 0)
    pub max_depth: Option<usize>,
}

impl PrintOptions {
    /// Default options with the given exclusion set
    pub fn with_exclusions(exclusions: ExclusionSet) -> Self {
        Self {
            exclusions,
            ..Self::default()
        }
    }
}

/// What a finished walk printed and what it had to leave out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
    /// Directories omitted under `ErrorPolicy::Skip`
    pub skipped: Vec<PathBuf>,
}

/// A sibling that survived exclusion and, if it will be entered, listing
struct Resolved {
    entry: DirectoryEntry,
    /// Position in the raw listing
    index: usize,
    /// Listed children of a directory that will be entered
    children: Option<Vec<DirectoryEntry>>,
}

/// Per-directory traversal state
struct Frame {
    entries: std::iter::Enumerate<std::vec::IntoIter<DirectoryEntry>>,
    /// Index of the entry drawn with the last connector (unused with lookahead)
    last: Option<usize>,
    /// Decide last-ness by resolving the next printable sibling first
    lookahead: bool,
    ahead: Option<Resolved>,
    prefix: String,
    depth: usize,
}

impl Frame {
    fn new(
        entries: Vec<DirectoryEntry>,
        prefix: String,
        depth: usize,
        options: &PrintOptions,
    ) -> Self {
        let last = match options.connector {
            ConnectorMode::Raw => entries.len().checked_sub(1),
            ConnectorMode::Filtered => entries
                .iter()
                .rposition(|e| !options.exclusions.contains(&e.name)),
        };
        // Skipped directories are only known after listing them, so names alone
        // cannot tell which sibling prints last.
        let lookahead =
            options.connector == ConnectorMode::Filtered && options.on_error == ErrorPolicy::Skip;
        Self {
            entries: entries.into_iter().enumerate(),
            last,
            lookahead,
            ahead: None,
            prefix,
            depth,
        }
    }
}

/// Prints the directory tree under a root
pub struct TreePrinter<S = FsSource> {
    source: S,
    options: PrintOptions,
}

impl TreePrinter<FsSource> {
    /// Printer over the host filesystem
    pub fn new(options: PrintOptions) -> Self {
        Self::with_source(FsSource, options)
    }
}

impl<S: DirSource> TreePrinter<S> {
    /// Printer over an arbitrary listing backend
    pub fn with_source(source: S, options: PrintOptions) -> Self {
        Self { source, options }
    }

    /// Write the tree under `root` to `out`
    ///
    /// Fails with `NotFound` / `NotADirectory` before writing anything when
    /// the root is unusable. A nested listing failure either aborts the walk
    /// or is recorded in the summary, depending on `ErrorPolicy`.
    pub fn print_tree<W: Write>(&self, root: &Path, out: &mut W) -> Result<WalkSummary> {
        self.check_root(root)?;
        let root_entries = self.list(root)?;

        let mut summary = WalkSummary::default();
        if self.options.max_depth == Some(0) {
            return Ok(summary);
        }

        let mut stack = vec![Frame::new(root_entries, String::new(), 0, &self.options)];
        while let Some(frame) = stack.last_mut() {
            let Some((resolved, is_last)) = self.next_sibling(frame, &mut summary)? else {
                stack.pop();
                continue;
            };

            let connector = if is_last { ELBOW } else { TEE };
            writeln!(out, "{}{}{}", frame.prefix, connector, resolved.entry.name)?;

            match resolved.children {
                Some(children) => {
                    summary.directories += 1;
                    let child_prefix =
                        format!("{}{}", frame.prefix, if is_last { BLANK } else { PIPE });
                    let child_depth = frame.depth + 1;
                    stack.push(Frame::new(children, child_prefix, child_depth, &self.options));
                }
                None if resolved.entry.is_dir() => summary.directories += 1,
                None => summary.files += 1,
            }
        }

        Ok(summary)
    }

    /// Next sibling to print in `frame` and whether it is the last one
    fn next_sibling(
        &self,
        frame: &mut Frame,
        summary: &mut WalkSummary,
    ) -> Result<Option<(Resolved, bool)>> {
        let current = match frame.ahead.take() {
            Some(resolved) => resolved,
            None => match self.resolve_next(frame, summary)? {
                Some(resolved) => resolved,
                None => return Ok(None),
            },
        };

        let is_last = if frame.lookahead {
            frame.ahead = self.resolve_next(frame, summary)?;
            frame.ahead.is_none()
        } else {
            frame.last == Some(current.index)
        };
        Ok(Some((current, is_last)))
    }

    /// Advance `frame` to its next non-excluded entry that can be printed
    ///
    /// Directories that will be entered are listed here, before their own
    /// line is written, so a directory that cannot be read gets no line.
    fn resolve_next(
        &self,
        frame: &mut Frame,
        summary: &mut WalkSummary,
    ) -> Result<Option<Resolved>> {
        let child_depth = frame.depth + 1;
        for (index, entry) in frame.entries.by_ref() {
            if self.options.exclusions.contains(&entry.name) {
                log::debug!("excluded {}", entry.path.display());
                continue;
            }

            let descend =
                entry.is_dir() && self.options.max_depth.is_none_or(|max| child_depth < max);
            if !descend {
                return Ok(Some(Resolved {
                    entry,
                    index,
                    children: None,
                }));
            }

            match self.list(&entry.path) {
                Ok(children) => {
                    return Ok(Some(Resolved {
                        entry,
                        index,
                        children: Some(children),
                    }))
                }
                Err(err) => match self.options.on_error {
                    ErrorPolicy::Abort => return Err(err),
                    ErrorPolicy::Skip => {
                        log::warn!("skipping {}", err);
                        summary.skipped.push(entry.path);
                    }
                },
            }
        }
        Ok(None)
    }

    /// Render the tree under `root` into a string
    pub fn render(&self, root: &Path) -> Result<String> {
        let mut buf = Vec::new();
        self.print_tree(root, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn check_root(&self, root: &Path) -> Result<()> {
        match self.source.kind(root) {
            Ok(EntryKind::Directory) => Ok(()),
            Ok(EntryKind::File) => Err(TreeError::NotADirectory(root.to_path_buf())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(TreeError::NotFound(root.to_path_buf()))
            }
            Err(e) => Err(TreeError::read(root, e)),
        }
    }

    fn list(&self, dir: &Path) -> Result<Vec<DirectoryEntry>> {
        log::debug!("listing {}", dir.display());
        self.source.list(dir).map_err(|e| TreeError::read(dir, e))
    }
}
