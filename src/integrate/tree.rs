//! Tree output mode for CLI integration
//!
//! Writes the directory tree of a root to stdout, or to any writer.

use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;
use crate::tree::{ExclusionSet, PrintOptions, TreePrinter, WalkSummary};

/// Output a directory tree to stdout
///
/// # Arguments
/// * `root` - Root directory path
/// * `options` - Exclusions, connector mode, error policy and depth limit
pub fn output_tree(root: &Path, options: &PrintOptions) -> Result<WalkSummary> {
    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());

    let summary = TreePrinter::new(options.clone()).print_tree(root, &mut handle)?;

    handle.flush()?;
    Ok(summary)
}

/// Print the tree under `root` to `out`, skipping names in `exclusions`
///
/// Uses the default connector mode, aborts on the first unreadable directory
/// and has no depth limit.
pub fn print_tree<W: Write>(root: &Path, exclusions: &ExclusionSet, out: &mut W) -> Result<()> {
    let options = PrintOptions::with_exclusions(exclusions.clone());
    TreePrinter::new(options).print_tree(root, out)?;
    Ok(())
}
