//! Integrate module - Output to the outside world
//!
//! - Tree output: print a directory tree to stdout
//! - Exit codes: stable process exit codes for scripting

pub mod tree;

pub use tree::{output_tree, print_tree};

/// Exit codes for the application
///
/// These codes are stable and can be relied upon for scripting:
/// - `SUCCESS` (0): Tree printed completely
/// - `PARTIAL` (1): Tree printed, but some directories were skipped (--keep-going)
/// - `ERROR` (2): Runtime error (unreadable directory, write failure, etc.)
/// - `INVALID` (3): Invalid arguments, missing root, or root is not a directory
pub mod exit_code {
    /// Tree printed completely
    pub const SUCCESS: i32 = 0;
    /// Some directories could not be read and were left out
    pub const PARTIAL: i32 = 1;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
    /// Invalid arguments or options (e.g., unknown flag, invalid root)
    pub const INVALID: i32 = 3;
}
