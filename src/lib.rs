//! lstree - Print a directory tree with box-drawing connectors
//!
//! Walks a root directory depth-first and prints each entry as
//! `├── name` / `└── name`, skipping a configurable set of names.

pub mod app;
pub mod error;
pub mod integrate;
pub mod tree;

pub use error::{Result, TreeError};
