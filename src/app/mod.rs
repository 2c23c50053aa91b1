//! Application module
//!
//! Configuration from the command line and the config file.

mod config;
mod config_file;

pub use config::{CliArgs, Config};
pub use config_file::{ConfigFile, TreeConfig};
