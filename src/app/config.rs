//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;

use super::config_file::{ConfigFile, TreeConfig};
use crate::integrate::exit_code;
use crate::tree::{ConnectorMode, ErrorPolicy, ExclusionSet, PrintOptions};

/// Raw command-line arguments, before the config file is applied
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    /// Names added with --exclude
    pub exclude: Vec<String>,
    pub no_default_excludes: bool,
    pub depth: Option<usize>,
    pub connector: Option<ConnectorMode>,
    pub keep_going: bool,
    /// Explicit config file (--config)
    pub config_file: Option<PathBuf>,
    pub help: bool,
    pub version: bool,
}

impl CliArgs {
    /// Parse arguments (without the program name)
    pub fn parse<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut cli = Self::default();
        let mut options_ended = false;

        while let Some(arg) = args.next() {
            if options_ended {
                cli.set_root(arg)?;
                continue;
            }
            match arg.as_str() {
                "--" => options_ended = true,
                "--exclude" | "-e" => {
                    if let Some(name) = args.next() {
                        cli.exclude.push(name);
                    } else {
                        anyhow::bail!("--exclude requires a name");
                    }
                }
                "--no-default-excludes" | "-E" => cli.no_default_excludes = true,
                "--depth" | "-d" => {
                    if let Some(depth_str) = args.next() {
                        cli.depth = Some(depth_str.parse().map_err(|_| {
                            anyhow::anyhow!(
                                "--depth requires a non-negative integer, got '{}'",
                                depth_str
                            )
                        })?);
                    } else {
                        anyhow::bail!("--depth requires a value");
                    }
                }
                "--connector" => {
                    if let Some(mode) = args.next() {
                        cli.connector = Some(mode.parse().map_err(|_| {
                            anyhow::anyhow!(
                                "Invalid connector '{}'. Valid modes: filtered, raw",
                                mode
                            )
                        })?);
                    } else {
                        anyhow::bail!("--connector requires a value (filtered or raw)");
                    }
                }
                "--keep-going" | "-k" => cli.keep_going = true,
                "--config" | "-c" => {
                    if let Some(file) = args.next() {
                        cli.config_file = Some(PathBuf::from(file));
                    } else {
                        anyhow::bail!("--config requires a file path");
                    }
                }
                "--help" | "-h" => cli.help = true,
                "--version" | "-V" => cli.version = true,
                path if !path.starts_with('-') => cli.set_root(path.to_string())?,
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        Ok(cli)
    }

    fn set_root(&mut self, path: String) -> anyhow::Result<()> {
        if self.root.is_some() {
            anyhow::bail!("Unexpected argument: {}. Only one PATH is allowed.", path);
        }
        self.root = Some(PathBuf::from(path));
        Ok(())
    }
}

/// Application configuration from CLI args and config file
#[derive(Debug)]
pub struct Config {
    /// Directory whose tree is printed
    pub root: PathBuf,
    pub options: PrintOptions,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        let cli = CliArgs::parse(env::args().skip(1))?;

        if cli.help {
            print_help();
            std::process::exit(exit_code::SUCCESS);
        }
        if cli.version {
            println!("lstree {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(exit_code::SUCCESS);
        }

        // An explicit --config must load; the default location falls back silently
        let config_file = match &cli.config_file {
            Some(path) => ConfigFile::load_from(path).map_err(|e| {
                anyhow::anyhow!("Cannot load config file {}: {}", path.display(), e)
            })?,
            None => ConfigFile::load(),
        };

        let root = match &cli.root {
            Some(path) => path.clone(),
            None => env::current_dir()?,
        };

        Ok(Self::merge(cli, &config_file.tree, root))
    }

    /// Merge config file settings with CLI overrides
    ///
    /// CLI arguments take precedence over the config file.
    pub fn merge(cli: CliArgs, file: &TreeConfig, root: PathBuf) -> Self {
        let base = if cli.no_default_excludes {
            file.exclusions_over(ExclusionSet::empty())
        } else {
            file.exclusions()
        };

        let on_error = if cli.keep_going {
            ErrorPolicy::Skip
        } else {
            file.on_error
        };

        Self {
            root,
            options: PrintOptions {
                exclusions: base.with(cli.exclude),
                connector: cli.connector.unwrap_or(file.connector),
                on_error,
                max_depth: cli.depth.or(file.max_depth),
            },
        }
    }
}

fn print_help() {
    println!(
        r#"lstree - Print a directory tree

USAGE:
    lstree [OPTIONS] [PATH]

ARGS:
    PATH                    Root directory (default: current directory)

OPTIONS:
    -e, --exclude NAME      Skip entries named NAME (repeatable)
    -E, --no-default-excludes
                            Do not skip the built-in names ({defaults});
                            names from the config file still apply
    --                      Treat every following argument as PATH
    -d, --depth N           Limit tree depth to N levels
    --connector MODE        Which sibling gets └──: filtered (default), raw
    -k, --keep-going        Skip unreadable directories instead of stopping
    -c, --config FILE       Read settings from FILE
    -h, --help              Show this help message
    -V, --version           Show version

CONFIG FILE:
    ~/.config/lstree/config.toml

    [tree]
    exclude = [".git", "node_modules"]
    extra_exclude = ["coverage"]
    connector = "filtered"
    on_error = "abort"
    max_depth = 3

ENVIRONMENT:
    LSTREE_LOG              Log level for diagnostics on stderr (default: warn)

EXIT CODES:
    0           Success
    1           Tree printed, but some directories were skipped (--keep-going)
    2           Error (unreadable directory, write failure)
    3           Invalid arguments, missing root, or root is not a directory
"#,
        defaults = crate::tree::DEFAULT_EXCLUDES.join(", ")
    );
}
