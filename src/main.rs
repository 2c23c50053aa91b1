//! lstree - Print a directory tree

use std::process::ExitCode;

use lstree::app::Config;
use lstree::integrate::{exit_code, output_tree};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("LSTREE_LOG", "warn"))
        .format_timestamp(None)
        .init();

    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    run_tree_mode(&config)
}

/// Print the tree and map the outcome to an exit code
fn run_tree_mode(config: &Config) -> ExitCode {
    log::debug!("printing tree of {}", config.root.display());

    match output_tree(&config.root, &config.options) {
        Ok(summary) if summary.skipped.is_empty() => ExitCode::from(exit_code::SUCCESS as u8),
        Ok(summary) => {
            for path in &summary.skipped {
                eprintln!("Skipped unreadable directory: {}", path.display());
            }
            ExitCode::from(exit_code::PARTIAL as u8)
        }
        // Reader went away (e.g. `lstree | head`)
        Err(e) if e.is_broken_pipe() => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) if e.is_invalid_root() => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::INVALID as u8)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}
