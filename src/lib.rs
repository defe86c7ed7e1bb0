//! `StageStatus` - status codes and exit-on-error plumbing for pipeline stages
//!
//! This library provides a fixed table of process exit codes with their
//! labels, an error type that tags an underlying cause with one of those
//! codes, and a terminal helper that logs an error and exits the process
//! with the code found in its chain.

pub mod cli;
pub mod error;
pub mod exit;
pub mod status;

use anyhow::Result;
use cli::{Args, Command};

pub use error::{ResultExt, StatusError};
pub use exit::{exit_from_error, exit_with};
pub use status::{Code, text};

/// Main entry point for the stagestatus binary
///
/// Output goes to stdout; the `fail` command returns its error for the
/// caller to terminate with.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Command::List { format } => {
            let table = cli::execute_list(&format)?;
            println!("{table}");
            Ok(())
        }
        Command::Text { code } => {
            println!("{}", cli::execute_text(code));
            Ok(())
        }
        Command::Fail(fail) => Err(cli::build_failure(&fail)),
    }
}
