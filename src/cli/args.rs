use clap::{Parser, Subcommand};

use crate::status::Code;

/// Command-line arguments for stagestatus
#[derive(Parser, Debug, Clone)]
#[command(name = "stagestatus")]
#[command(about = "Inspect stage status codes and exercise the exit-on-error contract")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print every status code with its label
    List {
        /// Output format: text, json or yaml
        #[arg(long, value_name = "FORMAT", default_value = "text")]
        format: String,
    },

    /// Print the label for a status code (empty for unknown codes)
    Text {
        /// Integer code or label
        #[arg(value_name = "CODE", allow_hyphen_values = true)]
        code: Code,
    },

    /// Fail with the given code, logging the error and exiting accordingly
    Fail(FailArgs),
}

/// Arguments for a deliberate failure
#[derive(clap::Args, Debug, Clone)]
pub struct FailArgs {
    /// Status code to wrap the failure with
    #[arg(long, value_name = "CODE", default_value = "6", allow_hyphen_values = true)]
    pub code: Code,

    /// Message of the underlying cause
    #[arg(long, value_name = "MESSAGE")]
    pub message: String,

    /// Message layers added around the failure, innermost first
    /// (can be specified multiple times)
    #[arg(long = "context", value_name = "MESSAGE")]
    pub contexts: Vec<String>,

    /// Fail with a plain error that carries no status code
    #[arg(long)]
    pub plain: bool,
}
