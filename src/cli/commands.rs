//! CLI command implementations

use crate::cli::FailArgs;
use crate::error::StatusError;
use crate::status::{Code, OutputFormat, render_table};
use anyhow::{Result, anyhow};
use tracing::debug;

/// Render the status table for the `list` command
pub fn execute_list(format: &str) -> Result<String> {
    let format = format
        .parse::<OutputFormat>()
        .map_err(StatusError::invalid_parameters)?;
    render_table(format)
}

/// Label for the `text` command, empty for codes outside the table
#[must_use]
pub fn execute_text(code: Code) -> &'static str {
    if !code.is_known() {
        debug!("No label for status code {code}");
    }
    code.text()
}

/// Build the error the `fail` command terminates with
///
/// Context layers are applied in order, so the last one is outermost.
#[must_use]
pub fn build_failure(args: &FailArgs) -> anyhow::Error {
    let mut err = if args.plain {
        anyhow!(args.message.clone())
    } else {
        anyhow::Error::new(StatusError::new(args.code, args.message.clone()))
    };

    for context in &args.contexts {
        err = err.context(context.clone());
    }

    err
}
