//! Log a final error line and exit with the matching status code

use std::error::Error;
use std::io;

use crate::error::StatusError;
use crate::status::Code;
use tracing::{debug, error};

/// Next error in the chain after `error`
///
/// `io::Error::source()` skips the custom error it wraps and returns that
/// error's source, so a custom `io::Error` steps into `get_ref` instead.
fn next_in_chain<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    if let Some(inner) = error.downcast_ref::<io::Error>().and_then(io::Error::get_ref) {
        let inner: &(dyn Error + 'static) = inner;
        return Some(inner);
    }
    error.source()
}

/// Find the first [`StatusError`] in `err` or its chain of sources
#[must_use]
pub fn find_status<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a StatusError> {
    let mut current = Some(err);
    while let Some(error) = current {
        if let Some(status) = error.downcast_ref::<StatusError>() {
            return Some(status);
        }
        current = next_in_chain(error);
    }
    None
}

/// Exit code for an error: the code of the first [`StatusError`] in its
/// chain, or [`Code::UNKNOWN`] when there is none
#[must_use]
pub fn exit_code(err: &(dyn Error + 'static)) -> Code {
    find_status(err).map_or(Code::UNKNOWN, StatusError::code)
}

/// Exit code for an `anyhow` error, looking through its context layers
#[must_use]
pub fn exit_code_of(err: &anyhow::Error) -> Code {
    let root: &(dyn Error + 'static) = err.as_ref();
    exit_code(root)
}

/// Quoted rendering of an error for the final log line
///
/// Messages along the chain are joined with `": "`. A message the previous
/// one already ends with is not repeated, and the walk stops at the first
/// [`StatusError`], whose own message already includes its cause.
#[must_use]
pub fn log_message(err: &(dyn Error + 'static)) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current = Some(err);
    while let Some(error) = current {
        let message = error.to_string();
        let repeated = parts.last().is_some_and(|last| last.ends_with(&message));
        if !repeated {
            parts.push(message);
        }
        if error.is::<StatusError>() {
            break;
        }
        current = next_in_chain(error);
    }
    format!("{:?}", parts.join(": "))
}

/// Log `err` and terminate the process with its status code
///
/// Errors without a [`StatusError`] in their chain exit with
/// [`Code::UNKNOWN`]. This never returns; call it last.
///
/// # Logging
///
/// The final line is emitted with `tracing::error!`. A stage that calls this
/// without installing a subscriber, for example with
/// `tracing_subscriber::fmt().init()`, still exits with the right code but
/// no line is written.
pub fn exit_from_error<E: Into<anyhow::Error>>(err: E) -> ! {
    let err = err.into();
    let code = exit_code_of(&err);
    let root: &(dyn Error + 'static) = err.as_ref();

    debug!("Resolved exit code {} ({:?})", code, code.text());
    error!("{}", log_message(root));

    exit_with(code)
}

/// Terminate the process with `code` without logging
pub fn exit_with(code: Code) -> ! {
    std::process::exit(code.value())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;
    use crate::error::ResultExt as _;
    use anyhow::Context as _;
    use thiserror::Error;

    /// A generic layer that hides a status error behind its own message
    #[derive(Error, Debug)]
    #[error("stage failed")]
    struct StageFailed(#[source] StatusError);

    /// A layer that renders its source inside its own message
    #[derive(Error, Debug)]
    #[error("stage aborted: {0}")]
    struct StageAborted(#[from] StatusError);

    #[test]
    fn status_error_resolves_its_code() {
        let err = StatusError::connection("timeout");
        assert_eq!(exit_code(&err), Code::CONNECTION_ERROR);
    }

    #[test]
    fn plain_error_resolves_unknown() {
        let err = io::Error::other("boom");
        assert_eq!(exit_code(&err), Code::UNKNOWN);
        assert!(find_status(&err).is_none());
    }

    #[test]
    fn wrapped_status_error_is_found_through_source_chain() {
        let err = StageFailed(StatusError::invalid_input("bad json"));
        assert_eq!(exit_code(&err), Code::INVALID_INPUT);
        assert_eq!(find_status(&err).unwrap().to_string(), "Error 7: bad json");
    }

    #[test]
    fn first_status_error_in_chain_wins() {
        let inner: Result<(), StatusError> = Err(StatusError::system("disk full"));
        let outer = inner.status(Code::OUTPUT_ERROR).unwrap_err();
        assert_eq!(exit_code(&outer), Code::OUTPUT_ERROR);
    }

    #[test]
    fn anyhow_context_layers_are_unwrapped() {
        let err = Err::<(), _>(StatusError::connection("refused"))
            .context("fetching rates")
            .context("stage run")
            .unwrap_err();
        assert_eq!(exit_code_of(&err), Code::CONNECTION_ERROR);

        let root: &(dyn Error + 'static) = err.as_ref();
        assert_eq!(exit_code(root), Code::CONNECTION_ERROR);
    }

    #[test]
    fn anyhow_without_status_is_unknown() {
        let err = anyhow::anyhow!("something odd");
        assert_eq!(exit_code_of(&err), Code::UNKNOWN);
    }

    #[test]
    fn out_of_range_code_is_used_verbatim() {
        let err = StatusError::new(Code::new(42), "custom");
        assert_eq!(exit_code(&err), Code::new(42));
    }

    #[test]
    fn log_message_is_quoted() {
        let err = StatusError::system("disk full");
        assert_eq!(log_message(&err), r#""Error 2: disk full""#);
    }

    #[test]
    fn log_message_includes_outer_layers_once() {
        let err = StageFailed(StatusError::data_unavailable("no rows"));
        assert_eq!(log_message(&err), r#""stage failed: Error 4: no rows""#);
    }

    #[test]
    fn log_message_escapes_quotes() {
        let err = io::Error::other(r#"unexpected "}" at 3"#);
        assert_eq!(log_message(&err), r#""unexpected \"}\" at 3""#);
    }

    #[test]
    fn status_error_inside_io_error_is_found() {
        let err = io::Error::other(StatusError::connection("timeout"));
        assert_eq!(exit_code(&err), Code::CONNECTION_ERROR);
        assert_eq!(log_message(&err), r#""Error 3: timeout""#);
    }

    #[test]
    fn status_error_inside_io_error_with_kind_is_found() {
        let err = io::Error::new(
            io::ErrorKind::InvalidData,
            StatusError::invalid_file("bad header"),
        );
        assert_eq!(exit_code(&err), Code::INVALID_FILE);
    }

    #[test]
    fn io_error_behind_anyhow_context_is_unwrapped() {
        let err = anyhow::Error::new(io::Error::other(StatusError::output("stdout closed")))
            .context("writing rows");
        assert_eq!(exit_code_of(&err), Code::OUTPUT_ERROR);

        let root: &(dyn Error + 'static) = err.as_ref();
        assert_eq!(log_message(root), r#""writing rows: Error 8: stdout closed""#);
    }

    #[test]
    fn plain_io_error_is_unknown() {
        let err = io::Error::from(io::ErrorKind::BrokenPipe);
        assert_eq!(exit_code(&err), Code::UNKNOWN);
    }

    #[test]
    fn log_message_skips_source_already_in_display() {
        let err = StageAborted::from(StatusError::data_unavailable("no rows"));
        assert_eq!(exit_code(&err), Code::DATA_UNAVAILABLE);
        assert_eq!(log_message(&err), r#""stage aborted: Error 4: no rows""#);
    }
}
