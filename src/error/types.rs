//! Error type pairing a status code with its underlying cause

use core::fmt::Display;

use crate::status::Code;
use thiserror::Error;

/// Owned, thread-safe cause of a [`StatusError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An underlying failure tagged with the status code it maps to
///
/// Displays as `Error <code>: <cause>`, with the code rendered as its
/// integer value. Use [`Code::text`] for the label.
#[derive(Error, Debug)]
#[error("Error {code}: {source}")]
pub struct StatusError {
    code: Code,
    source: BoxError,
}

impl StatusError {
    /// Wrap `cause` with `code`
    ///
    /// The code is stored as given, including values outside the table.
    #[inline]
    pub fn new<E: Into<BoxError>>(code: Code, cause: E) -> Self {
        Self {
            code,
            source: cause.into(),
        }
    }

    /// The status code carried by this error
    #[must_use]
    #[inline]
    pub const fn code(&self) -> Code {
        self.code
    }

    /// The table label for this error's code, empty if unknown
    #[must_use]
    #[inline]
    pub const fn label(&self) -> &'static str {
        self.code.text()
    }

    /// The wrapped cause
    #[must_use]
    #[inline]
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.source
    }

    /// Consume the error, returning its cause
    #[must_use]
    #[inline]
    pub fn into_cause(self) -> BoxError {
        self.source
    }

    /// Create an invalid parameters error
    #[inline]
    pub fn invalid_parameters<E: Into<BoxError>>(cause: E) -> Self {
        Self::new(Code::INVALID_PARAMETERS, cause)
    }

    /// Create a system error
    #[inline]
    pub fn system<E: Into<BoxError>>(cause: E) -> Self {
        Self::new(Code::SYSTEM_ERROR, cause)
    }

    /// Create a connection error
    #[inline]
    pub fn connection<E: Into<BoxError>>(cause: E) -> Self {
        Self::new(Code::CONNECTION_ERROR, cause)
    }

    /// Create a data unavailable error
    #[inline]
    pub fn data_unavailable<E: Into<BoxError>>(cause: E) -> Self {
        Self::new(Code::DATA_UNAVAILABLE, cause)
    }

    /// Create an invalid file error
    #[inline]
    pub fn invalid_file<E: Into<BoxError>>(cause: E) -> Self {
        Self::new(Code::INVALID_FILE, cause)
    }

    /// Create an unknown error
    #[inline]
    pub fn unknown<E: Into<BoxError>>(cause: E) -> Self {
        Self::new(Code::UNKNOWN, cause)
    }

    /// Create an invalid input error
    #[inline]
    pub fn invalid_input<E: Into<BoxError>>(cause: E) -> Self {
        Self::new(Code::INVALID_INPUT, cause)
    }

    /// Create an output error
    #[inline]
    pub fn output<E: Into<BoxError>>(cause: E) -> Self {
        Self::new(Code::OUTPUT_ERROR, cause)
    }
}

/// A message layered on top of a cause before it is tagged
#[derive(Error, Debug)]
#[error("{message}: {source}")]
struct ContextLayer {
    message: String,
    source: BoxError,
}

/// Tag the error side of a `Result` with a status code
pub trait ResultExt<T> {
    /// Wrap the error in a [`StatusError`] carrying `code`
    ///
    /// # Errors
    ///
    /// Returns the wrapped error if `self` is `Err`
    fn status(self, code: Code) -> Result<T, StatusError>;

    /// Prefix the error with a lazily built message, then wrap it with `code`
    ///
    /// # Errors
    ///
    /// Returns the wrapped error if `self` is `Err`
    fn status_with<C, F>(self, code: Code, context: F) -> Result<T, StatusError>
    where
        C: Display,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn status(self, code: Code) -> Result<T, StatusError> {
        self.map_err(|err| StatusError::new(code, err))
    }

    fn status_with<C, F>(self, code: Code, context: F) -> Result<T, StatusError>
    where
        C: Display,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let layer = ContextLayer {
                message: context().to_string(),
                source: err.into(),
            };
            StatusError::new(code, layer)
        })
    }
}
