//! Status codes and their operator-facing labels

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Integer status code, doubling as the process exit status
///
/// The named constants form the closed set of codes a stage can report.
/// Any other integer can still be carried (it simply has no label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(i32);

impl Code {
    /// The process worked without errors
    pub const OK: Self = Self(0);

    /// Parameters such as month and year are not valid
    pub const INVALID_PARAMETERS: Self = Self(1);

    /// I/O and other system failures, e.g. a file could not be opened
    pub const SYSTEM_ERROR: Self = Self(2);

    /// Connection problems such as timeouts or an unavailable service
    pub const CONNECTION_ERROR: Self = Self(3);

    /// The requested data was not found
    pub const DATA_UNAVAILABLE: Self = Self(4);

    /// A file is invalid or data could not be extracted from it
    pub const INVALID_FILE: Self = Self(5);

    /// Something unexpected happened
    pub const UNKNOWN: Self = Self(6);

    /// Stage input could not be decoded or is invalid
    pub const INVALID_INPUT: Self = Self(7);

    /// The stage could not produce its output
    pub const OUTPUT_ERROR: Self = Self(8);

    /// Every labelled code, in ascending order
    pub const ALL: [Self; 9] = [
        Self::OK,
        Self::INVALID_PARAMETERS,
        Self::SYSTEM_ERROR,
        Self::CONNECTION_ERROR,
        Self::DATA_UNAVAILABLE,
        Self::INVALID_FILE,
        Self::UNKNOWN,
        Self::INVALID_INPUT,
        Self::OUTPUT_ERROR,
    ];

    /// Wrap a raw integer without validation
    #[must_use]
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// The underlying integer value
    #[must_use]
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Label for this code, empty if the code is not in the table
    #[must_use]
    #[inline]
    pub const fn text(self) -> &'static str {
        text(self)
    }

    #[must_use]
    #[inline]
    pub const fn is_known(self) -> bool {
        !text(self).is_empty()
    }

    #[must_use]
    #[inline]
    pub const fn is_success(self) -> bool {
        self.0 == Self::OK.0
    }

    /// Reverse lookup of a label, ignoring ASCII case and surrounding spaces
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.text().eq_ignore_ascii_case(label))
    }
}

/// Returns the label for a status code.
///
/// Codes outside the table yield the empty string rather than an error;
/// callers that care must treat `""` as "unrecognized code".
#[must_use]
pub const fn text(code: Code) -> &'static str {
    match code {
        Code::OK => "OK",
        Code::INVALID_PARAMETERS => "Invalid Parameters",
        Code::SYSTEM_ERROR => "System Error",
        Code::CONNECTION_ERROR => "Connection Error",
        Code::DATA_UNAVAILABLE => "Data Unavailable",
        Code::INVALID_FILE => "Invalid File",
        Code::UNKNOWN => "Unknown",
        Code::INVALID_INPUT => "Invalid Input",
        Code::OUTPUT_ERROR => "Output Error",
        _ => "",
    }
}

impl fmt::Display for Code {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for Code {
    #[inline]
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Code> for i32 {
    #[inline]
    fn from(code: Code) -> Self {
        code.0
    }
}

/// Input that is neither an integer nor a known label
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid status code: '{input}'. Use an integer or a label such as 'System Error'")]
pub struct ParseCodeError {
    pub input: String,
}

impl FromStr for Code {
    type Err = ParseCodeError;

    /// Accepts any decimal integer, or one of the table's labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.trim().parse::<i32>() {
            return Ok(Self(value));
        }
        Self::from_label(s).ok_or_else(|| ParseCodeError {
            input: s.to_owned(),
        })
    }
}
