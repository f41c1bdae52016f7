// logwindow - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::util::constants;

/// Top-level error type for all logwindow operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogWindowError {
    /// Anchor date/time input failed validation.
    Validation(ValidationError),

    /// Log fetch failed (transport, backend status, or response decoding).
    Fetch(FetchError),

    /// Preference store read or write failed.
    Preference(PreferenceError),
}

impl fmt::Display for LogWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Validation error: {e}"),
            Self::Fetch(e) => write!(f, "Fetch error: {e}"),
            Self::Preference(e) => write!(f, "Preference error: {e}"),
        }
    }
}

impl std::error::Error for LogWindowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Fetch(e) => Some(e),
            Self::Preference(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Errors from anchor date/time validation and resolution.
///
/// Every variant's Display output is the corrective message shown to the
/// user, so the notification path can surface `e.to_string()` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Date or time input does not match the strict expected format,
    /// or names an impossible calendar date / wall-clock time.
    InvalidFormat { date: String, time: String },

    /// Exactly one of date/time was provided; both are required.
    IncompleteInput { date: String, time: String },

    /// UTC-mode anchor resolves to an instant not strictly before "now".
    FutureInstant { requested: String },

    /// Local wall-clock value does not exist (DST gap).
    NonexistentLocalTime { date: String, time: String },
}

impl ValidationError {
    /// The user-facing corrective message for this failure.
    pub fn user_message(&self) -> &'static str {
        constants::MSG_INVALID_DATETIME
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { date, time } => {
                write!(f, "invalid date/time input '{date} {time}': {}", self.user_message())
            }
            Self::IncompleteInput { date, time } => {
                write!(f, "incomplete date/time input '{date} {time}': {}", self.user_message())
            }
            Self::FutureInstant { requested } => {
                write!(f, "'{requested}' is in the future: {}", self.user_message())
            }
            Self::NonexistentLocalTime { date, time } => {
                write!(f, "'{date} {time}' does not exist in the local timezone: {}", self.user_message())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for LogWindowError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

// ---------------------------------------------------------------------------
// Fetch errors
// ---------------------------------------------------------------------------

/// Errors from the log fetch collaborator.
#[derive(Debug)]
pub enum FetchError {
    /// The request never produced a response (connection, DNS, timeout).
    Transport { source: reqwest::Error },

    /// The backend answered with a non-success status code.
    Status { code: u16 },

    /// The response body could not be decoded as a log page.
    Decode { source: serde_json::Error },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { source } => write!(f, "transport failure: {source}"),
            Self::Status { code } => write!(f, "backend returned status {code}"),
            Self::Decode { source } => write!(f, "malformed log page: {source}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport { source } => Some(source),
            Self::Decode { source } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

impl From<FetchError> for LogWindowError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

// ---------------------------------------------------------------------------
// Preference store errors
// ---------------------------------------------------------------------------

/// Errors from the persistent preference store.
#[derive(Debug)]
pub enum PreferenceError {
    /// I/O error reading or writing the preference file.
    Io { path: PathBuf, source: io::Error },

    /// The preference file could not be serialised.
    Serialise { source: serde_json::Error },
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "preference I/O error '{}': {source}", path.display())
            }
            Self::Serialise { source } => {
                write!(f, "failed to serialise preferences: {source}")
            }
        }
    }
}

impl std::error::Error for PreferenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialise { source } => Some(source),
        }
    }
}

impl From<PreferenceError> for LogWindowError {
    fn from(e: PreferenceError) -> Self {
        Self::Preference(e)
    }
}

/// Convenience type alias for logwindow results.
pub type Result<T> = std::result::Result<T, LogWindowError>;
