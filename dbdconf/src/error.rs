//! Error types for the dbdconf library.
//!
//! This module provides the error hierarchy for all configuration editing
//! operations, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a dbdconf error.
///
/// # Examples
///
/// ```
/// use dbdconf::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("DbdHost")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the dbdconf library.
///
/// This enum encompasses all error conditions that can occur while parsing,
/// mutating, or persisting the managed configuration files.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration file could not be parsed.
    ///
    /// Raised while loading when a line names a key outside the closed
    /// vocabulary or lacks a `=` separator. The in-memory document is left
    /// in its pre-load state.
    #[error("cannot parse {}:{line}: {message}", path.display())]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The 1-based line number of the offending line.
        line: usize,
        /// A description of why the line is unparseable.
        message: String,
    },

    /// A key name is not a member of the recognized vocabulary.
    #[error("unrecognized configuration option: {key}")]
    UnrecognizedKey {
        /// The key name that failed the registry lookup.
        key: String,
    },

    /// A value was rejected by its key's validator.
    ///
    /// The document is left unmodified when this is returned from a setter.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        /// The on-disk spelling of the key being set.
        key: &'static str,
        /// The reason the value was rejected.
        reason: String,
    },

    /// Deletion was requested for a key that is not present.
    #[error("configuration option {key} is not set")]
    KeyNotPresent {
        /// The on-disk spelling of the absent key.
        key: &'static str,
    },

    /// A database endpoint string could not be parsed or selected.
    #[error("invalid database endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// The endpoint string as received.
        endpoint: String,
        /// The reason the endpoint is unusable.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates a rejected value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbdconf::Error;
    ///
    /// let err = Error::InvalidValue { key: "DbdPort", reason: "not a port".into() };
    /// assert!(err.is_invalid_value());
    /// ```
    #[must_use]
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }

    /// Check if error indicates deletion of an absent key.
    ///
    /// Callers that want idempotent unset semantics can treat this case as
    /// a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbdconf::Error;
    ///
    /// let err = Error::KeyNotPresent { key: "DbdHost" };
    /// assert!(err.is_not_present());
    /// ```
    #[must_use]
    pub fn is_not_present(&self) -> bool {
        matches!(self, Self::KeyNotPresent { .. })
    }

    /// Check if error indicates an unparseable configuration file.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
