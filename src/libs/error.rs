//! Error types for the report pipeline.
//!
//! Every failure the core can hit is represented here as a typed variant,
//! derived with `thiserror`. None of them is recovered locally: an error
//! aborts the current run and is surfaced to the operator. Reports already
//! written for earlier persons stand; the failing person's file is not
//! written.

use thiserror::Error;

/// Main error type for timesheet parsing and report assembly.
#[derive(Error, Debug)]
pub enum TabelError {
    /// The numeric part of a duration token is not an integer.
    #[error("malformed time token '{0}'")]
    BadTimeValue(String),

    /// The trailing unit character of a duration token is not configured.
    #[error("unknown time unit '{unit}' in token '{token}'")]
    UnknownTimeUnit { unit: char, token: String },

    /// The exported page does not match the expected markup schema.
    ///
    /// This signals that the page layout changed; the run is not retried.
    #[error("timesheet markup mismatch: expected {0}")]
    Markup(&'static str),

    /// A task identifier prefix has no entry in the project mapping.
    #[error("no project mapping for task prefix '{0}'")]
    UnknownProject(String),

    /// The name-resolution request itself failed.
    #[error("task name lookup for '{key}' failed: {source}")]
    NameService {
        key: String,
        #[source]
        source: reqwest::Error,
    },

    /// The name-resolution service answered with a non-success status.
    #[error("task name lookup for '{key}' returned {status}")]
    NameServiceStatus { key: String, status: reqwest::StatusCode },

    /// No YouTrack access token in the environment or the configuration.
    #[error("no YouTrack token: set YOUTRACK_TOKEN or configure the youtrack module")]
    MissingToken,
}

/// Convenience alias used throughout the core modules.
pub type Result<T> = std::result::Result<T, TabelError>;
