//! Error types and handling for postfeed
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Required configuration and command-line errors
//! - [`header`]: Per-document header block errors
//! - [`fs`]: File system and output errors
//!
//! Header errors are recoverable: the pipeline reports them and skips the
//! document. Everything else is fatal.

pub mod config;
pub mod fs;
pub mod header;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for postfeed operations
#[derive(Error, Diagnostic, Debug)]
pub enum FeedError {
    // Configuration errors
    #[error("environment variable {name} is not set")]
    #[diagnostic(
        code(postfeed::config::missing_env),
        help("Export {name} with a non-empty value before running postfeed")
    )]
    MissingEnvVar { name: String },

    #[error("output file is not specified")]
    #[diagnostic(
        code(postfeed::config::missing_output),
        help("Pass the output path as the first argument, or '-' for stdout")
    )]
    OutputNotSpecified,

    #[error("Invalid discovery pattern '{pattern}': {reason}")]
    #[diagnostic(code(postfeed::config::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    // Header errors
    #[error("{path} doesn't begin with '---'")]
    #[diagnostic(code(postfeed::header::missing_opening))]
    MissingOpeningDelimiter { path: String },

    #[error("Closing '---' not found in {path}")]
    #[diagnostic(code(postfeed::header::missing_closing))]
    MissingClosingDelimiter { path: String },

    #[error("Malformed header block in {path}: {reason}")]
    #[diagnostic(code(postfeed::header::malformed))]
    MalformedBlock { path: String, reason: String },

    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(postfeed::header::unreadable))]
    Unreadable { path: String, reason: String },

    // Output errors
    #[error("Failed to serialize feed: {reason}")]
    #[diagnostic(code(postfeed::fs::serialize_failed))]
    SerializeFailed { reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(postfeed::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(postfeed::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for FeedError {
    fn from(err: std::io::Error) -> Self {
        FeedError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for FeedError {
    fn from(err: serde_yaml::Error) -> Self {
        FeedError::SerializeFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FeedError>;
