//! Header block errors

use super::FeedError;

/// Creates a missing opening delimiter error
pub fn missing_opening(path: impl Into<String>) -> FeedError {
    FeedError::MissingOpeningDelimiter { path: path.into() }
}

/// Creates a missing closing delimiter error
pub fn missing_closing(path: impl Into<String>) -> FeedError {
    FeedError::MissingClosingDelimiter { path: path.into() }
}

/// Creates a malformed header block error
pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> FeedError {
    FeedError::MalformedBlock {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unreadable document error
pub fn unreadable(path: impl Into<String>, reason: impl Into<String>) -> FeedError {
    FeedError::Unreadable {
        path: path.into(),
        reason: reason.into(),
    }
}
