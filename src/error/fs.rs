//! File system errors

use super::FeedError;

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> FeedError {
    FeedError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

