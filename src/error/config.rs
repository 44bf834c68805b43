//! Configuration errors

use super::FeedError;

/// Creates a missing environment variable error
pub fn missing_env(name: impl Into<String>) -> FeedError {
    FeedError::MissingEnvVar { name: name.into() }
}

/// Creates an invalid discovery pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> FeedError {
    FeedError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
