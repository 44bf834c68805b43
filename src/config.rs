//! Site configuration sourced from the environment
//!
//! Both values are required and have no defaults. Validation is eager and
//! all-or-nothing: every missing name is reported, not just the first.

use crate::error::{FeedError, config::missing_env};

/// Environment variable holding the site root URL
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Environment variable holding the site title
pub const TITLE_VAR: &str = "TITLE";

/// Required variables, in reporting order
pub const REQUIRED_VARS: &[&str] = &[BASE_URL_VAR, TITLE_VAR];

/// Validated site configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Site root URL, used verbatim (no trailing-slash normalization)
    pub base_url: String,
    /// Site title
    pub title: String,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, Vec<FeedError>> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// A variable that is absent or set to the empty string counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Vec<FeedError>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let missing: Vec<FeedError> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|name| fetch(*name).is_none())
            .map(missing_env)
            .collect();

        match (fetch(BASE_URL_VAR), fetch(TITLE_VAR)) {
            (Some(base_url), Some(title)) if missing.is_empty() => Ok(Self { base_url, title }),
            _ => Err(missing),
        }
    }
}
