//! Feed data model
//!
//! Field declaration order is the serialized key order, so the structs below
//! must keep `title, url, date, posts` and `title, date, url, path, abstract`.

use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::frontmatter::HeaderRecord;

/// Path segment posts are published under
pub const POSTS_SEGMENT: &str = "posts";

/// One aggregated post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    /// Passed through verbatim from the header
    pub date: String,
    pub url: String,
    pub path: String,
    #[serde(rename = "abstract")]
    pub summary: String,
}

impl FeedEntry {
    /// Build the entry for the post identified by `stem`.
    ///
    /// Only the abstract is trimmed; every other field is copied as-is.
    pub fn build(base_url: &str, stem: &str, header: &HeaderRecord) -> Self {
        Self {
            title: header.get_str("title"),
            date: header.get_str("date"),
            url: format!("{base_url}/{POSTS_SEGMENT}/{stem}"),
            path: format!("{POSTS_SEGMENT}/{stem}"),
            summary: header.get_str("abstract").trim().to_string(),
        }
    }
}

/// The complete sitewide feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedDocument {
    pub title: String,
    pub url: String,
    /// Generation timestamp, midnight UTC of the build day
    pub date: String,
    pub posts: Vec<FeedEntry>,
}

impl FeedDocument {
    pub fn new(config: &Config, generated: NaiveDate, posts: Vec<FeedEntry>) -> Self {
        Self {
            title: config.title.clone(),
            url: config.base_url.clone(),
            date: format_timestamp(generated),
            posts,
        }
    }
}

/// Today's date in UTC
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format a date as an ISO-8601 timestamp at midnight, without offset
pub fn format_timestamp(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(yaml: &str) -> HeaderRecord {
        match serde_yaml::from_str::<serde_yaml::Value>(yaml).unwrap() {
            serde_yaml::Value::Mapping(m) => HeaderRecord::from_mapping(m),
            _ => HeaderRecord::default(),
        }
    }

    fn config() -> Config {
        Config {
            base_url: "https://example.com".to_string(),
            title: "Example".to_string(),
        }
    }

    #[test]
    fn test_entry_links_from_stem() {
        let entry = FeedEntry::build(
            "https://example.com",
            "hello-world",
            &header("title: Hello\ndate: 2024-01-05\nabstract: Hi"),
        );
        assert_eq!(entry.url, "https://example.com/posts/hello-world");
        assert_eq!(entry.path, "posts/hello-world");
        assert_eq!(entry.title, "Hello");
        assert_eq!(entry.date, "2024-01-05");
        assert_eq!(entry.summary, "Hi");
    }

    #[test]
    fn test_base_url_not_normalized() {
        let entry = FeedEntry::build("https://example.com/", "a", &HeaderRecord::default());
        assert_eq!(entry.url, "https://example.com//posts/a");
    }

    #[test]
    fn test_abstract_trimmed_interior_kept() {
        let entry = FeedEntry::build(
            "https://x.org",
            "a",
            &header("abstract: \"  two  words \\n\""),
        );
        assert_eq!(entry.summary, "two  words");
    }

    #[test]
    fn test_other_fields_not_trimmed() {
        let entry = FeedEntry::build("https://x.org", "a", &header("title: \" padded \""));
        assert_eq!(entry.title, " padded ");
    }

    #[test]
    fn test_missing_fields_default_empty() {
        let entry = FeedEntry::build("https://x.org", "a", &HeaderRecord::default());
        assert_eq!(entry.title, "");
        assert_eq!(entry.date, "");
        assert_eq!(entry.summary, "");
    }

    #[test]
    fn test_format_timestamp() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_timestamp(date), "2024-03-09T00:00:00");
    }

    #[test]
    fn test_document_carries_config() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let doc = FeedDocument::new(&config(), date, Vec::new());
        assert_eq!(doc.title, "Example");
        assert_eq!(doc.url, "https://example.com");
        assert_eq!(doc.date, "2024-01-01T00:00:00");
        assert!(doc.posts.is_empty());
    }
}
