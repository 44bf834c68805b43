//! Feed extraction and aggregation
//!
//! Documents are folded into a [`Collected`] value that keeps successes and
//! failures apart. A bad document only ever lands in `skipped`; nothing here
//! can abort the batch.

use chrono::NaiveDate;

use crate::config::Config;
use crate::discovery::Document;
use crate::error::{FeedError, Result};
use crate::feed::{FeedDocument, FeedEntry};
use crate::frontmatter::read_header;
use crate::ui::Reporter;

/// A document excluded from the feed and the reason why
#[derive(Debug)]
pub struct Skipped {
    pub path: String,
    pub error: FeedError,
}

/// Outcome of extracting every document, in discovery order
#[derive(Debug, Default)]
pub struct Collected {
    pub entries: Vec<FeedEntry>,
    pub skipped: Vec<Skipped>,
}

impl Collected {
    fn push(mut self, document: &Document, result: Result<FeedEntry>) -> Self {
        match result {
            Ok(entry) => self.entries.push(entry),
            Err(error) => self.skipped.push(Skipped {
                path: document.relative.clone(),
                error,
            }),
        }
        self
    }

    pub fn total(&self) -> usize {
        self.entries.len() + self.skipped.len()
    }
}

/// Read one document and build its feed entry
pub fn extract_entry(config: &Config, document: &Document) -> Result<FeedEntry> {
    let header = read_header(&document.path, &document.relative)?;
    Ok(FeedEntry::build(&config.base_url, &document.stem(), &header))
}

/// Extract every document, routing failures to `skipped`
pub fn collect_entries(config: &Config, documents: &[Document]) -> Collected {
    documents
        .iter()
        .fold(Collected::default(), |collected, document| {
            collected.push(document, extract_entry(config, document))
        })
}

/// Run extraction and aggregation, reporting as it goes
pub fn build_feed(
    config: &Config,
    documents: &[Document],
    generated: NaiveDate,
    reporter: &mut dyn Reporter,
) -> FeedDocument {
    let collected = collect_entries(config, documents);

    for skipped in &collected.skipped {
        reporter.skipped(&skipped.path, &skipped.error);
    }
    for entry in &collected.entries {
        reporter.collected(&entry.path, &entry.title);
    }
    reporter.summary(collected.entries.len(), collected.total());

    FeedDocument::new(config, generated, collected.entries)
}
