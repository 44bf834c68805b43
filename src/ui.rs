//! Diagnostic output on stderr
//!
//! All pipeline reporting goes through the [`Reporter`] trait so the build can
//! run silently under test. Skipped posts are always reported; per-post and
//! summary lines only in verbose mode.

use console::Style;

use crate::error::FeedError;

/// Receives progress and skip notices from a feed build
pub trait Reporter {
    /// A document was excluded from the feed
    fn skipped(&mut self, path: &str, error: &FeedError);

    /// A document was added to the feed
    fn collected(&mut self, path: &str, title: &str);

    /// The build finished with `collected` of `total` documents
    fn summary(&mut self, collected: usize, total: usize);
}

/// Reporter writing to stderr
pub struct StderrReporter {
    verbose: bool,
}

impl StderrReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for StderrReporter {
    fn skipped(&mut self, path: &str, error: &FeedError) {
        eprintln!(
            "{} {}: {}",
            Style::new().yellow().bold().for_stderr().apply_to("Skipping"),
            path,
            error
        );
    }

    fn collected(&mut self, path: &str, title: &str) {
        if self.verbose {
            eprintln!(
                "{} {} ({})",
                Style::new().green().for_stderr().apply_to("Collected"),
                path,
                title
            );
        }
    }

    fn summary(&mut self, collected: usize, total: usize) {
        if self.verbose {
            eprintln!(
                "{} {} of {} posts",
                Style::new().bold().for_stderr().apply_to("Feed:"),
                collected,
                total
            );
        }
    }
}

/// Reporter that records notices instead of printing them
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SilentReporter {
    pub skipped: Vec<String>,
    pub collected: Vec<String>,
    pub summary: Option<(usize, usize)>,
}

#[cfg(test)]
impl Reporter for SilentReporter {
    fn skipped(&mut self, path: &str, error: &FeedError) {
        self.skipped.push(format!("{path}: {error}"));
    }

    fn collected(&mut self, path: &str, _title: &str) {
        self.collected.push(path.to_string());
    }

    fn summary(&mut self, collected: usize, total: usize) {
        self.summary = Some((collected, total));
    }
}
