//! Feed generation command
//!
//! Stages run strictly forward: discover posts, extract and aggregate entries,
//! then serialize. Configuration is validated by the caller before this runs.
//! Per-post failures are reported and skipped; only a bad pattern, a missing
//! output argument or a failed write end the run with an error.

use crate::cli::Cli;
use crate::config::Config;
use crate::discovery::discover;
use crate::error::{FeedError, Result};
use crate::feed::today_utc;
use crate::output::{OutputTarget, write_feed};
use crate::pipeline::build_feed;
use crate::ui::StderrReporter;

/// Run feed generation
pub fn run(config: &Config, cli: Cli) -> Result<()> {
    let documents = discover(&cli.root, &cli.pattern)?;

    let mut reporter = StderrReporter::new(cli.verbose);
    let feed = build_feed(config, &documents, today_utc(), &mut reporter);

    let target = cli
        .output
        .map(OutputTarget::from_arg)
        .ok_or(FeedError::OutputNotSpecified)?;

    write_feed(&feed, &target)
}
