//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::discovery::DEFAULT_PATTERN;

/// postfeed - sitewide feed generator
///
/// Collects the YAML header of every post and writes a single YAML feed.
#[derive(Parser, Debug)]
#[command(
    name = "postfeed",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Aggregate post headers into a sitewide YAML feed",
    long_about = "postfeed reads the '---' delimited YAML header of every post matching \
                  the discovery pattern and writes one feed document listing them. \
                  BASE_URL and TITLE must be set in the environment.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  BASE_URL=https://example.com TITLE=Blog postfeed public/feed.yaml\n    \
                  postfeed --root site --pattern 'content/**/*.md' feed.yaml\n    \
                  postfeed -v -\n\n\
                  \x1b[1m\x1b[32mEnvironment:\x1b[0m\n    \
                  BASE_URL    Site root URL, used verbatim in post links\n    \
                  TITLE       Site title"
)]
pub struct Cli {
    /// Output file path ('-' writes the feed to stdout)
    pub output: Option<PathBuf>,

    /// Directory the discovery pattern is resolved against
    #[arg(long, short = 'r', default_value = ".")]
    pub root: PathBuf,

    /// Glob selecting post files, relative to the root
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Report every collected post and a summary
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
