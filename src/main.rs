//! postfeed - sitewide feed generator
//!
//! A build-time tool for static sites: reads the YAML header of every post
//! and writes a single YAML feed listing them.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod discovery;
mod error;
mod feed;
mod frontmatter;
mod output;
mod pipeline;
mod ui;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        commands::completions::run(shell, &mut std::io::stdout().lock());
        return;
    }

    // Configuration is all-or-nothing and checked before any file is touched
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(errors) => {
            for e in errors {
                eprintln!("Error: {}", e);
            }
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::generate::run(&config, cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
