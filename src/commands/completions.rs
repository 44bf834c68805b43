//! Shell completions

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

/// Write completions for `shell` to `out`
pub fn run(shell: Shell, out: &mut dyn Write) {
    let mut cmd = <Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "postfeed", out);
}
