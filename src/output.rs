//! Feed serialization
//!
//! YAML is written with keys in declaration order and non-ASCII text emitted
//! literally. The output file is written in one shot; there is no
//! temp-file-and-rename step.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::{Result, fs::write_failed};
use crate::feed::FeedDocument;

/// Where the serialized feed goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Interpret a command-line argument; `-` means stdout
    pub fn from_arg(arg: PathBuf) -> Self {
        if arg.as_os_str() == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(arg)
        }
    }
}

/// Serialize a feed document to YAML
pub fn to_yaml(document: &FeedDocument) -> Result<String> {
    Ok(serde_yaml::to_string(document)?)
}

/// Serialize a feed document and write it to `target`
pub fn write_feed(document: &FeedDocument, target: &OutputTarget) -> Result<()> {
    let yaml = to_yaml(document)?;

    match target {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(yaml.as_bytes())?;
            stdout.flush()?;
        }
        OutputTarget::File(path) => {
            fs::write(path, yaml)
                .map_err(|e| write_failed(path.display().to_string(), e.to_string()))?;
        }
    }

    Ok(())
}
