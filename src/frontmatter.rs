//! Parse the YAML header block at the top of a post
//!
//! A header block is the span strictly between a first line of `---` and the
//! next line of `---`. The span is parsed as YAML and must be a mapping (or
//! empty). Field lookups never fail: absent, null and non-scalar values all
//! read as the empty string.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{Result, header};

/// Bare line that opens and closes a header block
pub const DELIMITER: &str = "---";

/// Key-value fields parsed from a header block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderRecord {
    fields: Mapping,
}

impl HeaderRecord {
    /// Wrap an already parsed mapping
    pub fn from_mapping(fields: Mapping) -> Self {
        Self { fields }
    }

    /// Get a top-level field as a string, or the empty string.
    ///
    /// Numbers and booleans are rendered as text. Absent keys, nulls,
    /// sequences and nested mappings all read as `""`.
    pub fn get_str(&self, key: &str) -> String {
        match self.fields.get(Value::String(key.to_string())) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn is_blank_yaml(block: &str) -> bool {
    block.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

/// Extract the raw text between the opening and closing delimiters.
///
/// `label` identifies the document in error messages.
pub fn extract_block(label: &str, content: &str) -> Result<String> {
    let lines: Vec<&str> = content.lines().collect();

    match lines.first() {
        Some(first) if is_delimiter(first) => {}
        _ => return Err(header::missing_opening(label)),
    }

    let end_idx = lines[1..]
        .iter()
        .position(|line| is_delimiter(line))
        .ok_or_else(|| header::missing_closing(label))?
        + 1;

    Ok(lines[1..end_idx].join("\n"))
}

/// Parse a document's text into its header record
pub fn parse_header(label: &str, content: &str) -> Result<HeaderRecord> {
    let block = extract_block(label, content)?;
    if is_blank_yaml(&block) {
        return Ok(HeaderRecord::default());
    }

    let value: Value =
        serde_yaml::from_str(&block).map_err(|e| header::malformed(label, e.to_string()))?;

    match value {
        Value::Mapping(fields) => Ok(HeaderRecord::from_mapping(fields)),
        Value::Null => Ok(HeaderRecord::default()),
        _ => Err(header::malformed(
            label,
            "header block is not a key-value mapping",
        )),
    }
}

/// Read a document from disk and parse its header record
pub fn read_header(path: &Path, label: &str) -> Result<HeaderRecord> {
    let content =
        fs::read_to_string(path).map_err(|e| header::unreadable(label, e.to_string()))?;
    parse_header(label, &content)
}
