//! Post discovery
//!
//! Walks the literal directory prefix of the discovery pattern and keeps every
//! regular file whose root-relative path matches the glob. Paths are
//! normalized to forward slashes before matching so patterns behave the same
//! on every platform.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, config::invalid_pattern};

/// Default discovery pattern, relative to the site root
pub const DEFAULT_PATTERN: &str = "src/posts/*.md";

const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}', '<', '>', '!'];

/// A discovered post file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path used to open the file
    pub path: PathBuf,
    /// Root-relative path with forward slashes, used in diagnostics
    pub relative: String,
}

impl Document {
    /// File name without its extension; the post's stable identifier
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Convert a path to a forward-slash string
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Strip leading `./` segments; candidate paths never carry them
fn normalize_pattern(pattern: &str) -> &str {
    let mut pattern = pattern;
    while let Some(rest) = pattern.strip_prefix("./") {
        pattern = rest;
    }
    pattern
}

/// Leading path components of a pattern that contain no glob syntax
fn literal_prefix(pattern: &str) -> PathBuf {
    let components: Vec<&str> = pattern.split('/').collect();
    let Some((_, dirs)) = components.split_last() else {
        return PathBuf::new();
    };

    dirs.iter()
        .take_while(|part| !part.contains(GLOB_META))
        .filter(|part| !part.is_empty() && **part != ".")
        .collect()
}

/// Whether the pattern spells out a dot-prefixed component itself
fn names_hidden(pattern: &str) -> bool {
    pattern
        .split('/')
        .any(|part| part.starts_with('.') && part != "." && part != "..")
}

fn is_hidden_name(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

/// Find every file under `root` matching `pattern`.
///
/// A missing prefix directory yields no documents. Entries are visited in
/// file-name order. Dot-prefixed files and directories are skipped unless the
/// pattern names one explicitly. Entries the walk cannot stat (dangling
/// symlinks, link loops) are still returned when they match, so reading them
/// fails and gets reported later.
pub fn discover(root: &Path, pattern: &str) -> Result<Vec<Document>> {
    let pattern = normalize_pattern(pattern);
    let glob = Glob::new(pattern).map_err(|e| invalid_pattern(pattern, e.to_string()))?;
    let include_hidden = names_hidden(pattern);

    let walk_root = root.join(literal_prefix(pattern));
    if !walk_root.is_dir() {
        return Ok(Vec::new());
    }

    let documents = WalkDir::new(&walk_root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            include_hidden || entry.depth() == 0 || !is_hidden_name(entry.path())
        })
        .filter_map(|result| match result {
            Ok(entry) if entry.file_type().is_file() => Some(entry.into_path()),
            Ok(_) => None,
            Err(err) => err
                .path()
                .filter(|path| include_hidden || !is_hidden_name(path))
                .map(Path::to_path_buf),
        })
        .filter_map(|path| {
            let relative = to_forward_slashes(path.strip_prefix(root).ok()?);
            let matched = glob
                .matched(&CandidatePath::from(relative.as_str()))
                .is_some();
            matched.then(|| Document { path, relative })
        })
        .collect();

    Ok(documents)
}
