//! Input line loading.
//!
//! Files are read in the order given and their lines concatenated into one
//! sequence. Line terminators (`\n`, `\r\n` or a lone `\r`) are stripped; every
//! other character, leading and trailing whitespace included, is kept.

use std::path::{Path, PathBuf};

use sorter_core::error::{Result, SorterError};
use tracing::debug;

// ── LineSource ────────────────────────────────────────────────────────────────

/// Anything that can hand the sorter an ordered, finite sequence of lines.
pub trait LineSource {
    fn read_lines(&self) -> Result<Vec<String>>;
}

/// Lines read from files on disk, in argument order.
#[derive(Debug, Clone)]
pub struct FileLines {
    paths: Vec<PathBuf>,
}

impl FileLines {
    pub fn new(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for FileLines {
    fn read_lines(&self) -> Result<Vec<String>> {
        read_files(&self.paths)
    }
}

/// Lines already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLines(pub Vec<String>);

impl LineSource for MemoryLines {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read every file in `paths` and concatenate their lines.
///
/// Fails on the first file that is missing, unreadable or not valid UTF-8.
pub fn read_files(paths: &[PathBuf]) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for path in paths {
        let before = lines.len();
        lines.extend(read_file(path)?);
        debug!("Read {} lines from {}", lines.len() - before, path.display());
    }
    Ok(lines)
}

/// Read a single file into lines.
pub fn read_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| SorterError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&content))
}

/// Split `text` on `\n`, `\r\n` and lone `\r`.
///
/// A terminator at the very end does not start another line, so `"a\n"` is one
/// line while `"a\n\n"` is two (the second one empty).
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(idx) => {
                lines.push(rest[..idx].to_string());
                let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + skip..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}

// ── Tests ─────────────────────────────────────────────────────────────────────
