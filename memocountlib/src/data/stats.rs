//! Aggregated memo statistics.
//!
//! `MemoStats` is the typed result of one fetch. It is converted into the
//! flat metric map only at the plugin boundary.

use serde::{Deserialize, Serialize};

/// Line count of a single memo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLines {
    /// Filename, without the directory prefix.
    pub name: String,
    /// Number of lines (zero if the file could not be opened).
    pub lines: u64,
}

impl FileLines {
    /// Create new file line count.
    pub fn new(name: impl Into<String>, lines: u64) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }
}

/// Totals for one memo directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoStats {
    /// Number of memos found
    pub file_count: u64,
    /// Sum of the line counts of all memos
    pub line_count: u64,
    /// Per-memo breakdown, in the order the memos were counted
    pub files: Vec<FileLines>,
}

impl MemoStats {
    /// Create empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one memo to the totals.
    pub fn add_file(&mut self, file: FileLines) {
        self.file_count += 1;
        self.line_count += file.lines;
        self.files.push(file);
    }
}

impl FromIterator<FileLines> for MemoStats {
    fn from_iter<I: IntoIterator<Item = FileLines>>(iter: I) -> Self {
        let mut stats = Self::new();
        for file in iter {
            stats.add_file(file);
        }
        stats
    }
}
