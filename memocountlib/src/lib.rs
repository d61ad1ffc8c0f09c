//! # memocountlib
//!
//! Counts Markdown memo files in a directory, and the lines in them, and
//! reports both numbers through the two-method plugin contract that a
//! monitoring agent polls.
//!
//! ## Overview
//!
//! A fetch is a straight pipeline:
//!
//! 1. **Source**: list the entries of one directory (non-recursive), keep the
//!    names ending in `.md`, sorted in descending order
//! 2. **Data**: count the lines of every kept file and sum them
//! 3. **Plugin**: expose the totals as a flat metric map, alongside static
//!    graph metadata
//!
//! Failure to read the directory aborts a fetch. Failure to open a single
//! memo does not: that file contributes zero lines.
//!
//! ## Example
//!
//! ```rust
//! use memocountlib::{MemoCountPlugin, Plugin, PluginOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("2024-01-01.md"), "# Monday\n- groceries\n").unwrap();
//! fs::write(dir.path().join("todo.txt"), "ignored\n").unwrap();
//!
//! let plugin = MemoCountPlugin::new(PluginOptions::new(dir.path()));
//! let metrics = plugin.fetch_metrics().unwrap();
//! assert_eq!(metrics["file_count"], 1.0);
//! assert_eq!(metrics["line_count"], 2.0);
//!
//! let graphs = plugin.graph_definition();
//! assert_eq!(graphs["memo_count"].label, "Memo Count");
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod plugin;
pub mod source;

pub use data::{count_directory, count_file, count_lines, FileLines, MemoStats};
pub use error::MemocountError;
pub use options::{PluginOptions, DEFAULT_PREFIX};
pub use plugin::{
    Graph, GraphDefinition, MemoCountPlugin, Metric, MetricMap, Plugin, GRAPH_NAME,
    METRIC_FILE_COUNT, METRIC_LINE_COUNT,
};
pub use source::{
    filter_markdown, is_markdown, list_entries, markdown_filenames, MARKDOWN_SUFFIX,
};

/// Result type for memocountlib operations
pub type Result<T> = std::result::Result<T, MemocountError>;
