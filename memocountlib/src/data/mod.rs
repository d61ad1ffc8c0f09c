//! Data collection: count memo lines and aggregate them.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **Counting**: line counting for one file or any buffered reader
//! - **Statistics**: `MemoStats`, the typed result of one fetch
//!
//! ## Example
//!
//! ```rust,ignore
//! use memocountlib::data::{count_directory, count_file};
//!
//! let lines = count_file("/home/me/memo/2024-03-01.md");
//! let stats = count_directory("/home/me/memo")?;
//! println!("{} memos, {} lines", stats.file_count, stats.line_count);
//! ```

pub mod counter;
pub mod stats;

pub use counter::{count_directory, count_file, count_lines};
pub use stats::{FileLines, MemoStats};
