//! Source discovery: find the memos to count.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Listing**: the entry names of one directory, non-recursive
//! - **Filtering**: keep `.md` names, sorted in descending order
//!
//! ## Example
//!
//! ```rust,ignore
//! use memocountlib::source::markdown_filenames;
//!
//! // ["2024-03-02.md", "2024-03-01.md", ...]
//! let memos = markdown_filenames("/home/me/memo")?;
//! ```

pub mod filter;
pub mod listing;

pub use filter::{filter_markdown, is_markdown, markdown_filenames, MARKDOWN_SUFFIX};
pub use listing::list_entries;
