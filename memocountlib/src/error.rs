//! Error types for memocountlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a metrics fetch.
///
/// Only the memo directory itself can fail a fetch. Problems with individual
/// memo files are absorbed by the line counter and never show up here.
#[derive(Error, Debug)]
pub enum MemocountError {
    /// Failed to open or enumerate the memo directory
    #[error("failed to read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },
}
