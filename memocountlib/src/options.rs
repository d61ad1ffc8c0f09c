//! Configuration for the memo-count plugin.
//!
//! Both inputs travel in an explicit value handed to the plugin; nothing is
//! read from process-wide state.

use std::path::{Path, PathBuf};

/// Prefix used for the graph label when none is configured.
pub const DEFAULT_PREFIX: &str = "Memo";

/// Options for a memo-count plugin instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOptions {
    /// Label prefix for the graph ("<prefix> Count")
    pub prefix: String,
    /// Directory holding the memos
    pub directory: PathBuf,
}

impl PluginOptions {
    /// Create options for `directory` with the default prefix.
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// Set the graph label prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the memo directory.
    pub fn directory(mut self, directory: impl AsRef<Path>) -> Self {
        self.directory = directory.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix() {
        let options = PluginOptions::new("/tmp/memo");
        assert_eq!(options.prefix, "Memo");
        assert_eq!(options.directory, PathBuf::from("/tmp/memo"));
    }

    #[test]
    fn test_builder() {
        let options = PluginOptions::new("/tmp/memo")
            .prefix("Diary")
            .directory("/srv/notes");
        assert_eq!(options.prefix, "Diary");
        assert_eq!(options.directory, PathBuf::from("/srv/notes"));
    }
}
