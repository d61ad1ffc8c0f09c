//! Markdown filename filtering and ordering.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use tracing::debug;

use crate::Result;

use super::listing::list_entries;

/// Suffix a filename must end with to count as a memo.
///
/// Matching is exact and case-sensitive: `NOTE.MD` and `note.markdown` are
/// not memos.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Check whether a filename is a Markdown memo.
///
/// The suffix is matched on the raw bytes of the name, so names that are not
/// valid UTF-8 are still recognized.
pub fn is_markdown(name: impl AsRef<OsStr>) -> bool {
    name.as_ref()
        .as_encoded_bytes()
        .ends_with(MARKDOWN_SUFFIX.as_bytes())
}

/// Keep the Markdown names and sort them in descending byte order.
///
/// Anything else is dropped without complaint; an empty result is valid.
/// The sort is stable, so duplicate names are kept side by side.
pub fn filter_markdown<I, S>(names: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut memos: Vec<OsString> = names
        .into_iter()
        .map(Into::into)
        .filter(|name| is_markdown(name))
        .collect();

    // Reverse lexicographic: newest date-named memos come first
    memos.sort_by(|a, b| b.as_encoded_bytes().cmp(a.as_encoded_bytes()));

    memos
}

/// List `dir` and return its Markdown filenames in descending order.
pub fn markdown_filenames(dir: impl AsRef<Path>) -> Result<Vec<OsString>> {
    let dir = dir.as_ref();
    let entries = list_entries(dir)?;
    let total = entries.len();
    let memos = filter_markdown(entries);

    debug!(
        dir = %dir.display(),
        entries = total,
        memos = memos.len(),
        "listed memo directory"
    );

    Ok(memos)
}
