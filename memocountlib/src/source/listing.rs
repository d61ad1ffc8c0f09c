//! Non-recursive directory listing.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::error::MemocountError;
use crate::Result;

/// List the names of the entries directly inside `dir`.
///
/// Files and subdirectories are both returned, without their directory
/// prefix and in whatever order the filesystem yields them. Symlinks are not
/// resolved. Names are kept as raw `OsString`s so they can be joined back
/// onto `dir` even when they are not valid UTF-8.
///
/// Fails if `dir` is missing, is not a directory, or cannot be enumerated.
pub fn list_entries(dir: impl AsRef<Path>) -> Result<Vec<OsString>> {
    let dir = dir.as_ref();
    let to_error = |source| MemocountError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(to_error)? {
        let entry = entry.map_err(to_error)?;
        names.push(entry.file_name());
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_entries() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.md"), "a").unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::create_dir(temp.path().join("archive")).unwrap();

        let mut names = list_entries(temp.path()).unwrap();
        names.sort();

        assert_eq!(names, vec!["a.md", "archive", "b.txt"]);
    }

    #[test]
    fn test_list_entries_is_not_recursive() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("2023")).unwrap();
        fs::write(temp.path().join("2023/old.md"), "old").unwrap();

        let names = list_entries(temp.path()).unwrap();

        assert_eq!(names, vec!["2023"]);
    }

    #[test]
    fn test_list_entries_empty_dir() {
        let temp = tempdir().unwrap();
        assert!(list_entries(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_list_entries_nonexistent() {
        let result = list_entries("/nonexistent/memo/dir");

        match result {
            Err(MemocountError::DirectoryRead { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/memo/dir"));
            }
            other => panic!("Expected DirectoryRead error, got {:?}", other),
        }
    }

    #[test]
    fn test_list_entries_on_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("memo.md");
        fs::write(&file, "x").unwrap();

        assert!(list_entries(&file).is_err());
    }
}
