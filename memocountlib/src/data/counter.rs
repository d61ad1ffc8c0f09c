//! Line counting for memo files.
//!
//! A line is the text between two newlines. A trailing line without a final
//! newline still counts, so `"a\nb\nc"` and `"a\nb\nc\n"` are both three
//! lines, and an empty file is zero.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::debug;

use crate::source::markdown_filenames;
use crate::Result;

use super::stats::{FileLines, MemoStats};

/// Count the lines produced by a buffered reader.
///
/// Counting works on raw bytes, so content that is not valid UTF-8 is counted
/// like any other. If the reader fails part-way, the lines seen up to that
/// point are returned.
pub fn count_lines<R: BufRead>(mut reader: R) -> u64 {
    let mut lines = 0;
    // Whether bytes have been seen since the last newline
    let mut partial = false;

    loop {
        let consumed = match reader.fill_buf() {
            Ok([]) => break,
            Ok(buf) => {
                lines += buf.iter().filter(|&&b| b == b'\n').count() as u64;
                partial = buf.last() != Some(&b'\n');
                buf.len()
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(_) => break,
        };
        reader.consume(consumed);
    }

    if partial {
        lines += 1;
    }

    lines
}

/// Count the lines of the file at `path`.
///
/// A file that cannot be opened counts as zero lines. One unreadable memo
/// must not fail the whole fetch, so no error is returned and nothing is
/// logged. This makes an unreadable file indistinguishable from an empty one.
pub fn count_file(path: impl AsRef<Path>) -> u64 {
    match File::open(path.as_ref()) {
        Ok(file) => count_lines(BufReader::new(file)),
        Err(_) => 0,
    }
}

/// Count the memos in `dir` and their lines.
///
/// Only a failure to read the directory itself is an error. Files are
/// visited in descending name order and recorded in that order. Files are
/// opened by their raw name; only the recorded name is converted lossily.
pub fn count_directory(dir: impl AsRef<Path>) -> Result<MemoStats> {
    let dir = dir.as_ref();
    let names = markdown_filenames(dir)?;

    let stats: MemoStats = names
        .into_iter()
        .map(|name| {
            let lines = count_file(dir.join(&name));
            FileLines::new(name.to_string_lossy(), lines)
        })
        .collect();

    debug!(
        dir = %dir.display(),
        file_count = stats.file_count,
        line_count = stats.line_count,
        "counted memos"
    );

    Ok(stats)
}
