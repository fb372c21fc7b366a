use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::ParseError;

const BUFFER_SIZE: usize = 64 * 1024;

/// Open a transcript for line streaming.
///
/// Existence is checked up front so a missing file fails before any line is read.
pub fn open_transcript(path: &Path) -> Result<BufReader<File>, ParseError> {
    if !path.exists() {
        return Err(ParseError::NotFound { path: path.to_path_buf() });
    }
    let file =
        File::open(path).map_err(|source| ParseError::Io { path: path.to_path_buf(), source })?;
    Ok(BufReader::with_capacity(BUFFER_SIZE, file))
}

/// Call `f` for every non-blank line, with surrounding ASCII whitespace (including
/// a trailing `\r`) removed. Lines are handed over as raw bytes so invalid UTF-8
/// surfaces as a per-line JSON error rather than an I/O error.
///
/// Returns the number of non-blank lines seen.
pub fn for_each_line<R, F>(mut reader: R, mut f: F) -> io::Result<usize>
where
    R: BufRead,
    F: FnMut(&[u8]),
{
    let mut buf = Vec::new();
    let mut lines = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = buf.trim_ascii();
        if line.is_empty() {
            continue;
        }
        lines += 1;
        f(line);
    }

    Ok(lines)
}
