use std::path::Path;

use crate::error::ParseError;
use crate::models::ThreadRecord;
use crate::parsers::jsonl::{for_each_line, open_transcript};

/// Read the `uuid`/`parentUuid` pair of every parseable line in a transcript, in
/// file order. Lines that are not JSON objects are skipped.
///
/// # Errors
///
/// Same as [`parse_session_file`](crate::parsers::parse_session_file): a missing
/// file fails up front, read failures carry the path.
pub fn read_thread_records(path: &Path) -> Result<Vec<ThreadRecord>, ParseError> {
    let reader = open_transcript(path)?;
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for_each_line(reader, |line| match serde_json::from_slice::<ThreadRecord>(line) {
        Ok(record) => records.push(record),
        Err(e) => {
            skipped += 1;
            tracing::trace!(error = %e, "skipping malformed transcript line");
        }
    })
    .map_err(|source| ParseError::Io { path: path.to_path_buf(), source })?;

    tracing::debug!(path = %path.display(), records = records.len(), skipped, "read thread records");
    Ok(records)
}
