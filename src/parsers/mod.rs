//! Streaming readers for session transcripts (append-only JSONL logs).
//!
//! # Error Handling Strategy
//!
//! Transcripts are written by another program while it runs, so partial and odd
//! lines are expected:
//!
//! - **Missing file**: checked before streaming starts and returned as
//!   [`ParseError::NotFound`](crate::error::ParseError::NotFound), carrying the path.
//!
//! - **Malformed lines**: anything that is not JSON, or not shaped like a record, is
//!   skipped and traced at `trace` level. There is no failure threshold; one corrupt
//!   line never hides the rest of the session.
//!
//! - **I/O failures**: a read error on the underlying handle aborts the call with
//!   [`ParseError::Io`](crate::error::ParseError::Io).

pub mod content;
pub mod deserializers;
pub mod jsonl;
pub mod pending;
pub mod session;
pub mod thread_records;

pub use session::{SessionParser, parse_session_file, parse_session_reader};
pub use thread_records::read_thread_records;
