use std::collections::BTreeMap;
use std::io::{self, BufRead};
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::ParseError;
use crate::models::{
    NormalizedMessage, ParsedSession, RawRecord, RecordKind, Role, SessionMetadata, ToolCall,
};
use crate::parsers::content::{extract_assistant_parts, extract_user_text};
use crate::parsers::deserializers::parse_timestamp;
use crate::parsers::jsonl::{for_each_line, open_transcript};
use crate::parsers::pending::{PendingToolCalls, merge_tool_calls};

/// Parse a session transcript into display turns plus summary counts.
///
/// The file is streamed line by line and never loaded whole. Lines that are not
/// JSON, or not shaped like a transcript record, are skipped.
///
/// # Errors
///
/// - [`ParseError::NotFound`] if `path` does not exist (checked before streaming)
/// - [`ParseError::Io`] if the file cannot be opened or a read fails mid-stream
pub fn parse_session_file(path: &Path) -> Result<ParsedSession, ParseError> {
    let reader = open_transcript(path)?;
    let session = parse_session_reader(reader)
        .map_err(|source| ParseError::Io { path: path.to_path_buf(), source })?;

    tracing::debug!(
        path = %path.display(),
        messages = session.metadata.total_messages,
        tool_calls = session.metadata.tool_call_count,
        "parsed session transcript"
    );
    Ok(session)
}

/// Same as [`parse_session_file`], over any line stream.
pub fn parse_session_reader<R: BufRead>(reader: R) -> io::Result<ParsedSession> {
    let mut parser = SessionParser::new();
    for_each_line(reader, |line| parser.feed_line(line))?;
    Ok(parser.finish())
}

/// Incremental transcript parser. Feed lines in file order, then call [`finish`].
///
/// [`finish`]: SessionParser::finish
#[derive(Debug, Default)]
pub struct SessionParser {
    messages: Vec<NormalizedMessage>,
    pending: PendingToolCalls,
    tool_usage: BTreeMap<String, usize>,
    first_timestamp: Option<DateTime<Utc>>,
    last_timestamp: Option<DateTime<Utc>>,
    skipped_lines: usize,
}

impl SessionParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed_line(&mut self, line: &[u8]) {
        match serde_json::from_slice::<RawRecord>(line) {
            Ok(record) => self.feed_record(record),
            Err(e) => {
                self.skipped_lines += 1;
                tracing::trace!(error = %e, "skipping malformed transcript line");
            }
        }
    }

    pub fn feed_record(&mut self, record: RawRecord) {
        if record.is_meta() {
            return;
        }
        match record.record_kind() {
            RecordKind::User => {
                self.observe_timestamp(&record);
                self.on_user(record);
            }
            RecordKind::Assistant => {
                self.observe_timestamp(&record);
                self.on_assistant(record);
            }
            RecordKind::Other => {}
        }
    }

    /// Number of lines dropped so far because they failed to deserialize.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    pub fn finish(mut self) -> ParsedSession {
        if let Some(last) = self.messages.last_mut()
            && last.is_assistant()
            && last.tool_calls.is_none()
        {
            last.tool_calls = self.pending.take();
        }

        if self.skipped_lines > 0 {
            tracing::debug!(skipped = self.skipped_lines, "skipped malformed transcript lines");
        }

        let metadata = SessionMetadata {
            total_messages: self.messages.len(),
            tool_call_count: self.tool_usage.values().sum(),
            tool_usage: self.tool_usage,
            first_timestamp: self.first_timestamp,
            last_timestamp: self.last_timestamp,
        };
        ParsedSession { messages: self.messages, metadata }
    }

    fn on_user(&mut self, record: RawRecord) {
        let Some(content) = record.content() else {
            return;
        };
        let text = extract_user_text(content);
        if text.is_empty() {
            return;
        }

        self.flush_into_last_assistant();
        self.messages.push(NormalizedMessage {
            role: Role::User,
            content: text,
            timestamp: record.timestamp,
            tool_calls: None,
        });
    }

    fn on_assistant(&mut self, record: RawRecord) {
        let (text, tools) = record.content().map(extract_assistant_parts).unwrap_or_default();

        for name in tools {
            *self.tool_usage.entry(name.clone()).or_default() += 1;
            self.pending.push(name);
        }

        if text.is_empty() {
            return;
        }
        self.messages.push(NormalizedMessage {
            role: Role::Assistant,
            content: text,
            timestamp: record.timestamp,
            tool_calls: self.pending.take(),
        });
    }

    /// Turn boundary: hand pending calls to the most recent assistant message,
    /// even when user turns sit between it and the tool-only records. With no
    /// assistant message yet they stay pending.
    fn flush_into_last_assistant(&mut self) {
        if !self.pending.is_pending() {
            return;
        }
        let Some(target) = self.messages.iter_mut().rev().find(|m| m.is_assistant()) else {
            return;
        };
        if let Some(calls) = self.pending.take() {
            attach_tool_calls(target, calls);
        }
    }

    fn observe_timestamp(&mut self, record: &RawRecord) {
        let Some(ts) = record.timestamp.as_deref().and_then(parse_timestamp) else {
            return;
        };
        self.first_timestamp = Some(self.first_timestamp.map_or(ts, |first| first.min(ts)));
        self.last_timestamp = Some(self.last_timestamp.map_or(ts, |last| last.max(ts)));
    }
}

fn attach_tool_calls(message: &mut NormalizedMessage, calls: Vec<ToolCall>) {
    match &mut message.tool_calls {
        Some(existing) => merge_tool_calls(existing, calls),
        None => message.tool_calls = Some(calls),
    }
}
