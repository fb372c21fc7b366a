//! Data models for session transcripts and the structures derived from them.
//!
//! - [`RawRecord`] - one line of a transcript file, as written by the assistant
//! - [`NormalizedMessage`] / [`ParsedSession`] - the parser's output
//! - [`ThreadRecord`] / [`ThreadInfo`] - input and output of thread reconstruction
//! - [`ProjectSummary`] / [`ProjectTreeNode`] - input and output of the project tree builder
//! - [`ProjectInfo`] - a project directory found on disk
//!
//! Raw records are deserialized leniently (custom deserializers live in
//! `parsers::deserializers`); output types serialize as camelCase JSON.

pub mod message;
pub mod project;
pub mod thread;
pub mod transcript;

pub use message::{NormalizedMessage, ParsedSession, Role, SessionMetadata, ToolCall};
pub use project::{NodeType, ProjectInfo, ProjectSummary, ProjectTreeNode};
pub use thread::{ThreadInfo, ThreadRecord, Threaded};
pub use transcript::{ContentBlock, RawContent, RawMessage, RawRecord, RecordKind};
