//! Session Atlas - derive dashboard structures from AI coding-assistant transcripts
//!
//! Coding sessions are stored locally as append-only JSONL logs whose records are
//! linked only implicitly. This library turns them into the shapes a dashboard
//! renders:
//!
//! - [`parse_session_file`] streams a transcript into ordered conversation turns,
//!   with tool invocations folded onto the turn they belong to
//! - [`build_thread_map`] / [`get_thread_chain`] rebuild reply threads from
//!   `uuid`/`parentUuid` pointers, tolerating cycles and dangling references
//! - [`build_project_tree`] groups projects by shared directory prefixes
//! - [`discover_projects`] finds projects and sessions under `~/.claude/projects`
//!
//! # Example
//!
//! ```no_run
//! use session_atlas::{build_project_tree, load_project_summaries, parse_session_file};
//! use std::path::PathBuf;
//!
//! let claude_dir = PathBuf::from("/Users/alice/.claude");
//! let tree = build_project_tree(&load_project_summaries(&claude_dir)?);
//! println!("{} top-level entries", tree.len());
//!
//! let session = parse_session_file(&claude_dir.join("projects/-Users-alice-app/session.jsonl"))?;
//! println!("{} messages, {} tool calls", session.metadata.total_messages, session.metadata.tool_call_count);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod models;
pub mod parsers;
pub mod projects;
pub mod threads;
pub mod utils;

// Re-export commonly used types
pub use error::ParseError;
pub use models::{NormalizedMessage, ParsedSession, ProjectSummary, ProjectTreeNode, ThreadInfo};
pub use parsers::{parse_session_file, read_thread_records};
pub use projects::{
    build_project_tree, collect_group_names, discover_projects, load_project_summaries,
};
pub use threads::{build_thread_map, get_thread_chain};
pub use utils::paths::{decode_path, encode_path, format_path_with_tilde};
