//! Project discovery and the project hierarchy shown in the sidebar.
//!
//! [`build_project_tree`] turns a flat list of [`ProjectSummary`](crate::models::ProjectSummary)
//! values into nested groups using a prefix trie over path segments. It is pure and
//! cheap enough to rerun on every render. [`discover_projects`] produces those
//! summaries from a Claude data directory.

pub mod discovery;
pub mod tree;
mod trie;

pub use discovery::{discover_projects, list_session_files, load_project_summaries, read_session_cwd};
pub use tree::{build_project_tree, collect_group_names};
