//! Thread reconstruction over parent-pointer references.
//!
//! Transcript records link to each other only through `uuid`/`parentUuid`. The
//! references are untrusted: they may point at records that were filtered out
//! upstream, point at themselves, or loop. Every routine here terminates on such
//! input and degrades to treating the offending record as a root.

pub mod chain;
mod index;
pub mod map;

pub use chain::get_thread_chain;
pub use map::{MAX_INDENT, build_thread_map};
