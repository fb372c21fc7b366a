//! Command-line front end over the library.
//!
//! Text output is meant for people; `--json` emits the same camelCase shapes the
//! dashboard consumes.

pub mod commands;
mod render;

pub use commands::{Cli, Commands, execute};
