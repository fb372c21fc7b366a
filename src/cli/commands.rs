use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::cli::render;
use crate::parsers::{parse_session_file, read_thread_records};
use crate::projects::{build_project_tree, collect_group_names, load_project_summaries};
use crate::threads::{build_thread_map, get_thread_chain};
use crate::utils::{format_path_with_tilde, resolve_claude_dir};

#[derive(Parser)]
#[command(name = "session-atlas")]
#[command(version)]
#[command(about = "Summarize local AI coding-assistant session transcripts", long_about = None)]
pub struct Cli {
    /// Claude data directory (defaults to $CLAUDE_CONFIG_DIR, then ~/.claude)
    #[arg(long, global = true, value_name = "DIR")]
    pub claude_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show discovered projects as a tree grouped by shared directories
    Projects {
        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the conversation turns of one session transcript
    Session {
        /// Path to a session .jsonl file
        file: PathBuf,
        /// Print messages and metadata as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the reply structure of one session transcript
    Threads {
        /// Path to a session .jsonl file
        file: PathBuf,
        /// Only print the thread containing this message
        #[arg(long)]
        uuid: Option<String>,
        /// Print the thread map (or chain) as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show project and session counts
    Stats,
}

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Projects { json }) => show_projects(cli.claude_dir.as_deref(), json),
        Some(Commands::Session { file, json }) => show_session(&file, json),
        Some(Commands::Threads { file, uuid, json }) => show_threads(&file, uuid.as_deref(), json),
        Some(Commands::Stats) => show_stats(cli.claude_dir.as_deref()),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn show_projects(claude_dir: Option<&Path>, json: bool) -> Result<()> {
    let claude_dir = resolve_claude_dir(claude_dir)?;
    let summaries = load_project_summaries(&claude_dir)?;
    let tree = build_project_tree(&summaries);

    if json {
        return print_json(&tree);
    }
    if tree.is_empty() {
        println!("No projects found in {}", format_path_with_tilde(&claude_dir));
        return Ok(());
    }
    print!("{}", render::project_tree(&tree));
    Ok(())
}

fn show_session(file: &Path, json: bool) -> Result<()> {
    let session = parse_session_file(file)?;

    if json {
        return print_json(&session);
    }
    print!("{}", render::session(&session));
    Ok(())
}

fn show_threads(file: &Path, uuid: Option<&str>, json: bool) -> Result<()> {
    let records = read_thread_records(file)?;

    if let Some(uuid) = uuid {
        let mut chain: Vec<String> = get_thread_chain(uuid, &records).into_iter().collect();
        chain.sort();
        if json {
            return print_json(&chain);
        }
        for id in chain {
            println!("{}", id);
        }
        return Ok(());
    }

    let map = build_thread_map(&records);
    if json {
        return print_json(&map);
    }
    print!("{}", render::threads(&records, &map));
    Ok(())
}

fn show_stats(claude_dir: Option<&Path>) -> Result<()> {
    let claude_dir = resolve_claude_dir(claude_dir)?;
    let summaries = load_project_summaries(&claude_dir)?;
    let tree = build_project_tree(&summaries);

    let sessions: usize = summaries.iter().map(|p| p.session_count).sum();

    println!("Session Statistics");
    println!("==================");
    println!("Projects: {}", summaries.len());
    println!("  Groups: {}", collect_group_names(&tree).len());
    println!("Sessions: {}", sessions);
    println!();
    println!("Claude directory: {}", format_path_with_tilde(&claude_dir));

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}
