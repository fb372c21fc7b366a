use anyhow::Result;
use clap::Parser;
use session_atlas::cli::{Cli, execute};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::from_default_env() };
    // stdout carries command output (and JSON), so logs go to stderr
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    execute(cli)
}
