use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Overrides the location of the Claude data directory.
pub const CLAUDE_DIR_ENV: &str = "CLAUDE_CONFIG_DIR";

/// Get the Claude data directory: `$CLAUDE_CONFIG_DIR`, else `~/.claude`
pub fn get_claude_dir() -> Result<PathBuf> {
    let override_dir = env::var_os(CLAUDE_DIR_ENV).filter(|v| !v.is_empty()).map(PathBuf::from);
    let home = env::var_os("HOME").filter(|v| !v.is_empty()).map(PathBuf::from);
    claude_dir_from(override_dir, home.or_else(dirs::home_dir))
}

/// An explicit `--claude-dir` wins over the environment.
pub fn resolve_claude_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir.to_path_buf()),
        None => get_claude_dir(),
    }
}

fn claude_dir_from(override_dir: Option<PathBuf>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }
    match home {
        Some(home) => Ok(home.join(".claude")),
        None => bail!("Could not determine home directory; set {} or pass --claude-dir", CLAUDE_DIR_ENV),
    }
}
