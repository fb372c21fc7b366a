use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by the transcript readers.
///
/// Malformed lines never produce an error; they are skipped while streaming.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The transcript file does not exist. Checked before any streaming starts.
    #[error("transcript not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but the underlying handle could not be opened or read.
    #[error("failed to read transcript {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ParseError {
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } => path.as_path(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
