use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::models::{ProjectInfo, ProjectSummary};
use crate::parsers::deserializers::is_session_id;
use crate::utils::{decode_project_path, validate_path_not_symlink};

/// Maximum number of project directories inspected per scan
const MAX_PROJECTS: usize = 1000;

/// How many leading lines of a transcript to search for a working directory
const CWD_SCAN_LINES: usize = 50;

#[derive(Deserialize)]
struct CwdProbe {
    #[serde(default)]
    cwd: Option<String>,
}

/// Discover every project directory in `<claude_dir>/projects/`.
///
/// Each project's filesystem path is taken from the `cwd` recorded in its
/// transcripts, falling back to decoding the directory name. Session transcripts
/// are the `<session-uuid>.jsonl` files directly inside the directory.
///
/// # Returns
///
/// Projects sorted by directory name. An empty Vec if the projects directory
/// doesn't exist (not an error).
///
/// # Errors
///
/// Returns an error if:
/// - The projects directory exists but cannot be read
///
/// Only the first [`MAX_PROJECTS`] directories by name are inspected; the rest
/// are dropped with a warning. Individual project directories that are symlinks, unreadable, or have neither
/// a recorded `cwd` nor a decodable name are logged as warnings and skipped.
pub fn discover_projects(claude_dir: &Path) -> Result<Vec<ProjectInfo>> {
    let projects_dir = claude_dir.join("projects");

    if !projects_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&projects_dir)
        .with_context(|| format!("Failed to read projects directory: {}", projects_dir.display()))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if let Err(e) = validate_path_not_symlink(&path) {
            tracing::warn!(path = %path.display(), error = %e, "skipping symlinked project directory");
            continue;
        }
        if !path.is_dir() {
            continue;
        }

        let Some(encoded_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        candidates.push((encoded_name, path));
    }

    if candidates.len() > MAX_PROJECTS {
        tracing::warn!(
            found = candidates.len(),
            limit = MAX_PROJECTS,
            dir = %projects_dir.display(),
            "too many project directories, keeping the first by name"
        );
        candidates.sort_by(|a, b| a.0.cmp(&b.0));
        candidates.truncate(MAX_PROJECTS);
    }

    let mut projects: Vec<ProjectInfo> = candidates
        .into_par_iter()
        .filter_map(|(encoded_name, project_dir)| {
            match inspect_project(encoded_name, project_dir) {
                Ok(project) => Some(project),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping project directory");
                    None
                }
            }
        })
        .collect();

    projects.sort_by(|a, b| a.encoded_name.cmp(&b.encoded_name));
    tracing::debug!(count = projects.len(), "discovered projects");
    Ok(projects)
}

/// [`discover_projects`], reduced to the summaries the tree builder consumes.
pub fn load_project_summaries(claude_dir: &Path) -> Result<Vec<ProjectSummary>> {
    Ok(discover_projects(claude_dir)?.iter().map(ProjectInfo::summary).collect())
}

/// Session transcripts directly inside `project_dir`, sorted by file name.
///
/// Only regular files named `<uuid>.jsonl` count; symlinks and sub-agent logs
/// (`agent-*.jsonl`) are ignored.
pub fn list_session_files(project_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(project_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!("Failed to read project directory: {}", project_dir.display())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let is_jsonl = path.extension().is_some_and(|ext| ext == "jsonl");
        let is_session =
            path.file_stem().and_then(|s| s.to_str()).is_some_and(is_session_id);
        if is_jsonl && is_session {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// The working directory recorded near the top of a transcript, if any.
pub fn read_session_cwd(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    BufReader::new(file)
        .lines()
        .take(CWD_SCAN_LINES)
        .map_while(Result::ok)
        .filter_map(|line| serde_json::from_str::<CwdProbe>(&line).ok())
        .find_map(|probe| probe.cwd.filter(|cwd| !cwd.is_empty()))
}

fn inspect_project(encoded_name: String, project_dir: PathBuf) -> Result<ProjectInfo> {
    let session_files = list_session_files(&project_dir)?;

    let project_path = match session_files.iter().find_map(|f| read_session_cwd(f)) {
        Some(cwd) => PathBuf::from(cwd),
        None => decode_project_path(&encoded_name)
            .with_context(|| format!("Invalid project directory name: {}", encoded_name))?,
    };

    Ok(ProjectInfo { encoded_name, project_path, project_dir, session_files })
}
