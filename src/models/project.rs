use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A project as the dashboard's data layer reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    /// Unique key.
    pub name: String,
    pub display_name: String,
    /// Filesystem path; may be empty.
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub session_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    // Declaration order is the display order: groups first.
    Group,
    Project,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTreeNode {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub session_count: usize,
    pub depth: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ProjectTreeNode>>,
}

impl ProjectTreeNode {
    pub fn is_group(&self) -> bool {
        self.node_type == NodeType::Group
    }

    pub fn children(&self) -> &[ProjectTreeNode] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// A project directory under `<claude_dir>/projects`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub encoded_name: String,
    pub project_path: PathBuf,
    pub project_dir: PathBuf,
    pub session_files: Vec<PathBuf>,
}

impl ProjectInfo {
    pub fn summary(&self) -> ProjectSummary {
        let display_name = self
            .project_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.encoded_name.clone());

        ProjectSummary {
            name: self.encoded_name.clone(),
            display_name,
            path: self.project_path.to_string_lossy().into_owned(),
            session_count: self.session_files.len(),
        }
    }
}
