//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use session_atlas::encode_path;
use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a project for `project_path` containing the given session transcripts.
    ///
    /// The directory name is the percent-encoded project path.
    pub fn with_project(self, project_path: &str, sessions: &[TranscriptBuilder]) -> Self {
        let project_dir =
            self.temp_dir.path().join("projects").join(encode_path(Path::new(project_path)));
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for session in sessions {
            session.create_in(&project_dir);
        }

        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a session transcript (.jsonl)
pub struct TranscriptBuilder {
    session_id: String,
    lines: Vec<String>,
}

impl TranscriptBuilder {
    /// Create a transcript for the given session id (a UUID)
    pub fn new(session_id: &str) -> Self {
        Self { session_id: session_id.to_string(), lines: Vec::new() }
    }

    /// Append a record
    pub fn record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Append a raw line verbatim (for malformed input)
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn file_name(&self) -> String {
        format!("{}.jsonl", self.session_id)
    }

    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Write the transcript into `dir`, returning its path
    pub fn create_in(&self, dir: &Path) -> PathBuf {
        let path = dir.join(self.file_name());
        let mut file = fs::File::create(&path).expect("Failed to create transcript");
        file.write_all(self.content().as_bytes()).expect("Failed to write transcript");
        path
    }
}

/// Builder for transcript records
pub struct RecordBuilder {
    kind: String,
    blocks: Vec<String>,
    string_content: Option<String>,
    uuid: Option<String>,
    parent_uuid: Option<String>,
    timestamp: Option<String>,
    cwd: Option<String>,
    is_meta: bool,
}

impl RecordBuilder {
    fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            blocks: Vec::new(),
            string_content: None,
            uuid: None,
            parent_uuid: None,
            timestamp: None,
            cwd: None,
            is_meta: false,
        }
    }

    /// A user record with plain string content
    pub fn user(text: &str) -> Self {
        let mut record = Self::new("user");
        record.string_content = Some(text.to_string());
        record
    }

    /// An assistant record with no blocks yet
    pub fn assistant() -> Self {
        Self::new("assistant")
    }

    /// A non-conversation record (summary, system, ...)
    pub fn other(kind: &str) -> Self {
        Self::new(kind)
    }

    /// Add a text block
    pub fn text(mut self, text: &str) -> Self {
        self.blocks.push(format!(r#"{{"type":"text","text":{}}}"#, json_string(text)));
        self
    }

    /// Add a tool_use block
    pub fn tool_use(mut self, name: &str) -> Self {
        let id = format!("toolu_{}", self.blocks.len());
        self.blocks.push(format!(
            r#"{{"type":"tool_use","id":"{}","name":{},"input":{{}}}}"#,
            id,
            json_string(name)
        ));
        self
    }

    /// Add a tool_result block
    pub fn tool_result(mut self, output: &str) -> Self {
        self.blocks.push(format!(
            r#"{{"type":"tool_result","tool_use_id":"toolu_0","content":{}}}"#,
            json_string(output)
        ));
        self
    }

    pub fn uuid(mut self, uuid: &str) -> Self {
        self.uuid = Some(uuid.to_string());
        self
    }

    pub fn parent(mut self, parent_uuid: &str) -> Self {
        self.parent_uuid = Some(parent_uuid.to_string());
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = Some(cwd.to_string());
        self
    }

    pub fn meta(mut self) -> Self {
        self.is_meta = true;
        self
    }

    /// Convert to a single JSON line
    pub fn to_json(&self) -> String {
        let content = match &self.string_content {
            Some(text) if self.blocks.is_empty() => json_string(text),
            _ => format!("[{}]", self.blocks.join(",")),
        };

        let mut fields = vec![format!(r#""type":{}"#, json_string(&self.kind))];
        fields.push(format!(
            r#""message":{{"role":{},"content":{}}}"#,
            json_string(&self.kind),
            content
        ));
        if let Some(uuid) = &self.uuid {
            fields.push(format!(r#""uuid":{}"#, json_string(uuid)));
        }
        match &self.parent_uuid {
            Some(parent) => fields.push(format!(r#""parentUuid":{}"#, json_string(parent))),
            None => fields.push(r#""parentUuid":null"#.to_string()),
        }
        if let Some(ts) = &self.timestamp {
            fields.push(format!(r#""timestamp":{}"#, json_string(ts)));
        }
        if let Some(cwd) = &self.cwd {
            fields.push(format!(r#""cwd":{}"#, json_string(cwd)));
        }
        if self.is_meta {
            fields.push(r#""isMeta":true"#.to_string());
        }

        format!("{{{}}}", fields.join(","))
    }
}

fn json_string(s: &str) -> String {
    serde_json::to_string(s).expect("strings always serialize")
}

/// A realistic .claude directory: three projects under one workspace, two of them
/// in a shared `@org` directory.
pub fn realistic_claude_dir() -> TempDir {
    ClaudeDirBuilder::new()
        .with_project(
            "/Users/test/code/@org/api",
            &[
                TranscriptBuilder::new("550e8400-e29b-41d4-a716-446655440000")
                    .record(RecordBuilder::user("Add a health endpoint").cwd("/Users/test/code/@org/api"))
                    .record(RecordBuilder::assistant().text("Adding it now.").tool_use("Edit")),
                TranscriptBuilder::new("550e8400-e29b-41d4-a716-446655440001")
                    .record(RecordBuilder::user("Run the tests")),
            ],
        )
        .with_project(
            "/Users/test/code/@org/web",
            &[TranscriptBuilder::new("550e8400-e29b-41d4-a716-446655440002")
                .record(RecordBuilder::user("Fix the navbar"))],
        )
        .with_project(
            "/Users/test/code/scratch",
            &[TranscriptBuilder::new("550e8400-e29b-41d4-a716-446655440003")
                .record(RecordBuilder::user("hello"))],
        )
        .build()
}
