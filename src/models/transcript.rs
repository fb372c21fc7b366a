use serde::Deserialize;

/// One line of a transcript file.
///
/// Only the fields the parser needs are modelled; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<RawMessage>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_timestamp"
    )]
    pub timestamp: Option<String>,
    #[serde(rename = "isMeta", default)]
    pub is_meta: Option<bool>,
}

impl RawRecord {
    pub fn record_kind(&self) -> RecordKind {
        match self.kind.as_deref() {
            Some("user") => RecordKind::User,
            Some("assistant") => RecordKind::Assistant,
            _ => RecordKind::Other,
        }
    }

    pub fn is_meta(&self) -> bool {
        self.is_meta.unwrap_or(false)
    }

    pub fn content(&self) -> Option<&RawContent> {
        self.message.as_ref().and_then(|m| m.content.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Assistant,
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub content: Option<RawContent>,
}

/// Message payload: either a bare string or an ordered list of typed blocks.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default)]
    pub block_type: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl ContentBlock {
    pub const TEXT: &'static str = "text";
    pub const TOOL_USE: &'static str = "tool_use";

    pub fn as_text(&self) -> Option<&str> {
        if self.block_type == Self::TEXT { self.text.as_deref() } else { None }
    }

    pub fn as_tool_use(&self) -> Option<&str> {
        if self.block_type == Self::TOOL_USE { self.name.as_deref() } else { None }
    }
}
