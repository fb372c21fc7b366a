use serde::{Deserialize, Serialize};

/// Anything that can take part in thread reconstruction.
pub trait Threaded {
    fn uuid(&self) -> Option<&str>;
    fn parent_uuid(&self) -> Option<&str>;
}

impl<T: Threaded + ?Sized> Threaded for &T {
    fn uuid(&self) -> Option<&str> {
        (**self).uuid()
    }

    fn parent_uuid(&self) -> Option<&str> {
        (**self).parent_uuid()
    }
}

/// The parent-pointer view of a transcript record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadRecord {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default, alias = "parentUuid")]
    pub parent_uuid: Option<String>,
}

impl ThreadRecord {
    pub fn new(uuid: impl Into<String>, parent_uuid: Option<&str>) -> Self {
        Self { uuid: Some(uuid.into()), parent_uuid: parent_uuid.map(str::to_string) }
    }
}

impl Threaded for ThreadRecord {
    fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    fn parent_uuid(&self) -> Option<&str> {
        self.parent_uuid.as_deref()
    }
}

/// Display metadata for one addressable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadInfo {
    /// Nesting depth, clamped to `threads::MAX_INDENT`.
    pub indent: usize,
    pub is_child: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_uuid: Option<String>,
}
