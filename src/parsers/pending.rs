use crate::models::ToolCall;

/// Tool calls seen since the last attachment point.
///
/// Flushes happen at exactly three places: a user turn being appended, an
/// assistant turn with text being appended, and the end of the stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PendingToolCalls {
    #[default]
    Idle,
    Pending(Vec<String>),
}

impl PendingToolCalls {
    pub fn push(&mut self, name: String) {
        match self {
            Self::Idle => *self = Self::Pending(vec![name]),
            Self::Pending(names) => names.push(name),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Aggregate and drain the accumulator, leaving it `Idle`.
    pub fn take(&mut self) -> Option<Vec<ToolCall>> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Pending(names) => Some(aggregate_tool_calls(names)),
        }
    }
}

/// Collapse raw names into `{name, count}` entries, in first-seen order.
pub fn aggregate_tool_calls<I>(names: I) -> Vec<ToolCall>
where
    I: IntoIterator<Item = String>,
{
    let mut calls: Vec<ToolCall> = Vec::new();
    for name in names {
        match calls.iter_mut().find(|c| c.name == name) {
            Some(call) => call.count += 1,
            None => calls.push(ToolCall { name, count: 1 }),
        }
    }
    calls
}

/// Fold `incoming` into `existing`, adding counts for names already present.
pub fn merge_tool_calls(existing: &mut Vec<ToolCall>, incoming: Vec<ToolCall>) {
    for call in incoming {
        match existing.iter_mut().find(|c| c.name == call.name) {
            Some(found) => found.count += call.count,
            None => existing.push(call),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, count: usize) -> ToolCall {
        ToolCall { name: name.to_string(), count }
    }

    #[test]
    fn test_idle_take_is_none() {
        let mut pending = PendingToolCalls::Idle;
        assert!(!pending.is_pending());
        assert_eq!(pending.take(), None);
    }

    #[test]
    fn test_take_aggregates_and_resets() {
        let mut pending = PendingToolCalls::default();
        for name in ["Read", "Edit", "Read", "Read"] {
            pending.push(name.to_string());
        }
        assert!(pending.is_pending());

        assert_eq!(pending.take(), Some(vec![call("Read", 3), call("Edit", 1)]));
        assert_eq!(pending, PendingToolCalls::Idle);
    }

    #[test]
    fn test_merge_tool_calls() {
        let mut existing = vec![call("Read", 1), call("Bash", 2)];
        merge_tool_calls(&mut existing, vec![call("Bash", 1), call("Write", 1)]);
        assert_eq!(existing, vec![call("Read", 1), call("Bash", 3), call("Write", 1)]);
    }
}
