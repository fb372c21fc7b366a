use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use crate::models::{ParsedSession, ProjectTreeNode, Role, ThreadInfo, ThreadRecord};

const PREVIEW_CHARS: usize = 100;

pub(crate) fn project_tree(nodes: &[ProjectTreeNode]) -> String {
    let mut out = String::new();
    let mut stack: Vec<&ProjectTreeNode> = nodes.iter().rev().collect();

    while let Some(node) = stack.pop() {
        let pad = "  ".repeat(node.depth);
        if node.is_group() {
            let _ = writeln!(out, "{}{}/ ({} sessions)", pad, node.display_name, node.session_count);
        } else {
            let path = node.path.as_deref().unwrap_or("-");
            let _ = writeln!(
                out,
                "{}{} ({} sessions)  {}",
                pad, node.display_name, node.session_count, path
            );
        }
        stack.extend(node.children().iter().rev());
    }
    out
}

pub(crate) fn session(session: &ParsedSession) -> String {
    let mut out = String::new();

    for message in &session.messages {
        let role = match message.role {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        let stamp = message.timestamp.as_deref().map(|t| format!(" {}", t)).unwrap_or_default();
        let _ = writeln!(out, "[{}]{} {}", role, stamp, preview(&message.content));

        if let Some(calls) = &message.tool_calls {
            let tools: Vec<String> =
                calls.iter().map(|c| format!("{} x{}", c.name, c.count)).collect();
            let _ = writeln!(out, "    tools: {}", tools.join(", "));
        }
    }

    let meta = &session.metadata;
    let _ = writeln!(out);
    let _ = writeln!(out, "Messages: {}", meta.total_messages);
    let _ = writeln!(out, "Tool calls: {}", meta.tool_call_count);
    if let Some(duration) = meta.duration() {
        let _ = writeln!(out, "Duration: {}m", duration.num_minutes());
    }
    out
}

pub(crate) fn threads(records: &[ThreadRecord], map: &HashMap<String, ThreadInfo>) -> String {
    let mut out = String::new();
    let mut printed = HashSet::new();

    for uuid in records.iter().filter_map(|r| r.uuid.as_deref()) {
        let Some(info) = map.get(uuid) else {
            continue;
        };
        if !printed.insert(uuid) {
            continue;
        }
        let marker = if info.is_child { "└ " } else { "" };
        let _ = writeln!(out, "{}{}{}", "  ".repeat(info.indent), marker, uuid);
    }
    out
}

fn preview(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    let mut preview: String = first_line.chars().take(PREVIEW_CHARS).collect();
    if first_line.chars().count() > PREVIEW_CHARS || text.lines().nth(1).is_some() {
        preview.push('…');
    }
    preview
}
