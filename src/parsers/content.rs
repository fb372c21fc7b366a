use std::sync::LazyLock;

use regex::Regex;

use crate::models::RawContent;

static COMMAND_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<(?:command-[\w-]+|local-command-stdout)>.*?</(?:command-[\w-]+|local-command-stdout)>",
    )
    .expect("command tag pattern is valid")
});

/// Remove slash-command markup the CLI injects into plain-string user turns.
pub fn strip_command_tags(text: &str) -> String {
    COMMAND_TAG_RE.replace_all(text, "").into_owned()
}

/// Text of every `text` block, newline-joined. Other block types are ignored.
pub fn join_text_blocks(content: &RawContent) -> String {
    match content {
        RawContent::Text(text) => text.clone(),
        RawContent::Blocks(blocks) => {
            let parts: Vec<&str> = blocks.iter().filter_map(|b| b.as_text()).collect();
            parts.join("\n")
        }
    }
}

/// Display text of a user turn.
///
/// String payloads have command tags stripped; block payloads keep only `text`
/// blocks, so turns made purely of tool results come back empty.
pub fn extract_user_text(content: &RawContent) -> String {
    match content {
        RawContent::Text(text) => strip_command_tags(text).trim().to_string(),
        RawContent::Blocks(_) => join_text_blocks(content).trim().to_string(),
    }
}

/// Display text and tool-use names of an assistant turn, in block order.
pub fn extract_assistant_parts(content: &RawContent) -> (String, Vec<String>) {
    match content {
        RawContent::Text(text) => (text.trim().to_string(), Vec::new()),
        RawContent::Blocks(blocks) => {
            let tools = blocks.iter().filter_map(|b| b.as_tool_use()).map(str::to_string).collect();
            (join_text_blocks(content).trim().to_string(), tools)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentBlock;

    fn block(block_type: &str, text: Option<&str>, name: Option<&str>) -> ContentBlock {
        ContentBlock {
            block_type: block_type.to_string(),
            text: text.map(str::to_string),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_strip_command_tags() {
        let raw = "<command-name>/review</command-name>\n<command-message>review</command-message>\n<command-args>src/lib.rs</command-args>";
        assert_eq!(strip_command_tags(raw).trim(), "");

        let mixed = "<command-name>/clear</command-name>please fix the build";
        assert_eq!(strip_command_tags(mixed), "please fix the build");
    }

    #[test]
    fn test_strip_command_tags_spans_lines() {
        let raw = "before<local-command-stdout>line 1\nline 2</local-command-stdout>after";
        assert_eq!(strip_command_tags(raw), "beforeafter");
    }

    #[test]
    fn test_strip_leaves_unrelated_markup() {
        let raw = "compare <div>a</div> with <b>b</b>";
        assert_eq!(strip_command_tags(raw), raw);
    }

    #[test]
    fn test_extract_user_text_from_blocks() {
        let content = RawContent::Blocks(vec![
            block("text", Some("first"), None),
            block("tool_result", None, None),
            block("text", Some("second"), None),
        ]);
        assert_eq!(extract_user_text(&content), "first\nsecond");
    }

    #[test]
    fn test_extract_user_text_tool_results_only() {
        let content = RawContent::Blocks(vec![block("tool_result", None, None)]);
        assert_eq!(extract_user_text(&content), "");
    }

    #[test]
    fn test_extract_assistant_parts() {
        let content = RawContent::Blocks(vec![
            block("thinking", None, None),
            block("text", Some("Looking now."), None),
            block("tool_use", None, Some("Read")),
            block("tool_use", None, Some("Grep")),
        ]);

        let (text, tools) = extract_assistant_parts(&content);
        assert_eq!(text, "Looking now.");
        assert_eq!(tools, vec!["Read", "Grep"]);
    }

    #[test]
    fn test_extract_assistant_string_content() {
        let (text, tools) = extract_assistant_parts(&RawContent::Text("  plain  ".to_string()));
        assert_eq!(text, "plain");
        assert!(tools.is_empty());
    }
}
