use std::collections::BTreeMap;

use crate::models::ProjectSummary;

pub(crate) const ROOT: usize = 0;

/// Prefix trie over `/`-separated path segments. Nodes live in one arena and refer
/// to each other by index.
#[derive(Debug)]
pub(crate) struct PathTrie<'a> {
    nodes: Vec<TrieNode<'a>>,
}

#[derive(Debug, Default)]
pub(crate) struct TrieNode<'a> {
    pub(crate) segment: &'a str,
    /// The path up to and including this segment, as first spelled by an input.
    pub(crate) prefix: &'a str,
    pub(crate) children: BTreeMap<&'a str, usize>,
    /// Projects whose path ends exactly here. More than one only for duplicate paths.
    pub(crate) projects: Vec<&'a ProjectSummary>,
}

impl<'a> PathTrie<'a> {
    pub(crate) fn new() -> Self {
        Self { nodes: vec![TrieNode::default()] }
    }

    /// Insert a project under its path. Returns `false` when the path has no
    /// segments (empty, or only slashes) and nothing was inserted.
    pub(crate) fn insert(&mut self, project: &'a ProjectSummary) -> bool {
        let mut current = ROOT;
        let mut inserted_any = false;

        for (segment, prefix) in segments(&project.path) {
            current = match self.nodes[current].children.get(segment) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode { segment, prefix, ..TrieNode::default() });
                    self.nodes[current].children.insert(segment, child);
                    child
                }
            };
            inserted_any = true;
        }

        if inserted_any {
            self.nodes[current].projects.push(project);
        }
        inserted_any
    }

    pub(crate) fn node(&self, id: usize) -> &TrieNode<'a> {
        &self.nodes[id]
    }

    pub(crate) fn only_child(&self, id: usize) -> Option<usize> {
        let children = &self.nodes[id].children;
        if children.len() == 1 { children.values().next().copied() } else { None }
    }

    /// Projects strictly below `id`, in segment order.
    pub(crate) fn descendant_projects(&self, id: usize) -> Vec<&'a ProjectSummary> {
        let mut found = Vec::new();
        let mut stack: Vec<usize> = self.nodes[id].children.values().rev().copied().collect();

        while let Some(current) = stack.pop() {
            let node = &self.nodes[current];
            found.extend(node.projects.iter().copied());
            stack.extend(node.children.values().rev().copied());
        }
        found
    }
}

/// Non-empty segments of `path`, each paired with the path prefix ending at it.
fn segments(path: &str) -> impl Iterator<Item = (&str, &str)> {
    let mut offset = 0;
    path.split('/').filter_map(move |part| {
        let end = offset + part.len();
        offset = end + 1;
        (!part.is_empty()).then(|| (part, &path[..end]))
    })
}
