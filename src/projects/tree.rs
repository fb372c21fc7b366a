use std::cmp::Ordering;

use super::trie::{PathTrie, ROOT};
use crate::models::{NodeType, ProjectSummary, ProjectTreeNode};

/// Arrange projects into a display tree keyed on shared directory prefixes.
///
/// - The common leading directories of all projects are collapsed away; a project
///   sitting on that collapsed prefix is kept as a root-level item.
/// - A directory shared by two or more projects becomes a `group`. Single-child
///   directory chains leading to it are merged into its name (`a/b/c`).
/// - A project whose directory contains other projects is emitted alongside them,
///   not above them: sub-projects are flattened to the project's own depth.
/// - Projects with an empty path are root-level items.
///
/// Every input appears exactly once as a `project` node. Each level is ordered with
/// groups first, then by display name.
pub fn build_project_tree(projects: &[ProjectSummary]) -> Vec<ProjectTreeNode> {
    let mut roots = Vec::new();
    let mut trie = PathTrie::new();

    for project in projects {
        if !trie.insert(project) {
            roots.push(project_node(project, 0));
        }
    }

    let mut current = ROOT;
    while let Some(child) = trie.only_child(current) {
        roots.extend(trie.node(current).projects.iter().map(|p| project_node(p, 0)));
        current = child;
    }

    let branch = trie.node(current);
    roots.extend(branch.projects.iter().map(|p| project_node(p, 0)));
    for &child in branch.children.values() {
        roots.extend(emit(&trie, child, 0));
    }

    sort_nodes(&mut roots);
    roots
}

/// Names of every group in the tree, in pre-order. Used to expand all groups at once.
pub fn collect_group_names(nodes: &[ProjectTreeNode]) -> Vec<String> {
    let mut names = Vec::new();
    let mut stack: Vec<&ProjectTreeNode> = nodes.iter().rev().collect();

    while let Some(node) = stack.pop() {
        if node.is_group() {
            names.push(node.name.clone());
        }
        stack.extend(node.children().iter().rev());
    }
    names
}

fn emit(trie: &PathTrie<'_>, id: usize, depth: usize) -> Vec<ProjectTreeNode> {
    let mut chain = vec![trie.node(id).segment];
    let mut current = id;
    while trie.node(current).projects.is_empty() {
        let Some(child) = trie.only_child(current) else {
            break;
        };
        chain.push(trie.node(child).segment);
        current = child;
    }

    let node = trie.node(current);
    if !node.projects.is_empty() {
        let mut nodes: Vec<ProjectTreeNode> =
            node.projects.iter().map(|p| project_node(p, depth)).collect();
        nodes.extend(trie.descendant_projects(current).into_iter().map(|p| project_node(p, depth)));
        return nodes;
    }
    if node.children.is_empty() {
        return Vec::new();
    }

    let mut children: Vec<ProjectTreeNode> =
        node.children.values().flat_map(|&child| emit(trie, child, depth + 1)).collect();
    sort_nodes(&mut children);

    let name = chain.join("/");
    vec![ProjectTreeNode {
        node_type: NodeType::Group,
        display_name: name.clone(),
        name,
        path: Some(node.prefix.to_string()),
        session_count: children.iter().map(|c| c.session_count).sum(),
        depth,
        children: Some(children),
    }]
}

fn project_node(project: &ProjectSummary, depth: usize) -> ProjectTreeNode {
    ProjectTreeNode {
        node_type: NodeType::Project,
        name: project.name.clone(),
        display_name: project.display_name.clone(),
        path: (!project.path.is_empty()).then(|| project.path.clone()),
        session_count: project.session_count,
        depth,
        children: None,
    }
}

fn sort_nodes(nodes: &mut [ProjectTreeNode]) {
    nodes.sort_by(compare_nodes);
}

fn compare_nodes(a: &ProjectTreeNode, b: &ProjectTreeNode) -> Ordering {
    a.node_type
        .cmp(&b.node_type)
        .then_with(|| a.display_name.to_lowercase().cmp(&b.display_name.to_lowercase()))
        .then_with(|| a.display_name.cmp(&b.display_name))
        .then_with(|| a.name.cmp(&b.name))
}
