use std::collections::{HashMap, HashSet};

use super::index::ParentIndex;
use crate::models::{ThreadInfo, Threaded};

/// Deepest indent a message is rendered at, however long its ancestry.
pub const MAX_INDENT: usize = 5;

/// Compute nesting metadata for every message that has a uuid.
///
/// A message is a root (`indent == 0`, `is_child == false`) when it has no parent,
/// points at itself, points at a uuid absent from `messages`, or sits on a walk
/// that revisits a node (a cycle, or a chain running into one). Otherwise its
/// indent is one more than its parent's, clamped to [`MAX_INDENT`].
///
/// Both passes are iterative, so adversarially long chains cannot overflow the stack.
pub fn build_thread_map<T: Threaded>(messages: &[T]) -> HashMap<String, ThreadInfo> {
    let index = ParentIndex::new(messages);
    let cyclic = find_cycle_members(&index);
    let indents = compute_indents(&index, &cyclic);

    index
        .uuids()
        .map(|uuid| {
            let indent = indents.get(uuid).copied().unwrap_or(0);
            let has_parent = index.parent_of(uuid).is_some() && !cyclic.contains(uuid);
            let info = ThreadInfo {
                indent,
                is_child: has_parent && indent > 0,
                parent_uuid: index.declared_parent(uuid).map(str::to_string),
            };
            (uuid.to_string(), info)
        })
        .collect()
}

/// Pass 1: walk every parent chain, marking each node of a walk that revisits a node.
fn find_cycle_members<'a>(index: &ParentIndex<'a>) -> HashSet<&'a str> {
    let mut cyclic: HashSet<&str> = HashSet::new();
    let mut acyclic: HashSet<&str> = HashSet::new();

    for start in index.uuids() {
        if cyclic.contains(start) || acyclic.contains(start) {
            continue;
        }

        let mut walk = Vec::new();
        let mut on_walk = HashSet::new();
        let mut current = Some(start);
        let mut revisited = false;

        while let Some(node) = current {
            if acyclic.contains(node) {
                break;
            }
            // Reaching a known cycle member means this walk would revisit too.
            if cyclic.contains(node) || !on_walk.insert(node) {
                revisited = true;
                break;
            }
            walk.push(node);
            current = index.parent_of(node);
        }

        if revisited {
            cyclic.extend(walk);
        } else {
            acyclic.extend(walk);
        }
    }

    cyclic
}

/// Pass 2: memoized indent per uuid, climbing to the nearest known node then unwinding.
fn compute_indents<'a>(
    index: &ParentIndex<'a>,
    cyclic: &HashSet<&'a str>,
) -> HashMap<&'a str, usize> {
    let mut indents: HashMap<&str, usize> = HashMap::new();

    for start in index.uuids() {
        if indents.contains_key(start) {
            continue;
        }

        let mut pending = Vec::new();
        let mut current = start;
        let mut indent = loop {
            if let Some(&known) = indents.get(current) {
                break known;
            }
            let parent = if cyclic.contains(current) { None } else { index.parent_of(current) };
            match parent {
                Some(parent) => {
                    pending.push(current);
                    current = parent;
                }
                None => {
                    indents.insert(current, 0);
                    break 0;
                }
            }
        };

        while let Some(node) = pending.pop() {
            indent = (indent + 1).min(MAX_INDENT);
            indents.insert(node, indent);
        }
    }

    indents
}
