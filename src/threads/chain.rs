use std::collections::{HashMap, HashSet, VecDeque};

use super::index::ParentIndex;
use crate::models::Threaded;

/// Every uuid on the same thread as `uuid`: its ancestors, its descendants and itself.
///
/// Ancestors are followed only through records present in `messages`. Both walks
/// carry a visited set, so cycles and missing links end the walk instead of looping.
/// The result always contains `uuid`, even if no message carries it.
pub fn get_thread_chain<'a, T: Threaded>(uuid: &'a str, messages: &'a [T]) -> HashSet<String> {
    let index = ParentIndex::new(messages);
    let mut chain: HashSet<&str> = HashSet::from([uuid]);

    let mut current = uuid;
    while let Some(parent) = index.parent_of(current) {
        if !chain.insert(parent) {
            break;
        }
        current = parent;
    }

    let children = children_index(messages);
    let mut seen: HashSet<&str> = HashSet::from([uuid]);
    let mut queue = VecDeque::from([uuid]);
    while let Some(node) = queue.pop_front() {
        for &child in children.get(node).into_iter().flatten() {
            if seen.insert(child) {
                chain.insert(child);
                queue.push_back(child);
            }
        }
    }

    chain.into_iter().map(str::to_string).collect()
}

fn children_index<T: Threaded>(messages: &[T]) -> HashMap<&str, Vec<&str>> {
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    for message in messages {
        if let Some(uuid) = message.uuid()
            && let Some(parent) = message.parent_uuid()
            && parent != uuid
        {
            children.entry(parent).or_default().push(uuid);
        }
    }
    children
}
