use std::collections::HashMap;

use crate::models::Threaded;

/// uuid -> parent lookup over the addressable records of one call.
///
/// Records without a uuid are left out. A self-reference is stored as "no parent".
/// When a uuid repeats, the last record wins.
pub(crate) struct ParentIndex<'a> {
    parents: HashMap<&'a str, Option<&'a str>>,
}

impl<'a> ParentIndex<'a> {
    pub(crate) fn new<T: Threaded>(messages: &'a [T]) -> Self {
        let mut parents = HashMap::with_capacity(messages.len());
        for message in messages {
            let Some(uuid) = message.uuid() else {
                continue;
            };
            let parent = message.parent_uuid().filter(|p| *p != uuid);
            parents.insert(uuid, parent);
        }
        Self { parents }
    }

    pub(crate) fn uuids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.parents.keys().copied()
    }

    /// The declared parent, if any, whether or not it is present.
    pub(crate) fn declared_parent(&self, uuid: &str) -> Option<&'a str> {
        self.parents.get(uuid).copied().flatten()
    }

    /// The parent only if it is itself an addressable record.
    pub(crate) fn parent_of(&self, uuid: &str) -> Option<&'a str> {
        self.declared_parent(uuid).filter(|p| self.parents.contains_key(p))
    }
}
