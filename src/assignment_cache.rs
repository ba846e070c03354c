use std::{collections::HashMap, sync::RwLock};

/// `AssignmentCache` holds the alternative believed correct for each participant of one split
/// test. It allows concurrent access for readers and writers.
///
/// The cache is not the source of truth. Entries are either a caller's pending override or a
/// value confirmed by the store, and the latter always wins.
pub(crate) struct AssignmentCache {
    assignments: RwLock<HashMap<String, u32>>,
}

impl AssignmentCache {
    pub fn new() -> Self {
        Self {
            assignments: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, participant: &str) -> Option<u32> {
        // A poisoned lock only means a writer panicked mid-insert. The map itself is still
        // consistent, so keep using it.
        let assignments = self
            .assignments
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        assignments.get(participant).copied()
    }

    /// Remember a caller-forced alternative unless the participant already has one.
    pub fn insert_if_absent(&self, participant: &str, alternative: u32) {
        let mut assignments = self
            .assignments
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        assignments
            .entry(participant.to_owned())
            .or_insert(alternative);
    }

    /// Record the alternative confirmed by the store.
    pub fn confirm(&self, participant: &str, alternative: u32) {
        let mut assignments = self
            .assignments
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        assignments.insert(participant.to_owned(), alternative);
    }
}
