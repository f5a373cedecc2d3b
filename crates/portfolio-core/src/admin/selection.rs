//! Multi-select state for bulk actions.

use std::collections::BTreeSet;

use crate::types::ProjectId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<ProjectId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ProjectId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggle(&mut self, id: &ProjectId) {
        if !self.ids.remove(id) {
            self.ids.insert(id.clone());
        }
    }

    /// Select every id in `all`, or nothing if they are already all selected.
    pub fn toggle_all<'a>(&mut self, all: impl IntoIterator<Item = &'a ProjectId>) {
        let all: BTreeSet<ProjectId> = all.into_iter().cloned().collect();
        if !all.is_empty() && all.is_subset(&self.ids) && self.ids.len() == all.len() {
            self.ids.clear();
        } else {
            self.ids = all;
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that no longer exist.
    pub fn retain(&mut self, keep: impl Fn(&ProjectId) -> bool) {
        self.ids.retain(|id| keep(id));
    }

    pub fn ids(&self) -> Vec<ProjectId> {
        self.ids.iter().cloned().collect()
    }
}
