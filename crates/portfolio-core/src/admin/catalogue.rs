//! Admin-side view of every project, drafts included.

use super::{DeleteConfirm, Selection};
use crate::gallery::sort_catalogue;
use crate::types::{GalleryItem, ProjectId};

#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    items: Vec<GalleryItem>,
    pub selection: Selection,
    pub confirm: DeleteConfirm,
    search: String,
    show_drafts: bool,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selection: Selection::new(),
            confirm: DeleteConfirm::Idle,
            search: String::new(),
            show_drafts: true,
        }
    }
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<GalleryItem>) -> Self {
        let mut catalogue = Self::new();
        catalogue.replace(items);
        catalogue
    }

    /// Take the items, selection and delete state produced by an operation
    /// on a copy of this catalogue. Search text and the draft toggle stay as
    /// they are here.
    pub fn absorb(&mut self, result: Catalogue) {
        self.items = result.items;
        self.selection = result.selection;
        self.confirm = result.confirm;
    }

    /// Every loaded item in listing order.
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ProjectId) -> Option<&GalleryItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn title_of(&self, id: &ProjectId) -> String {
        self.get(id)
            .map(|item| item.title.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn show_drafts(&self) -> bool {
        self.show_drafts
    }

    pub fn set_show_drafts(&mut self, show: bool) {
        self.show_drafts = show;
    }

    pub fn draft_count(&self) -> usize {
        self.items.iter().filter(|item| !item.published).count()
    }

    /// Swap in a freshly fetched list, re-sorted into listing order.
    pub fn replace(&mut self, mut items: Vec<GalleryItem>) {
        sort_catalogue(&mut items);
        self.items = items;
        self.prune_selection();
    }

    /// The list drag-and-drop works on: draft toggle applied, search ignored.
    pub fn reorderable(&self) -> Vec<GalleryItem> {
        self.items
            .iter()
            .filter(|item| self.show_drafts || item.published)
            .cloned()
            .collect()
    }

    /// What the grid shows: draft toggle, then case-insensitive search.
    pub fn visible(&self) -> Vec<&GalleryItem> {
        let needle = self.search.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| self.show_drafts || item.published)
            .filter(|item| needle.is_empty() || item.search_text().contains(&needle))
            .collect()
    }

    pub fn visible_ids(&self) -> Vec<ProjectId> {
        self.visible().into_iter().map(|item| item.id.clone()).collect()
    }

    /// "Select all" over what is currently on screen.
    pub fn toggle_select_all(&mut self) {
        let ids = self.visible_ids();
        self.selection.toggle_all(&ids);
    }

    pub(crate) fn remove(&mut self, ids: &[ProjectId]) {
        self.items.retain(|item| !ids.contains(&item.id));
        self.prune_selection();
    }

    pub(crate) fn set_published(&mut self, ids: &[ProjectId], published: bool) {
        for item in self.items.iter_mut().filter(|item| ids.contains(&item.id)) {
            item.published = published;
        }
    }

    /// Apply new `order` values and re-sort.
    pub(crate) fn apply_orders(&mut self, orders: &[(ProjectId, i64)]) {
        for (id, order) in orders {
            if let Some(item) = self.items.iter_mut().find(|item| &item.id == id) {
                item.order = Some(*order);
            }
        }
        sort_catalogue(&mut self.items);
    }

    fn prune_selection(&mut self) {
        let items = &self.items;
        self.selection
            .retain(|id| items.iter().any(|item| &item.id == id));
    }
}
