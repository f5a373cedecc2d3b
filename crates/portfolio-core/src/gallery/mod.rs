//! Public gallery pipeline: filter, sort, paginate.
//!
//! Everything here is derived state. [`GalleryView`] holds the handful of
//! user-controlled inputs and recomputes the visible page from the source
//! list on demand.

mod filter;
mod page;
mod sort;

pub use filter::{filter_items, CategoryCounts, CategoryFilter, ALL_LABEL, FILTER_ORDER};
pub use page::{page_size_for_width, paginate, Page};
pub use sort::{catalogue_order, sort_catalogue, sort_items, SortMode};

use crate::types::GalleryItem;

/// Width assumed before the first resize event.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// What the page should do after the "show more" toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandEffect {
    /// Keep the current scroll position
    Stay,
    /// Scroll back to the gallery's top anchor
    ScrollToTop,
}

/// Per-category counts over the unfiltered source list.
pub fn category_counts(items: &[GalleryItem]) -> CategoryCounts {
    CategoryCounts::from_items(items)
}

/// Filters to render as buttons: "All" plus non-empty categories.
pub fn visible_categories(items: &[GalleryItem]) -> Vec<(CategoryFilter, usize)> {
    category_counts(items).visible_filters()
}

/// User-controlled gallery state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    active: CategoryFilter,
    sort: SortMode,
    expanded: bool,
    viewport_width: u32,
}

impl Default for GalleryView {
    fn default() -> Self {
        Self {
            active: CategoryFilter::All,
            sort: SortMode::Newest,
            expanded: false,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

impl GalleryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn page_size(&self) -> usize {
        page_size_for_width(self.viewport_width)
    }

    /// Switch category. Always re-collapses the list.
    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.active = filter;
        self.expanded = false;
    }

    /// Back to "All" from the empty state.
    pub fn reset_category(&mut self) {
        self.set_category(CategoryFilter::All);
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
    }

    pub fn set_viewport_width(&mut self, width_px: u32) {
        self.viewport_width = width_px;
    }

    pub fn toggle_expanded(&mut self) -> ExpandEffect {
        self.expanded = !self.expanded;
        if self.expanded {
            ExpandEffect::Stay
        } else {
            ExpandEffect::ScrollToTop
        }
    }

    /// Filtered and sorted, before pagination.
    pub fn arranged<'a>(&self, source: &'a [GalleryItem]) -> Vec<&'a GalleryItem> {
        let mut items = filter_items(source, self.active);
        sort_items(&mut items, self.sort);
        items
    }

    pub fn page<'a>(&self, source: &'a [GalleryItem]) -> Page<&'a GalleryItem> {
        paginate(self.arranged(source), self.page_size(), self.expanded)
    }

    pub fn visible<'a>(&self, source: &'a [GalleryItem]) -> Vec<&'a GalleryItem> {
        self.page(source).items
    }

    /// Items hidden behind "show more" while collapsed.
    pub fn remaining(&self, source: &[GalleryItem]) -> usize {
        self.page(source).hidden
    }

    /// Toggle caption, or `None` when everything already fits.
    pub fn show_more_label(&self, source: &[GalleryItem]) -> Option<String> {
        let page = self.page(source);
        if !page.can_expand {
            return None;
        }
        Some(if self.expanded {
            "Show less".to_string()
        } else {
            format!("Show {} more", page.hidden)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::item;
    use crate::types::Category;

    fn ten_weddings() -> Vec<GalleryItem> {
        (0..10)
            .map(|n| item(&format!("w{}", n), Category::Wedding, n))
            .collect()
    }

    #[test]
    fn test_filter_scenario() {
        let source = vec![
            item("a", Category::Wedding, 1),
            item("b", Category::Wedding, 2),
            item("c", Category::Wedding, 3),
            item("d", Category::Portrait, 4),
            item("e", Category::Portrait, 5),
        ];
        let mut view = GalleryView::new();
        view.set_category(CategoryFilter::Only(Category::Portrait));
        let visible = view.visible(&source);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|i| i.category == Category::Portrait));
    }

    #[test]
    fn test_show_more_round_trip() {
        let source = ten_weddings();
        let mut view = GalleryView::new();
        view.set_viewport_width(800);

        let collapsed: Vec<_> = view.visible(&source).iter().map(|i| i.id.clone()).collect();
        assert_eq!(collapsed.len(), 4);
        assert_eq!(view.show_more_label(&source).as_deref(), Some("Show 6 more"));

        assert_eq!(view.toggle_expanded(), ExpandEffect::Stay);
        assert_eq!(view.visible(&source).len(), 10);
        assert_eq!(view.show_more_label(&source).as_deref(), Some("Show less"));

        assert_eq!(view.toggle_expanded(), ExpandEffect::ScrollToTop);
        let again: Vec<_> = view.visible(&source).iter().map(|i| i.id.clone()).collect();
        assert_eq!(again, collapsed);
    }

    #[test]
    fn test_category_change_collapses() {
        let source = ten_weddings();
        let mut view = GalleryView::new();
        view.toggle_expanded();
        assert!(view.is_expanded());
        view.set_category(CategoryFilter::Only(Category::Wedding));
        assert!(!view.is_expanded());
        assert_eq!(view.visible(&source).len(), view.page_size());
    }

    #[test]
    fn test_sort_change_keeps_expansion() {
        let mut view = GalleryView::new();
        view.toggle_expanded();
        view.set_sort(SortMode::Oldest);
        assert!(view.is_expanded());
    }

    #[test]
    fn test_no_label_when_everything_fits() {
        let source = vec![item("a", Category::Events, 1)];
        let view = GalleryView::new();
        assert_eq!(view.show_more_label(&source), None);
        assert_eq!(view.remaining(&source), 0);
    }

    #[test]
    fn test_empty_filter_and_reset() {
        let source = ten_weddings();
        let mut view = GalleryView::new();
        view.set_category(CategoryFilter::Only(Category::Album));
        assert!(view.visible(&source).is_empty());
        view.reset_category();
        assert_eq!(view.active(), CategoryFilter::All);
        assert!(!view.visible(&source).is_empty());
    }

    #[test]
    fn test_visible_categories_skip_empty() {
        let source = vec![item("a", Category::Events, 1), item("b", Category::Events, 2)];
        assert_eq!(
            visible_categories(&source),
            vec![
                (CategoryFilter::All, 2),
                (CategoryFilter::Only(Category::Events), 2)
            ]
        );
    }
}
