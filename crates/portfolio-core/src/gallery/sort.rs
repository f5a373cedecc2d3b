//! Sort comparators for the public gallery and the catalogue listing.

use std::cmp::Ordering;
use std::fmt;

use crate::types::GalleryItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    #[default]
    Newest,
    Oldest,
    Category,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Newest, SortMode::Oldest, SortMode::Category];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::Category => "category",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Newest => "Newest first",
            SortMode::Oldest => "Oldest first",
            SortMode::Category => "By category",
        }
    }

    /// Unknown values fall back to [`SortMode::Newest`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "oldest" => SortMode::Oldest,
            "category" => SortMode::Category,
            _ => SortMode::Newest,
        }
    }

    pub fn compare(&self, a: &GalleryItem, b: &GalleryItem) -> Ordering {
        match self {
            SortMode::Newest => b.created_at.cmp(&a.created_at),
            SortMode::Oldest => a.created_at.cmp(&b.created_at),
            SortMode::Category => a
                .category
                .as_str()
                .cmp(b.category.as_str())
                .then_with(|| a.title.cmp(&b.title)),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable sort in place; equal keys keep their incoming order.
pub fn sort_items<T: AsRef<GalleryItem>>(items: &mut [T], mode: SortMode) {
    items.sort_by(|a, b| mode.compare(a.as_ref(), b.as_ref()));
}

/// Store listing order: `order` ascending with a missing value treated as
/// larger than any present one, then newest first.
pub fn catalogue_order(a: &GalleryItem, b: &GalleryItem) -> Ordering {
    let key = |item: &GalleryItem| item.order.unwrap_or(i64::MAX);
    key(a)
        .cmp(&key(b))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

pub fn sort_catalogue(items: &mut [GalleryItem]) {
    items.sort_by(catalogue_order);
}

impl AsRef<GalleryItem> for GalleryItem {
    fn as_ref(&self) -> &GalleryItem {
        self
    }
}
