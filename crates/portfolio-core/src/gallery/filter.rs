//! Category filtering and membership counts.

use std::fmt;

use crate::types::{Category, GalleryItem};

/// Label of the catch-all filter.
pub const ALL_LABEL: &str = "All";

/// Display order of filter buttons after "All".
pub const FILTER_ORDER: [Category; 8] = [
    Category::Wedding,
    Category::Portrait,
    Category::Commercial,
    Category::Retouch,
    Category::Album,
    Category::Events,
    Category::Photoshoots,
    Category::Uncategorized,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }

    /// "All" or the category value; inverse of [`fmt::Display`].
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case(ALL_LABEL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::parse(raw))
        }
    }

    /// Capitalised button label.
    pub fn label(&self) -> String {
        match self {
            CategoryFilter::All => ALL_LABEL.to_string(),
            CategoryFilter::Only(category) => {
                let raw = category.as_str();
                let mut chars = raw.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_LABEL),
            CategoryFilter::Only(category) => f.write_str(category.as_str()),
        }
    }
}

/// Items matching `filter`, source order preserved.
pub fn filter_items<'a>(items: &'a [GalleryItem], filter: CategoryFilter) -> Vec<&'a GalleryItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Per-category totals over an unfiltered list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    pub total: usize,
    counts: Vec<(Category, usize)>,
}

impl CategoryCounts {
    pub fn from_items(items: &[GalleryItem]) -> Self {
        let mut counts: Vec<(Category, usize)> = FILTER_ORDER.iter().map(|c| (*c, 0)).collect();
        for item in items {
            if let Some(slot) = counts.iter_mut().find(|(c, _)| *c == item.category) {
                slot.1 += 1;
            }
        }
        Self {
            total: items.len(),
            counts,
        }
    }

    pub fn count(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.total,
            CategoryFilter::Only(category) => self
                .counts
                .iter()
                .find(|(c, _)| *c == category)
                .map(|(_, n)| *n)
                .unwrap_or(0),
        }
    }

    /// Filters worth showing: "All" first, then every category with items.
    pub fn visible_filters(&self) -> Vec<(CategoryFilter, usize)> {
        std::iter::once((CategoryFilter::All, self.total))
            .chain(
                self.counts
                    .iter()
                    .filter(|(_, n)| *n > 0)
                    .map(|(c, n)| (CategoryFilter::Only(*c), *n)),
            )
            .collect()
    }

    /// Sum of the per-category counts (equals `total`).
    pub fn category_sum(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}
