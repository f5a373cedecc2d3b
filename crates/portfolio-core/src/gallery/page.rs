//! Viewport-driven pagination and the "show more" affordance.

/// Two visual rows of the current column count.
pub fn page_size_for_width(width_px: u32) -> usize {
    match width_px {
        w if w >= 1280 => 8,
        w if w >= 1024 => 6,
        _ => 4,
    }
}

/// One rendered page of a filtered, sorted list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Length of the list before slicing
    pub total: usize,
    /// Items beyond the page when collapsed
    pub hidden: usize,
    /// Whether the "show more"/"show less" toggle should render at all
    pub can_expand: bool,
}

/// Slice `items` to `page_size` unless `expanded`.
pub fn paginate<T>(items: Vec<T>, page_size: usize, expanded: bool) -> Page<T> {
    let total = items.len();
    let can_expand = total > page_size;
    let hidden = total.saturating_sub(page_size);
    let items = if expanded {
        items
    } else {
        items.into_iter().take(page_size).collect()
    };
    Page {
        items,
        total,
        hidden,
        can_expand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(page_size_for_width(1920), 8);
        assert_eq!(page_size_for_width(1280), 8);
        assert_eq!(page_size_for_width(1279), 6);
        assert_eq!(page_size_for_width(1024), 6);
        assert_eq!(page_size_for_width(800), 4);
        assert_eq!(page_size_for_width(0), 4);
    }

    #[test]
    fn test_collapsed_takes_page_size() {
        let page = paginate((0..10).collect(), 4, false);
        assert_eq!(page.items, vec![0, 1, 2, 3]);
        assert_eq!(page.total, 10);
        assert_eq!(page.hidden, 6);
        assert!(page.can_expand);
    }

    #[test]
    fn test_expanded_takes_all() {
        let page = paginate((0..10).collect(), 4, true);
        assert_eq!(page.items.len(), 10);
    }

    #[test]
    fn test_short_list_has_no_toggle() {
        let page = paginate(vec!['a', 'b'], 4, false);
        assert_eq!(page.items, vec!['a', 'b']);
        assert_eq!(page.hidden, 0);
        assert!(!page.can_expand);

        let exact = paginate(vec![1, 2, 3, 4], 4, false);
        assert!(!exact.can_expand);
    }
}
