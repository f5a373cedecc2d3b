//! Drag-and-drop list reconciliation.

use crate::types::{GalleryItem, ProjectId};

/// Move the element at `from` to `to`, shifting the ones in between.
///
/// Returns an unchanged copy when either index is out of range.
pub fn reorder<T: Clone>(list: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = list.to_vec();
    if from >= out.len() || to >= out.len() || from == to {
        return out;
    }
    let moved = out.remove(from);
    out.insert(to, moved);
    out
}

/// Contiguous `order` values matching visual position, zero-based.
pub fn order_assignments(items: &[GalleryItem]) -> Vec<(ProjectId, i64)> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| (item.id.clone(), position as i64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ids, item};
    use crate::types::Category;

    #[test]
    fn test_move_down() {
        assert_eq!(reorder(&['a', 'b', 'c', 'd'], 0, 2), vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn test_move_up() {
        assert_eq!(reorder(&['a', 'b', 'c', 'd'], 3, 1), vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        assert_eq!(reorder(&[1, 2, 3], 5, 0), vec![1, 2, 3]);
        assert_eq!(reorder(&[1, 2, 3], 0, 3), vec![1, 2, 3]);
        assert!(reorder::<u8>(&[], 0, 0).is_empty());
    }

    #[test]
    fn test_assignments_follow_position() {
        let items = reorder(
            &[
                item("a", Category::Wedding, 1),
                item("b", Category::Wedding, 2),
                item("c", Category::Wedding, 3),
            ],
            2,
            0,
        );
        assert_eq!(ids(&items), vec!["c", "a", "b"]);
        let orders = order_assignments(&items);
        assert_eq!(
            orders,
            vec![("c".into(), 0), ("a".into(), 1), ("b".into(), 2)]
        );
    }
}
