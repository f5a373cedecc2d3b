//! Edge case and boundary condition tests
//!
//! Unusual store payloads, empty lists, and inputs at the limits of the
//! gallery and admin types.

use std::sync::Arc;

use portfolio_core::gallery::{category_counts, CategoryFilter};
use portfolio_core::mapping::{map_project, map_projects, RawProject, FALLBACK_TITLE};
use portfolio_core::masonry::masonry_columns;
use portfolio_core::{
    reorder, Category, GalleryLoader, GalleryView, MemoryStore, ImageUpload, ImageUrlBuilder, PortfolioError, StoreConfig,
    ViewerState,
};

fn urls() -> ImageUrlBuilder {
    ImageUrlBuilder::new("p", "production")
}

// ============================================================================
// Store Payload Tests
// ============================================================================

/// Nulls and unknown fields in a store record decode to defaults
#[test]
fn test_nulls_and_extra_fields() {
    let json = r#"{
        "_id": "abc",
        "_createdAt": "2024-02-29T12:00:00Z",
        "_rev": "xyz",
        "title": null,
        "category": null,
        "published": null,
        "order": null,
        "imageRef": "image-h-100x50-png",
        "lqip": "data:image/jpeg;base64,AAAA"
    }"#;
    let raw: RawProject = serde_json::from_str(json).unwrap();
    let item = map_project(raw, &urls()).unwrap();

    assert_eq!(item.title, FALLBACK_TITLE);
    assert_eq!(item.category, Category::Uncategorized);
    assert!(item.published);
    assert_eq!(item.order, None);
    assert_eq!(item.lqip.as_deref(), Some("data:image/jpeg;base64,AAAA"));
}

/// A record that never had the flag set is published everywhere, not just
/// in the admin listing
#[tokio::test]
async fn test_unset_published_reaches_public_gallery() {
    let doc = |id: &str, published: Option<bool>| RawProject {
        id: Some(id.into()),
        created_at: Some("2024-03-01T09:00:00Z".into()),
        title: Some(id.into()),
        category: Some("portrait".into()),
        published,
        image_ref: Some("image-h-100x50-png".into()),
        ..Default::default()
    };
    let store = Arc::new(MemoryStore::with_documents(vec![
        doc("legacy", None),
        doc("draft", Some(false)),
        doc("live", Some(true)),
    ]));

    let outcome = GalleryLoader::new(store, urls()).load().await.unwrap();
    let mut ids: Vec<&str> = outcome.items.iter().map(|i| i.id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["legacy", "live"]);
    assert!(outcome.items.iter().all(|i| i.published));
}

/// Fractional order values are rounded, not truncated
#[test]
fn test_fractional_order_rounds() {
    let raw: RawProject =
        serde_json::from_str(r#"{"_id":"a","imageRef":"image-h-1x1-jpg","order":2.6}"#).unwrap();
    assert_eq!(map_project(raw, &urls()).unwrap().order, Some(3));
}

/// An empty object maps to an error, never a panic
#[test]
fn test_empty_record() {
    let raw: RawProject = serde_json::from_str("{}").unwrap();
    assert!(map_project(raw, &urls()).is_err());
}

/// A whole batch of bad records yields no items and one reason each
#[test]
fn test_all_records_bad() {
    let raws: Vec<RawProject> =
        serde_json::from_str(r#"[{}, {"_id":"x"}, {"_id":"y","imageRef":"oops"}]"#).unwrap();
    let (items, dropped) = map_projects(raws, &urls());
    assert!(items.is_empty());
    assert_eq!(dropped.len(), 3);
}

/// Category values with odd casing and whitespace still match
#[test]
fn test_category_normalisation() {
    for (raw, expected) in [
        ("  Retouch\n", Category::Retouch),
        ("EVENTS", Category::Events),
        ("", Category::Uncategorized),
        ("landscape", Category::Uncategorized),
    ] {
        assert_eq!(Category::parse(raw), expected, "{raw:?}");
    }
}

// ============================================================================
// Empty List Tests
// ============================================================================

#[test]
fn test_empty_gallery() {
    let view = GalleryView::new();
    assert!(view.visible(&[]).is_empty());
    assert_eq!(view.show_more_label(&[]), None);

    let counts = category_counts(&[]);
    assert_eq!(counts.visible_filters(), vec![(CategoryFilter::All, 0)]);
}

#[test]
fn test_empty_masonry() {
    let empty: [u8; 0] = [];
    let columns = masonry_columns(&empty, 3, |_| 1.0);
    assert_eq!(columns.len(), 3);
    assert!(columns.iter().all(Vec::is_empty));
}

#[test]
fn test_viewer_over_empty_list() {
    let mut viewer = ViewerState::new(0);
    viewer.open_at(0);
    viewer.next();
    viewer.prev();
    assert!(!viewer.is_open());
}

#[test]
fn test_reorder_single_item() {
    assert_eq!(reorder(&["only"], 0, 0), vec!["only"]);
}

// ============================================================================
// Boundary Value Tests
// ============================================================================

/// Negative heights do not pull a column backwards
#[test]
fn test_masonry_ignores_negative_heights() {
    let columns = masonry_columns(&[-5.0_f64, 1.0, 1.0], 2, |h| *h);
    assert_eq!(columns, vec![vec![-5.0, 1.0], vec![1.0]]);
}

/// Bytes that are not an image are rejected before upload
#[test]
fn test_upload_rejects_non_image() {
    let err = ImageUpload::from_bytes("notes.txt", b"just some text".to_vec()).unwrap_err();
    assert!(matches!(err, PortfolioError::Validation(_)));
}

#[test]
fn test_upload_rejects_empty_file() {
    assert!(ImageUpload::from_bytes("empty.png", Vec::new()).is_err());
}

/// Whitespace-only tokens count as absent
#[test]
fn test_blank_write_token_is_not_configured() {
    let config = StoreConfig::from_lookup(|key| match key {
        "PORTFOLIO_WRITE_TOKEN" => Some("   ".to_string()),
        _ => None,
    });
    assert!(!config.is_admin_configured());
    assert_eq!(config.write_token, None);
}

/// Very wide viewports still cap at the largest page size
#[test]
fn test_huge_viewport() {
    let mut view = GalleryView::new();
    view.set_viewport_width(u32::MAX);
    assert_eq!(view.page_size(), 8);
}
