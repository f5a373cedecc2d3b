//! End-to-end admin workflows against the in-memory store
//!
//! Each test drives `AdminService` the way the dashboard does and then
//! checks both the local catalogue and what a fresh fetch returns.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use image::{ImageBuffer, ImageFormat, Rgb};
use portfolio_core::gallery::{sort_catalogue, CategoryFilter};
use portfolio_core::mapping::RawProject;
use portfolio_core::persist::ACTIVITY_LOG_KEY;
use portfolio_core::{
    AdminService, AuthGate, Catalogue, Category, GalleryLoader, GalleryView, ImageUpload,
    ImageUrlBuilder, KeyValueStore, MemoryKv, MemoryStore, NewProject, PortfolioError, ProjectId,
    ProjectPatch, RedbKv,
};
use tempfile::TempDir;

// ============================================================================
// Fixtures
// ============================================================================

fn raw(id: &str, category: &str, created: &str, order: Option<f64>) -> RawProject {
    RawProject {
        id: Some(id.into()),
        created_at: Some(created.into()),
        title: Some(format!("Title {}", id)),
        category: Some(category.into()),
        published: Some(true),
        order,
        image_ref: Some(format!("image-{}-1200x800-jpg", id)),
        ..Default::default()
    }
}

fn urls() -> ImageUrlBuilder {
    ImageUrlBuilder::new("p", "production")
}

fn png_upload(name: &str) -> ImageUpload {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(6, 4, Rgb([200, 10, 10]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    ImageUpload::from_bytes(name, bytes).unwrap()
}

fn five_items() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_documents(vec![
        raw("w1", "wedding", "2024-01-01T00:00:00Z", None),
        raw("w2", "wedding", "2024-01-02T00:00:00Z", None),
        raw("w3", "Wedding", "2024-01-03T00:00:00Z", None),
        raw("p1", "portrait", "2024-01-04T00:00:00Z", None),
        raw("p2", " PORTRAIT ", "2024-01-05T00:00:00Z", None),
    ]))
}

async fn loaded(store: Arc<MemoryStore>) -> (AdminService<MemoryStore, MemoryKv>, Catalogue) {
    let svc = AdminService::new(store, urls(), MemoryKv::new());
    let mut catalogue = Catalogue::new();
    svc.load(&mut catalogue).await.unwrap();
    (svc, catalogue)
}

fn ids(catalogue: &Catalogue) -> Vec<&str> {
    catalogue.items().iter().map(|i| i.id.as_str()).collect()
}

// ============================================================================
// Public Gallery Scenarios
// ============================================================================

#[tokio::test]
async fn test_category_filter_scenario() {
    let loader = GalleryLoader::new(five_items(), urls());
    let items = loader.load().await.unwrap().items;
    assert_eq!(items.len(), 5);

    let mut view = GalleryView::new();
    view.set_category(CategoryFilter::Only(Category::Portrait));
    let visible = view.visible(&items);
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|i| i.category == Category::Portrait));
}

#[tokio::test]
async fn test_show_more_scenario() {
    let docs = (0..10)
        .map(|n| raw(&format!("e{}", n), "events", &format!("2024-02-{:02}T00:00:00Z", n + 1), None))
        .collect();
    let loader = GalleryLoader::new(Arc::new(MemoryStore::with_documents(docs)), urls());
    let items = loader.load().await.unwrap().items;

    let mut view = GalleryView::new();
    view.set_viewport_width(600);
    let first: Vec<_> = view.visible(&items).iter().map(|i| i.id.clone()).collect();
    assert_eq!(first.len(), 4);

    view.toggle_expanded();
    assert_eq!(view.visible(&items).len(), 10);

    view.toggle_expanded();
    let again: Vec<_> = view.visible(&items).iter().map(|i| i.id.clone()).collect();
    assert_eq!(again, first);
}

#[tokio::test]
async fn test_explicit_order_sorts_before_missing() {
    let store = Arc::new(MemoryStore::with_documents(vec![
        raw("later", "album", "2024-03-02T00:00:00Z", None),
        raw("first", "album", "2024-03-01T00:00:00Z", Some(0.0)),
    ]));
    let (_svc, catalogue) = loaded(store).await;
    assert_eq!(ids(&catalogue), vec!["first", "later"]);

    let mut items = catalogue.items().to_vec();
    items.reverse();
    sort_catalogue(&mut items);
    assert_eq!(items[0].id.as_str(), "first");
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_single_delete_flow() {
    let store = five_items();
    let (svc, mut catalogue) = loaded(store.clone()).await;

    catalogue.confirm.request(ProjectId::new("w1"));
    let deleted = svc.delete_confirmed(&mut catalogue).await.unwrap();
    assert_eq!(deleted, Some(ProjectId::new("w1")));
    assert_eq!(catalogue.len(), 4);
    assert!(catalogue.confirm.pending().is_none());
    assert_eq!(store.len(), 4);
    assert_eq!(svc.activity()[0].message, "Deleted \"Title w1\"");
}

#[tokio::test]
async fn test_delete_of_already_removed_item() {
    let store = five_items();
    let (svc, mut catalogue) = loaded(store.clone()).await;

    // Another session removes it first
    let (other, mut other_catalogue) = loaded(store.clone()).await;
    other_catalogue.confirm.request(ProjectId::new("p1"));
    other.delete_confirmed(&mut other_catalogue).await.unwrap();

    assert_eq!(catalogue.len(), 5);
    catalogue.confirm.request(ProjectId::new("p1"));
    let err = svc.delete_confirmed(&mut catalogue).await.unwrap_err();

    // The list is re-fetched, so the stale row disappears
    assert!(matches!(err, PortfolioError::NotFound(_)));
    assert_eq!(catalogue.len(), 4);
    assert!(catalogue.get(&ProjectId::new("p1")).is_none());
    assert!(svc.activity().is_empty());
    assert_eq!(catalogue.confirm.pending(), Some(&ProjectId::new("p1")));
    assert!(catalogue.confirm.error().is_some());
}

#[tokio::test]
async fn test_bulk_delete_failure_is_atomic() {
    let store = five_items();
    let (svc, mut catalogue) = loaded(store.clone()).await;
    catalogue.selection.toggle(&ProjectId::new("w1"));
    catalogue.selection.toggle(&ProjectId::new("p2"));

    store.fail_next_write("transaction rejected");
    assert!(svc.bulk_delete(&mut catalogue).await.is_err());
    assert_eq!(catalogue.len(), 5);
    assert_eq!(catalogue.selection.len(), 2);
    assert_eq!(store.len(), 5);
    assert!(svc.activity().is_empty());
}

#[tokio::test]
async fn test_bulk_delete_with_one_missing_id_removes_nothing() {
    let store = five_items();
    let (svc, mut catalogue) = loaded(store.clone()).await;
    catalogue.selection.toggle(&ProjectId::new("w1"));
    catalogue.selection.toggle(&ProjectId::new("w2"));

    // w2 vanishes underneath us
    let (other, mut other_catalogue) = loaded(store.clone()).await;
    other_catalogue.confirm.request(ProjectId::new("w2"));
    other.delete_confirmed(&mut other_catalogue).await.unwrap();

    assert!(svc.bulk_delete(&mut catalogue).await.is_err());
    assert_eq!(catalogue.len(), 5);
    assert_eq!(store.len(), 4);
}

#[tokio::test]
async fn test_bulk_delete_success_removes_exactly_selection() {
    let store = five_items();
    let (svc, mut catalogue) = loaded(store.clone()).await;
    catalogue.selection.toggle(&ProjectId::new("w1"));
    catalogue.selection.toggle(&ProjectId::new("p2"));

    assert_eq!(svc.bulk_delete(&mut catalogue).await.unwrap(), 2);
    let mut remaining = ids(&catalogue);
    remaining.sort();
    assert_eq!(remaining, vec!["p1", "w2", "w3"]);
    assert!(catalogue.selection.is_empty());
    assert_eq!(svc.activity().len(), 2);

    let (_, fresh) = loaded(store).await;
    assert_eq!(fresh.len(), 3);
}

// ============================================================================
// Publish
// ============================================================================

#[tokio::test]
async fn test_bulk_unpublish_hides_from_public() {
    let store = five_items();
    let (svc, mut catalogue) = loaded(store.clone()).await;
    catalogue.selection.toggle(&ProjectId::new("w1"));
    catalogue.selection.toggle(&ProjectId::new("w2"));

    svc.bulk_set_published(&mut catalogue, false).await.unwrap();
    assert_eq!(catalogue.draft_count(), 2);
    assert_eq!(store.transaction_count(), 1);

    let public = GalleryLoader::new(store, urls()).load().await.unwrap();
    assert_eq!(public.items.len(), 3);

    catalogue.set_show_drafts(false);
    assert_eq!(catalogue.visible().len(), 3);
}

// ============================================================================
// Reorder
// ============================================================================

#[tokio::test]
async fn test_reorder_persists_contiguous_orders() {
    let store = five_items();
    let (svc, mut catalogue) = loaded(store.clone()).await;
    assert_eq!(ids(&catalogue), vec!["p2", "p1", "w3", "w2", "w1"]);

    svc.apply_reorder(&mut catalogue, 4, 0).await.unwrap();
    assert_eq!(ids(&catalogue), vec!["w1", "p2", "p1", "w3", "w2"]);

    let (_, fresh) = loaded(store).await;
    assert_eq!(ids(&fresh), vec!["w1", "p2", "p1", "w3", "w2"]);
    let orders: Vec<_> = fresh.items().iter().map(|i| i.order).collect();
    assert_eq!(orders, vec![Some(0), Some(1), Some(2), Some(3), Some(4)]);
    assert_eq!(svc.activity()[0].message, "Reordered 5 projects");
}

#[tokio::test]
async fn test_failed_reorder_rolls_back_from_store() {
    let store = five_items();
    let (svc, mut catalogue) = loaded(store.clone()).await;
    let before: Vec<String> = ids(&catalogue).into_iter().map(String::from).collect();

    store.fail_next_write("conflict");
    assert!(svc.apply_reorder(&mut catalogue, 0, 3).await.is_err());
    let after: Vec<String> = ids(&catalogue).into_iter().map(String::from).collect();
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_search_does_not_change_reorder_scope() {
    let store = five_items();
    let (svc, mut catalogue) = loaded(store.clone()).await;
    catalogue.set_search("portrait");
    assert_eq!(catalogue.visible().len(), 2);

    svc.apply_reorder(&mut catalogue, 0, 4).await.unwrap();
    let (_, fresh) = loaded(store).await;
    assert!(fresh.items().iter().all(|i| i.order.is_some()));
}

// ============================================================================
// Create / Update
// ============================================================================

#[tokio::test]
async fn test_create_uploads_and_publishes() {
    let store = Arc::new(MemoryStore::new());
    let (svc, mut catalogue) = loaded(store.clone()).await;

    let id = svc
        .create(
            &mut catalogue,
            NewProject {
                title: "  Harbour gala ".into(),
                category: Category::Events,
                description: None,
                image: png_upload("gala.png"),
            },
        )
        .await
        .unwrap();

    let item = catalogue.get(&id).unwrap();
    assert_eq!(item.title, "Harbour gala");
    assert!(item.published);
    assert!(item.image.as_str().ends_with("-6x4-png"));
    assert_eq!(svc.activity()[0].message, "Created \"Harbour gala\"");
}

#[tokio::test]
async fn test_create_requires_title() {
    let store = Arc::new(MemoryStore::new());
    let (svc, mut catalogue) = loaded(store.clone()).await;
    let err = svc
        .create(
            &mut catalogue,
            NewProject {
                title: " ".into(),
                category: Category::Album,
                description: None,
                image: png_upload("a.png"),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, PortfolioError::Validation(_)));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_update_changes_fields_and_image() {
    let store = five_items();
    let (svc, mut catalogue) = loaded(store.clone()).await;
    let id = ProjectId::new("w3");

    svc.update(
        &mut catalogue,
        &id,
        ProjectPatch {
            category: Some(Category::Album),
            description: Some("Bound in linen".into()),
            image: Some(png_upload("cover.png")),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let item = svc.get(&id).await.unwrap();
    assert_eq!(item.category, Category::Album);
    assert_eq!(item.description.as_deref(), Some("Bound in linen"));
    assert!(item.image.as_str().ends_with("-6x4-png"));
    assert_eq!(catalogue.get(&id).unwrap().category, Category::Album);
    assert_eq!(svc.activity()[0].message, "Updated \"Title w3\"");
}

#[tokio::test]
async fn test_update_unknown_id() {
    let (svc, mut catalogue) = loaded(five_items()).await;
    let err = svc
        .update(
            &mut catalogue,
            &ProjectId::new("nope"),
            ProjectPatch {
                title: Some("X".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, PortfolioError::NotFound(_)));
}

// ============================================================================
// Local Persistence
// ============================================================================

#[tokio::test]
async fn test_activity_and_session_survive_restart() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("portfolio.redb");
    let store = five_items();

    {
        let kv = Arc::new(RedbKv::open(&db).unwrap());
        let mut gate = AuthGate::new("pw", kv.clone()).with_delay(Duration::ZERO);
        assert!(gate.login("pw").await.unwrap());

        let svc = AdminService::new(store.clone(), urls(), kv);
        let mut catalogue = Catalogue::new();
        svc.load(&mut catalogue).await.unwrap();
        svc.toggle_published(&mut catalogue, &ProjectId::new("p1"))
            .await
            .unwrap();
    }

    let kv = Arc::new(RedbKv::open(&db).unwrap());
    assert!(AuthGate::new("pw", kv.clone()).is_authenticated());
    assert!(kv.get(ACTIVITY_LOG_KEY).unwrap().is_some());

    let svc = AdminService::new(store, urls(), kv);
    assert_eq!(svc.activity()[0].message, "Unpublished \"Title p1\"");
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_publish_and_public_load_in_flight_together() {
    let store = five_items();
    let (svc, mut catalogue) = loaded(store.clone()).await;
    catalogue.selection.toggle(&ProjectId::new("p1"));
    let loader = GalleryLoader::new(store.clone(), urls());

    let (published, outcome) = futures::join!(
        svc.bulk_set_published(&mut catalogue, false),
        loader.load()
    );
    published.unwrap();
    let seen = outcome.unwrap().items.len();
    assert!(seen == 4 || seen == 5);

    let after = loader.load().await.unwrap();
    assert_eq!(after.items.len(), 4);
}
