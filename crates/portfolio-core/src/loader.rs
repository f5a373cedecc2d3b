//! One-shot gallery load.
//!
//! Issues a single store query, maps every record independently and reports
//! the records it had to drop. The page turns the result into a
//! [`LoadState`]: skeleton while loading, grid, "nothing yet" or an error
//! with a retry button that simply calls [`GalleryLoader::load`] again.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::PortfolioResult;
use crate::image_url::ImageUrlBuilder;
use crate::gallery::sort_catalogue;
use crate::mapping::{map_projects, MappingError};
use crate::store::{ContentStore, ProjectQuery};
use crate::types::GalleryItem;

/// Items that mapped cleanly plus the reasons others were skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub items: Vec<GalleryItem>,
    pub dropped: Vec<MappingError>,
}

/// What the gallery page renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Vec<GalleryItem>),
    Empty,
    Failed(String),
}

impl LoadState {
    pub fn from_result(result: PortfolioResult<LoadOutcome>) -> Self {
        match result {
            Ok(outcome) if outcome.items.is_empty() => LoadState::Empty,
            Ok(outcome) => LoadState::Ready(outcome.items),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        match self {
            LoadState::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

pub struct GalleryLoader<S: ContentStore + ?Sized> {
    store: Arc<S>,
    urls: ImageUrlBuilder,
    query: ProjectQuery,
}

impl<S: ContentStore + ?Sized> GalleryLoader<S> {
    /// Loader for the public gallery (published items only).
    pub fn new(store: Arc<S>, urls: ImageUrlBuilder) -> Self {
        Self {
            store,
            urls,
            query: ProjectQuery::public(),
        }
    }

    pub fn with_query(mut self, query: ProjectQuery) -> Self {
        self.query = query;
        self
    }

    pub fn urls(&self) -> &ImageUrlBuilder {
        &self.urls
    }

    pub async fn load(&self) -> PortfolioResult<LoadOutcome> {
        debug!(include_drafts = self.query.include_drafts, "Loading gallery");
        let raws = self.store.fetch_projects(&self.query).await?;
        let fetched = raws.len();

        let (mut items, dropped) = map_projects(raws, &self.urls);
        for reason in &dropped {
            warn!("Dropping gallery record: {}", reason);
        }

        sort_catalogue(&mut items);

        info!(fetched, kept = items.len(), dropped = dropped.len(), "Gallery loaded");
        Ok(LoadOutcome { items, dropped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::RawProject;
    use crate::store::MemoryStore;

    fn raw(id: &str, image: &str) -> RawProject {
        RawProject {
            id: Some(id.into()),
            created_at: Some("2024-03-01T00:00:00Z".into()),
            title: Some(id.into()),
            category: Some("events".into()),
            published: Some(true),
            image_ref: Some(image.into()),
            ..Default::default()
        }
    }

    fn loader(store: Arc<MemoryStore>) -> GalleryLoader<MemoryStore> {
        GalleryLoader::new(store, ImageUrlBuilder::new("p", "production"))
    }

    #[tokio::test]
    async fn test_bad_record_is_dropped_not_fatal() {
        let store = Arc::new(MemoryStore::with_documents(vec![
            raw("good", "image-abc-10x20-jpg"),
            raw("bad", "image-broken"),
        ]));
        let outcome = loader(store).load().await.unwrap();
        assert_eq!(outcome.items.len(), 1);
        assert_eq!(outcome.items[0].id.as_str(), "good");
        assert_eq!(outcome.dropped.len(), 1);
    }

    #[tokio::test]
    async fn test_states() {
        let store = Arc::new(MemoryStore::new());
        let state = LoadState::from_result(loader(store.clone()).load().await);
        assert_eq!(state, LoadState::Empty);

        store.fail_next_read("offline");
        let state = LoadState::from_result(loader(store.clone()).load().await);
        assert_eq!(state, LoadState::Failed("Query failed: offline".into()));

        store.insert_raw(raw("x", "image-abc-10x20-jpg"));
        let state = LoadState::from_result(loader(store).load().await);
        assert_eq!(state.items().len(), 1);
    }

    #[tokio::test]
    async fn test_drafts_hidden_from_public_load() {
        let mut draft = raw("draft", "image-abc-10x20-jpg");
        draft.published = Some(false);
        let store = Arc::new(MemoryStore::with_documents(vec![draft]));

        let public = loader(store.clone()).load().await.unwrap();
        assert!(public.items.is_empty());

        let admin = loader(store)
            .with_query(ProjectQuery::admin())
            .load()
            .await
            .unwrap();
        assert_eq!(admin.items.len(), 1);
        assert!(!admin.items[0].published);
    }
}
