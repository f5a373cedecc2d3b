//! Catalogue writes.
//!
//! Every operation stages its change on the caller's [`Catalogue`], commits
//! one store transaction, and either keeps the staged state (logging one
//! activity entry per affected item) or restores the snapshot taken before
//! staging and returns the store's error. A failed reorder, and any write
//! the store rejects with `NotFound`, additionally re-fetches the list: the
//! store may have committed part of the transaction before reporting it.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use super::{order_assignments, reorder, Catalogue};
use crate::activity::{ActivityEntry, ActivityLog};
use crate::error::{PortfolioError, PortfolioResult};
use crate::gallery::sort_catalogue;
use crate::image_url::ImageUrlBuilder;
use crate::mapping::{map_project, map_projects};
use crate::persist::KeyValueStore;
use crate::store::{ContentStore, FieldSet, ProjectDocument, ProjectQuery};
use crate::types::{GalleryItem, NewProject, ProjectId, ProjectPatch};

pub struct AdminService<S: ContentStore + ?Sized, K: KeyValueStore> {
    store: Arc<S>,
    urls: ImageUrlBuilder,
    log: Arc<Mutex<ActivityLog<K>>>,
}

impl<S: ContentStore + ?Sized, K: KeyValueStore> Clone for AdminService<S, K> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            urls: self.urls.clone(),
            log: self.log.clone(),
        }
    }
}

impl<S: ContentStore + ?Sized, K: KeyValueStore> AdminService<S, K> {
    pub fn new(store: Arc<S>, urls: ImageUrlBuilder, kv: K) -> Self {
        Self {
            store,
            urls,
            log: Arc::new(Mutex::new(ActivityLog::load(kv))),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn urls(&self) -> &ImageUrlBuilder {
        &self.urls
    }

    /// Activity entries, newest first.
    pub fn activity(&self) -> Vec<ActivityEntry> {
        self.log.lock().entries().to_vec()
    }

    pub fn clear_activity(&self) -> PortfolioResult<()> {
        self.log.lock().clear()
    }

    fn record(&self, message: String) {
        if let Err(e) = self.log.lock().append(message) {
            warn!("Failed to persist activity entry: {}", e);
        }
    }

    /// Every project including drafts, in listing order.
    pub async fn fetch(&self) -> PortfolioResult<Vec<GalleryItem>> {
        let raws = self.store.fetch_projects(&ProjectQuery::admin()).await?;
        let (mut items, dropped) = map_projects(raws, &self.urls);
        for reason in &dropped {
            warn!("Dropping catalogue record: {}", reason);
        }
        sort_catalogue(&mut items);
        debug!(count = items.len(), "Catalogue fetched");
        Ok(items)
    }

    pub async fn load(&self, catalogue: &mut Catalogue) -> PortfolioResult<()> {
        let items = self.fetch().await?;
        catalogue.replace(items);
        Ok(())
    }

    /// Single project straight from the store, for the edit form.
    pub async fn get(&self, id: &ProjectId) -> PortfolioResult<GalleryItem> {
        let raw = self
            .store
            .fetch_project(id)
            .await?
            .ok_or_else(|| PortfolioError::NotFound(id.to_string()))?;
        Ok(map_project(raw, &self.urls)?)
    }

    /// Reload, keeping the current list if the store is unreachable.
    async fn reload(&self, catalogue: &mut Catalogue) {
        if let Err(e) = self.load(catalogue).await {
            warn!("Catalogue reload failed: {}", e);
        }
    }

    /// Put back the pre-operation state after a failed write. A `NotFound`
    /// can arrive after the rest of the transaction was applied, so the list
    /// is re-fetched in that case.
    async fn recover(&self, catalogue: &mut Catalogue, snapshot: Catalogue, err: &PortfolioError) {
        *catalogue = snapshot;
        if matches!(err, PortfolioError::NotFound(_)) {
            self.reload(catalogue).await;
        }
    }

    pub async fn create(
        &self,
        catalogue: &mut Catalogue,
        project: NewProject,
    ) -> PortfolioResult<ProjectId> {
        let title = project.title.trim().to_string();
        if title.is_empty() {
            return Err(PortfolioError::Validation("Title is required".into()));
        }

        let image = self.store.upload_image(&project.image).await?;
        let doc = ProjectDocument {
            title: title.clone(),
            category: project.category,
            description: project.description.unwrap_or_default().trim().to_string(),
            image,
            published: true,
        };

        let id = self.store.create_project(doc).await.map_err(|e| {
            error!("Create failed: {}", e);
            e
        })?;
        info!(%id, "Project created");
        self.record(format!("Created \"{}\"", title));

        self.reload(catalogue).await;
        Ok(id)
    }

    pub async fn update(
        &self,
        catalogue: &mut Catalogue,
        id: &ProjectId,
        patch: ProjectPatch,
    ) -> PortfolioResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        if matches!(patch.title.as_deref(), Some(t) if t.trim().is_empty()) {
            return Err(PortfolioError::Validation("Title is required".into()));
        }

        let image = match &patch.image {
            Some(upload) => Some(self.store.upload_image(upload).await?),
            None => None,
        };
        let set = FieldSet {
            title: patch.title.map(|t| t.trim().to_string()),
            category: patch.category,
            description: patch.description.map(|d| d.trim().to_string()),
            image,
            published: patch.published,
            order: patch.order,
        };
        let title = set.title.clone().unwrap_or_else(|| catalogue.title_of(id));

        if let Err(e) = self.store.patch_project(id, set).await {
            error!(%id, "Update failed: {}", e);
            return Err(e);
        }
        info!(%id, "Project updated");
        self.record(format!("Updated \"{}\"", title));

        self.reload(catalogue).await;
        Ok(())
    }

    /// Delete the project awaiting confirmation.
    ///
    /// Returns `Ok(None)` when nothing was pending.
    pub async fn delete_confirmed(
        &self,
        catalogue: &mut Catalogue,
    ) -> PortfolioResult<Option<ProjectId>> {
        let Some(id) = catalogue.confirm.pending().cloned() else {
            return Ok(None);
        };
        let title = catalogue.title_of(&id);
        let snapshot = catalogue.clone();

        catalogue.remove(std::slice::from_ref(&id));
        match self.store.delete_project(&id).await {
            Ok(()) => {
                info!(%id, "Project deleted");
                catalogue.confirm.succeed();
                self.record(format!("Deleted \"{}\"", title));
                Ok(Some(id))
            }
            Err(e) => {
                error!(%id, "Delete failed: {}", e);
                self.recover(catalogue, snapshot, &e).await;
                catalogue.confirm.fail(e.to_string());
                Err(e)
            }
        }
    }

    fn require_selection(catalogue: &Catalogue) -> PortfolioResult<Vec<ProjectId>> {
        if catalogue.selection.is_empty() {
            return Err(PortfolioError::Validation("No projects selected".into()));
        }
        Ok(catalogue.selection.ids())
    }

    /// Delete every selected project in one transaction.
    pub async fn bulk_delete(&self, catalogue: &mut Catalogue) -> PortfolioResult<usize> {
        let ids = Self::require_selection(catalogue)?;
        let titles: Vec<String> = ids.iter().map(|id| catalogue.title_of(id)).collect();
        let snapshot = catalogue.clone();

        catalogue.remove(&ids);
        if let Err(e) = self.store.delete_projects(&ids).await {
            error!(count = ids.len(), "Bulk delete failed: {}", e);
            self.recover(catalogue, snapshot, &e).await;
            // Whatever the store did remove still gets its log entry
            let missing = match &e {
                PortfolioError::NotFound(id) => Some(id.as_str()),
                _ => None,
            };
            for (id, title) in ids.iter().zip(&titles) {
                if Some(id.as_str()) != missing && catalogue.get(id).is_none() {
                    self.record(format!("Deleted \"{}\"", title));
                }
            }
            return Err(e);
        }

        info!(count = ids.len(), "Projects deleted");
        catalogue.selection.clear();
        for title in titles {
            self.record(format!("Deleted \"{}\"", title));
        }
        Ok(ids.len())
    }

    /// Publish or unpublish every selected project in one transaction.
    pub async fn bulk_set_published(
        &self,
        catalogue: &mut Catalogue,
        published: bool,
    ) -> PortfolioResult<usize> {
        let ids = Self::require_selection(catalogue)?;
        self.set_published(catalogue, &ids, published).await?;
        catalogue.selection.clear();
        Ok(ids.len())
    }

    /// Flip one project's `published` flag. Returns the new value.
    pub async fn toggle_published(
        &self,
        catalogue: &mut Catalogue,
        id: &ProjectId,
    ) -> PortfolioResult<bool> {
        let current = catalogue
            .get(id)
            .map(|item| item.published)
            .ok_or_else(|| PortfolioError::NotFound(id.to_string()))?;
        self.set_published(catalogue, std::slice::from_ref(id), !current)
            .await?;
        Ok(!current)
    }

    async fn set_published(
        &self,
        catalogue: &mut Catalogue,
        ids: &[ProjectId],
        published: bool,
    ) -> PortfolioResult<()> {
        let snapshot = catalogue.clone();
        catalogue.set_published(ids, published);

        if let Err(e) = self.store.set_published(ids, published).await {
            error!(count = ids.len(), published, "Publish change failed: {}", e);
            self.recover(catalogue, snapshot, &e).await;
            return Err(e);
        }

        info!(count = ids.len(), published, "Publish state changed");
        let verb = if published { "Published" } else { "Unpublished" };
        for id in ids {
            self.record(format!("{} \"{}\"", verb, catalogue.title_of(id)));
        }
        Ok(())
    }

    /// Move the item at `from` to `to` in the reorderable list and persist
    /// contiguous `order` values for the whole list.
    pub async fn apply_reorder(
        &self,
        catalogue: &mut Catalogue,
        from: usize,
        to: usize,
    ) -> PortfolioResult<()> {
        let list = catalogue.reorderable();
        if from >= list.len() || to >= list.len() {
            return Err(PortfolioError::Validation(format!(
                "Cannot move position {} to {} in a list of {}",
                from,
                to,
                list.len()
            )));
        }
        if from == to {
            return Ok(());
        }

        let arranged = reorder(&list, from, to);
        let orders = order_assignments(&arranged);
        let snapshot = catalogue.clone();
        catalogue.apply_orders(&orders);

        if let Err(e) = self.store.set_order(&orders).await {
            error!(count = orders.len(), "Reorder failed: {}", e);
            *catalogue = snapshot;
            self.reload(catalogue).await;
            return Err(e);
        }

        info!(count = orders.len(), "Catalogue reordered");
        self.record(format!("Reordered {} projects", orders.len()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::RawProject;
    use crate::persist::MemoryKv;
    use crate::store::MemoryStore;

    fn raw(id: &str, created: &str, published: bool) -> RawProject {
        RawProject {
            id: Some(id.into()),
            created_at: Some(created.into()),
            title: Some(format!("Title {}", id)),
            category: Some("wedding".into()),
            published: Some(published),
            image_ref: Some("image-abc-30x20-jpg".into()),
            ..Default::default()
        }
    }

    fn service(store: Arc<MemoryStore>) -> AdminService<MemoryStore, MemoryKv> {
        AdminService::new(store, ImageUrlBuilder::new("p", "d"), MemoryKv::new())
    }

    fn seeded() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::with_documents(vec![
            raw("a", "2024-01-01T00:00:00Z", true),
            raw("b", "2024-01-02T00:00:00Z", false),
            raw("c", "2024-01-03T00:00:00Z", true),
        ]))
    }

    #[tokio::test]
    async fn test_load_includes_drafts_newest_first() {
        let svc = service(seeded());
        let mut cat = Catalogue::new();
        svc.load(&mut cat).await.unwrap();
        let ids: Vec<_> = cat.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_toggle_published_logs() {
        let svc = service(seeded());
        let mut cat = Catalogue::new();
        svc.load(&mut cat).await.unwrap();

        let now = svc.toggle_published(&mut cat, &"b".into()).await.unwrap();
        assert!(now);
        assert!(cat.get(&"b".into()).unwrap().published);
        assert_eq!(svc.activity()[0].message, "Published \"Title b\"");
    }

    #[tokio::test]
    async fn test_failed_publish_restores_state() {
        let store = seeded();
        let svc = service(store.clone());
        let mut cat = Catalogue::new();
        svc.load(&mut cat).await.unwrap();
        cat.selection.toggle(&"a".into());

        store.fail_next_write("boom");
        let err = svc.bulk_set_published(&mut cat, false).await.unwrap_err();
        assert!(matches!(err, PortfolioError::Query(_)));
        assert!(cat.get(&"a".into()).unwrap().published);
        assert_eq!(cat.selection.len(), 1);
        assert!(svc.activity().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_requires_selection() {
        let svc = service(seeded());
        let mut cat = Catalogue::new();
        svc.load(&mut cat).await.unwrap();
        let err = svc.bulk_delete(&mut cat).await.unwrap_err();
        assert!(matches!(err, PortfolioError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_without_pending_is_noop() {
        let store = seeded();
        let svc = service(store.clone());
        let mut cat = Catalogue::new();
        svc.load(&mut cat).await.unwrap();
        assert_eq!(svc.delete_confirmed(&mut cat).await.unwrap(), None);
        assert_eq!(store.transaction_count(), 0);
    }

    #[tokio::test]
    async fn test_reorder_rejects_bad_positions() {
        let svc = service(seeded());
        let mut cat = Catalogue::new();
        svc.load(&mut cat).await.unwrap();
        assert!(svc.apply_reorder(&mut cat, 0, 9).await.is_err());
    }

    #[tokio::test]
    async fn test_update_rejects_blank_title() {
        let svc = service(seeded());
        let mut cat = Catalogue::new();
        let patch = ProjectPatch {
            title: Some("   ".into()),
            ..Default::default()
        };
        let err = svc.update(&mut cat, &"a".into(), patch).await.unwrap_err();
        assert!(matches!(err, PortfolioError::Validation(_)));
    }
}
