//! In-process content store.
//!
//! Mirrors the remote store's query and transaction semantics closely enough
//! to drive the loader and admin service in tests and in offline demo mode.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::{Mutex, RwLock};
use tracing::debug;
use ulid::Ulid;

use super::{ContentStore, FieldSet, Mutation, ProjectQuery, TransactionReceipt};
use crate::error::{PortfolioError, PortfolioResult};
use crate::image_url::AssetRef;
use crate::mapping::RawProject;
use crate::types::{ImageUpload, ProjectId};

/// Content store kept entirely in memory.
#[derive(Default)]
pub struct MemoryStore {
    docs: RwLock<Vec<RawProject>>,
    last_created: Mutex<Option<DateTime<Utc>>>,
    fail_next_read: Mutex<Option<String>>,
    fail_next_write: Mutex<Option<String>>,
    transactions: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with documents exactly as given.
    pub fn with_documents(docs: Vec<RawProject>) -> Self {
        let store = Self::new();
        *store.docs.write() = docs;
        store
    }

    /// Load documents written by [`MemoryStore::save_json`], or start from
    /// `seed()` when the file does not exist yet.
    pub fn load_json(
        path: impl AsRef<Path>,
        seed: impl FnOnce() -> Vec<RawProject>,
    ) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let docs = match std::fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No saved catalogue, seeding");
                seed()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self::with_documents(docs))
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> PortfolioResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&*self.docs.read())?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Insert a raw document, bypassing validation.
    pub fn insert_raw(&self, doc: RawProject) {
        self.docs.write().push(doc);
    }

    /// Snapshot of every stored document, in insertion order.
    pub fn documents(&self) -> Vec<RawProject> {
        self.docs.read().clone()
    }

    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }

    /// Make the next read fail with `message`.
    pub fn fail_next_read(&self, message: impl Into<String>) {
        *self.fail_next_read.lock() = Some(message.into());
    }

    /// Make the next transaction fail with `message`; nothing is applied.
    pub fn fail_next_write(&self, message: impl Into<String>) {
        *self.fail_next_write.lock() = Some(message.into());
    }

    /// Number of committed transactions.
    pub fn transaction_count(&self) -> usize {
        self.transactions.load(Ordering::SeqCst)
    }

    fn check_read(&self) -> PortfolioResult<()> {
        match self.fail_next_read.lock().take() {
            Some(msg) => Err(PortfolioError::Query(msg)),
            None => Ok(()),
        }
    }

    /// Strictly increasing creation timestamps, so ordering is stable even
    /// for documents created within the same millisecond.
    fn next_created_at(&self) -> DateTime<Utc> {
        let mut last = self.last_created.lock();
        let mut now = Utc::now();
        if let Some(prev) = *last {
            if now <= prev {
                now = prev + Duration::milliseconds(1);
            }
        }
        *last = Some(now);
        now
    }
}

fn sort_key(doc: &RawProject) -> (i64, std::cmp::Reverse<DateTime<Utc>>) {
    let order = doc
        .order
        .filter(|o| o.is_finite())
        .map(|o| o.round() as i64)
        .unwrap_or(i64::MAX);
    let created = doc
        .created_at
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_default();
    (order, std::cmp::Reverse(created))
}

fn has_image(doc: &RawProject) -> bool {
    doc.image_ref.as_deref().is_some_and(|r| !r.is_empty())
}

fn apply_set(doc: &mut RawProject, set: &FieldSet) {
    if let Some(title) = &set.title {
        doc.title = Some(title.clone());
    }
    if let Some(category) = set.category {
        doc.category = Some(category.as_str().to_string());
    }
    if let Some(description) = &set.description {
        doc.description = Some(description.clone());
    }
    if let Some(image) = &set.image {
        doc.image_ref = Some(image.as_str().to_string());
        doc.lqip = None;
    }
    if let Some(published) = set.published {
        doc.published = Some(published);
    }
    if let Some(order) = set.order {
        doc.order = Some(order as f64);
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn fetch_projects(&self, query: &ProjectQuery) -> PortfolioResult<Vec<RawProject>> {
        self.check_read()?;
        let mut docs: Vec<RawProject> = self
            .docs
            .read()
            .iter()
            .filter(|d| has_image(d))
            .filter(|d| query.include_drafts || d.published != Some(false))
            .cloned()
            .collect();
        docs.sort_by_key(sort_key);
        Ok(docs)
    }

    async fn fetch_project(&self, id: &ProjectId) -> PortfolioResult<Option<RawProject>> {
        self.check_read()?;
        Ok(self
            .docs
            .read()
            .iter()
            .find(|d| d.id.as_deref() == Some(id.as_str()))
            .cloned())
    }

    async fn upload_image(&self, upload: &ImageUpload) -> PortfolioResult<AssetRef> {
        if let Some(msg) = self.fail_next_write.lock().take() {
            return Err(PortfolioError::Query(msg));
        }
        let (width, height) = upload.dimensions().unwrap_or((1, 1));
        let hash = Ulid::new().to_string().to_lowercase();
        Ok(AssetRef::new(format!(
            "image-{}-{}x{}-{}",
            hash,
            width,
            height,
            upload.extension()
        )))
    }

    async fn mutate(&self, mutations: Vec<Mutation>) -> PortfolioResult<TransactionReceipt> {
        if let Some(msg) = self.fail_next_write.lock().take() {
            return Err(PortfolioError::Query(msg));
        }

        let mut guard = self.docs.write();
        // Work on a copy so a failing mutation leaves the store untouched
        let mut docs = guard.clone();
        let mut receipt = TransactionReceipt {
            transaction_id: Ulid::new().to_string(),
            ..Default::default()
        };

        for mutation in mutations {
            match mutation {
                Mutation::Create(doc) => {
                    let id = ProjectId::new(Ulid::new().to_string());
                    docs.push(RawProject {
                        id: Some(id.to_string()),
                        created_at: Some(self.next_created_at().to_rfc3339()),
                        title: Some(doc.title),
                        category: Some(doc.category.as_str().to_string()),
                        description: Some(doc.description),
                        published: Some(doc.published),
                        order: None,
                        image_ref: Some(doc.image.as_str().to_string()),
                        lqip: None,
                    });
                    receipt.created.push(id.clone());
                    receipt.affected.push(id);
                }
                Mutation::Patch { id, set } => {
                    let doc = docs
                        .iter_mut()
                        .find(|d| d.id.as_deref() == Some(id.as_str()))
                        .ok_or_else(|| PortfolioError::NotFound(id.to_string()))?;
                    apply_set(doc, &set);
                    receipt.affected.push(id);
                }
                Mutation::Delete(id) => {
                    let pos = docs
                        .iter()
                        .position(|d| d.id.as_deref() == Some(id.as_str()))
                        .ok_or_else(|| PortfolioError::NotFound(id.to_string()))?;
                    docs.remove(pos);
                    receipt.affected.push(id);
                }
            }
        }

        *guard = docs;
        self.transactions.fetch_add(1, Ordering::SeqCst);
        Ok(receipt)
    }
}
