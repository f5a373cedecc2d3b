//! Content store access.
//!
//! ```text
//! ContentStore (trait)
//! ├── SanityStore   HTTP query/mutate/assets API
//! └── MemoryStore   in-process, for tests and offline demo
//! ```
//!
//! Every write goes through [`ContentStore::mutate`], which applies a list of
//! mutations as one transaction: either all of them land or none do.

mod demo;
mod memory;
mod sanity;

pub use demo::demo_documents;
pub use memory::MemoryStore;
pub use sanity::SanityStore;

use async_trait::async_trait;

use crate::error::{PortfolioError, PortfolioResult};
use crate::image_url::AssetRef;
use crate::mapping::RawProject;
use crate::types::{Category, ImageUpload, ProjectId};

/// Document type of portfolio entries in the store.
pub const PROJECT_TYPE: &str = "project";

/// Fields returned for every project.
pub const PROJECT_PROJECTION: &str = r#"{
  _id,
  _createdAt,
  title,
  category,
  description,
  published,
  order,
  "imageRef": image.asset._ref,
  "lqip": image.asset->metadata.lqip
}"#;

/// Which projects a listing should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectQuery {
    /// Include unpublished documents (admin listing)
    pub include_drafts: bool,
}

impl ProjectQuery {
    /// Published projects only.
    pub fn public() -> Self {
        Self {
            include_drafts: false,
        }
    }

    /// Published and draft projects.
    pub fn admin() -> Self {
        Self {
            include_drafts: true,
        }
    }

    /// GROQ text for this listing.
    pub fn to_groq(&self) -> String {
        let published = if self.include_drafts {
            ""
        } else {
            // A document without the flag counts as published
            " && published != false"
        };
        format!(
            "*[_type == \"{}\" && defined(image.asset){}] | order(order asc, _createdAt desc) {}",
            PROJECT_TYPE, published, PROJECT_PROJECTION
        )
    }
}

/// GROQ text for a single project by id (bound as `$id`).
pub fn project_by_id_groq() -> String {
    format!(
        "*[_type == \"{}\" && _id == $id][0] {}",
        PROJECT_TYPE, PROJECT_PROJECTION
    )
}

/// Field values to set on a document. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub image: Option<AssetRef>,
    pub published: Option<bool>,
    pub order: Option<i64>,
}

impl FieldSet {
    pub fn is_empty(&self) -> bool {
        *self == FieldSet::default()
    }
}

/// A new project document, image already uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDocument {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub image: AssetRef,
    pub published: bool,
}

/// One write inside a transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create(ProjectDocument),
    Patch { id: ProjectId, set: FieldSet },
    Delete(ProjectId),
}

impl Mutation {
    pub fn set_published(id: ProjectId, published: bool) -> Self {
        Mutation::Patch {
            id,
            set: FieldSet {
                published: Some(published),
                ..Default::default()
            },
        }
    }

    pub fn set_order(id: ProjectId, order: i64) -> Self {
        Mutation::Patch {
            id,
            set: FieldSet {
                order: Some(order),
                ..Default::default()
            },
        }
    }
}

/// What a committed transaction touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub transaction_id: String,
    /// Ids created by `Create` mutations, in order
    pub created: Vec<ProjectId>,
    /// Every id the store reports as affected
    pub affected: Vec<ProjectId>,
}

/// Access to the remote document store.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Listing query, ordered by `(order asc, createdAt desc)`.
    async fn fetch_projects(&self, query: &ProjectQuery) -> PortfolioResult<Vec<RawProject>>;

    /// Single project, or `None` when the id is unknown.
    async fn fetch_project(&self, id: &ProjectId) -> PortfolioResult<Option<RawProject>>;

    /// Store an image file as a new asset.
    async fn upload_image(&self, upload: &ImageUpload) -> PortfolioResult<AssetRef>;

    /// Apply mutations atomically.
    async fn mutate(&self, mutations: Vec<Mutation>) -> PortfolioResult<TransactionReceipt>;

    async fn create_project(&self, doc: ProjectDocument) -> PortfolioResult<ProjectId> {
        let receipt = self.mutate(vec![Mutation::Create(doc)]).await?;
        receipt
            .created
            .into_iter()
            .next()
            .ok_or_else(|| PortfolioError::Query("store did not return the created id".into()))
    }

    async fn patch_project(&self, id: &ProjectId, set: FieldSet) -> PortfolioResult<()> {
        self.mutate(vec![Mutation::Patch {
            id: id.clone(),
            set,
        }])
        .await
        .map(|_| ())
    }

    async fn delete_project(&self, id: &ProjectId) -> PortfolioResult<()> {
        self.delete_projects(std::slice::from_ref(id)).await
    }

    async fn delete_projects(&self, ids: &[ProjectId]) -> PortfolioResult<()> {
        let mutations = ids.iter().cloned().map(Mutation::Delete).collect();
        self.mutate(mutations).await.map(|_| ())
    }

    async fn set_published(&self, ids: &[ProjectId], published: bool) -> PortfolioResult<()> {
        let mutations = ids
            .iter()
            .cloned()
            .map(|id| Mutation::set_published(id, published))
            .collect();
        self.mutate(mutations).await.map(|_| ())
    }

    async fn set_order(&self, orders: &[(ProjectId, i64)]) -> PortfolioResult<()> {
        let mutations = orders
            .iter()
            .cloned()
            .map(|(id, order)| Mutation::set_order(id, order))
            .collect();
        self.mutate(mutations).await.map(|_| ())
    }
}
