//! Portfolio Core Library
//!
//! Gallery pipeline and catalogue admin for a photographer's portfolio backed
//! by a headless content store.
//!
//! ## Overview
//!
//! ```text
//! ContentStore ──▶ GalleryLoader ──▶ GalleryView (filter → sort → page) ──▶ masonry grid
//!      ▲
//!      └────────── AdminService ◀── Catalogue (selection, search, drafts, delete confirm)
//! ```
//!
//! Nothing here depends on a UI toolkit: the desktop app and the CLI both
//! drive the same types.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use portfolio_core::{GalleryLoader, GalleryView, SanityStore, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoreConfig::from_env();
//!     let store = Arc::new(SanityStore::new(config.clone())?);
//!     let loader = GalleryLoader::new(store, config.image_urls());
//!
//!     let outcome = loader.load().await?;
//!     let view = GalleryView::new();
//!     for item in view.visible(&outcome.items) {
//!         println!("{} [{}]", item.title, item.category);
//!     }
//!     Ok(())
//! }
//! ```

pub mod activity;
pub mod admin;
pub mod auth;
pub mod config;
pub mod error;
pub mod gallery;
pub mod image_url;
pub mod loader;
pub mod logging;
pub mod mapping;
pub mod masonry;
pub mod persist;
pub mod store;
pub mod types;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports
pub use activity::{ActivityEntry, ActivityLog, ACTIVITY_LOG_LIMIT};
pub use admin::{reorder, AdminService, Catalogue, DeleteConfirm, Selection};
pub use auth::AuthGate;
pub use config::{AppConfig, StoreConfig};
pub use error::{PortfolioError, PortfolioResult};
pub use gallery::{CategoryCounts, CategoryFilter, GalleryView, SortMode};
pub use image_url::{AssetRef, ImageUrlBuilder, RenditionSpec};
pub use loader::{GalleryLoader, LoadOutcome, LoadState};
pub use masonry::{columns_for_width, masonry_columns, ViewerState};
pub use persist::{KeyValueStore, MemoryKv, RedbKv};
pub use store::{ContentStore, MemoryStore, ProjectQuery, SanityStore};
pub use types::*;
