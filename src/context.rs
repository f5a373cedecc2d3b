//! Service context for the portfolio app.
//!
//! Provides the content store, admin service and auth gate to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! let services = use_services();
//!
//! let shared = services();
//! let guard = shared.read().await;
//! if let Some(ref svc) = *guard {
//!     let outcome = svc.gallery_loader().load().await?;
//! }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::store::demo_documents;
use portfolio_core::{
    AdminService, AppConfig, AuthGate, ContentStore, GalleryLoader, MemoryStore,
    PortfolioResult, RedbKv, SanityStore,
};
use tokio::sync::RwLock;

/// File holding the offline catalogue inside the data directory.
const OFFLINE_CATALOGUE: &str = "offline-catalogue.json";

pub type Admin = AdminService<dyn ContentStore, Arc<RedbKv>>;

/// Everything the pages talk to.
pub struct Services {
    pub config: AppConfig,
    pub store: Arc<dyn ContentStore>,
    pub admin: Admin,
    pub auth: AuthGate<Arc<RedbKv>>,
    offline: Option<(Arc<MemoryStore>, PathBuf)>,
}

impl Services {
    pub fn open(data_dir: PathBuf, offline: bool) -> PortfolioResult<Self> {
        let config = AppConfig::from_env(data_dir);
        let kv = Arc::new(RedbKv::open(config.local_db_path())?);

        let mut offline_catalogue = None;
        let store: Arc<dyn ContentStore> = if offline {
            let path = config.data_dir.join(OFFLINE_CATALOGUE);
            let memory = Arc::new(MemoryStore::load_json(&path, demo_documents)?);
            offline_catalogue = Some((memory.clone(), path));
            memory
        } else {
            Arc::new(SanityStore::new(config.store.clone())?)
        };

        let admin = AdminService::new(store.clone(), config.store.image_urls(), kv.clone());
        let auth = AuthGate::new(config.admin_password.clone(), kv);

        Ok(Self {
            config,
            store,
            admin,
            auth,
            offline: offline_catalogue,
        })
    }

    pub fn gallery_loader(&self) -> GalleryLoader<dyn ContentStore> {
        GalleryLoader::new(self.store.clone(), self.config.store.image_urls())
    }

    /// Whether admin writes can reach the store.
    pub fn writes_enabled(&self) -> bool {
        self.offline.is_some() || self.config.store.is_admin_configured()
    }

    /// Persist the offline catalogue after a write. No-op online.
    pub fn save(&self) {
        if let Some((memory, path)) = &self.offline {
            if let Err(e) = memory.save_json(path) {
                tracing::warn!("Failed to save offline catalogue: {}", e);
            }
        }
    }
}

/// Shared services type for context.
pub type SharedServices = Arc<RwLock<Option<Services>>>;

/// Admin session flag mirrored from the auth gate for reactive rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdminSession(pub bool);

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

pub fn is_offline() -> bool {
    crate::is_offline()
}

/// Hook to access the services from context.
pub fn use_services() -> Signal<SharedServices> {
    use_context::<Signal<SharedServices>>()
}

/// Hook to check if the services are initialized.
pub fn use_services_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Startup failure message, shown instead of the pages.
pub fn use_startup_error() -> Signal<Option<String>> {
    use_context::<Signal<Option<String>>>()
}

pub fn use_admin_session() -> Signal<AdminSession> {
    use_context::<Signal<AdminSession>>()
}
