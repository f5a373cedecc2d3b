//! Admin catalogue manager.
//!
//! [`Catalogue`] is plain state the dashboard renders from; [`AdminService`]
//! carries out writes against a [`ContentStore`](crate::store::ContentStore)
//! and keeps the activity log.

mod catalogue;
mod confirm;
mod reorder;
mod selection;
mod service;

pub use catalogue::Catalogue;
pub use confirm::DeleteConfirm;
pub use reorder::{order_assignments, reorder};
pub use selection::Selection;
pub use service::AdminService;
