//! Single-delete confirmation.
//!
//! ```text
//! Idle ──request──▶ Confirming(id) ──cancel──▶ Idle
//!                        │
//!                        ├──confirm ok──▶ Idle (item removed)
//!                        └──confirm err─▶ Confirming(id) + error shown
//! ```

use crate::types::ProjectId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteConfirm {
    #[default]
    Idle,
    Confirming {
        id: ProjectId,
        error: Option<String>,
    },
}

impl DeleteConfirm {
    pub fn request(&mut self, id: ProjectId) {
        *self = DeleteConfirm::Confirming { id, error: None };
    }

    pub fn cancel(&mut self) {
        *self = DeleteConfirm::Idle;
    }

    pub fn pending(&self) -> Option<&ProjectId> {
        match self {
            DeleteConfirm::Confirming { id, .. } => Some(id),
            DeleteConfirm::Idle => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DeleteConfirm::Confirming { error, .. } => error.as_deref(),
            DeleteConfirm::Idle => None,
        }
    }

    pub fn succeed(&mut self) {
        *self = DeleteConfirm::Idle;
    }

    /// Keep the dialog open with `message`. No-op when idle.
    pub fn fail(&mut self, message: impl Into<String>) {
        if let DeleteConfirm::Confirming { error, .. } = self {
            *error = Some(message.into());
        }
    }
}
