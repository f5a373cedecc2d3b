//! Core types for the portfolio catalogue

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::image_url::AssetRef;

/// Opaque identifier assigned by the content store on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The fixed set of portfolio categories.
///
/// Every project carries exactly one. Anything blank or unrecognised is
/// stored as [`Category::Uncategorized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Wedding,
    Portrait,
    Commercial,
    Retouch,
    Album,
    Events,
    Photoshoots,
    Uncategorized,
}

impl Category {
    /// Categories an admin can assign, in form order.
    pub const ASSIGNABLE: [Category; 7] = [
        Category::Wedding,
        Category::Portrait,
        Category::Commercial,
        Category::Retouch,
        Category::Album,
        Category::Events,
        Category::Photoshoots,
    ];

    /// Case-insensitive, whitespace-trimmed parse. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "wedding" => Category::Wedding,
            "portrait" => Category::Portrait,
            "commercial" => Category::Commercial,
            "retouch" => Category::Retouch,
            "album" => Category::Album,
            "events" => Category::Events,
            "photoshoots" => Category::Photoshoots,
            _ => Category::Uncategorized,
        }
    }

    /// Stored value in the content store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Wedding => "wedding",
            Category::Portrait => "portrait",
            Category::Commercial => "commercial",
            Category::Retouch => "retouch",
            Category::Album => "album",
            Category::Events => "events",
            Category::Photoshoots => "photoshoots",
            Category::Uncategorized => "uncategorized",
        }
    }

    /// Human label used in the admin form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Wedding => "Wedding",
            Category::Portrait => "Portrait",
            Category::Commercial => "Commercial",
            Category::Retouch => "Editing / Retouch",
            Category::Album => "Albums",
            Category::Events => "Events",
            Category::Photoshoots => "Photoshoots",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three derived image variants of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Renditions {
    /// Grid display
    pub thumbnail: String,
    /// Mid-size variant
    pub medium: String,
    /// Expanded viewer
    pub full: String,
}

/// One portfolio entry, normalized from a raw store record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub image: AssetRef,
    pub renditions: Renditions,
    /// Low-quality inline placeholder (data URI), when the store has one
    pub lqip: Option<String>,
    pub published: bool,
    pub order: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl GalleryItem {
    /// Concatenated text used by the admin search box.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.category.as_str(),
            self.description.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }

    /// Creation date as shown on admin cards, e.g. `Jun 1, 2024`.
    pub fn created_label(&self) -> String {
        self.created_at.format("%b %-d, %Y").to_string()
    }
}

/// An image file about to be uploaded as a new asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Fields required to create a project.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub category: Category,
    pub description: Option<String>,
    pub image: ImageUpload,
}

/// A partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
    pub published: Option<bool>,
    pub order: Option<i64>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.published.is_none()
            && self.order.is_none()
    }
}
