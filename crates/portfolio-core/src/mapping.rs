//! Raw store record → [`GalleryItem`].
//!
//! Records come back from the store with every field optional. The mapping
//! is total: each field is validated or given an explicit fallback, and a
//! record that cannot produce a usable item yields a [`MappingError`] so the
//! loader can skip it without aborting the batch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::image_url::{AssetRef, ImageUrlBuilder, RenditionSpec};
use crate::types::{Category, GalleryItem, ProjectId, Renditions};

/// Title shown when a record has none.
pub const FALLBACK_TITLE: &str = "Portfolio image";

/// A project document exactly as the store returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProject {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "_createdAt", default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default)]
    pub order: Option<f64>,
    #[serde(rename = "imageRef", default)]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub lqip: Option<String>,
}

/// Why a record was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("record has no id")]
    MissingId,

    #[error("record {0} has no image asset")]
    MissingImage(String),

    #[error("record {id} has an unusable image asset: {reason}")]
    InvalidImage { id: String, reason: String },
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

/// Map one raw record. Never panics.
pub fn map_project(raw: RawProject, urls: &ImageUrlBuilder) -> Result<GalleryItem, MappingError> {
    let id = non_blank(raw.id).ok_or(MappingError::MissingId)?;
    let image = non_blank(raw.image_ref)
        .map(AssetRef::new)
        .ok_or_else(|| MappingError::MissingImage(id.clone()))?;

    let rendition = |spec: &RenditionSpec| {
        urls.url(&image, spec).map_err(|e| MappingError::InvalidImage {
            id: id.clone(),
            reason: e.to_string(),
        })
    };
    let renditions = Renditions {
        thumbnail: rendition(&RenditionSpec::THUMBNAIL)?,
        medium: rendition(&RenditionSpec::MEDIUM)?,
        full: rendition(&RenditionSpec::FULL)?,
    };

    Ok(GalleryItem {
        title: non_blank(raw.title).unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        description: non_blank(raw.description),
        category: raw
            .category
            .as_deref()
            .map(Category::parse)
            .unwrap_or(Category::Uncategorized),
        renditions,
        lqip: non_blank(raw.lqip),
        published: raw.published.unwrap_or(true),
        order: raw.order.filter(|o| o.is_finite()).map(|o| o.round() as i64),
        created_at: parse_timestamp(raw.created_at.as_deref()),
        image,
        id: ProjectId::new(id),
    })
}

/// Map a batch, splitting successes from per-record failures.
pub fn map_projects(
    raws: Vec<RawProject>,
    urls: &ImageUrlBuilder,
) -> (Vec<GalleryItem>, Vec<MappingError>) {
    let mut items = Vec::with_capacity(raws.len());
    let mut dropped = Vec::new();
    for raw in raws {
        match map_project(raw, urls) {
            Ok(item) => items.push(item),
            Err(e) => dropped.push(e),
        }
    }
    (items, dropped)
}
