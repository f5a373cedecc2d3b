//! Fixtures shared by unit tests.

use chrono::{DateTime, Utc};

use crate::image_url::{AssetRef, ImageUrlBuilder, RenditionSpec};
use crate::types::{Category, GalleryItem, ProjectId, Renditions};

/// Published item created `created_secs` after the epoch, no explicit order.
pub fn item(id: &str, category: Category, created_secs: i64) -> GalleryItem {
    let image = AssetRef::new(format!("image-{}-800x600-jpg", id));
    let urls = ImageUrlBuilder::new("test", "production");
    let url = |spec: &RenditionSpec| urls.url(&image, spec).unwrap();
    GalleryItem {
        id: ProjectId::new(id),
        title: id.to_uppercase(),
        description: None,
        category,
        renditions: Renditions {
            thumbnail: url(&RenditionSpec::THUMBNAIL),
            medium: url(&RenditionSpec::MEDIUM),
            full: url(&RenditionSpec::FULL),
        },
        image,
        lqip: None,
        published: true,
        order: None,
        created_at: DateTime::<Utc>::from_timestamp(created_secs, 0).unwrap(),
    }
}

pub fn with_order(mut item: GalleryItem, order: i64) -> GalleryItem {
    item.order = Some(order);
    item
}

pub fn ids(items: &[GalleryItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}
