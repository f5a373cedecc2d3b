//! Image URL derivation.
//!
//! A stored image is referenced by its asset id, e.g.
//! `image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg`. Renditions are plain
//! CDN URLs with transformation parameters, so the same asset and rendition
//! always produce the same string and can be cached by URL.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PortfolioError, PortfolioResult};

const IMAGE_CDN: &str = "https://cdn.sanity.io/images";

/// Reference to an image asset in the content store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(pub String);

/// Decomposed asset id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetParts<'a> {
    pub hash: &'a str,
    pub width: u32,
    pub height: u32,
    pub extension: &'a str,
}

impl AssetRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split `image-<hash>-<w>x<h>-<ext>` into its parts.
    pub fn parts(&self) -> PortfolioResult<AssetParts<'_>> {
        let invalid = || PortfolioError::InvalidAssetRef(self.0.clone());

        let rest = self.0.strip_prefix("image-").ok_or_else(invalid)?;
        let (rest, extension) = rest.rsplit_once('-').ok_or_else(invalid)?;
        let (hash, dims) = rest.rsplit_once('-').ok_or_else(invalid)?;
        let (w, h) = dims.split_once('x').ok_or_else(invalid)?;

        let width = w.parse::<u32>().map_err(|_| invalid())?;
        let height = h.parse::<u32>().map_err(|_| invalid())?;

        if hash.is_empty() || extension.is_empty() || width == 0 || height == 0 {
            return Err(invalid());
        }

        Ok(AssetParts {
            hash,
            width,
            height,
            extension,
        })
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the image is fitted into the requested box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Clip,
    Crop,
    Max,
}

impl Fit {
    fn as_param(&self) -> &'static str {
        match self {
            Fit::Clip => "clip",
            Fit::Crop => "crop",
            Fit::Max => "max",
        }
    }
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Webp,
    Jpg,
    Png,
    /// Let the CDN pick the best format for the client
    Auto,
}

/// Parameters for one rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenditionSpec {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fit: Option<Fit>,
    pub format: Option<Format>,
    pub quality: Option<u8>,
}

impl RenditionSpec {
    /// Grid thumbnail
    pub const THUMBNAIL: RenditionSpec = RenditionSpec {
        width: Some(900),
        height: None,
        fit: None,
        format: Some(Format::Webp),
        quality: Some(80),
    };

    pub const MEDIUM: RenditionSpec = RenditionSpec {
        width: Some(1400),
        height: None,
        fit: None,
        format: Some(Format::Webp),
        quality: Some(85),
    };

    /// Lightbox / full-screen viewer
    pub const FULL: RenditionSpec = RenditionSpec {
        width: Some(1800),
        height: None,
        fit: None,
        format: Some(Format::Webp),
        quality: Some(90),
    };

    /// Admin dashboard card
    pub const ADMIN_CARD: RenditionSpec = RenditionSpec {
        width: Some(400),
        height: Some(300),
        fit: Some(Fit::Crop),
        format: Some(Format::Auto),
        quality: None,
    };

    fn query_string(&self) -> String {
        let mut params: Vec<String> = Vec::with_capacity(5);
        if let Some(w) = self.width {
            params.push(format!("w={}", w));
        }
        if let Some(h) = self.height {
            params.push(format!("h={}", h));
        }
        if let Some(fit) = self.fit {
            params.push(format!("fit={}", fit.as_param()));
        }
        match self.format {
            Some(Format::Webp) => params.push("fm=webp".to_string()),
            Some(Format::Jpg) => params.push("fm=jpg".to_string()),
            Some(Format::Png) => params.push("fm=png".to_string()),
            Some(Format::Auto) => params.push("auto=format".to_string()),
            None => {}
        }
        if let Some(q) = self.quality {
            params.push(format!("q={}", q.min(100)));
        }
        params.join("&")
    }
}

/// Builds rendition URLs for one project/dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    /// URL of the untransformed source image.
    pub fn source_url(&self, asset: &AssetRef) -> PortfolioResult<String> {
        let parts = asset.parts()?;
        Ok(format!(
            "{}/{}/{}/{}-{}x{}.{}",
            IMAGE_CDN,
            urlencoding::encode(&self.project_id),
            urlencoding::encode(&self.dataset),
            parts.hash,
            parts.width,
            parts.height,
            parts.extension
        ))
    }

    /// URL of a rendition. Deterministic for equal inputs.
    pub fn url(&self, asset: &AssetRef, spec: &RenditionSpec) -> PortfolioResult<String> {
        let base = self.source_url(asset)?;
        let query = spec.query_string();
        if query.is_empty() {
            Ok(base)
        } else {
            Ok(format!("{}?{}", base, query))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset() -> AssetRef {
        AssetRef::new("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg")
    }

    #[test]
    fn test_parts() {
        let a = asset();
        let parts = a.parts().unwrap();
        assert_eq!(parts.hash, "Tb9Ew8CXIwaY6R1kjMvI0uRR");
        assert_eq!(parts.width, 2000);
        assert_eq!(parts.height, 3000);
        assert_eq!(parts.extension, "jpg");
    }

    #[test]
    fn test_malformed_refs_rejected() {
        for bad in ["", "file-abc-1x1-pdf", "image-abc", "image-abc-axb-jpg", "image--10x10-jpg", "image-abc-0x10-png"] {
            assert!(AssetRef::new(bad).parts().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_thumbnail_url() {
        let builder = ImageUrlBuilder::new("38uy7m8l", "production");
        let url = builder.url(&asset(), &RenditionSpec::THUMBNAIL).unwrap();
        assert_eq!(
            url,
            "https://cdn.sanity.io/images/38uy7m8l/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg?w=900&fm=webp&q=80"
        );
    }

    #[test]
    fn test_admin_card_url() {
        let builder = ImageUrlBuilder::new("p", "d");
        let url = builder.url(&asset(), &RenditionSpec::ADMIN_CARD).unwrap();
        assert!(url.ends_with("?w=400&h=300&fit=crop&auto=format"));
    }

    #[test]
    fn test_url_is_deterministic() {
        let builder = ImageUrlBuilder::new("p", "d");
        let a = builder.url(&asset(), &RenditionSpec::FULL).unwrap();
        let b = builder.url(&asset(), &RenditionSpec::FULL).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, builder.url(&asset(), &RenditionSpec::THUMBNAIL).unwrap());
    }

    #[test]
    fn test_empty_spec_is_source_url() {
        let builder = ImageUrlBuilder::new("p", "d");
        assert_eq!(
            builder.url(&asset(), &RenditionSpec::default()).unwrap(),
            builder.source_url(&asset()).unwrap()
        );
    }
}
