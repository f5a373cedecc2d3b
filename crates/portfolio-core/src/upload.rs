//! Image file intake for the admin form.
//!
//! Files are sniffed with the `image` crate so a non-image never reaches
//! the store, and the content type sent with the upload matches the bytes.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader};

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::ImageUpload;

/// Formats the portfolio accepts.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

fn content_type_for(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::WebP => Some("image/webp"),
        _ => None,
    }
}

impl ImageUpload {
    /// Validate raw bytes as an accepted image.
    pub fn from_bytes(filename: impl Into<String>, bytes: Vec<u8>) -> PortfolioResult<Self> {
        let filename = filename.into();
        let format = image::guess_format(&bytes).map_err(|_| {
            PortfolioError::Validation(format!("{} is not a recognised image", filename))
        })?;
        let content_type = content_type_for(format).ok_or_else(|| {
            PortfolioError::Validation(format!(
                "{} must be a PNG, JPEG or WebP image",
                filename
            ))
        })?;

        Ok(Self {
            filename,
            content_type: content_type.to_string(),
            bytes,
        })
    }

    /// Read and validate a file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        Self::from_bytes(filename, bytes)
    }

    /// Pixel dimensions read from the image header.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        ImageReader::new(Cursor::new(&self.bytes))
            .with_guessed_format()
            .ok()?
            .into_dimensions()
            .ok()
    }

    /// File extension matching the content type.
    pub fn extension(&self) -> &'static str {
        match self.content_type.as_str() {
            "image/png" => "png",
            "image/webp" => "webp",
            _ => "jpg",
        }
    }

    /// `data:` URI for a local preview before upload.
    pub fn data_uri(&self) -> String {
        use base64::Engine;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.content_type, encoded)
    }
}
