//! Upload validation.

use image::ImageFormat;
use lumina_core::{LuminaError, Result};
use serde::{Deserialize, Serialize};

/// Broad media category a tool accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Primary MIME type prefix, e.g. `image/`.
    pub fn mime_prefix(self) -> &'static str {
        match self {
            Self::Image => "image/",
            Self::Video => "video/",
        }
    }
}

/// Accept `mime` only if its primary type matches `kind`.
pub fn validate_mime(mime: &str, kind: MediaKind) -> Result<()> {
    let mime = mime.trim().to_ascii_lowercase();
    let prefix = kind.mime_prefix();
    if mime.len() > prefix.len() && mime.starts_with(prefix) {
        Ok(())
    } else {
        Err(LuminaError::Decode(format!(
            "expected a {prefix}* file, got {:?}",
            mime
        )))
    }
}

/// Identify the raster format of raw bytes from their magic number.
pub fn sniff_format(bytes: &[u8]) -> Result<ImageFormat> {
    image::guess_format(bytes).map_err(|e| LuminaError::Decode(e.to_string()))
}
