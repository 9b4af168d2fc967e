//! Encoded image resources handed to and from the UI layer.

use crate::codec;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use lumina_core::{LuminaError, RasterBuffer, Result};
use std::path::{Path, PathBuf};
use tracing::info;

const PNG_MIME: &str = "image/png";

/// An encoded image together with its MIME type.
///
/// Owns its bytes outright, so it never aliases the buffer it was
/// encoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResource {
    mime: String,
    bytes: Vec<u8>,
}

impl ImageResource {
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    /// Encode a raster buffer as a PNG resource.
    pub fn encode(buffer: &RasterBuffer) -> Result<Self> {
        Ok(Self::new(PNG_MIME, codec::encode_png(buffer)?))
    }

    /// Decode this resource into an RGBA raster buffer.
    pub fn decode(&self) -> Result<RasterBuffer> {
        codec::decode(&self.bytes)
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Render as a `data:<mime>;base64,<payload>` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }

    /// Parse a base64 data URL.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| LuminaError::Decode("not a data URL".into()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| LuminaError::Decode("data URL has no payload".into()))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| LuminaError::Decode("data URL is not base64-encoded".into()))?;
        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| LuminaError::Decode(format!("invalid base64 payload: {e}")))?;
        Ok(Self::new(mime, bytes))
    }

    /// Write the encoded bytes to `dir/filename`, returning the full path.
    pub fn save(&self, dir: &Path, filename: &str) -> Result<PathBuf> {
        let path = dir.join(filename);
        std::fs::write(&path, &self.bytes)?;
        info!("Saved {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}
