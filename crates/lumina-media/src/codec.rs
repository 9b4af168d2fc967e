//! PNG/raster codec built on the `image` crate.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use lumina_core::{LuminaError, RasterBuffer, Result};
use tracing::debug;

/// Decode any supported raster image into an RGBA8 buffer.
///
/// Fails with `LuminaError::Decode` if the bytes are not a loadable
/// image or the image has a zero dimension.
pub fn decode(bytes: &[u8]) -> Result<RasterBuffer> {
    if bytes.is_empty() {
        return Err(LuminaError::Decode("empty image resource".into()));
    }
    let image = image::load_from_memory(bytes)
        .map_err(|e| LuminaError::Decode(e.to_string()))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(LuminaError::Decode(format!(
            "image has zero size ({width}x{height})"
        )));
    }
    debug!(width, height, "decoded image");
    RasterBuffer::from_rgba(width, height, image.into_raw())
}

/// Encode a buffer as RGBA8 PNG bytes.
pub fn encode_png(buffer: &RasterBuffer) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            buffer.as_bytes(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| LuminaError::Encode(e.to_string()))?;
    debug!(
        width = buffer.width(),
        height = buffer.height(),
        bytes = out.len(),
        "encoded PNG"
    );
    Ok(out)
}
