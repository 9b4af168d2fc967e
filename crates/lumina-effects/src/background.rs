//! Brightness/desaturation background keying.
//!
//! A pixel is keyed out (alpha set to 0) when it is very bright or close
//! to neutral gray. This is a heuristic matte, not segmentation: an image
//! that is bright everywhere becomes fully transparent.

use lumina_core::{Execution, RasterBuffer, Rgba, BYTES_PER_PIXEL};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Thresholds for the background key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundKeyParams {
    /// Mean of R, G, B above which a pixel is background.
    pub brightness_threshold: f32,
    /// Maximum |R-G| and |G-B| (exclusive) for a pixel to count as gray.
    pub gray_tolerance: i16,
}

impl Default for BackgroundKeyParams {
    fn default() -> Self {
        Self {
            brightness_threshold: 200.0,
            gray_tolerance: 30,
        }
    }
}

impl BackgroundKeyParams {
    /// Classify a single pixel. Alpha does not take part.
    #[inline]
    pub fn is_background(&self, px: Rgba) -> bool {
        let [r, g, b, _] = px;
        let brightness = (r as f32 + g as f32 + b as f32) / 3.0;
        if brightness > self.brightness_threshold {
            return true;
        }
        let (r, g, b) = (r as i16, g as i16, b as i16);
        (r - g).abs() < self.gray_tolerance && (g - b).abs() < self.gray_tolerance
    }
}

/// Zero the alpha of every background pixel; all other channels and all
/// foreground pixels are copied through untouched.
pub fn remove_background(
    input: &RasterBuffer,
    params: &BackgroundKeyParams,
    exec: Execution,
) -> RasterBuffer {
    debug!(
        width = input.width(),
        height = input.height(),
        ?params,
        "background key"
    );
    let mut output = input.clone();
    let stride = output.stride();
    exec.for_each_row(output.as_bytes_mut(), stride, |_, row| {
        for px in row.chunks_exact_mut(BYTES_PER_PIXEL) {
            if params.is_background([px[0], px[1], px[2], px[3]]) {
                px[3] = 0;
            }
        }
    });
    output
}
