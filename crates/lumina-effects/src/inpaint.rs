//! Mask-guided smoothing used by the object removal tool.
//!
//! Every selected pixel is replaced by the inverse-distance-weighted mean
//! of the unselected pixels in its `(2k+1) x (2k+1)` window. This is one
//! pass only: the interior of a large selection keeps its original color
//! because it has no unselected neighbors.

use lumina_core::{Execution, LuminaError, MaskBuffer, RasterBuffer, Result, BYTES_PER_PIXEL};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters for mask-guided smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InpaintParams {
    /// Neighborhood radius `k`; the window is `(2k+1)` pixels square.
    pub radius: u32,
    /// Mask alpha strictly above this marks a pixel as selected.
    pub mask_threshold: u8,
}

impl Default for InpaintParams {
    fn default() -> Self {
        Self {
            radius: 2,
            mask_threshold: 128,
        }
    }
}

/// Weight of a neighbor at offset `(dx, dy)`.
#[inline]
fn neighbor_weight(dx: i64, dy: i64) -> f64 {
    1.0 / (dx.abs() + dy.abs() + 1) as f64
}

/// Replace selected pixels with a weighted mean of their unselected
/// neighbors.
///
/// Pixels within `radius` of any edge are never rewritten, and alpha is
/// never modified. Fails with `DimensionMismatch` if the mask is not the
/// content's native size.
pub fn smooth_masked(
    content: &RasterBuffer,
    mask: &MaskBuffer,
    params: &InpaintParams,
    exec: Execution,
) -> Result<RasterBuffer> {
    content.ensure_same_size(mask.dimensions())?;
    if params.radius == 0 {
        return Err(LuminaError::InvalidParameter(
            "inpaint radius must be at least 1".into(),
        ));
    }
    debug!(
        width = content.width(),
        height = content.height(),
        radius = params.radius,
        threshold = params.mask_threshold,
        "mask-guided smoothing"
    );

    let (w, h) = (content.width() as i64, content.height() as i64);
    let k = params.radius as i64;
    let t = params.mask_threshold;
    let mut output = content.clone();
    if w <= 2 * k || h <= 2 * k {
        return Ok(output);
    }

    let stride = output.stride();
    exec.for_each_row(output.as_bytes_mut(), stride, |y, row| {
        let y = y as i64;
        if y < k || y >= h - k {
            return;
        }
        for x in k..w - k {
            if mask.coverage(x as u32, y as u32) <= t {
                continue;
            }
            let mut acc = [0.0f64; 3];
            let mut total = 0.0f64;
            for dy in -k..=k {
                for dx in -k..=k {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let (nx, ny) = ((x + dx) as u32, (y + dy) as u32);
                    if mask.coverage(nx, ny) > t {
                        continue;
                    }
                    let wgt = neighbor_weight(dx, dy);
                    let px = content.pixel(nx, ny);
                    acc[0] += px[0] as f64 * wgt;
                    acc[1] += px[1] as f64 * wgt;
                    acc[2] += px[2] as f64 * wgt;
                    total += wgt;
                }
            }
            if total == 0.0 {
                continue;
            }
            let i = x as usize * BYTES_PER_PIXEL;
            for c in 0..3 {
                row[i + c] = (acc[c] / total).round().clamp(0.0, 255.0) as u8;
            }
        }
    });
    Ok(output)
}
