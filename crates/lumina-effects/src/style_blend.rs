//! Reference-style color blending used by the style transfer tool.

use lumina_core::{Execution, LuminaError, RasterBuffer, Result, BYTES_PER_PIXEL};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fraction of blend strength subtracted from the content weight.
///
/// Content keeps `1 - 0.3 * s` of its value, so even at full strength the
/// result is 70% content plus 100% style.
pub const CONTENT_FALLOFF: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleBlendParams {
    /// Blend strength in `[0, 1]`.
    pub strength: f32,
}

impl Default for StyleBlendParams {
    fn default() -> Self {
        Self { strength: 0.7 }
    }
}

impl StyleBlendParams {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.strength) {
            return Err(LuminaError::InvalidParameter(format!(
                "style strength must be within [0, 1], got {}",
                self.strength
            )));
        }
        Ok(())
    }

    /// `(content_weight, style_weight)` for this strength.
    pub fn weights(&self) -> (f64, f64) {
        let s = self.strength as f64;
        (1.0 - CONTENT_FALLOFF * s, s)
    }
}

/// Nearest-neighbor source index: `floor(dst * src_len / dst_len)`.
#[inline]
fn sample_index(dst: u32, dst_len: u32, src_len: u32) -> u32 {
    (dst as u64 * src_len as u64 / dst_len as u64) as u32
}

/// Blend a nearest-neighbor resampling of `style` into `content`.
///
/// Each RGB channel becomes `content * (1 - 0.3 s) + style * s`, rounded
/// and clamped to `[0, 255]`. Alpha is taken from `content`. The output
/// has the content's dimensions whatever the style's size.
pub fn blend_style(
    content: &RasterBuffer,
    style: &RasterBuffer,
    params: &StyleBlendParams,
    exec: Execution,
) -> Result<RasterBuffer> {
    params.validate()?;
    debug!(
        content_w = content.width(),
        content_h = content.height(),
        style_w = style.width(),
        style_h = style.height(),
        strength = params.strength,
        "style blend"
    );

    let (cw, ch) = content.dimensions();
    let (sw, sh) = style.dimensions();
    let (content_weight, style_weight) = params.weights();
    let mut output = content.clone();
    let stride = output.stride();

    exec.for_each_row(output.as_bytes_mut(), stride, |y, row| {
        let sy = sample_index(y as u32, ch, sh);
        for x in 0..cw {
            let sx = sample_index(x, cw, sw);
            let s = style.pixel(sx, sy);
            let i = x as usize * BYTES_PER_PIXEL;
            for c in 0..3 {
                let v = row[i + c] as f64 * content_weight + s[c] as f64 * style_weight;
                row[i + c] = v.round().clamp(0.0, 255.0) as u8;
            }
        }
    });
    Ok(output)
}
