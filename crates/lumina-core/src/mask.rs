//! Coverage masks painted with a round brush.
//!
//! A mask has the same shape as a `RasterBuffer`, but only its alpha
//! channel carries meaning: alpha above a threshold marks the pixel as
//! selected for removal. Masks always live in the native pixel grid of
//! the image they select from; `BrushMapping` converts pointer positions
//! from a scaled-down display into that grid.

use crate::error::{LuminaError, Result};
use crate::raster::{RasterBuffer, Rgba};

/// Color painted into the mask by the brush (alpha is supplied per dab).
const BRUSH_RGB: [u8; 3] = [255, 0, 0];

/// A coverage map aligned to a content image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskBuffer {
    raster: RasterBuffer,
}

impl MaskBuffer {
    /// Create an empty (fully transparent) mask.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            raster: RasterBuffer::new(width, height)?,
        })
    }

    /// Create an empty mask matching `content`'s native dimensions.
    pub fn for_content(content: &RasterBuffer) -> Result<Self> {
        Self::new(content.width(), content.height())
    }

    /// Interpret an RGBA raster as a mask.
    pub fn from_raster(raster: RasterBuffer) -> Self {
        Self { raster }
    }

    pub fn as_raster(&self) -> &RasterBuffer {
        &self.raster
    }

    pub fn into_raster(self) -> RasterBuffer {
        self.raster
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.raster.dimensions()
    }

    /// Alpha coverage at `(x, y)`.
    #[inline]
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        self.raster.pixel(x, y)[3]
    }

    /// Set raw coverage at a single pixel.
    pub fn set_coverage(&mut self, x: u32, y: u32, alpha: u8) {
        let [r, g, b] = BRUSH_RGB;
        self.raster.set_pixel(x, y, [r, g, b, alpha]);
    }

    /// Number of pixels whose coverage exceeds `threshold`.
    pub fn selected_count(&self, threshold: u8) -> usize {
        self.raster.pixels().iter().filter(|p| p[3] > threshold).count()
    }

    /// Reset the whole mask to transparent.
    pub fn clear(&mut self) {
        self.raster.as_bytes_mut().fill(0);
    }

    /// Paint a filled disc centred at `(cx, cy)` in native pixel coordinates.
    ///
    /// A pixel is covered when its centre lies within `radius`. Coverage
    /// composites source-over, so repeated dabs only ever add coverage.
    pub fn paint_dab(&mut self, cx: f32, cy: f32, radius: f32, alpha: u8) -> Result<()> {
        validate_radius(radius)?;
        if !cx.is_finite() || !cy.is_finite() {
            return Err(LuminaError::InvalidParameter(format!(
                "brush position ({cx}, {cy}) is not finite"
            )));
        }

        let w = self.width() as i64;
        let h = self.height() as i64;
        let x0 = ((cx - radius).floor() as i64).max(0);
        let x1 = ((cx + radius).ceil() as i64).min(w - 1);
        let y0 = ((cy - radius).floor() as i64).max(0);
        let y1 = ((cy + radius).ceil() as i64).min(h - 1);
        let r2 = radius * radius;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    let px = self.raster.pixel(x as u32, y as u32);
                    self.raster
                        .set_pixel(x as u32, y as u32, composite_over(px, alpha));
                }
            }
        }
        Ok(())
    }

    /// Paint a straight stroke from `from` to `to` as a row of dabs spaced
    /// half a radius apart.
    ///
    /// The segment is clipped to the mask extent grown by `radius` first,
    /// so far-away endpoints cost no more than a stroke across the mask.
    pub fn paint_stroke(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        radius: f32,
        alpha: u8,
    ) -> Result<()> {
        validate_radius(radius)?;
        validate_point(from)?;
        validate_point(to)?;

        let bounds = (
            -radius as f64,
            -radius as f64,
            self.width() as f64 + radius as f64,
            self.height() as f64 + radius as f64,
        );
        let Some((from, to)) = clip_segment(from, to, bounds) else {
            return Ok(());
        };

        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let length = (dx * dx + dy * dy).sqrt();
        let spacing = (radius as f64 * 0.5).max(0.5);
        let steps = (length / spacing).ceil() as u32;

        if steps == 0 {
            return self.paint_dab(from.0 as f32, from.1 as f32, radius, alpha);
        }
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = (from.0 + dx * t) as f32;
            let y = (from.1 + dy * t) as f32;
            self.paint_dab(x, y, radius, alpha)?;
        }
        Ok(())
    }
}

fn validate_point(p: (f32, f32)) -> Result<()> {
    if !p.0.is_finite() || !p.1.is_finite() {
        return Err(LuminaError::InvalidParameter(format!(
            "brush position ({}, {}) is not finite",
            p.0, p.1
        )));
    }
    Ok(())
}

type Segment = ((f64, f64), (f64, f64));

/// Liang-Barsky clip of a segment against `(min_x, min_y, max_x, max_y)`.
/// `None` when the segment lies entirely outside.
fn clip_segment(
    from: (f32, f32),
    to: (f32, f32),
    bounds: (f64, f64, f64, f64),
) -> Option<Segment> {
    let (x0, y0) = (from.0 as f64, from.1 as f64);
    let (dx, dy) = (to.0 as f64 - x0, to.1 as f64 - y0);
    let (min_x, min_y, max_x, max_y) = bounds;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    for (p, q) in [
        (-dx, x0 - min_x),
        (dx, max_x - x0),
        (-dy, y0 - min_y),
        (dy, max_y - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
        }
    }
    if t0 > t1 {
        return None;
    }
    Some(((x0 + dx * t0, y0 + dy * t0), (x0 + dx * t1, y0 + dy * t1)))
}

fn validate_radius(radius: f32) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(LuminaError::InvalidParameter(format!(
            "brush radius must be positive, got {radius}"
        )));
    }
    Ok(())
}

/// Source-over alpha compositing of the brush color onto `dst`.
fn composite_over(dst: Rgba, alpha: u8) -> Rgba {
    let src_a = alpha as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    let [r, g, b] = BRUSH_RGB;
    [r, g, b, (out_a * 255.0).round().clamp(0.0, 255.0) as u8]
}

/// Maps pointer coordinates on a displayed (possibly scaled) image to the
/// image's native pixel grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushMapping {
    scale_x: f32,
    scale_y: f32,
}

impl BrushMapping {
    pub fn new(display: (f32, f32), native: (u32, u32)) -> Result<Self> {
        let (dw, dh) = display;
        if !(dw.is_finite() && dh.is_finite() && dw > 0.0 && dh > 0.0) {
            return Err(LuminaError::InvalidParameter(format!(
                "display size must be positive, got {dw}x{dh}"
            )));
        }
        if native.0 == 0 || native.1 == 0 {
            return Err(LuminaError::InvalidParameter(format!(
                "native size must be non-zero, got {}x{}",
                native.0, native.1
            )));
        }
        Ok(Self {
            scale_x: native.0 as f32 / dw,
            scale_y: native.1 as f32 / dh,
        })
    }

    /// Convert a display-space point to native pixel coordinates.
    pub fn to_native(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.scale_x, y * self.scale_y)
    }

    /// Convert a display-space brush radius to native pixels.
    pub fn radius_to_native(&self, radius: f32) -> f32 {
        radius * (self.scale_x + self.scale_y) * 0.5
    }
}
