//! RGBA raster buffers in CPU memory.
//!
//! A `RasterBuffer` is tightly packed 8-bit RGBA with no row padding, so
//! the stride is always `width * 4` and rows map directly onto the byte
//! layout produced by the PNG decoder.

use crate::error::{LuminaError, Result};

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A single RGBA8 pixel.
pub type Rgba = [u8; 4];

/// Clamp a channel value to `[0, 255]` and truncate toward zero.
#[inline]
pub fn to_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// A width x height grid of RGBA8 pixels.
///
/// Both dimensions are always non-zero and `data.len()` is always
/// `width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Create a fully transparent black buffer.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, [0, 0, 0, 0])
    }

    /// Create a buffer where every pixel is `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Rgba) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        let mut data = vec![0u8; len];
        for px in data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&pixel);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap raw RGBA8 bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        if data.len() != len {
            return Err(LuminaError::InvalidParameter(format!(
                "RGBA data for {width}x{height} needs {len} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer from a per-pixel function of `(x, y)`.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgba,
    {
        let mut buffer = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                buffer.set_pixel(x, y, f(x, y));
            }
        }
        Ok(buffer)
    }

    fn checked_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(LuminaError::InvalidParameter(format!(
                "raster dimensions must be non-zero, got {width}x{height}"
            )));
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(|| {
                LuminaError::InvalidParameter(format!("raster {width}x{height} is too large"))
            })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA8 bytes in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// All pixels as RGBA quadruplets.
    pub fn pixels(&self) -> &[Rgba] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        bytemuck::cast_slice_mut(&mut self.data)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// Get the pixel at `(x, y)`.
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba) {
        let i = self.index(x, y);
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&pixel);
    }

    /// Get a row of pixel data.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride();
        &self.data[start..start + self.stride()]
    }

    /// Returns an error unless `other` has exactly these dimensions.
    pub fn ensure_same_size(&self, other: (u32, u32)) -> Result<()> {
        if self.dimensions() != other {
            return Err(LuminaError::DimensionMismatch {
                expected: self.dimensions(),
                got: other,
            });
        }
        Ok(())
    }

    /// Create a test pattern buffer (color bars).
    pub fn test_pattern(width: u32, height: u32) -> Result<Self> {
        const BARS: [Rgba; 8] = [
            [255, 255, 255, 255], // White
            [255, 255, 0, 255],   // Yellow
            [0, 255, 255, 255],   // Cyan
            [0, 255, 0, 255],     // Green
            [255, 0, 255, 255],   // Magenta
            [255, 0, 0, 255],     // Red
            [0, 0, 255, 255],     // Blue
            [0, 0, 0, 255],       // Black
        ];
        Self::from_fn(width, height, |x, _| {
            BARS[(x as u64 * 8 / width as u64) as usize]
        })
    }
}
