//! Lumina Core - Foundation types for the image tools
//!
//! This crate provides the fundamental types used throughout Lumina:
//! - RGBA raster buffers and pixel accessors
//! - Coverage masks and brush painting
//! - Row-level execution (sequential or rayon-parallel)
//! - The shared error type

pub mod error;
pub mod exec;
pub mod mask;
pub mod raster;

pub use error::{LuminaError, Result};
pub use exec::Execution;
pub use mask::{BrushMapping, MaskBuffer};
pub use raster::{to_channel, RasterBuffer, Rgba, BYTES_PER_PIXEL};
