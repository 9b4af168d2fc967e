//! Lumina Media - the pixel buffer adapter
//!
//! This crate handles:
//! - Decoding uploaded images into RGBA raster buffers
//! - Encoding raster buffers back to PNG
//! - Data-URL image resources for display and download
//! - Upload MIME validation and format sniffing

pub mod codec;
pub mod resource;
pub mod validate;

pub use codec::{decode, encode_png};
pub use image::ImageFormat;
pub use resource::ImageResource;
pub use validate::{sniff_format, validate_mime, MediaKind};
