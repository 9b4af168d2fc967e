//! Lumina Effects - CPU pixel effects
//!
//! Provides background keying, mask-guided smoothing (object removal)
//! and reference-style color blending. Every effect is a pure function
//! from input buffers and parameters to a fresh output buffer.

pub mod background;
pub mod inpaint;
pub mod style_blend;

pub use background::{remove_background, BackgroundKeyParams};
pub use inpaint::{smooth_masked, InpaintParams};
pub use style_blend::{blend_style, StyleBlendParams};
