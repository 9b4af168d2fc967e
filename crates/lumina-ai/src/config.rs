//! Per-tool settings, loadable from JSON.

use lumina_core::{BrushMapping, LuminaError, MaskBuffer, Result};
use lumina_effects::{BackgroundKeyParams, InpaintParams, StyleBlendParams};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for every tool the engine runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub processing: ProcessingConfig,
    pub background_removal: BackgroundKeyParams,
    pub object_removal: ObjectRemovalConfig,
    pub style_transfer: StyleTransferConfig,
}

impl StudioConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LuminaError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LuminaError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.object_removal.radius == 0 {
            return Err(LuminaError::Config(
                "object_removal.radius must be at least 1".into(),
            ));
        }
        if !(self.object_removal.brush_radius.is_finite() && self.object_removal.brush_radius > 0.0)
        {
            return Err(LuminaError::Config(format!(
                "object_removal.brush_radius must be positive, got {}",
                self.object_removal.brush_radius
            )));
        }
        StyleBlendParams {
            strength: self.style_transfer.strength,
        }
        .validate()
        .map_err(|e| LuminaError::Config(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Spread rows over the rayon pool.
    pub parallel: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectRemovalConfig {
    /// Smoothing window radius (2 → 5x5).
    pub radius: u32,
    /// Mask alpha above this is selected.
    pub mask_threshold: u8,
    /// Brush radius in display pixels.
    pub brush_radius: f32,
    /// Alpha each brush dab lays down.
    pub brush_alpha: u8,
}

impl Default for ObjectRemovalConfig {
    fn default() -> Self {
        let inpaint = InpaintParams::default();
        Self {
            radius: inpaint.radius,
            mask_threshold: inpaint.mask_threshold,
            brush_radius: 10.0,
            brush_alpha: 128,
        }
    }
}

impl ObjectRemovalConfig {
    pub fn inpaint_params(&self) -> InpaintParams {
        InpaintParams {
            radius: self.radius,
            mask_threshold: self.mask_threshold,
        }
    }

    /// Paint a pointer stroke given in display coordinates into `mask`
    /// with the configured brush.
    pub fn paint_stroke(
        &self,
        mask: &mut MaskBuffer,
        mapping: &BrushMapping,
        from: (f32, f32),
        to: (f32, f32),
    ) -> Result<()> {
        mask.paint_stroke(
            mapping.to_native(from.0, from.1),
            mapping.to_native(to.0, to.1),
            mapping.radius_to_native(self.brush_radius),
            self.brush_alpha,
        )
    }

    /// Paint a single brush dab at a display-space pointer position.
    pub fn paint_dab(
        &self,
        mask: &mut MaskBuffer,
        mapping: &BrushMapping,
        at: (f32, f32),
    ) -> Result<()> {
        let (x, y) = mapping.to_native(at.0, at.1);
        mask.paint_dab(x, y, mapping.radius_to_native(self.brush_radius), self.brush_alpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTransferConfig {
    pub strength: f32,
}

impl StyleTransferConfig {
    pub const MIN_STRENGTH: f32 = 0.1;
    pub const MAX_STRENGTH: f32 = 1.0;
    pub const STRENGTH_STEP: f32 = 0.1;

    /// Clamp to the slider range and round to the nearest step.
    pub fn snap_strength(value: f32) -> f32 {
        if value.is_nan() {
            return StyleBlendParams::default().strength;
        }
        let clamped = value.clamp(Self::MIN_STRENGTH, Self::MAX_STRENGTH);
        let steps = (clamped / Self::STRENGTH_STEP).round();
        (steps * Self::STRENGTH_STEP).clamp(Self::MIN_STRENGTH, Self::MAX_STRENGTH)
    }

    /// Set strength from a slider value.
    pub fn set_strength(&mut self, value: f32) {
        self.strength = Self::snap_strength(value);
    }

    pub fn reset_strength(&mut self) {
        *self = Self::default();
    }

    pub fn blend_params(&self) -> StyleBlendParams {
        StyleBlendParams {
            strength: self.strength,
        }
    }
}

impl Default for StyleTransferConfig {
    fn default() -> Self {
        Self {
            strength: StyleBlendParams::default().strength,
        }
    }
}
