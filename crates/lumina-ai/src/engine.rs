//! Transform requests and the engine that runs them.
//!
//! `TransformEngine::run` executes a single pixel transform on a decoded
//! buffer. `TransformEngine::process` wraps the whole tool flow: decode
//! the uploads, run the transform, encode the PNG result.

use crate::catalog::{Operation, ToolKind};
use crate::config::StudioConfig;
use lumina_color::apply_color_grade;
use lumina_core::{Execution, LuminaError, MaskBuffer, RasterBuffer, Result};
use lumina_effects::{
    blend_style, remove_background, smooth_masked, BackgroundKeyParams, InpaintParams,
    StyleBlendParams,
};
use lumina_media::ImageResource;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Operation-specific parameters.
#[derive(Debug, Clone)]
pub enum TransformParams {
    BackgroundRemove(BackgroundKeyParams),
    InpaintMask {
        mask: MaskBuffer,
        params: InpaintParams,
    },
    ColorGrade {
        prompt: String,
    },
    StyleBlend {
        style: RasterBuffer,
        params: StyleBlendParams,
    },
}

/// A single immutable transform request.
#[derive(Debug, Clone)]
pub struct TransformRequest {
    params: TransformParams,
}

impl TransformRequest {
    pub fn new(params: TransformParams) -> Self {
        Self { params }
    }

    pub fn background_remove(params: BackgroundKeyParams) -> Self {
        Self::new(TransformParams::BackgroundRemove(params))
    }

    pub fn inpaint(mask: MaskBuffer, params: InpaintParams) -> Self {
        Self::new(TransformParams::InpaintMask { mask, params })
    }

    pub fn color_grade(prompt: impl Into<String>) -> Self {
        Self::new(TransformParams::ColorGrade {
            prompt: prompt.into(),
        })
    }

    pub fn style_blend(style: RasterBuffer, strength: f32) -> Self {
        Self::new(TransformParams::StyleBlend {
            style,
            params: StyleBlendParams { strength },
        })
    }

    pub fn operation(&self) -> Operation {
        match &self.params {
            TransformParams::BackgroundRemove(_) => Operation::BackgroundRemove,
            TransformParams::InpaintMask { .. } => Operation::InpaintMask,
            TransformParams::ColorGrade { .. } => Operation::ColorGrade,
            TransformParams::StyleBlend { .. } => Operation::StyleBlend,
        }
    }

    pub fn params(&self) -> &TransformParams {
        &self.params
    }
}

/// Uploads supplied by the UI for one tool run.
#[derive(Debug, Clone, Default)]
pub struct ToolInputs {
    /// The image being edited.
    pub content: Option<ImageResource>,
    /// Reference image for style transfer.
    pub style: Option<ImageResource>,
    /// Painted selection for object removal, in content pixels.
    pub mask: Option<MaskBuffer>,
    /// Free-text prompt for scene transform.
    pub prompt: Option<String>,
    /// Slider value for style transfer; the configured strength if unset.
    pub strength: Option<f32>,
}

impl ToolInputs {
    pub fn with_content(content: ImageResource) -> Self {
        Self {
            content: Some(content),
            ..Default::default()
        }
    }
}

/// An encoded result together with its download filename.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub tool: ToolKind,
    pub resource: ImageResource,
    pub filename: &'static str,
}

impl ToolOutput {
    /// Save the result into `dir` under the tool's default filename.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        self.resource.save(dir, self.filename)
    }
}

/// Saving an encoded resource under a tool's download name.
pub trait SaveDefault {
    fn save_default(&self, dir: &Path, tool: ToolKind) -> Result<PathBuf>;
}

impl SaveDefault for ImageResource {
    fn save_default(&self, dir: &Path, tool: ToolKind) -> Result<PathBuf> {
        let filename = tool
            .default_filename()
            .ok_or_else(|| LuminaError::Unsupported(format!("{tool} has no download")))?;
        self.save(dir, filename)
    }
}

/// Runs transform requests with a fixed configuration.
pub struct TransformEngine {
    config: StudioConfig,
}

impl TransformEngine {
    pub fn new(config: StudioConfig) -> Result<Self> {
        config.validate()?;
        info!(parallel = config.processing.parallel, "Transform engine created");
        Ok(Self { config })
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    fn execution(&self) -> Execution {
        Execution::from_parallel_flag(self.config.processing.parallel)
    }

    /// Run one transform on `content`, returning a new buffer.
    ///
    /// `content` is never modified; on error no output is produced.
    pub fn run(&self, request: &TransformRequest, content: &RasterBuffer) -> Result<RasterBuffer> {
        let exec = self.execution();
        debug!(operation = ?request.operation(), "running transform");
        match request.params() {
            TransformParams::BackgroundRemove(params) => {
                Ok(remove_background(content, params, exec))
            }
            TransformParams::InpaintMask { mask, params } => {
                smooth_masked(content, mask, params, exec)
            }
            TransformParams::ColorGrade { prompt } => {
                Ok(apply_color_grade(content, prompt, exec).image)
            }
            TransformParams::StyleBlend { style, params } => {
                blend_style(content, style, params, exec)
            }
        }
    }

    /// Build the request a tool would issue for `inputs`.
    pub fn request_for(&self, tool: ToolKind, inputs: &ToolInputs) -> Result<TransformRequest> {
        let operation = tool.operation().ok_or_else(|| {
            warn!(%tool, "tool has no pixel transform");
            LuminaError::Unsupported(format!("{tool} has no image transform"))
        })?;

        match operation {
            Operation::BackgroundRemove => Ok(TransformRequest::background_remove(
                self.config.background_removal,
            )),
            Operation::InpaintMask => {
                let mask = inputs.mask.clone().ok_or_else(|| {
                    LuminaError::InvalidParameter("object removal needs a painted mask".into())
                })?;
                Ok(TransformRequest::inpaint(
                    mask,
                    self.config.object_removal.inpaint_params(),
                ))
            }
            Operation::ColorGrade => match inputs.prompt.as_deref().map(str::trim) {
                Some(prompt) if !prompt.is_empty() => Ok(TransformRequest::color_grade(prompt)),
                _ => Err(LuminaError::InvalidParameter("scene transform needs a prompt".into())),
            },
            Operation::StyleBlend => {
                let style = inputs.style.as_ref().ok_or_else(|| {
                    LuminaError::InvalidParameter(
                        "style transfer needs both content and style images".into(),
                    )
                })?;
                let style = style
                    .decode()
                    .map_err(|e| LuminaError::InvalidStyleImage(e.to_string()))?;
                let strength = inputs
                    .strength
                    .unwrap_or(self.config.style_transfer.strength);
                Ok(TransformRequest::style_blend(style, strength))
            }
        }
    }

    /// Decode the uploads, run the tool's transform and encode the result.
    pub fn process(&self, tool: ToolKind, inputs: &ToolInputs) -> Result<ToolOutput> {
        let filename = tool.default_filename().ok_or_else(|| {
            LuminaError::Unsupported(format!("{tool} produces no downloadable image"))
        })?;
        let request = self.request_for(tool, inputs)?;
        let content = inputs
            .content
            .as_ref()
            .ok_or_else(|| LuminaError::InvalidParameter(format!("{tool} needs an image")))?
            .decode()?;

        let output = self.run(&request, &content)?;
        let resource = ImageResource::encode(&output)?;
        info!(%tool, filename, bytes = resource.bytes().len(), "Tool finished");
        Ok(ToolOutput {
            tool,
            resource,
            filename,
        })
    }
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self {
            config: StudioConfig::default(),
        }
    }
}
