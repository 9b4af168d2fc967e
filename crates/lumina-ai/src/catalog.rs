//! The six tools offered on the landing page.

use lumina_media::MediaKind;
use serde::{Deserialize, Serialize};

/// A pixel transform the engine knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    BackgroundRemove,
    InpaintMask,
    ColorGrade,
    StyleBlend,
}

/// A user-facing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    BackgroundRemoval,
    ObjectRemoval,
    StyleTransfer,
    VideoUpscaler,
    SceneTransform,
    SceneDetection,
}

impl ToolKind {
    /// All tools in landing-page order.
    pub const ALL: [ToolKind; 6] = [
        Self::BackgroundRemoval,
        Self::ObjectRemoval,
        Self::StyleTransfer,
        Self::VideoUpscaler,
        Self::SceneTransform,
        Self::SceneDetection,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::BackgroundRemoval => "Background Remover",
            Self::ObjectRemoval => "Object Removal",
            Self::StyleTransfer => "Style Transfer",
            Self::VideoUpscaler => "Video Upscaler",
            Self::SceneTransform => "Scene Transform",
            Self::SceneDetection => "Scene Detection",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::BackgroundRemoval => "Remove backgrounds from images",
            Self::ObjectRemoval => "Erase unwanted objects from images",
            Self::StyleTransfer => "Apply artistic styles to your images",
            Self::VideoUpscaler => "Enhance video quality with upscaling",
            Self::SceneTransform => "Transform scenes with text prompts",
            Self::SceneDetection => "Detect and cut video scenes",
        }
    }

    /// Route segment, e.g. `background-remover`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::BackgroundRemoval => "background-remover",
            Self::ObjectRemoval => "object-removal",
            Self::StyleTransfer => "style-transfer",
            Self::VideoUpscaler => "video-upscaler",
            Self::SceneTransform => "scene-transform",
            Self::SceneDetection => "scene-detection",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }

    /// Media the tool accepts as upload.
    pub fn media_kind(self) -> MediaKind {
        match self {
            Self::VideoUpscaler | Self::SceneDetection => MediaKind::Video,
            _ => MediaKind::Image,
        }
    }

    /// Filename offered when downloading the result.
    pub fn default_filename(self) -> Option<&'static str> {
        match self {
            Self::BackgroundRemoval => Some("background-removed.png"),
            Self::ObjectRemoval => Some("object-removed.png"),
            Self::StyleTransfer => Some("style-transfer-result.png"),
            Self::VideoUpscaler => Some("upscaled-video.mp4"),
            Self::SceneTransform => Some("scene-transformed.png"),
            Self::SceneDetection => None,
        }
    }

    /// The pixel transform backing this tool, if any.
    pub fn operation(self) -> Option<Operation> {
        match self {
            Self::BackgroundRemoval => Some(Operation::BackgroundRemove),
            Self::ObjectRemoval => Some(Operation::InpaintMask),
            Self::StyleTransfer => Some(Operation::StyleBlend),
            Self::SceneTransform => Some(Operation::ColorGrade),
            Self::VideoUpscaler | Self::SceneDetection => None,
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
