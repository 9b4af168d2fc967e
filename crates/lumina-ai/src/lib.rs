//! Lumina AI - the image tools
//!
//! Ties the pixel transforms to the tools on the landing page:
//! - Tool catalog (titles, routes, accepted media, download names)
//! - Transform requests and the engine that dispatches them
//! - Per-tool configuration
//!
//! Despite the name, nothing here runs a model. Each tool is a
//! deterministic pixel filter; the two video tools are catalog entries
//! only and report `Unsupported`.

pub mod catalog;
pub mod config;
pub mod engine;

pub use catalog::{Operation, ToolKind};
pub use config::{ObjectRemovalConfig, ProcessingConfig, StudioConfig, StyleTransferConfig};
pub use engine::{
    SaveDefault, ToolInputs, ToolOutput, TransformEngine, TransformParams, TransformRequest,
};
