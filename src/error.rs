// src/error.rs
use issue_form_layout::LayoutError;
use issue_form_render_core::RenderError;
use issue_form_traits::ResourceError;
use thiserror::Error;

/// A comprehensive error type for form generation.
///
/// Missing fields, undecodable logos and table overflow are never errors;
/// they degrade inside the document instead.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Document generation failed: {0}")]
    Render(#[from] RenderError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),

    #[error("Snapshot is invalid: {0}")]
    InvalidSnapshot(String),
}
