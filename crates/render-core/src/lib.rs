//! Core rendering abstractions.
//!
//! This crate provides the seam between layout and output backends:
//! - `DocumentRenderer` trait for turning a laid-out document into bytes
//! - Error types for rendering operations
//! - Shared text encoding helpers

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::DocumentRenderer;
