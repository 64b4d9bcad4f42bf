//! PDF renderer using lopdf.
//!
//! Text is set in the base-14 Helvetica faces, so nothing is embedded except
//! raster images. Each distinct image is written once per document.

mod helpers;
mod renderer;

pub use helpers::{ImageRegistry, font_dictionary, font_resource_name, render_page_content};
pub use renderer::LopdfRenderer;
