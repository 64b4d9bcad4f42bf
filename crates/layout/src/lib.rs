//! Absolute-coordinate layout for fixed business forms.
//!
//! A [`PageCanvas`] owns a single vertical cursor that starts at the top
//! margin and only moves down. Section shapes in [`sections`] claim bands
//! below the cursor and emit [`LayoutElement`]s; the renderer crates turn the
//! resulting [`LaidOutDocument`] into bytes.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Image decode failed: {0}")]
    ImageDecode(String),
    #[error("Image has no pixels ({0}x{1})")]
    EmptyImage(u32, u32),
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
}

pub mod config;
pub mod fonts;
pub mod image;
pub mod output;
pub mod page;
pub mod sections;
pub mod text;

mod elements;

pub use self::config::PageGeometry;
pub use self::elements::{ImageElement, LayoutElement, TextElement, TextStyle};
pub use self::fonts::FontWeight;
pub use self::image::{DecodedImage, ImageSource};
pub use self::output::{LaidOutDocument, LaidOutPage};
pub use self::page::PageCanvas;

pub use issue_form_types::{Color, Point, Rect, Size};
