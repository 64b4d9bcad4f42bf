use crate::fonts::FontWeight;
use crate::image::DecodedImage;
use issue_form_types::{Color, Point, Rect};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub color: Color,
}

impl TextStyle {
    pub fn regular(font_size: f32) -> Self {
        Self {
            font_size,
            font_weight: FontWeight::Regular,
            color: Color::BLACK,
        }
    }

    pub fn bold(font_size: f32) -> Self {
        Self {
            font_weight: FontWeight::Bold,
            ..Self::regular(font_size)
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A left-aligned run of text. `origin` is the start of the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub origin: Point,
    pub content: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    /// Final placement, already fitted to the image's aspect ratio.
    pub rect: Rect,
    pub image: Arc<DecodedImage>,
}

/// One drawing primitive in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    /// A stroked box, optionally filled first.
    Rectangle { rect: Rect, fill: Option<Color> },
    /// A stroked straight rule.
    Line { from: Point, to: Point },
    Text(TextElement),
    Image(ImageElement),
}
