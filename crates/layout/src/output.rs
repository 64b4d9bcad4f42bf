//! Output types from the layout pass.

use crate::config::PageGeometry;
use crate::elements::{ImageElement, LayoutElement, TextElement};
use issue_form_types::Rect;

/// All primitives of one page, in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub elements: Vec<LayoutElement>,
}

impl LaidOutPage {
    pub fn texts(&self) -> impl Iterator<Item = &TextElement> {
        self.elements.iter().filter_map(|el| match el {
            LayoutElement::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageElement> {
        self.elements.iter().filter_map(|el| match el {
            LayoutElement::Image(img) => Some(img),
            _ => None,
        })
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &Rect> {
        self.elements.iter().filter_map(|el| match el {
            LayoutElement::Rectangle { rect, .. } => Some(rect),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.content == needle)
    }

    /// Lowest y reached by any primitive on the page.
    pub fn lowest_y(&self) -> Option<f32> {
        self.elements
            .iter()
            .map(|el| match el {
                LayoutElement::Rectangle { rect, .. } => rect.y,
                LayoutElement::Line { from, to } => from.y.min(to.y),
                LayoutElement::Text(t) => t.origin.y,
                LayoutElement::Image(img) => img.rect.y,
            })
            .reduce(f32::min)
    }
}

/// The complete result of laying out one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub geometry: PageGeometry,
    pub pages: Vec<LaidOutPage>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
