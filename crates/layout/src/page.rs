use crate::config::PageGeometry;
use crate::elements::{ImageElement, LayoutElement, TextElement, TextStyle};
use crate::fonts::text_width;
use crate::image::DecodedImage;
use crate::output::LaidOutPage;
use issue_form_types::{Color, Point, Rect};
use std::sync::Arc;

/// The drawing surface for one page.
///
/// Coordinates have their origin at the bottom-left corner. The cursor starts
/// at `height - margin` and is only ever moved downwards, so sections claimed
/// through [`PageCanvas::take`] are stacked top to bottom without overlap.
#[derive(Debug)]
pub struct PageCanvas {
    geometry: PageGeometry,
    cursor: f32,
    elements: Vec<LayoutElement>,
}

impl PageCanvas {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            cursor: geometry.content_top(),
            elements: Vec::new(),
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn left(&self) -> f32 {
        self.geometry.content_left()
    }

    pub fn content_width(&self) -> f32 {
        self.geometry.content_width()
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Vertical space left between the cursor and the bottom margin.
    pub fn remaining(&self) -> f32 {
        self.cursor - self.geometry.content_bottom()
    }

    /// Claims a band of `height` points directly below the cursor and returns
    /// the y coordinate of the band's bottom edge (the new cursor).
    pub fn take(&mut self, height: f32) -> f32 {
        self.cursor -= height.max(0.0);
        self.cursor
    }

    /// Moves the cursor down without claiming a band.
    pub fn skip(&mut self, gap: f32) {
        self.take(gap);
    }

    /// A full-content-width box whose bottom edge sits at `y`.
    pub fn band(&self, y: f32, height: f32) -> Rect {
        Rect::new(self.left(), y, self.content_width(), height)
    }

    /// Column boundaries for a row split by `fractions` of the content width.
    ///
    /// The result has `fractions.len() + 1` x coordinates. The last column is
    /// always closed at the right content edge so rounding never leaves a gap.
    pub fn column_edges(&self, fractions: &[f32]) -> Vec<f32> {
        column_edges(self.left(), self.content_width(), fractions)
    }

    pub fn rect(&mut self, rect: Rect, fill: Option<Color>) {
        self.elements.push(LayoutElement::Rectangle { rect, fill });
    }

    pub fn hline(&mut self, x1: f32, x2: f32, y: f32) {
        self.elements.push(LayoutElement::Line {
            from: Point::new(x1, y),
            to: Point::new(x2, y),
        });
    }

    pub fn vline(&mut self, x: f32, y1: f32, y2: f32) {
        self.elements.push(LayoutElement::Line {
            from: Point::new(x, y1),
            to: Point::new(x, y2),
        });
    }

    /// Left-aligned text with its baseline starting at (`x`, `y`).
    pub fn text(&mut self, x: f32, y: f32, content: impl Into<String>, style: TextStyle) {
        let content = content.into();
        if content.is_empty() {
            return;
        }
        self.elements.push(LayoutElement::Text(TextElement {
            origin: Point::new(x, y),
            content,
            style,
        }));
    }

    /// Text centered horizontally within the span `x..x + width`.
    pub fn center_text(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        content: impl Into<String>,
        style: TextStyle,
    ) {
        let content = content.into();
        let measured = text_width(&content, style.font_weight, style.font_size);
        let start = x + width / 2.0 - measured / 2.0;
        self.text(start, y, content, style);
    }

    /// Places `image` inside `bounds` shrunk by `padding`, scaled to fit with
    /// its aspect ratio preserved and anchored to the bottom-left corner.
    pub fn image(&mut self, bounds: Rect, padding: f32, image: &Arc<DecodedImage>) {
        let rect = bounds.inset(padding).fit_bottom_left(image.size());
        if rect.width <= 0.0 || rect.height <= 0.0 {
            log::debug!("Image box too small to draw, skipping");
            return;
        }
        self.elements.push(LayoutElement::Image(ImageElement {
            rect,
            image: Arc::clone(image),
        }));
    }

    pub fn finish(self) -> LaidOutPage {
        LaidOutPage {
            elements: self.elements,
        }
    }
}

pub fn column_edges(left: f32, width: f32, fractions: &[f32]) -> Vec<f32> {
    let mut edges = Vec::with_capacity(fractions.len() + 1);
    edges.push(left);
    let mut x = left;
    for frac in fractions.iter().take(fractions.len().saturating_sub(1)) {
        x += width * frac;
        edges.push(x);
    }
    if !fractions.is_empty() {
        edges.push(left + width);
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FontWeight;

    fn canvas() -> PageCanvas {
        PageCanvas::new(PageGeometry {
            width: 200.0,
            height: 300.0,
            margin: 10.0,
        })
    }

    #[test]
    fn cursor_starts_at_top_margin_and_moves_down() {
        let mut c = canvas();
        assert_eq!(c.cursor(), 290.0);
        assert_eq!(c.take(16.0), 274.0);
        c.skip(4.0);
        assert_eq!(c.cursor(), 270.0);
        assert_eq!(c.remaining(), 260.0);
    }

    #[test]
    fn negative_take_does_not_move_cursor_up() {
        let mut c = canvas();
        c.take(-50.0);
        assert_eq!(c.cursor(), 290.0);
    }

    #[test]
    fn column_edges_close_at_right_edge() {
        let c = canvas();
        let edges = c.column_edges(&[0.25, 0.25, 0.5]);
        assert_eq!(edges, vec![10.0, 55.0, 100.0, 190.0]);
    }

    #[test]
    fn column_edges_of_nothing_is_just_left() {
        assert_eq!(column_edges(5.0, 100.0, &[]), vec![5.0]);
    }

    #[test]
    fn empty_text_is_not_emitted() {
        let mut c = canvas();
        c.text(0.0, 0.0, "", TextStyle::regular(8.0));
        assert!(c.finish().elements.is_empty());
    }

    #[test]
    fn centered_text_is_centered_on_span() {
        let mut c = canvas();
        c.center_text(10.0, 50.0, 100.0, "EQUIPMENT", TextStyle::bold(8.0));
        let page = c.finish();
        let t = page.texts().next().unwrap();
        let w = text_width("EQUIPMENT", FontWeight::Bold, 8.0);
        assert!((t.origin.x + w / 2.0 - 60.0).abs() < 1e-3);
        assert_eq!(t.origin.y, 50.0);
    }

    #[test]
    fn image_is_fitted_inside_padded_box() {
        let img = Arc::new(DecodedImage {
            width: 100,
            height: 50,
            rgb: vec![0; 100 * 50 * 3],
            alpha: None,
        });
        let bounds = Rect::new(36.0, 700.0, 220.0, 58.0);
        let mut c = canvas();
        c.image(bounds, 6.0, &img);
        let page = c.finish();
        let placed = page.images().next().unwrap();
        assert!(bounds.inset(6.0).contains_rect(&placed.rect));
        let ratio = placed.rect.width / placed.rect.height;
        assert!((ratio - 2.0).abs() < 1e-3);
    }
}
