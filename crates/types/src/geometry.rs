//! Page-space geometry. All coordinates are PDF points with the origin at the
//! bottom-left corner of the page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Shrinks the box by `pad` on every side. Never produces a negative size.
    pub fn inset(&self, pad: f32) -> Rect {
        Rect {
            x: self.x + pad,
            y: self.y + pad,
            width: (self.width - 2.0 * pad).max(0.0),
            height: (self.height - 2.0 * pad).max(0.0),
        }
    }

    /// Largest box with the aspect ratio of `content` that fits inside `self`,
    /// anchored to the bottom-left corner.
    pub fn fit_bottom_left(&self, content: Size) -> Rect {
        if content.width <= 0.0 || content.height <= 0.0 {
            return Rect::new(self.x, self.y, 0.0, 0.0);
        }
        let scale = (self.width / content.width).min(self.height / content.height);
        Rect {
            x: self.x,
            y: self.y,
            width: content.width * scale,
            height: content.height * scale,
        }
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        const EPSILON: f32 = 0.01;
        other.x >= self.x - EPSILON
            && other.y >= self.y - EPSILON
            && other.right() <= self.right() + EPSILON
            && other.top() <= self.top() + EPSILON
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_on_all_sides() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0).inset(6.0);
        assert_eq!(r, Rect::new(16.0, 26.0, 88.0, 38.0));
    }

    #[test]
    fn inset_never_goes_negative() {
        let r = Rect::new(0.0, 0.0, 4.0, 4.0).inset(6.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
    }

    #[test]
    fn fit_preserves_aspect_for_wide_content() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 50.0);
        let fitted = bounds.fit_bottom_left(Size::new(400.0, 50.0));
        assert_eq!(fitted.width, 200.0);
        assert_eq!(fitted.height, 25.0);
        assert_eq!((fitted.x, fitted.y), (0.0, 0.0));
    }

    #[test]
    fn fit_preserves_aspect_for_tall_content() {
        let bounds = Rect::new(5.0, 5.0, 200.0, 50.0);
        let fitted = bounds.fit_bottom_left(Size::new(10.0, 100.0));
        assert_eq!(fitted.height, 50.0);
        assert_eq!(fitted.width, 5.0);
        assert!(bounds.contains_rect(&fitted));
    }

    #[test]
    fn fit_of_empty_content_is_empty() {
        let fitted = Rect::new(1.0, 2.0, 10.0, 10.0).fit_bottom_left(Size::zero());
        assert_eq!(fitted.width, 0.0);
        assert_eq!(fitted.height, 0.0);
    }
}
