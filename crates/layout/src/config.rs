use crate::LayoutError;
use serde::{Deserialize, Serialize};

/// Fixed page size and the uniform margin every section is laid out inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageGeometry {
    /// Page width in points.
    pub width: f32,
    /// Page height in points.
    pub height: f32,
    /// Margin applied on all four sides.
    pub margin: f32,
}

impl PageGeometry {
    /// ISO A4 expressed in points (210mm x 297mm).
    pub const A4: PageGeometry = PageGeometry {
        width: 595.2756,
        height: 841.8898,
        margin: 36.0,
    };

    pub fn content_left(&self) -> f32 {
        self.margin
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn content_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    pub fn content_top(&self) -> f32 {
        self.height - self.margin
    }

    pub fn content_bottom(&self) -> f32 {
        self.margin
    }

    /// Rejects pages whose margins leave no content box.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let finite = [self.width, self.height, self.margin]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.margin < 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "page {}x{} with margin {} is not a usable size",
                self.width, self.height, self.margin
            )));
        }
        if self.content_width() <= 0.0 || self.content_height() <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "margin {} leaves no content area on a {}x{} page",
                self.margin, self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4
    }
}
