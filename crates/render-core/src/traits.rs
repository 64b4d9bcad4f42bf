use crate::error::RenderError;
use issue_form_layout::LaidOutDocument;

/// A backend that serializes a fully laid-out document.
///
/// Layout has already fixed every coordinate, so a renderer only translates
/// primitives; it never measures text or moves anything.
pub trait DocumentRenderer {
    fn render(&self, document: &LaidOutDocument) -> Result<Vec<u8>, RenderError>;
}
