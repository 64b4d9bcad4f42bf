use crate::helpers::{ImageRegistry, font_dictionary, render_page_content};
use issue_form_layout::LaidOutDocument;
use issue_form_render_core::{DocumentRenderer, RenderError};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat, dictionary};

/// Writes a [`LaidOutDocument`] as a complete in-memory PDF.
#[derive(Debug, Clone)]
pub struct LopdfRenderer {
    pdf_version: String,
    compress: bool,
    title: Option<String>,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self {
            pdf_version: "1.7".to_string(),
            compress: true,
            title: None,
        }
    }
}

impl LopdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flate-compress content and image streams (on by default).
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Sets the `/Title` entry of the document information dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl DocumentRenderer for LopdfRenderer {
    fn render(&self, document: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
        if document.pages.is_empty() {
            return Err(RenderError::EmptyDocument);
        }

        let mut doc = Document::with_version(self.pdf_version.as_str());
        let pages_id = doc.new_object_id();
        let fonts_id = doc.add_object(font_dictionary());
        let mut images = ImageRegistry::default();
        let geometry = document.geometry;

        let mut kids: Vec<Object> = Vec::with_capacity(document.pages.len());
        for (index, page) in document.pages.iter().enumerate() {
            let mut xobjects = Dictionary::new();
            for placed in page.images() {
                let (name, id) = images.register(&mut doc, &placed.image);
                xobjects.set(name, id);
            }

            let content = render_page_content(page, &images)?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

            let mut resources = dictionary! { "Font" => fonts_id };
            if !xobjects.is_empty() {
                resources.set("XObject", xobjects);
            }

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.0.into(), 0.0.into(), geometry.width.into(), geometry.height.into()],
                "Contents" => content_id,
                "Resources" => resources,
            });
            log::debug!(
                "Wrote page {} with {} elements",
                index + 1,
                page.elements.len()
            );
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if let Some(title) = &self.title {
            let info_id = doc.add_object(dictionary! {
                "Title" => Object::String(issue_form_render_core::utils::to_win_ansi(title), StringFormat::Literal),
                "Producer" => Object::string_literal(concat!("issue-form ", env!("CARGO_PKG_VERSION"))),
            });
            doc.trailer.set("Info", info_id);
        }

        if self.compress {
            doc.compress();
        }

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        log::info!(
            "Rendered {} page(s), {} image(s), {} bytes",
            count,
            images.len(),
            buffer.len()
        );
        Ok(buffer)
    }
}
