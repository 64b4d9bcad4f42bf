use issue_form_layout::{
    DecodedImage, FontWeight, ImageElement, LaidOutPage, LayoutElement, TextElement,
};
use issue_form_render_core::RenderError;
use issue_form_render_core::utils::to_win_ansi;
use issue_form_types::{Color, Point, Rect};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use std::collections::HashMap;
use std::sync::Arc;

/// Resource name a face is registered under in every page's font dictionary.
pub fn font_resource_name(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Regular => "F1",
        FontWeight::Bold => "F2",
    }
}

/// Font resources for both faces, as unembedded Type1 fonts.
pub fn font_dictionary() -> Dictionary {
    let mut fonts = Dictionary::new();
    for weight in FontWeight::ALL {
        let font = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => weight.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        };
        fonts.set(font_resource_name(weight), Object::Dictionary(font));
    }
    fonts
}

/// Image XObjects already written to a document, keyed by allocation so the
/// same decoded image placed on several pages is stored once.
#[derive(Debug, Default)]
pub struct ImageRegistry {
    entries: HashMap<usize, (String, ObjectId)>,
}

impl ImageRegistry {
    fn key(image: &Arc<DecodedImage>) -> usize {
        Arc::as_ptr(image) as usize
    }

    /// Writes `image` to `doc` on first sight and returns its resource name
    /// and object id.
    pub fn register(&mut self, doc: &mut Document, image: &Arc<DecodedImage>) -> (String, ObjectId) {
        let key = Self::key(image);
        if let Some(entry) = self.entries.get(&key) {
            return entry.clone();
        }

        let smask_id = image.alpha.as_ref().map(|alpha| {
            doc.add_object(Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => image.width as i64,
                    "Height" => image.height as i64,
                    "ColorSpace" => "DeviceGray",
                    "BitsPerComponent" => 8,
                },
                alpha.clone(),
            ))
        });

        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width as i64,
            "Height" => image.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        };
        if let Some(id) = smask_id {
            dict.set("SMask", id);
        }
        let id = doc.add_object(Stream::new(dict, image.rgb.clone()));

        let name = format!("Im{}", self.entries.len() + 1);
        log::debug!("Registered image {} ({}x{})", name, image.width, image.height);
        self.entries.insert(key, (name.clone(), id));
        (name, id)
    }

    pub fn name_of(&self, image: &Arc<DecodedImage>) -> Option<&str> {
        self.entries.get(&Self::key(image)).map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the content stream for one page. Every image on the page must
/// already be registered.
pub fn render_page_content(
    page: &LaidOutPage,
    images: &ImageRegistry,
) -> Result<Content, RenderError> {
    let mut ctx = PageContext::new(images);
    for el in &page.elements {
        ctx.draw_element(el)?;
    }
    Ok(ctx.finish())
}

// --- Internal Page Drawing Context ---

struct PageContext<'a> {
    content: Content,
    state: PageRenderState,
    images: &'a ImageRegistry,
}

#[derive(Debug, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(FontWeight, f32)>,
    fill_color: Color,
}

impl Default for PageRenderState {
    fn default() -> Self {
        // PDF graphics state starts with a black fill.
        Self {
            font: None,
            fill_color: Color::BLACK,
        }
    }
}

impl<'a> PageContext<'a> {
    fn new(images: &'a ImageRegistry) -> Self {
        Self {
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            images,
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_element(&mut self, el: &LayoutElement) -> Result<(), RenderError> {
        match el {
            LayoutElement::Rectangle { rect, fill } => self.draw_rect(rect, fill.as_ref()),
            LayoutElement::Line { from, to } => self.draw_line(*from, *to),
            LayoutElement::Text(text) => self.draw_text(text),
            LayoutElement::Image(image) => self.draw_image(image)?,
        }
        Ok(())
    }

    fn set_fill_color(&mut self, color: &Color) {
        if self.state.fill_color != *color {
            let [r, g, b] = color.to_unit();
            self.op("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = *color;
        }
    }

    fn set_font(&mut self, weight: FontWeight, size: f32) {
        if self.state.font != Some((weight, size)) {
            self.op(
                "Tf",
                vec![
                    Object::Name(font_resource_name(weight).as_bytes().to_vec()),
                    size.into(),
                ],
            );
            self.state.font = Some((weight, size));
        }
    }

    fn draw_rect(&mut self, rect: &Rect, fill: Option<&Color>) {
        let operands = vec![
            rect.x.into(),
            rect.y.into(),
            rect.width.into(),
            rect.height.into(),
        ];
        match fill {
            Some(color) => {
                self.set_fill_color(color);
                self.op("re", operands);
                // fill, then stroke the border on top
                self.op("B", vec![]);
            }
            None => {
                self.op("re", operands);
                self.op("S", vec![]);
            }
        }
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.op("m", vec![from.x.into(), from.y.into()]);
        self.op("l", vec![to.x.into(), to.y.into()]);
        self.op("S", vec![]);
    }

    fn draw_text(&mut self, text: &TextElement) {
        if text.content.trim().is_empty() {
            return;
        }
        // Tf is graphics state and persists across text objects.
        self.set_fill_color(&text.style.color);
        self.op("BT", vec![]);
        self.set_font(text.style.font_weight, text.style.font_size);
        self.op("Td", vec![text.origin.x.into(), text.origin.y.into()]);
        self.op(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
    }

    fn draw_image(&mut self, image: &ImageElement) -> Result<(), RenderError> {
        let name = self
            .images
            .name_of(&image.image)
            .ok_or_else(|| RenderError::Other("Image was not registered before drawing".into()))?
            .to_owned();
        let r = image.rect;
        self.op("q", vec![]);
        self.op(
            "cm",
            vec![
                r.width.into(),
                0.0f32.into(),
                0.0f32.into(),
                r.height.into(),
                r.x.into(),
                r.y.into(),
            ],
        );
        self.op("Do", vec![Object::Name(name.into_bytes())]);
        self.op("Q", vec![]);
        Ok(())
    }
}
