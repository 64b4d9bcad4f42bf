//! Raster images placed on the page (company logos).

use crate::LayoutError;
use issue_form_types::Size;
use std::sync::Arc;

/// An image decoded to 8-bit RGB with an optional separate alpha plane.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGB triples, `width * height * 3` bytes.
    pub rgb: Vec<u8>,
    /// One byte per pixel. `None` when every pixel is opaque.
    pub alpha: Option<Vec<u8>>,
}

impl DecodedImage {
    pub fn decode(bytes: &[u8]) -> Result<Self, LayoutError> {
        let img = ::image::load_from_memory(bytes)
            .map_err(|e| LayoutError::ImageDecode(e.to_string()))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(LayoutError::EmptyImage(width, height));
        }

        let pixels = (width * height) as usize;
        let mut rgb = Vec::with_capacity(pixels * 3);
        let mut alpha = Vec::with_capacity(pixels);
        for pixel in img.pixels() {
            rgb.extend_from_slice(&pixel.0[..3]);
            alpha.push(pixel[3]);
        }
        let alpha = alpha.iter().any(|&a| a != u8::MAX).then_some(alpha);

        Ok(Self {
            width,
            height,
            rgb,
            alpha,
        })
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// The outcome of preparing an image for placement: either pixels ready to
/// draw, or the reason they could not be decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Ready(Arc<DecodedImage>),
    Broken(String),
}

impl ImageSource {
    /// Decodes `bytes`, downgrading any failure to [`ImageSource::Broken`].
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match DecodedImage::decode(bytes) {
            Ok(img) => ImageSource::Ready(Arc::new(img)),
            Err(e) => {
                log::warn!("Image could not be decoded: {}", e);
                ImageSource::Broken(e.to_string())
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ImageSource::Ready(_) => None,
            ImageSource::Broken(msg) => Some(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        png_with_alpha(width, height, 128)
    }

    fn png_with_alpha(width: u32, height: u32, alpha: u8) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, alpha]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_png_and_splits_alpha() {
        let img = DecodedImage::decode(&png_bytes(3, 2)).unwrap();
        assert_eq!((img.width, img.height), (3, 2));
        assert_eq!(img.rgb.len(), 3 * 2 * 3);
        assert_eq!(&img.rgb[..3], &[10, 20, 30]);
        assert_eq!(img.alpha.as_deref(), Some(&[128u8; 6][..]));
    }

    #[test]
    fn opaque_png_has_no_alpha_plane() {
        let img = DecodedImage::decode(&png_with_alpha(2, 2, 255)).unwrap();
        assert!(img.alpha.is_none());
    }

    #[test]
    fn garbage_bytes_become_broken_source() {
        let source = ImageSource::from_bytes(b"definitely not a png");
        assert!(source.error().is_some());
    }

    #[test]
    fn valid_bytes_become_ready_source() {
        let source = ImageSource::from_bytes(&png_bytes(4, 4));
        assert!(matches!(source, ImageSource::Ready(_)));
        assert!(source.error().is_none());
    }
}
