//! Metrics for the two standard PDF faces the form is set in.
//!
//! Widths are the Adobe AFM advance widths in 1/1000 em for printable ASCII
//! (0x20..=0x7E). Index = (char as usize) - 32.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// Base-14 PostScript name, usable without embedding.
    pub fn postscript_name(self) -> &'static str {
        match self {
            FontWeight::Regular => "Helvetica",
            FontWeight::Bold => "Helvetica-Bold",
        }
    }

    pub const ALL: [FontWeight; 2] = [FontWeight::Regular, FontWeight::Bold];

    fn ascii_widths(self) -> &'static [u16; 95] {
        match self {
            FontWeight::Regular => &HELVETICA_WIDTHS,
            FontWeight::Bold => &HELVETICA_BOLD_WIDTHS,
        }
    }
}

#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Advance width of one character in 1/1000 em.
pub fn glyph_width(c: char, weight: FontWeight) -> u16 {
    match c {
        ' '..='~' => weight.ascii_widths()[c as usize - 32],
        '\u{2014}' => 1000,
        '\u{2018}' | '\u{2019}' => match weight {
            FontWeight::Regular => 222,
            FontWeight::Bold => 278,
        },
        '\u{201C}' | '\u{201D}' => 500,
        '\u{2022}' => 350,
        // En dash, euro, pound and the accented Latin-1 letters all sit close
        // to the digit width in both faces.
        _ => 556,
    }
}

/// Width of `text` in points when set at `size`.
pub fn text_width(text: &str, weight: FontWeight, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| glyph_width(c, weight) as u32).sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_printable_ascii() {
        assert_eq!(glyph_width(' ', FontWeight::Regular), 278);
        assert_eq!(glyph_width('~', FontWeight::Bold), 584);
        assert_eq!(glyph_width('W', FontWeight::Regular), 944);
        assert_eq!(glyph_width('i', FontWeight::Regular), 222);
        assert_eq!(glyph_width('i', FontWeight::Bold), 278);
    }

    #[test]
    fn width_scales_with_size() {
        let w9 = text_width("Microsoft", FontWeight::Regular, 9.0);
        let w18 = text_width("Microsoft", FontWeight::Regular, 18.0);
        assert!((w18 - 2.0 * w9).abs() < 1e-4);
    }

    #[test]
    fn bold_is_never_narrower_than_regular_for_lowercase() {
        for c in 'a'..='z' {
            assert!(glyph_width(c, FontWeight::Bold) >= glyph_width(c, FontWeight::Regular));
        }
    }

    #[test]
    fn known_string_width() {
        // "Hi" = 722 + 222 units.
        assert!((text_width("Hi", FontWeight::Regular, 10.0) - 9.44).abs() < 1e-4);
        assert_eq!(text_width("", FontWeight::Bold, 12.0), 0.0);
    }

    #[test]
    fn postscript_names() {
        assert_eq!(FontWeight::Regular.postscript_name(), "Helvetica");
        assert_eq!(FontWeight::Bold.postscript_name(), "Helvetica-Bold");
    }
}
