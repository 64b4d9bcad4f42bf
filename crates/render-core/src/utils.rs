/// Encodes text for a Type1 font using `WinAnsiEncoding`.
///
/// Latin-1 maps through unchanged. The typographic characters that WinAnsi
/// keeps in the 0x80..0x9F block are remapped; anything else becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{20AC}' => 0x80,
        '\u{2026}' => 0x85,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{2122}' => 0x99,
        c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(to_win_ansi("NAME:"), b"NAME:".to_vec());
    }

    #[test]
    fn dashes_and_quotes_use_win_ansi_slots() {
        assert_eq!(to_win_ansi("a \u{2013} b"), vec![b'a', b' ', 0x96, b' ', b'b']);
        assert_eq!(to_win_ansi("\u{201C}x\u{201D}"), vec![0x93, b'x', 0x94]);
    }

    #[test]
    fn latin1_is_kept_and_unmapped_becomes_question_mark() {
        assert_eq!(to_win_ansi("é"), vec![0xE9]);
        assert_eq!(to_win_ansi("漢"), vec![b'?']);
        // C1 controls have no glyph in WinAnsi
        assert_eq!(to_win_ansi("\u{0085}"), vec![b'?']);
    }
}
