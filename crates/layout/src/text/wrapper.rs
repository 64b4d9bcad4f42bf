use crate::fonts::{FontWeight, text_width};

/// Result of breaking a paragraph into at most `max_lines` lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrappedText {
    pub lines: Vec<String>,
    /// Lines that were produced but did not fit under the line limit.
    pub dropped_lines: usize,
}

/// Greedy word wrap against the Helvetica metrics.
///
/// Words are never split: a single word wider than `max_width` occupies a
/// line on its own. Runs of whitespace (including newlines) collapse to a
/// single space.
pub fn wrap_words(
    text: &str,
    weight: FontWeight,
    font_size: f32,
    max_width: f32,
    max_lines: usize,
) -> WrappedText {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate_width = text_width(&current, weight, font_size)
            + text_width(" ", weight, font_size)
            + text_width(word, weight, font_size);
        if candidate_width > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let dropped_lines = lines.len().saturating_sub(max_lines);
    lines.truncate(max_lines);
    WrappedText {
        lines,
        dropped_lines,
    }
}

/// Splits `text` into consecutive chunks of `chunk_chars` characters, keeping
/// at most `max_chunks` non-empty chunks. Not word-aware.
pub fn split_fixed(text: &str, chunk_chars: usize, max_chunks: usize) -> Vec<String> {
    if chunk_chars == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(chunk_chars)
        .take(max_chunks)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
