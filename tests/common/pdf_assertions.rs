use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

/// Every string shown with `Tj` on a 1-based page, in drawing order.
///
/// Bytes are WinAnsi; the ASCII range used by the assertions maps 1:1.
pub fn page_strings(doc: &LopdfDocument, page: u32) -> Vec<String> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page) else {
        return Vec::new();
    };
    let Ok(raw) = doc.get_page_content(*page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&raw) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first()?.as_str().ok())
        .map(|bytes| bytes.iter().map(|&b| b as char).collect())
        .collect()
}

/// All text in the document, one line per drawn string, pages in order.
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for page in 1..=doc.get_pages().len() as u32 {
        for line in page_strings(doc, page) {
            text.push_str(&line);
            text.push('\n');
        }
    }
    text
}

/// Colour image XObjects in the file; soft masks are not counted.
pub fn color_image_count(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|o| o.as_stream().ok())
        .filter(|s| name_is(s, b"Subtype", b"Image") && name_is(s, b"ColorSpace", b"DeviceRGB"))
        .count()
}

/// Soft-mask XObjects in the file.
pub fn soft_mask_count(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|o| o.as_stream().ok())
        .filter(|s| s.dict.has(b"SMask"))
        .count()
}

fn name_is(stream: &lopdf::Stream, key: &[u8], expected: &[u8]) -> bool {
    stream
        .dict
        .get(key)
        .and_then(|v| v.as_name())
        .map(|n| n == expected)
        .unwrap_or(false)
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert that a given page shows an exact string
#[macro_export]
macro_rules! assert_page_shows {
    ($pdf:expr, $page:expr, $text:expr) => {
        let strings = $pdf.page_text($page);
        assert!(
            strings.iter().any(|s| s == $text),
            "Page {} should show '{}', but it showed:\n{:#?}",
            $page,
            $text,
            strings
        );
    };
}
