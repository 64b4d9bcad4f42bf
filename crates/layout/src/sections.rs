//! Reusable section shapes.
//!
//! Every function here claims its band from the canvas cursor, draws inside
//! it and returns the band. Horizontal splits are fractions of the content
//! width so a section adapts to any page size or margin.

use crate::elements::TextStyle;
use crate::image::ImageSource;
use crate::page::PageCanvas;
use crate::text::split_fixed;
use issue_form_types::{Color, Rect};

/// Baseline offset of a label inside a bar-style band.
pub const BAR_BASELINE: f32 = 4.0;
/// Horizontal inset of labels and values inside a bordered cell.
pub const CELL_INSET: f32 = 6.0;

/// A column header and its share of the content width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column<'a> {
    pub label: &'a str,
    pub fraction: f32,
}

impl<'a> Column<'a> {
    pub const fn new(label: &'a str, fraction: f32) -> Self {
        Self { label, fraction }
    }
}

fn fractions(columns: &[Column<'_>]) -> Vec<f32> {
    columns.iter().map(|c| c.fraction).collect()
}

fn interior_rules(canvas: &mut PageCanvas, edges: &[f32], y: f32, height: f32) {
    if edges.len() < 3 {
        return;
    }
    for &x in &edges[1..edges.len() - 1] {
        canvas.vline(x, y, y + height);
    }
}

/// A row of bordered cells, each with a centered static label.
pub fn meta_bar(
    canvas: &mut PageCanvas,
    cells: &[Column<'_>],
    height: f32,
    style: &TextStyle,
) -> Rect {
    let y = canvas.take(height);
    let band = canvas.band(y, height);
    canvas.rect(band, None);

    let edges = canvas.column_edges(&fractions(cells));
    interior_rules(canvas, &edges, y, height);
    for (cell, span) in cells.iter().zip(edges.windows(2)) {
        canvas.center_text(span[0], y + BAR_BASELINE, span[1] - span[0], cell.label, style.clone());
    }
    band
}

/// A highlighted full-width band with a centered bold title.
pub fn section_bar(
    canvas: &mut PageCanvas,
    title: &str,
    fill: Color,
    height: f32,
    font_size: f32,
) -> Rect {
    let y = canvas.take(height);
    let band = canvas.band(y, height);
    canvas.rect(band, Some(fill));
    canvas.center_text(
        band.x,
        y + BAR_BASELINE,
        band.width,
        title,
        TextStyle::bold(font_size),
    );
    band
}

/// Where a notice paragraph's fixed line slots are anchored in the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeAnchor {
    /// First slot 18pt below the top edge, following slots further down.
    Top,
    /// Last slot 6pt above the bottom edge, earlier slots further up.
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Notice<'a> {
    pub text: &'a str,
    pub anchor: NoticeAnchor,
    pub max_lines: usize,
}

pub const NOTICE_CHARS_PER_LINE: usize = 120;
pub const NOTICE_LINE_GAP: f32 = 12.0;
pub const NOTICE_FONT_SIZE: f32 = 7.0;

/// A fixed-height bordered box of static text, pre-split at fixed character
/// offsets into line slots.
pub fn notice_block(canvas: &mut PageCanvas, height: f32, notices: &[Notice<'_>]) -> Rect {
    let y = canvas.take(height);
    let band = canvas.band(y, height);
    canvas.rect(band, None);

    let x = band.x + 8.0;
    for notice in notices {
        let lines = split_fixed(notice.text, NOTICE_CHARS_PER_LINE, notice.max_lines);
        for (slot, line) in lines.into_iter().enumerate() {
            let baseline = match notice.anchor {
                NoticeAnchor::Top => band.top() - 18.0 - NOTICE_LINE_GAP * slot as f32,
                NoticeAnchor::Bottom => {
                    let from_bottom = notice.max_lines.saturating_sub(1 + slot);
                    y + 6.0 + NOTICE_LINE_GAP * from_bottom as f32
                }
            };
            canvas.text(x, baseline, line, TextStyle::regular(NOTICE_FONT_SIZE));
        }
    }
    band
}

/// A bordered band split into a logo cell and a title cell.
///
/// A broken logo is replaced by a small inline marker inside the logo cell;
/// it never prevents the rest of the header from being drawn.
pub fn logo_header(
    canvas: &mut PageCanvas,
    height: f32,
    logo_fraction: f32,
    title: &str,
    logo: Option<&ImageSource>,
) -> Rect {
    let y = canvas.take(height);
    let band = canvas.band(y, height);
    canvas.rect(band, None);

    let logo_width = band.width * logo_fraction;
    canvas.vline(band.x + logo_width, y, y + height);

    let logo_box = Rect::new(band.x, y, logo_width, height);
    match logo {
        Some(ImageSource::Ready(img)) => canvas.image(logo_box, 6.0, img),
        Some(ImageSource::Broken(msg)) => canvas.text(
            logo_box.x + 6.0,
            logo_box.y + 6.0,
            format!("Logo error: {}", msg),
            TextStyle::regular(6.0),
        ),
        None => {}
    }

    canvas.text(
        band.x + logo_width + 10.0,
        band.top() - 22.0,
        title,
        TextStyle::bold(12.0),
    );
    band
}

/// Geometry and typography of a bordered data table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub header_height: f32,
    pub row_height: f32,
    pub header_style: TextStyle,
    pub cell_style: TextStyle,
    /// Left inset of cell values.
    pub cell_inset: f32,
    pub header_baseline: f32,
    pub cell_baseline: f32,
}

impl TableLayout {
    pub fn new(header_height: f32, row_height: f32, font_size: f32, cell_inset: f32) -> Self {
        Self {
            header_height,
            row_height,
            header_style: TextStyle::bold(font_size),
            cell_style: TextStyle::regular(font_size),
            cell_inset,
            header_baseline: 6.0,
            cell_baseline: 5.0,
        }
    }
}

/// Draws the header row and returns the column edges for the body rows.
fn table_header(canvas: &mut PageCanvas, columns: &[Column<'_>], layout: &TableLayout) -> Vec<f32> {
    let height = layout.header_height;
    let y = canvas.take(height);
    let band = canvas.band(y, height);
    canvas.rect(band, None);

    let edges = canvas.column_edges(&fractions(columns));
    interior_rules(canvas, &edges, y, height);
    for (col, span) in columns.iter().zip(edges.windows(2)) {
        canvas.center_text(
            span[0],
            y + layout.header_baseline,
            span[1] - span[0],
            col.label,
            layout.header_style.clone(),
        );
    }
    edges
}

fn table_row(canvas: &mut PageCanvas, edges: &[f32], layout: &TableLayout, cells: &[String]) {
    let height = layout.row_height;
    let y = canvas.take(height);
    let band = canvas.band(y, height);
    canvas.rect(band, None);
    interior_rules(canvas, edges, y, height);
    for (value, &x) in cells.iter().zip(edges.iter()) {
        canvas.text(
            x + layout.cell_inset,
            y + layout.cell_baseline,
            value.as_str(),
            layout.cell_style.clone(),
        );
    }
}

/// A table with a fixed number of rows: every row is drawn, blank or not.
/// Returns the number of body rows drawn.
pub fn fixed_table(
    canvas: &mut PageCanvas,
    columns: &[Column<'_>],
    layout: &TableLayout,
    rows: &[Vec<String>],
) -> usize {
    let edges = table_header(canvas, columns, layout);
    for row in rows {
        table_row(canvas, &edges, layout, row);
    }
    rows.len()
}

/// What happened to the rows handed to [`flowing_table`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableOutcome {
    pub drawn: usize,
    /// Rows skipped because every cell was blank.
    pub skipped_blank: usize,
    /// Non-blank rows that did not fit above the bottom limit.
    pub dropped: usize,
}

/// A table of variable length that never paginates.
///
/// Rows whose cells are all blank are skipped. Once the next row would end
/// less than `bottom_reserve` points above the bottom margin, drawing stops
/// and every remaining non-blank row is counted as dropped.
pub fn flowing_table(
    canvas: &mut PageCanvas,
    columns: &[Column<'_>],
    layout: &TableLayout,
    rows: &[Vec<String>],
    bottom_reserve: f32,
) -> TableOutcome {
    let edges = table_header(canvas, columns, layout);
    let mut outcome = TableOutcome::default();

    for row in rows {
        if row.iter().all(|c| c.trim().is_empty()) {
            outcome.skipped_blank += 1;
            continue;
        }
        if outcome.dropped > 0 || canvas.remaining() - layout.row_height < bottom_reserve {
            outcome.dropped += 1;
            continue;
        }
        table_row(canvas, &edges, layout, row);
        outcome.drawn += 1;
    }

    if outcome.dropped > 0 {
        log::warn!(
            "{} table row(s) did not fit on the page and were left out",
            outcome.dropped
        );
    }
    outcome
}

pub const SIGNOFF_FONT_SIZE: f32 = 7.0;

/// A two-by-two grid: issuer and receiver rows, each with a name cell and a
/// sign cell. Sign cells are always left blank.
pub fn signoff_block(
    canvas: &mut PageCanvas,
    height: f32,
    issuer_name: &str,
    receiver_name: &str,
) -> Rect {
    let y = canvas.take(height);
    let band = canvas.band(y, height);
    canvas.rect(band, None);

    let x0 = band.x;
    let mid = x0 + band.width * 0.5;
    let name_label_end = x0 + (mid - x0) * 0.35;
    let sign_label_end = mid + (band.right() - mid) * 0.35;

    canvas.vline(mid, y, y + height);
    canvas.vline(name_label_end, y, y + height);
    canvas.vline(sign_label_end, y, y + height);
    canvas.hline(x0, band.right(), y + height / 2.0);

    let top = y + height - 14.0;
    let bottom = y + height / 2.0 - 14.0;
    let label = TextStyle::bold(SIGNOFF_FONT_SIZE);
    let value = TextStyle::regular(SIGNOFF_FONT_SIZE);

    canvas.text(x0 + CELL_INSET, top, "ISSUER NAME", label.clone());
    canvas.text(name_label_end + CELL_INSET, top, issuer_name, value.clone());
    canvas.text(mid + CELL_INSET, top, "ISSUER SIGN", label.clone());

    canvas.text(x0 + CELL_INSET, bottom, "RECEIVER NAME", label.clone());
    canvas.text(name_label_end + CELL_INSET, bottom, receiver_name, value);
    canvas.text(mid + CELL_INSET, bottom, "RECEIVER SIGN", label);
    band
}

/// A two-column bordered strip: bold label on the left, value on the right.
pub fn kv_row(
    canvas: &mut PageCanvas,
    label: &str,
    value: &str,
    row_height: f32,
    label_fraction: f32,
) -> Rect {
    let y = canvas.take(row_height);
    let band = canvas.band(y, row_height);
    canvas.rect(band, None);

    let split = band.x + band.width * label_fraction;
    canvas.vline(split, y, y + row_height);
    canvas.text(band.x + CELL_INSET, y + 5.0, label, TextStyle::bold(8.0));
    canvas.text(split + CELL_INSET, y + 5.0, value, TextStyle::regular(8.0));
    band
}
