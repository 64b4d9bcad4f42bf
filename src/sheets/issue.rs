//! Page 1: the equipment issue and return record.

use super::{BAR_HEIGHT, HEADER_HEIGHT, LOGO_FRACTION, SheetContext};
use crate::snapshot::FormSnapshot;
use issue_form_layout::sections::{
    CELL_INSET, Column, Notice, NoticeAnchor, TableLayout, fixed_table, logo_header, meta_bar,
    notice_block, section_bar, signoff_block,
};
use issue_form_layout::{PageCanvas, Rect, TextStyle};

const META_HEIGHT: f32 = 16.0;
const NOTICE_HEIGHT: f32 = 70.0;
const PERSON_ROW_HEIGHT: f32 = 20.0;
const ISSUE_SIGNOFF_HEIGHT: f32 = 44.0;
const RETURN_SIGNOFF_HEIGHT: f32 = 40.0;
const BAR_FONT_SIZE: f32 = 8.0;

const ISSUE_NOTICE: &str = "This form must be completed upon issue of equipment / technology / software which is provided to you. \
This form will be kept on your personnel file and used to monitor the condition and return of any equipment \
should you depart the company.";

const CHARGE_NOTICE: &str = "Be aware that damages or loss of issued items which are not rectified will result in a proportionate and \
reasonable charge for repair or replacement which will be deducted from your final salary.";

const FOOTER: &str =
    "Please attach photographs on attached pages of any recorded defect or condition.";

/// NAME label, name, DATE label, date.
const PERSON_COLUMNS: [f32; 4] = [0.18, 0.42, 0.12, 0.28];

const ISSUED_COLUMNS: [Column<'static>; 4] = [
    Column::new("DESCRIPTION", 0.36),
    Column::new("CONDITION AT ISSUE", 0.28),
    Column::new("SERIAL No", 0.18),
    Column::new("ASSET No", 0.18),
];

const RETURNED_COLUMNS: [Column<'static>; 5] = [
    Column::new("DESCRIPTION", 0.36),
    Column::new("RETURNED CONDITION", 0.30),
    Column::new("SERIAL", 0.12),
    Column::new("No", 0.08),
    Column::new("ASSET No", 0.14),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueOutcome {
    pub issued_rows: usize,
    pub returned_rows: usize,
}

pub fn draw_issue_sheet(
    canvas: &mut PageCanvas,
    snapshot: &FormSnapshot,
    ctx: &SheetContext<'_>,
) -> IssueOutcome {
    let config = ctx.config;
    let palette = config.palette;
    let doc = &config.document;

    let border = Rect::new(
        canvas.left(),
        canvas.geometry().content_bottom(),
        canvas.content_width(),
        canvas.geometry().content_height(),
    );
    canvas.rect(border, None);

    meta_bar(
        canvas,
        &[
            Column::new(&doc.code, 0.18),
            Column::new(&doc.title, 0.34),
            Column::new(&doc.version, 0.20),
            Column::new(&doc.date, 0.28),
        ],
        META_HEIGHT,
        &TextStyle::regular(7.0),
    );
    logo_header(canvas, HEADER_HEIGHT, LOGO_FRACTION, &doc.heading, ctx.logo);
    notice_block(
        canvas,
        NOTICE_HEIGHT,
        &[
            Notice {
                text: ISSUE_NOTICE,
                anchor: NoticeAnchor::Top,
                max_lines: 3,
            },
            Notice {
                text: CHARGE_NOTICE,
                anchor: NoticeAnchor::Bottom,
                max_lines: 2,
            },
        ],
    );

    section_bar(
        canvas,
        "EQUIPMENT ISSUED TO: PERSONNEL DETAIL",
        palette.issue,
        BAR_HEIGHT,
        BAR_FONT_SIZE,
    );
    personnel_rows(canvas, snapshot);

    section_bar(canvas, "EQUIPMENT", palette.issue, BAR_HEIGHT, BAR_FONT_SIZE);
    let table = TableLayout::new(18.0, 18.0, 7.0, 4.0);
    let issued: Vec<Vec<String>> = snapshot.issued.iter().map(|item| item.cells()).collect();
    let issued_rows = fixed_table(canvas, &ISSUED_COLUMNS, &table, &issued);

    section_bar(canvas, "ISSUE SIGNOFF", palette.issue, BAR_HEIGHT, BAR_FONT_SIZE);
    signoff_block(
        canvas,
        ISSUE_SIGNOFF_HEIGHT,
        &snapshot.issue_signoff.issuer_name,
        &snapshot.issue_signoff.receiver_name,
    );

    section_bar(
        canvas,
        "RETURNED EQUIPMENT",
        palette.returned,
        BAR_HEIGHT,
        BAR_FONT_SIZE,
    );
    let returned: Vec<Vec<String>> = snapshot.returned.iter().map(|item| item.cells()).collect();
    let returned_rows = fixed_table(canvas, &RETURNED_COLUMNS, &table, &returned);

    section_bar(
        canvas,
        "EQUIPMENT RETURN SIGNOFF",
        palette.returned,
        BAR_HEIGHT,
        BAR_FONT_SIZE,
    );
    signoff_block(
        canvas,
        RETURN_SIGNOFF_HEIGHT,
        &snapshot.return_signoff.issuer_name,
        &snapshot.return_signoff.receiver_name,
    );

    let footer_y = canvas.geometry().content_bottom() + 10.0;
    let (left, width) = (canvas.left(), canvas.content_width());
    canvas.center_text(
        left,
        footer_y,
        width,
        FOOTER,
        TextStyle::regular(8.0).with_color(palette.warning),
    );

    log::debug!(
        "Issue sheet drawn, cursor at {:.1}, {} issued and {} returned rows",
        canvas.cursor(),
        issued_rows,
        returned_rows
    );
    IssueOutcome {
        issued_rows,
        returned_rows,
    }
}

/// Name/date row and work location row.
fn personnel_rows(canvas: &mut PageCanvas, snapshot: &FormSnapshot) {
    let label = TextStyle::bold(8.0);
    let value = TextStyle::regular(8.0);
    let edges = canvas.column_edges(&PERSON_COLUMNS);

    let y = canvas.take(PERSON_ROW_HEIGHT);
    let band = canvas.band(y, PERSON_ROW_HEIGHT);
    canvas.rect(band, None);
    for &x in &edges[1..4] {
        canvas.vline(x, y, y + PERSON_ROW_HEIGHT);
    }
    let baseline = y + CELL_INSET;
    canvas.text(edges[0] + CELL_INSET, baseline, "NAME:", label.clone());
    canvas.text(edges[1] + CELL_INSET, baseline, snapshot.name.as_str(), value.clone());
    canvas.text(edges[2] + CELL_INSET, baseline, "DATE", label.clone());
    canvas.text(edges[3] + CELL_INSET, baseline, snapshot.date.as_str(), value.clone());

    let y = canvas.take(PERSON_ROW_HEIGHT);
    let band = canvas.band(y, PERSON_ROW_HEIGHT);
    canvas.rect(band, None);
    canvas.vline(edges[1], y, y + PERSON_ROW_HEIGHT);
    let baseline = y + CELL_INSET;
    canvas.text(edges[0] + CELL_INSET, baseline, "WORK LOCATION:", label);
    canvas.text(
        edges[1] + CELL_INSET,
        baseline,
        snapshot.work_location.as_str(),
        value,
    );
}
