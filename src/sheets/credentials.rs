//! Page 2: the new starter credentials sheet.

use super::{BAR_HEIGHT, HEADER_HEIGHT, LOGO_FRACTION, SheetContext};
use crate::derive::m365_email;
use crate::snapshot::FormSnapshot;
use issue_form_layout::sections::{
    Column, TableLayout, TableOutcome, flowing_table, kv_row, logo_header, section_bar,
};
use issue_form_layout::text::wrap_words;
use issue_form_layout::{FontWeight, PageCanvas, Rect, TextStyle};

const KV_ROW_HEIGHT: f32 = 18.0;
const KV_LABEL_FRACTION: f32 = 0.35;
const BAR_FONT_SIZE: f32 = 9.0;
const SECTION_GAP: f32 = 10.0;

const INSTRUCTIONS_BOX_HEIGHT: f32 = 44.0;
/// The box reaches this far above the cursor it is anchored to.
const INSTRUCTIONS_BOX_RISE: f32 = 10.0;
const INSTRUCTIONS_FONT_SIZE: f32 = 9.0;
const INSTRUCTIONS_MAX_LINES: usize = 3;
const INSTRUCTIONS_LINE_GAP: f32 = 12.0;
const INSTRUCTIONS_PADDING: f32 = 8.0;

/// Extra-account rows stop this far above the bottom margin.
const EXTRA_ACCOUNTS_RESERVE: f32 = 20.0;

const EXTRA_ACCOUNT_COLUMNS: [Column<'static>; 3] = [
    Column::new("Software", 0.33),
    Column::new("Account", 0.34),
    Column::new("Password", 0.33),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CredentialsOutcome {
    pub extra_accounts: TableOutcome,
    pub instruction_lines_dropped: usize,
}

pub fn draw_credentials_sheet(
    canvas: &mut PageCanvas,
    snapshot: &FormSnapshot,
    ctx: &SheetContext<'_>,
) -> CredentialsOutcome {
    let config = ctx.config;
    let creds = &snapshot.credentials;
    let accounts = &config.accounts;

    logo_header(
        canvas,
        HEADER_HEIGHT,
        LOGO_FRACTION,
        &config.document.credentials_heading,
        ctx.logo,
    );

    let left = canvas.left();

    let y = canvas.take(18.0);
    canvas.text(left, y, "New Starter Details", TextStyle::bold(10.0));
    let y = canvas.take(14.0);
    canvas.text(
        left,
        y,
        starter_line(&creds.full_name, &creds.role),
        TextStyle::regular(9.0),
    );
    canvas.skip(18.0);

    let instruction_lines_dropped = instructions_box(canvas, &creds.instructions);

    section_bar(
        canvas,
        "ACCOUNT DETAILS",
        config.palette.issue,
        BAR_HEIGHT,
        BAR_FONT_SIZE,
    );
    canvas.skip(SECTION_GAP);

    let kv = |canvas: &mut PageCanvas, label: &str, value: &str| {
        kv_row(canvas, label, value, KV_ROW_HEIGHT, KV_LABEL_FRACTION);
    };
    kv(canvas, "Laptop login username:", &creds.laptop_username);
    kv(canvas, "Laptop login password:", &creds.laptop_password);
    kv(canvas, "Microsoft 365 URL:", &accounts.m365_url);
    kv(
        canvas,
        "Microsoft 365 Username:",
        &m365_email(creds, &accounts.m365_domain),
    );
    kv(canvas, "Microsoft 365 Password:", &creds.m365_password);

    if creds.m365_2fa {
        let y = canvas.take(10.0);
        canvas.text(
            left + 2.0,
            y,
            "2 Factor Authentication setup required",
            TextStyle::bold(9.0),
        );
        canvas.skip(16.0);
    }

    canvas.skip(SECTION_GAP);
    section_bar(
        canvas,
        "USEFUL INFO",
        config.palette.issue,
        BAR_HEIGHT,
        BAR_FONT_SIZE,
    );
    canvas.skip(SECTION_GAP);

    let sharepoint = creds
        .sharepoint_url
        .as_deref()
        .unwrap_or(&accounts.sharepoint_url);
    let helpdesk = creds
        .helpdesk_email
        .as_deref()
        .unwrap_or(&accounts.helpdesk_email);
    kv(canvas, "SharePoint:", sharepoint);
    kv(canvas, "IT Support Helpdesk:", helpdesk);

    let y = canvas.take(SECTION_GAP);
    canvas.text(left, y, "Extra Accounts", TextStyle::bold(10.0));
    canvas.skip(12.0);

    let rows: Vec<Vec<String>> = snapshot
        .extra_accounts
        .iter()
        .map(|account| account.cells())
        .collect();
    let extra_accounts = flowing_table(
        canvas,
        &EXTRA_ACCOUNT_COLUMNS,
        &TableLayout::new(18.0, 18.0, 8.0, 5.0),
        &rows,
        EXTRA_ACCOUNTS_RESERVE,
    );

    log::debug!(
        "Credentials sheet drawn, cursor at {:.1}, {} of {} extra account row(s) placed",
        canvas.cursor(),
        extra_accounts.drawn,
        rows.len()
    );
    CredentialsOutcome {
        extra_accounts,
        instruction_lines_dropped,
    }
}

/// `"{name} – {role}"` with the separator dropped when either side is blank.
fn starter_line(full_name: &str, role: &str) -> String {
    format!("{} \u{2013} {}", full_name.trim(), role.trim())
        .trim_matches(|c| c == ' ' || c == '\u{2013}')
        .to_string()
}

/// Bordered free-text box, word-wrapped to at most three lines. The box
/// starts slightly above the cursor. Returns how many wrapped lines did not
/// fit.
fn instructions_box(canvas: &mut PageCanvas, instructions: &str) -> usize {
    let top_anchor = canvas.cursor();
    let left = canvas.left();
    let width = canvas.content_width();

    let bottom = top_anchor + INSTRUCTIONS_BOX_RISE - INSTRUCTIONS_BOX_HEIGHT;
    canvas.rect(
        Rect::new(left, bottom, width, INSTRUCTIONS_BOX_HEIGHT),
        None,
    );

    let wrapped = wrap_words(
        instructions.trim(),
        FontWeight::Regular,
        INSTRUCTIONS_FONT_SIZE,
        width - 2.0 * INSTRUCTIONS_PADDING,
        INSTRUCTIONS_MAX_LINES,
    );
    let mut baseline = top_anchor - INSTRUCTIONS_PADDING;
    for line in wrapped.lines {
        canvas.text(
            left + INSTRUCTIONS_PADDING,
            baseline,
            line,
            TextStyle::regular(INSTRUCTIONS_FONT_SIZE),
        );
        baseline -= INSTRUCTIONS_LINE_GAP;
    }
    if wrapped.dropped_lines > 0 {
        log::warn!(
            "Instructions text truncated, {} line(s) did not fit",
            wrapped.dropped_lines
        );
    }

    // Leave a small gap between the box and whatever is claimed next.
    let box_bottom_gap = 4.0;
    canvas.skip(top_anchor - bottom + box_bottom_gap);
    wrapped.dropped_lines
}
