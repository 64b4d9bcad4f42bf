//! The two pages of the form, each drawn onto its own canvas.

mod credentials;
mod issue;

pub use credentials::{CredentialsOutcome, draw_credentials_sheet};
pub use issue::{IssueOutcome, draw_issue_sheet};

use crate::config::FormConfig;
use issue_form_layout::ImageSource;

/// Everything a sheet needs besides the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SheetContext<'a> {
    pub config: &'a FormConfig,
    /// The decoded (or broken) logo shared by both headers.
    pub logo: Option<&'a ImageSource>,
}

const HEADER_HEIGHT: f32 = 58.0;
const LOGO_FRACTION: f32 = 0.42;
const BAR_HEIGHT: f32 = 16.0;
