//! Snapshot in, PDF bytes and a filename out.

use crate::config::FormConfig;
use crate::derive::export_filename;
use crate::error::PipelineError;
use crate::logo::LogoCatalog;
use crate::sheets::{SheetContext, draw_credentials_sheet, draw_issue_sheet};
use crate::snapshot::FormSnapshot;
use issue_form_layout::{ImageSource, LaidOutDocument, PageCanvas};
use issue_form_render_core::DocumentRenderer;
use issue_form_render_lopdf::LopdfRenderer;
use issue_form_traits::ResourceProvider;
use std::sync::Arc;

/// What the layout pass had to leave out or degrade.
///
/// The document itself never paginates or fails because of these; they are
/// reported so a caller can tell the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub issued_rows: usize,
    pub returned_rows: usize,
    pub extra_accounts_drawn: usize,
    /// Non-blank extra-account rows that did not fit on the page.
    pub extra_accounts_dropped: usize,
    pub instruction_lines_dropped: usize,
    /// Why the selected logo could not be drawn, if it could not.
    pub logo_error: Option<String>,
}

impl RenderReport {
    /// True when some content was dropped for lack of space.
    pub fn is_truncated(&self) -> bool {
        self.extra_accounts_dropped > 0 || self.instruction_lines_dropped > 0
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedForm {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub report: RenderReport,
}

/// Lays out and renders the two-page form.
///
/// A generator holds only configuration; every call works on its own
/// snapshot and shares nothing mutable.
#[derive(Debug, Clone)]
pub struct FormGenerator {
    config: FormConfig,
    logos: LogoCatalog,
    renderer: LopdfRenderer,
}

impl FormGenerator {
    /// Logos are read from `config.logos_dir`.
    pub fn new(config: FormConfig) -> Result<Self, PipelineError> {
        let logos = LogoCatalog::from_dir(&config.logos_dir, config.default_logo.clone());
        Self::build(config, logos)
    }

    /// Logos are read from `provider` instead of the configured directory.
    pub fn with_resources(
        config: FormConfig,
        provider: Arc<dyn ResourceProvider>,
    ) -> Result<Self, PipelineError> {
        let logos = LogoCatalog::new(provider, config.default_logo.clone());
        Self::build(config, logos)
    }

    fn build(config: FormConfig, logos: LogoCatalog) -> Result<Self, PipelineError> {
        config.validate()?;
        let renderer = LopdfRenderer::new().with_title(config.document.title.clone());
        Ok(Self {
            config,
            logos,
            renderer,
        })
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn logos(&self) -> &LogoCatalog {
        &self.logos
    }

    /// The pure layout pass. Never fails: missing data is drawn blank and a
    /// broken logo becomes an inline marker.
    pub fn layout(&self, snapshot: &FormSnapshot) -> (LaidOutDocument, RenderReport) {
        // Read and decode once; both page headers share the result.
        let logo = self
            .logos
            .load(&snapshot.selected_logo)
            .map(|bytes| ImageSource::from_bytes(&bytes));
        let ctx = SheetContext {
            config: &self.config,
            logo: logo.as_ref(),
        };

        let mut issue_page = PageCanvas::new(self.config.page);
        let issue = draw_issue_sheet(&mut issue_page, snapshot, &ctx);

        let mut credentials_page = PageCanvas::new(self.config.page);
        let credentials = draw_credentials_sheet(&mut credentials_page, snapshot, &ctx);

        let report = RenderReport {
            issued_rows: issue.issued_rows,
            returned_rows: issue.returned_rows,
            extra_accounts_drawn: credentials.extra_accounts.drawn,
            extra_accounts_dropped: credentials.extra_accounts.dropped,
            instruction_lines_dropped: credentials.instruction_lines_dropped,
            logo_error: logo.as_ref().and_then(|l| l.error()).map(str::to_string),
        };
        let document = LaidOutDocument {
            geometry: self.config.page,
            pages: vec![issue_page.finish(), credentials_page.finish()],
        };
        (document, report)
    }

    /// Lays out and renders `snapshot`. Only a failure of the PDF writer
    /// itself is an error.
    pub fn generate(&self, snapshot: &FormSnapshot) -> Result<GeneratedForm, PipelineError> {
        let (document, report) = self.layout(snapshot);
        let bytes = self.renderer.render(&document)?;
        let filename = export_filename(snapshot);

        if report.is_truncated() {
            log::warn!(
                "{} extra account row(s) and {} instruction line(s) were left out of {}",
                report.extra_accounts_dropped,
                report.instruction_lines_dropped,
                filename
            );
        }
        log::info!("Generated {} ({} bytes)", filename, bytes.len());
        Ok(GeneratedForm {
            bytes,
            filename,
            report,
        })
    }
}
