pub mod fixtures;
pub mod pdf_assertions;

use issue_form::{
    FormConfig, FormGenerator, FormSnapshot, GeneratedForm, InMemoryResourceProvider,
    PipelineError,
};
use lopdf::Document as LopdfDocument;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text shown on a 1-based page, one entry per drawn string
    pub fn page_text(&self, page: u32) -> Vec<String> {
        pdf_assertions::page_strings(&self.doc, page)
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A generator whose logos come from `provider` instead of the filesystem.
pub fn generator_with_logos(provider: InMemoryResourceProvider) -> FormGenerator {
    FormGenerator::with_resources(FormConfig::default(), Arc::new(provider))
        .expect("default config is valid")
}

/// Generate a form with no logos available.
pub fn generate(snapshot: &FormSnapshot) -> Result<(GeneratedForm, GeneratedPdf), PipelineError> {
    generate_with(&generator_with_logos(InMemoryResourceProvider::new()), snapshot)
}

pub fn generate_with(
    generator: &FormGenerator,
    snapshot: &FormSnapshot,
) -> Result<(GeneratedForm, GeneratedPdf), PipelineError> {
    let form = generator.generate(snapshot)?;
    let pdf = GeneratedPdf::from_bytes(form.bytes.clone())
        .map_err(|e| PipelineError::InvalidSnapshot(e.to_string()))?;
    Ok((form, pdf))
}
