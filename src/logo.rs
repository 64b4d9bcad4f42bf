//! Selectable company logos.

use issue_form_resource::FilesystemResourceProvider;
use issue_form_traits::{ResourceProvider, SharedResourceData};
use std::path::Path;
use std::sync::Arc;

const LOGO_EXTENSION: &str = "png";

/// The set of logos a form can be branded with.
///
/// A missing directory or an unknown selection is never an error: the
/// header is simply drawn without a logo.
#[derive(Debug, Clone)]
pub struct LogoCatalog {
    provider: Arc<dyn ResourceProvider>,
    preferred: String,
}

impl LogoCatalog {
    pub fn new(provider: Arc<dyn ResourceProvider>, preferred: impl Into<String>) -> Self {
        Self {
            provider,
            preferred: preferred.into(),
        }
    }

    pub fn from_dir<P: AsRef<Path>>(dir: P, preferred: impl Into<String>) -> Self {
        Self::new(Arc::new(FilesystemResourceProvider::new(dir)), preferred)
    }

    /// Logo file names, sorted.
    pub fn available(&self) -> Vec<String> {
        self.provider.list(LOGO_EXTENSION)
    }

    /// The preferred logo if it is present, else the first one listed.
    pub fn default_selection(&self) -> Option<String> {
        let available = self.available();
        if available.iter().any(|name| *name == self.preferred) {
            return Some(self.preferred.clone());
        }
        available.into_iter().next()
    }

    /// Resolves a selection to bytes. A blank selection means the default.
    pub fn load(&self, selection: &str) -> Option<SharedResourceData> {
        let name = match selection.trim() {
            "" => self.default_selection()?,
            s => s.to_string(),
        };
        match self.provider.load(&name) {
            Ok(bytes) => {
                log::debug!("Loaded logo '{}' from {}", name, self.provider.name());
                Some(bytes)
            }
            Err(e) => {
                log::warn!("Logo '{}' unavailable, header drawn without it: {}", name, e);
                None
            }
        }
    }
}
