//! Static document settings. Everything here has a default matching the
//! printed form, so a config file only needs the keys it changes.

use crate::error::PipelineError;
use issue_form_layout::PageGeometry;
use issue_form_types::Color;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub page: PageGeometry,
    /// Directory of selectable `.png` logos.
    pub logos_dir: PathBuf,
    /// Preferred logo when the snapshot names none.
    pub default_logo: String,
    pub document: DocumentMeta,
    pub palette: Palette,
    pub accounts: AccountDefaults,
    /// Domains offered for Microsoft 365 addresses.
    pub m365_domains: Vec<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            page: PageGeometry::A4,
            logos_dir: PathBuf::from("assets/logos"),
            default_logo: "demoforce_logo.png".to_string(),
            document: DocumentMeta::default(),
            palette: Palette::default(),
            accounts: AccountDefaults::default(),
            m365_domains: [
                "statom.co.uk",
                "demoforce.co.uk",
                "st-mep.co.uk",
                "frankifoundations.co.uk",
                "apexcoreengineering.co.uk",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl FormConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let config: FormConfig =
            serde_json::from_str(json).map_err(|e| PipelineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_json(&source)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        self.page
            .validate()
            .map_err(|e| PipelineError::Config(e.to_string()))?;
        if self.accounts.m365_domain.trim().is_empty() {
            return Err(PipelineError::Config(
                "accounts.m365_domain must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Static labels printed in the document header.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentMeta {
    pub code: String,
    pub title: String,
    pub version: String,
    pub date: String,
    /// Title beside the logo on the first page.
    pub heading: String,
    /// Title beside the logo on the credentials page.
    pub credentials_heading: String,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            code: "D5.HRS.016".into(),
            title: "Equipment Issue Form".into(),
            version: "Version 1.2".into(),
            date: "2021-10-12".into(),
            heading: "EQUIPMENT ISSUE RECORD".into(),
            credentials_heading: "NEW STARTER PASSWORDS".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Fill of the issue-side section bars.
    pub issue: Color,
    /// Fill of the return-side section bars.
    pub returned: Color,
    /// Footer warning text.
    pub warning: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            issue: Color::rgb(0xf4, 0xb4, 0x00),
            returned: Color::rgb(0xcf, 0xe2, 0xf3),
            warning: Color::RED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountDefaults {
    /// Used when the snapshot has a username base but no domain.
    pub m365_domain: String,
    pub m365_url: String,
    pub sharepoint_url: String,
    pub helpdesk_email: String,
}

impl Default for AccountDefaults {
    fn default() -> Self {
        Self {
            m365_domain: "statom.co.uk".into(),
            m365_url: "https://www.office.com/".into(),
            sharepoint_url: "https://statom.sharepoint.com".into(),
            helpdesk_email: "helpdesk@statom.co.uk".into(),
        }
    }
}
