//! Equipment issue record generator.
//!
//! Turns a flat form snapshot into a fixed two-page PDF: the equipment
//! issue/return record and the new starter credentials sheet.
//!
//! ```no_run
//! use issue_form::{FormConfig, FormGenerator, FormSnapshot};
//!
//! let snapshot = FormSnapshot::from_json_str(r#"{ "name": "Jack Smith" }"#)?;
//! let form = FormGenerator::new(FormConfig::default())?.generate(&snapshot)?;
//! std::fs::write(&form.filename, &form.bytes)?;
//! # Ok::<(), issue_form::PipelineError>(())
//! ```

pub mod config;
pub mod derive;
pub mod error;
pub mod generator;
pub mod logo;
pub mod sheets;
pub mod snapshot;

pub use config::{AccountDefaults, DocumentMeta, FormConfig, Palette};
pub use derive::{
    Checklist, ChecklistItem, NameDerivation, export_filename, first_asset_number, m365_email,
    safe_filename,
};
pub use error::PipelineError;
pub use generator::{FormGenerator, GeneratedForm, RenderReport};
pub use logo::LogoCatalog;
pub use snapshot::{
    ExtraAccount, FormSnapshot, ISSUED_SLOTS, IssuedItem, RETURNED_SLOTS, ReturnedItem,
    SignoffPair, StarterCredentials,
};

// Re-export the building blocks embedders are most likely to need.
pub use issue_form_layout::{LaidOutDocument, LaidOutPage, PageGeometry};
pub use issue_form_traits::{InMemoryResourceProvider, ResourceProvider};
pub use issue_form_resource::FilesystemResourceProvider;
