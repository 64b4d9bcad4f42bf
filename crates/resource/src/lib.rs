//! Resource providers for the equipment issue form engine.
//!
//! - [`FilesystemResourceProvider`]: loads logo images from one local directory
//! - [`InMemoryResourceProvider`]: re-exported from `issue-form-traits`

mod filesystem;

pub use filesystem::FilesystemResourceProvider;

pub use issue_form_traits::InMemoryResourceProvider;
