//! ResourceProvider trait for abstracting resource loading.
//!
//! The form engine reads logo images through this trait so the layout pass
//! never touches the filesystem directly.

use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use std::collections::BTreeMap;
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// A source of named binary resources (logo images).
///
/// # Implementations
///
/// - `FilesystemResourceProvider`: a single local directory
/// - `InMemoryResourceProvider`: pre-populated memory, used by tests and embedders
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load a resource by its name.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Check if a resource exists.
    fn exists(&self, path: &str) -> bool;

    /// Names of the resources whose extension matches `extension`
    /// (case-insensitive, without the dot), sorted.
    ///
    /// A provider with nothing to offer returns an empty list rather than an error.
    fn list(&self, extension: &str) -> Vec<String>;

    /// Get the base path for resolving relative resources.
    ///
    /// Returns `None` if the provider doesn't use path-based resolution.
    fn base_path(&self) -> Option<&str> {
        None
    }

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Case-insensitive extension check shared by the providers.
pub fn has_extension(name: &str, extension: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && ext.eq_ignore_ascii_case(extension),
        None => false,
    }
}

/// An in-memory resource provider.
///
/// Resources are stored in memory and must be pre-populated before use.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<BTreeMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource to the in-memory store.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let path_string = path.into();
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::LoadFailed {
                path: path_string.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources.insert(path_string, Arc::new(data));
        Ok(())
    }

    /// Remove a resource from the store.
    ///
    /// Returns `None` if the lock is poisoned or the resource doesn't exist.
    pub fn remove(&self, path: &str) -> Option<SharedResourceData> {
        self.resources.write().ok()?.remove(path)
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                path: path.to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(path))
            .unwrap_or(false)
    }

    fn list(&self, extension: &str) -> Vec<String> {
        self.resources
            .read()
            .map(|r| {
                r.keys()
                    .filter(|k| has_extension(k, extension))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_provider_add_and_load() {
        let provider = InMemoryResourceProvider::new();
        provider.add("logo.png", b"\x89PNG".to_vec()).unwrap();

        let data = provider.load("logo.png").unwrap();
        assert_eq!(&*data, b"\x89PNG");
    }

    #[test]
    fn test_in_memory_provider_not_found() {
        let provider = InMemoryResourceProvider::new();
        let result = provider.load("missing.png");
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn test_in_memory_provider_exists_and_remove() {
        let provider = InMemoryResourceProvider::new();
        provider.add("a.png", vec![]).unwrap();
        assert!(provider.exists("a.png"));

        let removed = provider.remove("a.png");
        assert!(removed.is_some());
        assert!(!provider.exists("a.png"));
        assert!(provider.is_empty());
    }

    #[test]
    fn test_in_memory_provider_list_filters_and_sorts() {
        let provider = InMemoryResourceProvider::new();
        provider.add("zeta.png", vec![]).unwrap();
        provider.add("Alpha.PNG", vec![]).unwrap();
        provider.add("notes.txt", vec![]).unwrap();

        assert_eq!(provider.list("png"), vec!["Alpha.PNG", "zeta.png"]);
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension("logo.png", "png"));
        assert!(has_extension("logo.PNG", "png"));
        assert!(!has_extension(".png", "png"));
        assert!(!has_extension("png", "png"));
        assert!(!has_extension("logo.jpg", "png"));
    }

    #[test]
    fn test_resource_error_display() {
        let err = ResourceError::LoadFailed {
            path: "logo.png".to_string(),
            message: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("logo.png"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_resource_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let resource_err: ResourceError = io_err.into();
        assert!(matches!(resource_err, ResourceError::Io(_)));
    }
}
