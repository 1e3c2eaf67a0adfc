//! Resource Resolution
//!
//! Resolves external template and style URLs to their text content.

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read an external template or style.
#[derive(Debug, Clone, Error)]
pub enum ResourceError {
    #[error("resource not found: {url}")]
    NotFound { url: String },
    #[error("failed to read {url}: {reason}")]
    Io { url: String, reason: String },
}

impl ResourceError {
    pub fn url(&self) -> &str {
        match self {
            ResourceError::NotFound { url } | ResourceError::Io { url, .. } => url,
        }
    }
}

/// Resolves an external resource URL to its text content.
///
/// May perform blocking I/O. Implementations used across concurrent `read`
/// calls must themselves be safe for concurrent use.
pub trait FileResolver {
    fn resolve(&self, url: &str) -> Result<String, ResourceError>;
}

impl<R: FileResolver + ?Sized> FileResolver for &R {
    fn resolve(&self, url: &str) -> Result<String, ResourceError> {
        (**self).resolve(url)
    }
}

/// Reads resources from the file system, optionally rooted at a base
/// directory.
#[derive(Debug, Default)]
pub struct FsFileResolver {
    root_dir: Option<PathBuf>,
}

impl FsFileResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rooted_at(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: Some(root_dir.into()),
        }
    }
}

impl FileResolver for FsFileResolver {
    fn resolve(&self, url: &str) -> Result<String, ResourceError> {
        let path = match &self.root_dir {
            Some(root) => root.join(url),
            None => PathBuf::from(url),
        };
        std::fs::read_to_string(&path).map_err(|e| ResourceError::Io {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// In-memory resolver, the deterministic stand-in for tests.
#[derive(Debug, Default)]
pub struct InMemoryFileResolver {
    resources: HashMap<String, String>,
}

impl InMemoryFileResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, url: &str, content: &str) {
        self.resources.insert(url.to_string(), content.to_string());
    }
}

impl FileResolver for InMemoryFileResolver {
    fn resolve(&self, url: &str) -> Result<String, ResourceError> {
        self.resources
            .get(url)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound {
                url: url.to_string(),
            })
    }
}
