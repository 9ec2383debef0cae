//! Content Sources
//!
//! Where the content document comes from. The page controller only sees
//! the `ContentSource` trait, so tests substitute a static document and
//! deployments pick file or HTTP delivery.

use std::path::PathBuf;

use tracing::debug;

use crate::{ContentDocument, ContentError};

/// A place the content document can be loaded from
pub trait ContentSource {
    /// Load and parse the document
    fn load(&self) -> Result<ContentDocument, ContentError>;
}

/// An embedded JSON document
#[derive(Debug, Clone)]
pub struct StaticSource {
    json: String,
}

impl StaticSource {
    pub fn new(json: &str) -> Self {
        Self { json: json.to_string() }
    }
}

impl ContentSource for StaticSource {
    fn load(&self) -> Result<ContentDocument, ContentError> {
        ContentDocument::from_json(&self.json)
    }
}

/// A JSON document on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentSource for FileSource {
    fn load(&self) -> Result<ContentDocument, ContentError> {
        debug!(path = %self.path.display(), "loading content file");
        let json = std::fs::read_to_string(&self.path)?;
        ContentDocument::from_json(&json)
    }
}

/// A JSON document behind a single GET
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(url: &str) -> Self {
        Self { url: url.to_string() }
    }
}

#[cfg(feature = "http")]
impl ContentSource for HttpSource {
    fn load(&self) -> Result<ContentDocument, ContentError> {
        debug!(url = %self.url, "fetching content document");
        let mut response = ureq::get(&self.url).call().map_err(|err| match err {
            ureq::Error::StatusCode(code) => ContentError::Status(code),
            other => ContentError::Request(other.to_string()),
        })?;
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|err| ContentError::Request(err.to_string()))?;
        ContentDocument::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source() {
        let source = StaticSource::new(r#"{"stats": [{"number": "1", "label": "One"}]}"#);
        let doc = source.load().unwrap();
        assert_eq!(doc.stats.len(), 1);
    }

    #[test]
    fn test_file_source_missing() {
        let source = FileSource::new("/nonexistent/content.json");
        assert!(matches!(source.load(), Err(ContentError::Io(_))));
    }
}
