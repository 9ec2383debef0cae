//! Lumen Content
//!
//! The externally supplied content document: typed records for every
//! section, JSON parsing, and pluggable sources. Any source failure is
//! a fatal initialization error for the page.

mod records;
mod source;

pub use records::{
    ContactItem, ContentDocument, EventItem, Feature, FooterLink, FooterSection, Stat,
};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{ContentSource, FileSource, StaticSource};

use thiserror::Error;

/// Content loading errors
#[derive(Debug, Error)]
pub enum ContentError {
    /// The request could not be made or completed
    #[error("content request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status
    #[error("content request returned status {0}")]
    Status(u16),
    /// The content file could not be read
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid content JSON
    #[error("failed to parse content document: {0}")]
    Parse(#[from] serde_json::Error),
}
