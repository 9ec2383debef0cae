//! Content Records
//!
//! Immutable, externally supplied data items, read once per page load.
//! Missing sections deserialize to empty lists so a partial document
//! still renders the sections it carries.

use serde::Deserialize;

use crate::ContentError;

/// A headline statistic
#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub number: String,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

/// A product feature card
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A timeline event
#[derive(Debug, Clone, Deserialize)]
pub struct EventItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub date: String,
}

/// A contact channel card
#[derive(Debug, Clone, Deserialize)]
pub struct ContactItem {
    pub icon: String,
    pub title: String,
    pub value: String,
    pub description: String,
}

/// A footer link
#[derive(Debug, Clone, Deserialize)]
pub struct FooterLink {
    pub text: String,
    pub url: String,
}

/// A footer link column
#[derive(Debug, Clone, Deserialize)]
pub struct FooterSection {
    pub title: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

/// The full content document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentDocument {
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub events: Vec<EventItem>,
    #[serde(default)]
    pub contact: Vec<ContactItem>,
    #[serde(default)]
    pub footer: Vec<FooterSection>,
}

impl ContentDocument {
    /// Parse a content document from JSON
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }
}
