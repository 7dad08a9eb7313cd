//! Table of contents and reading order types

use serde::{Deserialize, Serialize};

/// A single entry in the table of contents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TocEntry {
    /// Display label
    pub title: String,

    /// Href of the content item this entry points at
    pub href: String,
}

impl TocEntry {
    /// Create a new TOC entry
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}

/// One position in the reading order (spine)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "href", rename_all = "snake_case")]
pub enum SpineItem {
    /// The generated navigation document
    Navigation,

    /// A registered content item, by href
    Content(String),
}
