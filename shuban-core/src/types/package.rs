//! The in-memory package description built for every converted file

use super::{
    ContentItem, Metadata, ReadingDirection, SpineItem, StyleResource, TocEntry, CONTENT_HREF,
};
use crate::config::Settings;
use crate::encoder::{EpubBackend, PackageBackend};
use crate::error::PackagingError;
use serde::{Deserialize, Serialize};
use std::io::Write;
use uuid::Uuid;

/// Everything needed to serialize one EPUB package
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Package {
    /// Title, language, author and identifier
    pub metadata: Metadata,

    /// Content documents, in registration order
    pub content: Vec<ContentItem>,

    /// Stylesheets
    pub styles: Vec<StyleResource>,

    /// Table of contents
    pub toc: Vec<TocEntry>,

    /// Reading order
    pub spine: Vec<SpineItem>,

    /// Declared page progression
    pub direction: ReadingDirection,
}

impl Package {
    /// Create an empty package with the given title and language
    pub fn new(title: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::new(title, language),
            content: Vec::new(),
            styles: Vec::new(),
            toc: Vec::new(),
            spine: Vec::new(),
            direction: ReadingDirection::default(),
        }
    }

    /// Describe the single-document vertical package for `body_markup`.
    ///
    /// Every call draws a new random identifier.
    pub fn assemble(title: &str, body_markup: &str, settings: &Settings) -> Self {
        let metadata =
            Metadata::new(title, settings.language.as_str()).with_creator(settings.author.as_str());

        Self {
            metadata,
            content: vec![ContentItem::new(
                CONTENT_HREF,
                body_markup,
                settings.language.as_str(),
            )],
            styles: vec![StyleResource::default()],
            toc: vec![TocEntry::new(settings.toc_label.as_str(), CONTENT_HREF)],
            spine: vec![SpineItem::Navigation, SpineItem::Content(CONTENT_HREF.to_string())],
            direction: ReadingDirection::RightToLeft,
        }
    }

    /// Package identifier
    pub fn id(&self) -> Uuid {
        self.metadata.identifier
    }

    /// Package title
    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    /// Hand this description to `backend` and serialize it into `writer`
    pub fn write_to(
        &self,
        backend: &mut dyn PackageBackend,
        writer: &mut dyn Write,
    ) -> Result<(), PackagingError> {
        backend.set_metadata(&self.metadata)?;
        for item in &self.content {
            backend.add_content_item(item)?;
        }
        for style in &self.styles {
            backend.add_style_resource(style)?;
        }
        backend.set_table_of_contents(&self.toc)?;
        backend.set_reading_order(&self.spine)?;
        backend.set_page_direction(self.direction)?;
        backend.serialize(writer)
    }

    /// Serialize as EPUB into `writer`
    pub fn write_epub(&self, writer: &mut dyn Write) -> Result<(), PackagingError> {
        self.write_to(&mut EpubBackend::new(), writer)
    }

    /// Serialize as EPUB into a byte buffer
    pub fn to_epub_bytes(&self) -> Result<Vec<u8>, PackagingError> {
        let mut bytes = Vec::new();
        self.write_epub(&mut bytes)?;
        Ok(bytes)
    }
}
