//! Package backends: the narrow seam between a package description and
//! the library that writes the container format

mod epub;

pub use epub::EpubBackend;

use crate::config::Settings;
use crate::error::PackagingError;
use crate::types::{ContentItem, Metadata, Package, ReadingDirection, SpineItem, StyleResource, TocEntry};
use std::io::Write;

/// File extension of the packages this crate writes
pub const EPUB_EXTENSION: &str = "epub";

/// Capabilities a packaging library must offer.
///
/// Calls arrive in the order of [`Package::write_to`]: metadata, content,
/// styles, table of contents, reading order, direction, then `serialize`.
pub trait PackageBackend {
    /// Record identifier, title, authors and language
    fn set_metadata(&mut self, metadata: &Metadata) -> Result<(), PackagingError>;

    /// Register a content document
    fn add_content_item(&mut self, item: &ContentItem) -> Result<(), PackagingError>;

    /// Register a stylesheet
    fn add_style_resource(&mut self, style: &StyleResource) -> Result<(), PackagingError>;

    /// Set the table of contents
    fn set_table_of_contents(&mut self, toc: &[TocEntry]) -> Result<(), PackagingError>;

    /// Set the reading order
    fn set_reading_order(&mut self, spine: &[SpineItem]) -> Result<(), PackagingError>;

    /// Set the page progression direction
    fn set_page_direction(&mut self, direction: ReadingDirection) -> Result<(), PackagingError>;

    /// Write the finished container to `writer`
    fn serialize(&mut self, writer: &mut dyn Write) -> Result<(), PackagingError>;
}

/// Package `body_markup` under `title` and return the EPUB bytes
pub fn assemble(title: &str, body_markup: &str, settings: &Settings) -> Result<Vec<u8>, PackagingError> {
    let package = Package::assemble(title, body_markup, settings);
    tracing::debug!("Assembling package {} for '{}'", package.id(), title);
    package.to_epub_bytes()
}
