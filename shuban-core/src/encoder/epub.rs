//! EPUB 3 backend on top of `epub-builder`

use super::PackageBackend;
use crate::error::PackagingError;
use crate::types::{ContentItem, Metadata, ReadingDirection, SpineItem, StyleResource, TocEntry};
use std::io::Write;

/// Collects a package description and writes it as EPUB 3.0.
///
/// `toc.ncx` and `nav.xhtml` are generated by the library. A leading
/// [`SpineItem::Navigation`] places the inline table of contents first in
/// the spine. Readers see it as the `toc.xhtml` spine entry, ahead of the
/// content document.
#[derive(Debug, Default)]
pub struct EpubBackend {
    metadata: Option<Metadata>,
    content: Vec<ContentItem>,
    styles: Vec<StyleResource>,
    toc: Vec<TocEntry>,
    spine: Vec<SpineItem>,
    direction: ReadingDirection,
}

impl EpubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn toc_title(&self, href: &str) -> Option<&str> {
        self.toc
            .iter()
            .find(|entry| entry.href == href)
            .map(|entry| entry.title.as_str())
    }

    fn content_item(&self, href: &str) -> Result<&ContentItem, PackagingError> {
        self.content
            .iter()
            .find(|item| item.href == href)
            .ok_or_else(|| {
                PackagingError::InvalidReadingOrder(format!("unknown content item {}", href))
            })
    }
}

impl PackageBackend for EpubBackend {
    fn set_metadata(&mut self, metadata: &Metadata) -> Result<(), PackagingError> {
        if metadata.title.is_empty() {
            return Err(PackagingError::MissingMetadata("title".to_string()));
        }
        self.metadata = Some(metadata.clone());
        Ok(())
    }

    fn add_content_item(&mut self, item: &ContentItem) -> Result<(), PackagingError> {
        self.content.push(item.clone());
        Ok(())
    }

    fn add_style_resource(&mut self, style: &StyleResource) -> Result<(), PackagingError> {
        self.styles.push(style.clone());
        Ok(())
    }

    fn set_table_of_contents(&mut self, toc: &[TocEntry]) -> Result<(), PackagingError> {
        self.toc = toc.to_vec();
        Ok(())
    }

    fn set_reading_order(&mut self, spine: &[SpineItem]) -> Result<(), PackagingError> {
        validate_reading_order(spine, &self.content)?;
        self.spine = spine.to_vec();
        Ok(())
    }

    fn set_page_direction(&mut self, direction: ReadingDirection) -> Result<(), PackagingError> {
        self.direction = direction;
        Ok(())
    }

    fn serialize(&mut self, writer: &mut dyn Write) -> Result<(), PackagingError> {
        use epub_builder::{EpubBuilder, EpubContent, EpubVersion, ReferenceType, ZipLibrary};

        let metadata = self
            .metadata
            .as_ref()
            .ok_or_else(|| PackagingError::MissingMetadata("title".to_string()))?;

        let mut builder = EpubBuilder::new(ZipLibrary::new().map_err(|e| {
            PackagingError::Library(format!("Failed to create zip: {}", e))
        })?)
        .map_err(|e| PackagingError::Library(format!("Failed to create EPUB builder: {}", e)))?;

        builder.epub_version(EpubVersion::V30);
        builder.set_uuid(metadata.identifier);

        // Set metadata
        builder
            .metadata("title", &metadata.title)
            .map_err(|e| PackagingError::Library(e.to_string()))?;

        for creator in &metadata.creator {
            builder
                .metadata("author", creator)
                .map_err(|e| PackagingError::Library(e.to_string()))?;
        }

        builder
            .metadata("lang", &metadata.language)
            .map_err(|e| PackagingError::Library(e.to_string()))?;

        builder
            .metadata("direction", self.direction.as_attribute())
            .map_err(|e| PackagingError::Library(e.to_string()))?;

        for style in &self.styles {
            builder
                .add_resource(&style.href, style.css.as_bytes(), style.mime_type())
                .map_err(|e| PackagingError::Library(e.to_string()))?;
        }

        // Reading order
        for item in &self.spine {
            match item {
                SpineItem::Navigation => {
                    builder.inline_toc();
                }
                SpineItem::Content(href) => {
                    let content = self.content_item(href)?;
                    let mut epub_content = EpubContent::new(href.as_str(), content.markup.as_bytes())
                        .reftype(ReferenceType::Text);
                    if let Some(title) = self.toc_title(href) {
                        epub_content = epub_content.title(title);
                    }
                    builder
                        .add_content(epub_content)
                        .map_err(|e| PackagingError::Library(e.to_string()))?;
                }
            }
        }

        builder
            .generate(writer)
            .map_err(|e| PackagingError::Library(e.to_string()))?;

        Ok(())
    }
}

/// Check that navigation (if present) comes first and that the spine
/// references every registered content item exactly once.
fn validate_reading_order(spine: &[SpineItem], content: &[ContentItem]) -> Result<(), PackagingError> {
    for (index, item) in spine.iter().enumerate() {
        match item {
            SpineItem::Navigation if index != 0 => {
                return Err(PackagingError::InvalidReadingOrder(
                    "navigation must be the first spine item".to_string(),
                ));
            }
            SpineItem::Navigation => {}
            SpineItem::Content(href) => {
                if !content.iter().any(|c| &c.href == href) {
                    return Err(PackagingError::InvalidReadingOrder(format!(
                        "unknown content item {}",
                        href
                    )));
                }
                let occurrences = spine
                    .iter()
                    .filter(|other| matches!(other, SpineItem::Content(h) if h == href))
                    .count();
                if occurrences > 1 {
                    return Err(PackagingError::InvalidReadingOrder(format!(
                        "content item {} appears {} times",
                        href, occurrences
                    )));
                }
            }
        }
    }

    for item in content {
        if !spine
            .iter()
            .any(|s| matches!(s, SpineItem::Content(h) if h == &item.href))
        {
            return Err(PackagingError::InvalidReadingOrder(format!(
                "content item {} is missing from the spine",
                item.href
            )));
        }
    }

    Ok(())
}
