//! Reads a written package back: metadata, reading order, page
//! progression and the text of its vertical containers

use crate::error::ParseError;
use regex::Regex;
use serde::Serialize;
use std::io::{Cursor, Read};

/// Summary of an EPUB package
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PackageInfo {
    pub identifier: Option<String>,
    pub title: String,
    pub language: Option<String>,
    pub creators: Vec<String>,

    /// Spine idrefs, in reading order
    pub spine: Vec<String>,

    /// Top-level table-of-contents labels
    pub toc: Vec<String>,

    /// `page-progression-direction` of the spine, if declared
    pub page_direction: Option<String>,

    /// Text of each vertical content container, in reading order
    pub containers: Vec<String>,
}

/// Inspect an EPUB package from a reader
pub fn inspect(reader: &mut dyn Read) -> Result<PackageInfo, ParseError> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|e| ParseError::InvalidEpub(e.to_string()))?;

    let page_direction = page_progression_direction(&data)?;

    let mut epub = epub::doc::EpubDoc::from_reader(Cursor::new(data))
        .map_err(|e| ParseError::InvalidEpub(e.to_string()))?;

    let get_meta = |key: &str| -> Option<String> { epub.mdata(key).map(|item| item.value.clone()) };

    let title = get_meta("title").ok_or_else(|| ParseError::MissingField("title".to_string()))?;
    let identifier = get_meta("identifier");
    let language = get_meta("language");
    let creators: Vec<String> = epub
        .metadata
        .iter()
        .filter(|item| item.property == "creator")
        .map(|item| item.value.clone())
        .collect();

    let toc: Vec<String> = epub.toc.iter().map(|nav| nav.label.clone()).collect();

    let spine: Vec<String> = epub.spine.iter().map(|item| item.idref.clone()).collect();

    let mut containers = Vec::new();
    for idref in &spine {
        if let Some((content, _mime)) = epub.get_resource_str(idref) {
            containers.extend(container_texts(&content)?);
        }
    }

    Ok(PackageInfo {
        identifier,
        title,
        language,
        creators,
        spine,
        toc,
        page_direction,
        containers,
    })
}

/// Text of every `div` whose inline style sets a writing mode
pub fn container_texts(html: &str) -> Result<Vec<String>, ParseError> {
    use scraper::{Html, Selector};

    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"div[style*="writing-mode"]"#)
        .map_err(|e| ParseError::InvalidHtml(format!("{:?}", e)))?;

    Ok(document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect())
}

/// Read `page-progression-direction` from the package document
fn page_progression_direction(data: &[u8]) -> Result<Option<String>, ParseError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| ParseError::InvalidEpub(e.to_string()))?;

    let opf_name = archive
        .file_names()
        .find(|name| name.ends_with(".opf"))
        .map(|name| name.to_string())
        .ok_or_else(|| ParseError::MissingField("package document".to_string()))?;

    let mut opf = String::new();
    archive
        .by_name(&opf_name)
        .map_err(|e| ParseError::InvalidEpub(e.to_string()))?
        .read_to_string(&mut opf)
        .map_err(|e| ParseError::InvalidEpub(e.to_string()))?;

    let re = Regex::new(r#"page-progression-direction\s*=\s*["']([a-z]+)["']"#)
        .map_err(|e| ParseError::InvalidEpub(e.to_string()))?;

    Ok(re.captures(&opf).map(|caps| caps[1].to_string()))
}
