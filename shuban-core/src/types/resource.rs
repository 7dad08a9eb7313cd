//! Items registered inside a package: content documents and stylesheets

use serde::{Deserialize, Serialize};

/// Internal file name of the single content document
pub const CONTENT_HREF: &str = "chap_01.xhtml";

/// Internal file name of the stylesheet
pub const STYLE_HREF: &str = "style/nav.css";

/// Stylesheet body. Real styling is inline in the content document.
pub const STYLE_CSS: &str = "BODY {color: white;}";

/// An XHTML content document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    /// Path inside the package
    pub href: String,

    /// Full XHTML markup
    pub markup: String,

    /// Language tag of the document
    pub language: String,
}

impl ContentItem {
    pub fn new(href: impl Into<String>, markup: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            markup: markup.into(),
            language: language.into(),
        }
    }
}

/// A CSS resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StyleResource {
    /// Path inside the package
    pub href: String,

    /// Stylesheet text
    pub css: String,
}

impl StyleResource {
    pub fn new(href: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            css: css.into(),
        }
    }

    /// MIME type for this resource
    pub fn mime_type(&self) -> &str {
        "text/css"
    }
}

impl Default for StyleResource {
    fn default() -> Self {
        Self::new(STYLE_HREF, STYLE_CSS)
    }
}
