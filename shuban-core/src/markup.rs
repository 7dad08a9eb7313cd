//! Builds the fixed XHTML skeleton that carries converted text
//! for vertical, right-to-left reading.

use crate::config::Settings;
use crate::script::ScriptConverter;

/// Inline style of the single content container
pub const CONTAINER_STYLE: &str =
    "text-orientation: upright; writing-mode: vertical-rl; display: block; line-height: 1.75em; margin: 0";

/// Viewport metadata value
pub const VIEWPORT: &str = "width=device-width, initial-scale=1.0";

/// Writing mode hint advertised in the head.
// Disagrees with the package's rtl page progression; readers ignore it.
pub const PRIMARY_WRITING_MODE: &str = "vertical-ltr";

/// Embedded style rule of the head
pub const HEAD_STYLE: &str = "body { direction: rtl; }";

/// Wrap `text` in a complete XHTML document with one vertical container.
///
/// The text becomes a single escaped text node. No paragraph or chapter
/// splitting happens.
pub fn build_document(text: &str, language: &str) -> String {
    let lang = escape_html(language);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:epub="http://www.idpf.org/2007/ops" lang="{lang}" xml:lang="{lang}">
<head>
<title>Document</title>
<meta charset="UTF-8"/>
<meta name="viewport" content="{VIEWPORT}"/>
<meta name="primary-writing-mode" content="{PRIMARY_WRITING_MODE}"/>
<style>{HEAD_STYLE}</style>
</head>
<body>
<div style="{CONTAINER_STYLE}">{}</div>
</body>
</html>
"#,
        escape_html(text)
    )
}

/// Text that ends up inside the container for a given source text.
///
/// Blank sources are replaced by the configured placeholder, which is
/// embedded as is.
pub fn embedded_text(source: &str, converter: &ScriptConverter, settings: &Settings) -> String {
    if is_blank(source) {
        settings.placeholder.clone()
    } else {
        converter.convert(source)
    }
}

/// Unicode whitespace plus the information separators U+001C..=U+001F
fn is_blank(source: &str) -> bool {
    source
        .chars()
        .all(|c| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Convert a source text and wrap it in the markup skeleton
pub fn document_for_source(
    source: &str,
    converter: &ScriptConverter,
    settings: &Settings,
) -> String {
    build_document(&embedded_text(source, converter, settings), &settings.language)
}

/// Escape HTML special characters
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_container() {
        let html = build_document("簡體字測試", "zh-TW");
        assert_eq!(html.matches("<div").count(), 1);
        assert!(html.contains(&format!(r#"<div style="{}">簡體字測試</div>"#, CONTAINER_STYLE)));
    }

    #[test]
    fn test_head_metadata() {
        let html = build_document("x", "zh-TW");
        assert!(html.contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"/>"#));
        assert!(html.contains(r#"<meta name="primary-writing-mode" content="vertical-ltr"/>"#));
        assert!(html.contains("<style>body { direction: rtl; }</style>"));
        assert!(html.contains(r#"xml:lang="zh-TW""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = build_document("a < b & c", "zh-TW");
        assert!(html.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_blank_source_uses_placeholder() {
        let settings = Settings::default();
        let converter = ScriptConverter::default();
        assert_eq!(embedded_text("", &converter, &settings), settings.placeholder);
        assert_eq!(embedded_text(" \n\t　", &converter, &settings), settings.placeholder);
    }

    #[test]
    fn test_separator_only_source_uses_placeholder() {
        let converter = ScriptConverter::default();
        let settings = Settings::default();
        assert_eq!(embedded_text("\u{1c}", &converter, &settings), settings.placeholder);
        assert_eq!(embedded_text("\u{1f}\n\u{3000}", &converter, &settings), settings.placeholder);
        assert_eq!(embedded_text("\u{1c}汉\u{1c}", &converter, &settings), "\u{1c}漢\u{1c}");
    }

    #[test]
    fn test_source_keeps_surrounding_whitespace() {
        let settings = Settings::default();
        let converter = ScriptConverter::default();
        assert_eq!(embedded_text("\n汉字\n", &converter, &settings), "\n漢字\n");
    }
}
