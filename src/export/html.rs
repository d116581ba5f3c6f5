//! HTML Export Generation
//!
//! This module embeds a rendered HTML fragment into a complete, standalone
//! HTML document with a fixed inline stylesheet.

// ─────────────────────────────────────────────────────────────────────────────
// Document Template
// ─────────────────────────────────────────────────────────────────────────────

/// Title of every exported document.
pub const DOCUMENT_TITLE: &str = "Markdown Document";

/// Inline stylesheet of the exported document.
const EXPORT_CSS: &str = r#"        body { font-family: Arial, sans-serif; max-width: 800px; margin: 50px auto; padding: 20px; line-height: 1.6; }
        h1, h2, h3 { margin-top: 1.5em; }
        code { background: #f4f4f4; padding: 2px 6px; border-radius: 3px; }
        pre { background: #f4f4f4; padding: 15px; border-radius: 5px; overflow-x: auto; }
        blockquote { border-left: 4px solid #ddd; padding-left: 15px; color: #666; }
        img { max-width: 100%; }
        a { color: #0066cc; }"#;

/// Generate a complete HTML document around a rendered fragment.
///
/// The fragment is inserted verbatim into the body.
///
/// # Example
///
/// ```ignore
/// let html = generate_html_document(&render("# Hi"));
/// assert!(html.contains("<p><h1>Hi</h1></p>"));
/// ```
pub fn generate_html_document(fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    {body}
</body>
</html>"#,
        title = DOCUMENT_TITLE,
        css = EXPORT_CSS,
        body = fragment,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::render;

    #[test]
    fn test_generate_html_document() {
        let html = generate_html_document(&render("# Test\n\nParagraph text."));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Markdown Document</title>"));
        assert!(html.contains("<meta charset=\"UTF-8\">"));
        assert!(html.contains("<body>\n    <p><h1>Test</h1></p><p>Paragraph text.</p>\n</body>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_fragment_embedded_verbatim() {
        let fragment = "<p>a & <b>b</b> {c}</p>";
        let html = generate_html_document(fragment);
        assert!(html.contains(fragment));
    }

    #[test]
    fn test_stylesheet_inlined() {
        let html = generate_html_document("<p></p>");
        assert!(html.contains("<style>"));
        assert!(html.contains("blockquote { border-left: 4px solid #ddd;"));
        assert!(html.contains("a { color: #0066cc; }"));
    }
}
