//! Document Downloads
//!
//! This module describes the two download targets (raw markdown and the
//! standalone HTML document) and writes them to disk.

use super::html::generate_html_document;
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Export Error
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur while writing an export.
#[derive(Debug)]
pub enum ExportError {
    /// Failed to write the output file
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to open the written file in an external viewer
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Write { path, source } => {
                write!(f, "Failed to write '{}': {}", path.display(), source)
            }
            ExportError::Open { path, source } => {
                write!(f, "Failed to open '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Write { source, .. } | ExportError::Open { source, .. } => Some(source),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Export Format
// ─────────────────────────────────────────────────────────────────────────────

/// A downloadable representation of the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// The raw markdown buffer
    Markdown,
    /// The rendered fragment inside the HTML document template
    Html,
}

impl ExportFormat {
    /// Default file name offered for the download.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "document.md",
            ExportFormat::Html => "document.html",
        }
    }

    /// Media type of the download.
    pub fn media_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Html => "text/html",
        }
    }

    /// File dialog filter: display name and extensions.
    pub fn filter(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            ExportFormat::Markdown => ("Markdown Files", &["md", "markdown"]),
            ExportFormat::Html => ("HTML Files", &["html", "htm"]),
        }
    }

    /// Build the file contents from the buffer and its rendered fragment.
    pub fn contents(&self, buffer: &str, fragment: &str) -> String {
        match self {
            ExportFormat::Markdown => buffer.to_string(),
            ExportFormat::Html => generate_html_document(fragment),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Writing
// ─────────────────────────────────────────────────────────────────────────────

/// Write an export to `path`.
pub fn write_export(
    path: &Path,
    format: ExportFormat,
    buffer: &str,
    fragment: &str,
) -> Result<(), ExportError> {
    let contents = format.contents(buffer, fragment);
    std::fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Exported {} ({}) to {}",
        format.file_name(),
        format.media_type(),
        path.display()
    );
    Ok(())
}

/// Write the HTML document to a temp file and open it in the system browser.
///
/// Returns the path of the written preview file.
pub fn preview_in_browser(fragment: &str) -> Result<PathBuf, ExportError> {
    let path = std::env::temp_dir().join("markpad-preview.html");
    write_export(&path, ExportFormat::Html, "", fragment)?;
    open::that(&path).map_err(|source| ExportError::Open {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::render;
    use tempfile::TempDir;

    #[test]
    fn test_file_names_and_media_types() {
        assert_eq!(ExportFormat::Markdown.file_name(), "document.md");
        assert_eq!(ExportFormat::Markdown.media_type(), "text/markdown");
        assert_eq!(ExportFormat::Html.file_name(), "document.html");
        assert_eq!(ExportFormat::Html.media_type(), "text/html");
    }

    #[test]
    fn test_markdown_contents_are_raw_buffer() {
        let buffer = "# Title\n\n**bold**";
        assert_eq!(ExportFormat::Markdown.contents(buffer, "ignored"), buffer);
    }

    #[test]
    fn test_html_contents_embed_fragment() {
        let fragment = render("**bold**");
        let html = ExportFormat::Html.contents("**bold**", &fragment);
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<p><strong>bold</strong></p>"));
    }

    #[test]
    fn test_write_export_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(ExportFormat::Markdown.file_name());

        write_export(&path, ExportFormat::Markdown, "hello *world*", "<p></p>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello *world*");
    }

    #[test]
    fn test_write_export_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("document.html");

        let err = write_export(&path, ExportFormat::Html, "", "<p></p>").unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
        assert!(err.to_string().contains("document.html"));
    }
}
