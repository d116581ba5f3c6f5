//! Markdown Formatting Actions
//!
//! This module implements the toolbar's insertion engine: given the editor
//! buffer, a selection and a named action, it computes the new buffer and
//! where the caret lands. It is pure; the caller owns the buffer and is
//! responsible for re-rendering and persisting the result.
//!
//! # Supported Actions
//! - **Inline**: Bold, Italic, Strikethrough, Inline Code
//! - **Links**: Links, Images
//! - **Blocks**: Headings (1-3), Blockquote, Bullet/Numbered list items, Table
//! - **Document**: Clear (asks the caller for confirmation)
//!
//! # Usage
//! ```ignore
//! use crate::markdown::formatting::{apply_action, FormatAction};
//!
//! let edit = apply_action("hello", 0, 5, FormatAction::Bold, |_| false)?;
//! assert_eq!(edit.text, "**hello**");
//! assert_eq!(edit.cursor(), 9);
//! ```

use crate::string_utils::{char_count, char_to_byte};
use std::fmt;
use std::str::FromStr;

/// Prompt passed to the confirmation callback before clearing the document.
pub const CLEAR_PROMPT: &str = "Clear all content?";

/// Fixed two-column table inserted by [`FormatAction::Table`].
pub const TABLE_TEMPLATE: &str =
    "| Header 1 | Header 2 |\n|----------|----------|\n| Cell 1   | Cell 2   |";

// ─────────────────────────────────────────────────────────────────────────────
// Format Action Enum
// ─────────────────────────────────────────────────────────────────────────────

/// Formatting actions available from the toolbar and keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatAction {
    /// Bold text (**text**)
    Bold,
    /// Italic text (*text*)
    Italic,
    /// Strikethrough (~~text~~)
    Strikethrough,
    /// Heading level 1-3
    Heading(u8),
    /// Link ([text](url))
    Link,
    /// Image (![alt](image-url))
    Image,
    /// Inline code (`code`)
    InlineCode,
    /// Blockquote (> quote)
    Blockquote,
    /// Bullet list item (- item)
    BulletList,
    /// Numbered list item (1. item)
    NumberedList,
    /// Two-by-two table skeleton
    Table,
    /// Empty the whole document
    Clear,
}

impl FormatAction {
    /// Every action, in toolbar order.
    pub const ALL: [FormatAction; 14] = [
        FormatAction::Bold,
        FormatAction::Italic,
        FormatAction::Strikethrough,
        FormatAction::Heading(1),
        FormatAction::Heading(2),
        FormatAction::Heading(3),
        FormatAction::Link,
        FormatAction::Image,
        FormatAction::InlineCode,
        FormatAction::Blockquote,
        FormatAction::BulletList,
        FormatAction::NumberedList,
        FormatAction::Table,
        FormatAction::Clear,
    ];

    /// The short name used by the toolbar (`bold`, `h1`, `ul`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Strikethrough => "strikethrough",
            Self::Heading(n) => match heading_level(*n) {
                1 => "h1",
                2 => "h2",
                _ => "h3",
            },
            Self::Link => "link",
            Self::Image => "image",
            Self::InlineCode => "code",
            Self::Blockquote => "quote",
            Self::BulletList => "ul",
            Self::NumberedList => "ol",
            Self::Table => "table",
            Self::Clear => "clear",
        }
    }

    /// Get the toolbar label for this action.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Strikethrough => "S̶",
            Self::Heading(n) => match heading_level(*n) {
                1 => "H1",
                2 => "H2",
                _ => "H3",
            },
            Self::Link => "🔗",
            Self::Image => "🖼",
            Self::InlineCode => "</>",
            Self::Blockquote => "\u{275D}",
            Self::BulletList => "\u{2022}",
            Self::NumberedList => "1.",
            Self::Table => "▦",
            Self::Clear => "🗑",
        }
    }

    /// Get the tooltip text for this action.
    pub fn tooltip(&self) -> String {
        match self {
            Self::Bold => "Bold (Ctrl+B)".to_string(),
            Self::Italic => "Italic (Ctrl+I)".to_string(),
            Self::Strikethrough => "Strikethrough".to_string(),
            Self::Heading(n) => format!("Heading {}", heading_level(*n)),
            Self::Link => "Insert Link".to_string(),
            Self::Image => "Insert Image".to_string(),
            Self::InlineCode => "Inline Code".to_string(),
            Self::Blockquote => "Blockquote".to_string(),
            Self::BulletList => "Bullet List".to_string(),
            Self::NumberedList => "Numbered List".to_string(),
            Self::Table => "Insert Table".to_string(),
            Self::Clear => "Clear All".to_string(),
        }
    }
}

impl fmt::Display for FormatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatAction {
    type Err = FormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let action = match name {
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "strikethrough" => Self::Strikethrough,
            "h1" | "heading-1" => Self::Heading(1),
            "h2" | "heading-2" => Self::Heading(2),
            "h3" | "heading-3" => Self::Heading(3),
            "link" => Self::Link,
            "image" => Self::Image,
            "code" | "inline-code" => Self::InlineCode,
            "quote" | "blockquote" => Self::Blockquote,
            "ul" | "unordered-list-item" => Self::BulletList,
            "ol" | "ordered-list-item" => Self::NumberedList,
            "table" | "table-skeleton" => Self::Table,
            "clear" => Self::Clear,
            other => return Err(FormatError::InvalidAction(other.to_string())),
        };
        Ok(action)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Contract violations reported by the insertion engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Selection is reversed or reaches past the end of the buffer
    InvalidRange { start: usize, end: usize, len: usize },
    /// Action name is not one of the known actions
    InvalidAction(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidRange { start, end, len } => write!(
                f,
                "Invalid selection {}..{} for buffer of {} characters",
                start, end, len
            ),
            FormatError::InvalidAction(name) => write!(f, "Unknown formatting action '{}'", name),
        }
    }
}

impl std::error::Error for FormatError {}

// ─────────────────────────────────────────────────────────────────────────────
// Edit Result
// ─────────────────────────────────────────────────────────────────────────────

/// What an action did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Template text replaced the selection
    Inserted,
    /// The buffer was emptied after confirmation
    Cleared,
    /// Nothing changed (clear was declined)
    Unchanged,
}

/// Result of applying a formatting action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The buffer after the action
    pub text: String,
    /// Selection after the action, in character offsets
    pub selection: (usize, usize),
    /// What the action did
    pub kind: EditKind,
}

impl Edit {
    /// Caret position after the action (end of the selection).
    pub fn cursor(&self) -> usize {
        self.selection.1
    }
}

/// Heading levels outside 1-3 fall back to the nearest supported level.
fn heading_level(level: u8) -> u8 {
    level.clamp(1, 3)
}

// ─────────────────────────────────────────────────────────────────────────────
// Applying Actions
// ─────────────────────────────────────────────────────────────────────────────

/// Apply a formatting action to `text` with the selection `start..end`.
///
/// Offsets are character offsets. The selected text (or a placeholder when
/// nothing is selected) is wrapped in the action's template and replaces the
/// selection; the new selection collapses to a caret.
///
/// `confirm` is called with [`CLEAR_PROMPT`] for [`FormatAction::Clear`] only.
/// Declining leaves text and selection exactly as given.
///
/// # Errors
/// `FormatError::InvalidRange` if `start > end` or `end` is past the end of
/// the buffer. The buffer is never touched in that case.
pub fn apply_action<F>(
    text: &str,
    start: usize,
    end: usize,
    action: FormatAction,
    confirm: F,
) -> Result<Edit, FormatError>
where
    F: FnOnce(&str) -> bool,
{
    let len = char_count(text);
    let (Some(start_byte), Some(end_byte)) = (char_to_byte(text, start), char_to_byte(text, end))
    else {
        return Err(FormatError::InvalidRange { start, end, len });
    };
    if start > end {
        return Err(FormatError::InvalidRange { start, end, len });
    }

    if action == FormatAction::Clear {
        return Ok(apply_clear(text, start, end, confirm));
    }

    let selected = &text[start_byte..end_byte];
    let (insertion, offset) = insertion_for(action, selected);

    let mut new_text = String::with_capacity(text.len() + insertion.len());
    new_text.push_str(&text[..start_byte]);
    new_text.push_str(&insertion);
    new_text.push_str(&text[end_byte..]);

    let cursor = start + offset;
    Ok(Edit {
        text: new_text,
        selection: (cursor, cursor),
        kind: EditKind::Inserted,
    })
}

/// Parse `name` and apply the named action.
///
/// # Errors
/// `FormatError::InvalidAction` for an unknown name, otherwise as
/// [`apply_action`].
pub fn apply_named_action<F>(
    text: &str,
    start: usize,
    end: usize,
    name: &str,
    confirm: F,
) -> Result<Edit, FormatError>
where
    F: FnOnce(&str) -> bool,
{
    let action = name.parse::<FormatAction>()?;
    apply_action(text, start, end, action, confirm)
}

fn apply_clear<F>(text: &str, start: usize, end: usize, confirm: F) -> Edit
where
    F: FnOnce(&str) -> bool,
{
    if confirm(CLEAR_PROMPT) {
        Edit {
            text: String::new(),
            selection: (0, 0),
            kind: EditKind::Cleared,
        }
    } else {
        Edit {
            text: text.to_string(),
            selection: (start, end),
            kind: EditKind::Unchanged,
        }
    }
}

/// Build the replacement text and the caret offset (in characters) relative
/// to the start of the selection.
fn insertion_for(action: FormatAction, selected: &str) -> (String, usize) {
    let has_selection = !selected.is_empty();
    let or = |placeholder: &'static str| if has_selection { selected } else { placeholder };

    // Wrapping actions put the caret after the opening marker when they
    // inserted a placeholder, and after the whole insertion otherwise
    let wrap = |marker: &str, placeholder: &'static str| {
        let insertion = format!("{}{}{}", marker, or(placeholder), marker);
        let offset = if has_selection {
            char_count(&insertion)
        } else {
            char_count(marker)
        };
        (insertion, offset)
    };

    let at_end = |insertion: String| {
        let offset = char_count(&insertion);
        (insertion, offset)
    };

    match action {
        FormatAction::Bold => wrap("**", "bold text"),
        FormatAction::Italic => wrap("*", "italic text"),
        FormatAction::Strikethrough => wrap("~~", "strikethrough"),
        FormatAction::InlineCode => wrap("`", "code"),
        FormatAction::Heading(level) => {
            let level = heading_level(level);
            let placeholder = match level {
                1 => "Heading 1",
                2 => "Heading 2",
                _ => "Heading 3",
            };
            at_end(format!(
                "{} {}",
                "#".repeat(usize::from(level)),
                or(placeholder)
            ))
        }
        FormatAction::Link => {
            let insertion = format!("[{}](url)", or("link text"));
            // Inside the `(url)` placeholder
            let offset = char_count(&insertion) - 4;
            (insertion, offset)
        }
        FormatAction::Image => {
            let insertion = format!("![{}](image-url)", or("alt text"));
            // Just before the closing paren
            let offset = char_count(&insertion) - 1;
            (insertion, offset)
        }
        FormatAction::Blockquote => at_end(format!("> {}", or("quote"))),
        FormatAction::BulletList => at_end(format!("- {}", or("list item"))),
        FormatAction::NumberedList => at_end(format!("1. {}", or("list item"))),
        FormatAction::Table => at_end(TABLE_TEMPLATE.to_string()),
        FormatAction::Clear => (String::new(), 0),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(text: &str, start: usize, end: usize, action: FormatAction) -> Edit {
        apply_action(text, start, end, action, |_| false).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inline Formatting Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_bold_without_selection() {
        let edit = apply("", 0, 0, FormatAction::Bold);
        assert_eq!(edit.text, "**bold text**");
        assert_eq!(edit.selection, (2, 2));
        assert_eq!(edit.kind, EditKind::Inserted);
    }

    #[test]
    fn test_bold_with_full_selection() {
        let edit = apply("hello", 0, 5, FormatAction::Bold);
        assert_eq!(edit.text, "**hello**");
        assert_eq!(edit.cursor(), 9);
    }

    #[test]
    fn test_bold_inside_text() {
        let edit = apply("Hello world", 6, 11, FormatAction::Bold);
        assert_eq!(edit.text, "Hello **world**");
        assert_eq!(edit.cursor(), 15);
    }

    #[test]
    fn test_italic_placeholder() {
        let edit = apply("ab", 1, 1, FormatAction::Italic);
        assert_eq!(edit.text, "a*italic text*b");
        assert_eq!(edit.cursor(), 2);
    }

    #[test]
    fn test_italic_with_selection() {
        let edit = apply("Hello world", 6, 11, FormatAction::Italic);
        assert_eq!(edit.text, "Hello *world*");
        assert_eq!(edit.cursor(), 13);
    }

    #[test]
    fn test_strikethrough_placeholder() {
        let edit = apply("", 0, 0, FormatAction::Strikethrough);
        assert_eq!(edit.text, "~~strikethrough~~");
        assert_eq!(edit.cursor(), 2);
    }

    #[test]
    fn test_inline_code() {
        let edit = apply("", 0, 0, FormatAction::InlineCode);
        assert_eq!(edit.text, "`code`");
        assert_eq!(edit.cursor(), 1);

        let edit = apply("run x", 4, 5, FormatAction::InlineCode);
        assert_eq!(edit.text, "run `x`");
        assert_eq!(edit.cursor(), 7);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Link Formatting Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_link_placeholder() {
        let edit = apply("", 0, 0, FormatAction::Link);
        assert_eq!(edit.text, "[link text](url)");
        assert_eq!(edit.cursor(), 12);
        assert_eq!(&edit.text[12..15], "url");
    }

    #[test]
    fn test_link_with_selection() {
        let edit = apply("Click here", 6, 10, FormatAction::Link);
        assert_eq!(edit.text, "Click [here](url)");
        assert_eq!(edit.cursor(), 13);
    }

    #[test]
    fn test_image_placeholder() {
        let edit = apply("", 0, 0, FormatAction::Image);
        assert_eq!(edit.text, "![alt text](image-url)");
        assert_eq!(edit.cursor(), 21);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Block Formatting Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_headings() {
        let edit = apply("", 0, 0, FormatAction::Heading(1));
        assert_eq!(edit.text, "# Heading 1");
        assert_eq!(edit.cursor(), 11);

        let edit = apply("", 0, 0, FormatAction::Heading(2));
        assert_eq!(edit.text, "## Heading 2");

        let edit = apply("Title", 0, 5, FormatAction::Heading(3));
        assert_eq!(edit.text, "### Title");
        assert_eq!(edit.cursor(), 9);
    }

    #[test]
    fn test_out_of_range_heading_labels_match_insertion() {
        let low = FormatAction::Heading(0);
        assert_eq!(apply("", 0, 0, low).text, "# Heading 1");
        assert_eq!(low.name(), "h1");
        assert_eq!(low.icon(), "H1");
        assert_eq!(low.tooltip(), "Heading 1");

        let high = FormatAction::Heading(7);
        assert_eq!(apply("", 0, 0, high).text, "### Heading 3");
        assert_eq!(high.name(), "h3");
        assert_eq!(high.tooltip(), "Heading 3");
    }

    #[test]
    fn test_blockquote_and_lists() {
        assert_eq!(apply("", 0, 0, FormatAction::Blockquote).text, "> quote");
        assert_eq!(apply("", 0, 0, FormatAction::BulletList).text, "- list item");

        let edit = apply("x", 0, 1, FormatAction::NumberedList);
        assert_eq!(edit.text, "1. x");
        assert_eq!(edit.cursor(), 4);
    }

    #[test]
    fn test_table_ignores_selection() {
        let edit = apply("abc", 0, 3, FormatAction::Table);
        assert_eq!(edit.text, TABLE_TEMPLATE);
        assert_eq!(edit.cursor(), TABLE_TEMPLATE.chars().count());
    }

    #[test]
    fn test_surrounding_text_preserved() {
        let edit = apply("before after", 7, 7, FormatAction::Bold);
        assert_eq!(edit.text, "before **bold text**after");
        assert_eq!(edit.cursor(), 9);
    }

    #[test]
    fn test_multibyte_offsets_are_characters() {
        let edit = apply("på deg", 0, 2, FormatAction::Bold);
        assert_eq!(edit.text, "**på** deg");
        assert_eq!(edit.cursor(), 6);

        let edit = apply("中文", 1, 1, FormatAction::Italic);
        assert_eq!(edit.text, "中*italic text*文");
        assert_eq!(edit.cursor(), 2);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Clear Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_clear_confirmed() {
        let mut prompt = String::new();
        let edit = apply_action("some text", 2, 4, FormatAction::Clear, |p| {
            prompt = p.to_string();
            true
        })
        .unwrap();
        assert_eq!(prompt, CLEAR_PROMPT);
        assert_eq!(edit.text, "");
        assert_eq!(edit.selection, (0, 0));
        assert_eq!(edit.kind, EditKind::Cleared);
    }

    #[test]
    fn test_clear_declined_leaves_everything() {
        let edit = apply_action("some text", 2, 4, FormatAction::Clear, |_| false).unwrap();
        assert_eq!(edit.text, "some text");
        assert_eq!(edit.selection, (2, 4));
        assert_eq!(edit.kind, EditKind::Unchanged);
    }

    #[test]
    fn test_confirm_not_called_for_other_actions() {
        let mut asked = false;
        apply_action("", 0, 0, FormatAction::Bold, |_| {
            asked = true;
            true
        })
        .unwrap();
        assert!(!asked);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Error Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_reversed_range_rejected() {
        let result = apply_action("abcdefgh", 6, 2, FormatAction::Bold, |_| true);
        assert_eq!(
            result,
            Err(FormatError::InvalidRange {
                start: 6,
                end: 2,
                len: 8
            })
        );
    }

    #[test]
    fn test_range_past_end_rejected() {
        let result = apply_action("abc", 0, 4, FormatAction::Bold, |_| true);
        assert!(matches!(result, Err(FormatError::InvalidRange { .. })));

        // Offsets count characters, not bytes
        let result = apply_action("æ", 0, 2, FormatAction::Bold, |_| true);
        assert!(matches!(result, Err(FormatError::InvalidRange { .. })));
    }

    #[test]
    fn test_reversed_range_rejected_for_clear() {
        let mut asked = false;
        let result = apply_action("abc", 2, 1, FormatAction::Clear, |_| {
            asked = true;
            true
        });
        assert!(result.is_err());
        assert!(!asked);
    }

    #[test]
    fn test_unknown_action_name() {
        let result = apply_named_action("abc", 0, 0, "underline", |_| true);
        assert_eq!(result, Err(FormatError::InvalidAction("underline".to_string())));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Name Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_names_round_trip() {
        for action in FormatAction::ALL {
            assert_eq!(action.name().parse::<FormatAction>(), Ok(action));
        }
    }

    #[test]
    fn test_long_names() {
        assert_eq!("heading-2".parse::<FormatAction>(), Ok(FormatAction::Heading(2)));
        assert_eq!("inline-code".parse::<FormatAction>(), Ok(FormatAction::InlineCode));
        assert_eq!("unordered-list-item".parse::<FormatAction>(), Ok(FormatAction::BulletList));
        assert_eq!("ordered-list-item".parse::<FormatAction>(), Ok(FormatAction::NumberedList));
        assert_eq!("table-skeleton".parse::<FormatAction>(), Ok(FormatAction::Table));
    }

    #[test]
    fn test_named_action_applies() {
        let edit = apply_named_action("", 0, 0, "quote", |_| false).unwrap();
        assert_eq!(edit.text, "> quote");
    }

    #[test]
    fn test_error_display() {
        let err = FormatError::InvalidAction("x".to_string());
        assert!(err.to_string().contains("'x'"));
    }
}
