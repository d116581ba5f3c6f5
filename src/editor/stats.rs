//! Text statistics for the status bar
//!
//! Words are whitespace-separated runs of non-whitespace characters, so
//! leading and trailing whitespace never produce empty words.

// ─────────────────────────────────────────────────────────────────────────────
// TextStats
// ─────────────────────────────────────────────────────────────────────────────

/// Text statistics for a document.
///
/// # Example
///
/// ```ignore
/// let stats = TextStats::from_text("Hello, World!\n\nNew paragraph.");
/// assert_eq!(stats.words, 4);
/// assert_eq!(stats.characters, 29);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Number of words
    pub words: usize,
    /// Number of characters including whitespace
    pub characters: usize,
}

impl TextStats {
    /// Calculate statistics from the given text in a single pass.
    pub fn from_text(text: &str) -> Self {
        let mut stats = Self::default();
        let mut in_word = false;

        for ch in text.chars() {
            stats.characters += 1;
            if ch.is_whitespace() {
                in_word = false;
            } else if !in_word {
                in_word = true;
                stats.words += 1;
            }
        }

        stats
    }

    /// Word count label, singular for exactly one word.
    pub fn word_label(&self) -> String {
        word_count_label(self.words)
    }
}

/// Format a word count as `"1 word"` or `"N words"`.
fn word_count_label(count: usize) -> String {
    if count == 1 {
        "1 word".to_string()
    } else {
        format!("{} words", count)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
