//! Character Offset Utilities
//!
//! Selections coming from the editor are counted in characters, while Rust
//! strings are sliced by byte. These helpers convert character offsets to
//! byte offsets without ever landing inside a multi-byte character.
//!
//! # Example
//! ```ignore
//! use crate::string_utils::char_to_byte;
//!
//! let text = "Hei på deg"; // 'å' is 2 bytes
//! assert_eq!(char_to_byte(text, 6), Some(7));
//! ```

/// Number of characters in `s`.
#[inline]
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Convert a character offset to a byte offset.
///
/// An offset equal to the character count maps to `s.len()`. Returns `None`
/// if `char_index` is past the end of the string.
pub fn char_to_byte(s: &str, char_index: usize) -> Option<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(char_index)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count() {
        assert_eq!(char_count(""), 0);
        assert_eq!(char_count("abc"), 3);
        assert_eq!(char_count("Hei på deg"), 10);
        assert_eq!(char_count("🎉"), 1);
    }

    #[test]
    fn test_char_to_byte_ascii() {
        assert_eq!(char_to_byte("abc", 0), Some(0));
        assert_eq!(char_to_byte("abc", 2), Some(2));
        assert_eq!(char_to_byte("abc", 3), Some(3));
        assert_eq!(char_to_byte("abc", 4), None);
    }

    #[test]
    fn test_char_to_byte_multibyte() {
        let text = "Hei på deg";
        assert_eq!(char_to_byte(text, 5), Some(5));
        assert_eq!(char_to_byte(text, 6), Some(7));
        assert_eq!(char_to_byte(text, 10), Some(11));
        assert_eq!(char_to_byte(text, 11), None);
    }

    #[test]
    fn test_char_to_byte_empty() {
        assert_eq!(char_to_byte("", 0), Some(0));
        assert_eq!(char_to_byte("", 1), None);
    }

    #[test]
    fn test_emoji() {
        let text = "a🎉b";
        assert_eq!(char_to_byte(text, 2), Some(5));
        assert_eq!(char_to_byte(text, 3), Some(6));
    }
}
