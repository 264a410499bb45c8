//! Text statistics for the editor status bar.
//!
//! # Responsibility
//! - Count lines, words and characters of a note body.
//!
//! # Invariants
//! - Pure and stateless; safe to recompute on every keystroke.
//! - An empty body has 1 line, 0 words and 0 characters.

use once_cell::sync::Lazy;
use regex::Regex;

static NEWLINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("valid newline regex"));
static MULTI_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("valid space regex"));

/// Line, word and character counts of a piece of markdown text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    /// Segments after splitting on any newline variant (CRLF, CR, LF).
    pub lines: usize,
    /// Whitespace-separated words after newline normalization.
    pub words: usize,
    /// UTF-16 code units in the body, not graphemes.
    pub chars: usize,
}

/// Computes line, word and character counts for a note body.
///
/// Words are counted by turning newlines into spaces, trimming the ends and
/// collapsing runs of spaces to one, then splitting on single spaces. A body
/// that trims to nothing counts as 0 words while still spanning 1 line.
/// Characters are UTF-16 code units, so a non-BMP character counts as 2.
pub fn text_stats(content: &str) -> TextStats {
    let lines = NEWLINE_RE.split(content).count();

    let normalized = NEWLINE_RE.replace_all(content, " ");
    let trimmed = normalized.trim();
    let words = if trimmed.is_empty() {
        0
    } else {
        MULTI_SPACE_RE.replace_all(trimmed, " ").split(' ').count()
    };

    TextStats {
        lines,
        words,
        chars: content.encode_utf16().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::{text_stats, TextStats};

    #[test]
    fn empty_content_is_one_line_zero_words() {
        assert_eq!(
            text_stats(""),
            TextStats {
                lines: 1,
                words: 0,
                chars: 0
            }
        );
    }

    #[test]
    fn whitespace_only_content_has_zero_words() {
        let stats = text_stats("   \n  ");
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.words, 0);
    }

    #[test]
    fn collapsed_spaces_and_blank_lines_count_correctly() {
        // Two spaces between a/b, one blank line before c.
        let stats = text_stats("a  b\n\nc");
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.chars, 7);
    }

    #[test]
    fn newline_variants_all_split_lines() {
        assert_eq!(text_stats("a\r\nb\rc\nd").lines, 4);
        assert_eq!(text_stats("a\r\nb\rc\nd").words, 4);
    }

    #[test]
    fn chars_count_utf16_code_units() {
        assert_eq!(text_stats("héllo").chars, 5);
        // Non-BMP characters take a surrogate pair.
        assert_eq!(text_stats("🙂").chars, 2);
        assert_eq!(text_stats("a🙂b").chars, 4);
    }
}
