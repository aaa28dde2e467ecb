use ropey::Rope;

use crate::text::{TextLocation, TextRange};

/// Whether `c` belongs to a word for hover purposes.
///
/// Alphanumerics plus `_`, the usual identifier class.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A read-only text buffer backed by a rope.
///
/// Provides the text-side operations the hover pipeline needs: line access,
/// location-to-offset conversion, word boundary lookup, and substring reads.
/// All lookups clamp out-of-bounds input to the buffer instead of panicking.
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    /// Create a buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Total number of lines.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total length in chars.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Content of a line, without its trailing newline.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let s = self.rope.line(line_idx).to_string();
        Some(s.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    /// Length of a line in chars, without its trailing newline.
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.chars().count())
    }

    /// Char offset of the start of a line. Lines past the end clamp to the
    /// last line.
    pub fn line_start(&self, line_idx: usize) -> usize {
        let line_idx = line_idx.min(self.rope.len_lines().saturating_sub(1));
        self.rope.line_to_char(line_idx)
    }

    /// Convert a location to a linear char offset.
    ///
    /// The line clamps to the last line; the column clamps to the line's
    /// length, so the result always points into the buffer (or to its end).
    pub fn offset_of(&self, location: TextLocation) -> usize {
        let line = location.line.min(self.rope.len_lines().saturating_sub(1));
        let column = location.column.min(self.line_len(line));
        self.rope.line_to_char(line) + column
    }

    /// Convert a char offset back to a location.
    pub fn location_of(&self, offset: usize) -> TextLocation {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        TextLocation::new(line, offset - self.rope.line_to_char(line))
    }

    /// Offset of the start of the word enclosing `offset`.
    ///
    /// Scans backwards while the preceding char is a word char; an offset
    /// outside any word returns unchanged.
    pub fn word_start(&self, offset: usize) -> usize {
        let mut start = offset.min(self.rope.len_chars());
        while start > 0 {
            match self.rope.get_char(start - 1) {
                Some(c) if is_word_char(c) => start -= 1,
                _ => break,
            }
        }
        start
    }

    /// Offset one past the end of the word enclosing `offset`.
    pub fn word_end(&self, offset: usize) -> usize {
        let mut end = offset.min(self.rope.len_chars());
        while let Some(c) = self.rope.get_char(end) {
            if is_word_char(c) {
                end += 1;
            } else {
                break;
            }
        }
        end
    }

    /// Read the text in a half-open char-offset range, clamped to the buffer.
    pub fn text_in(&self, range: TextRange) -> String {
        let end = range.end.min(self.rope.len_chars());
        let start = range.start.min(end);
        self.rope.slice(start..end).to_string()
    }
}
