//! Text buffer model
//!
//! Rope storage plus a single `(row, grapheme column)` cursor.

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Borrow a RopeSlice as `&str` when it is contiguous.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Clone, Debug)]
pub struct TextBuffer {
    rope: Rope,
    cursor: (usize, usize),
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replaces the whole text and parks the cursor at the start.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = (0, 0);
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let row = row.min(self.len_lines().saturating_sub(1));
        let col = col.min(self.line_grapheme_len(row));
        self.cursor = (row, col);
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line_slice(&self, row: usize) -> Option<RopeSlice<'_>> {
        if row < self.rope.len_lines() {
            Some(self.rope.line(row))
        } else {
            None
        }
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        self.rope.line_to_char(pos.0) + self.grapheme_to_char_index(pos.0, pos.1)
    }

    fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let line = slice_to_cow(self.rope.line(row));
        line.graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        let Some(slice) = self.line_slice(row) else {
            return 0;
        };
        let line = slice_to_cow(slice);
        let without_newline = line.strip_suffix('\n').unwrap_or(&line);
        let without_newline = without_newline.strip_suffix('\r').unwrap_or(without_newline);
        without_newline.graphemes(true).count()
    }

    /// Inserts at the cursor. `\r\n` and lone `\r` are stored as `\n`.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let text = normalize_line_endings(s);
        let char_offset = self.pos_to_char(self.cursor);
        self.rope.insert(char_offset, &text);
        self.cursor = self.char_to_pos(char_offset + text.chars().count());
    }

    /// Backspace. Returns `false` at the start of the buffer.
    pub fn delete_backward(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col > 0 {
            let start = self.pos_to_char((row, col - 1));
            let end = self.pos_to_char((row, col));
            self.rope.remove(start..end);
            self.cursor = (row, col - 1);
            true
        } else if row > 0 {
            let prev_len = self.line_grapheme_len(row - 1);
            let start = self.pos_to_char((row - 1, prev_len));
            let end = self.rope.line_to_char(row);
            self.rope.remove(start..end);
            self.cursor = (row - 1, prev_len);
            true
        } else {
            false
        }
    }

    /// Delete. Returns `false` at the end of the buffer.
    pub fn delete_forward(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col < self.line_grapheme_len(row) {
            let start = self.pos_to_char((row, col));
            let end = self.pos_to_char((row, col + 1));
            self.rope.remove(start..end);
            true
        } else if row + 1 < self.len_lines() {
            // Joins with the next line, whatever its break looks like.
            let start = self.pos_to_char((row, col));
            let end = self.rope.line_to_char(row + 1);
            self.rope.remove(start..end);
            true
        } else {
            false
        }
    }

    fn char_to_pos(&self, char_idx: usize) -> (usize, usize) {
        let char_idx = char_idx.min(self.rope.len_chars());
        let row = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(row);
        let prefix = slice_to_cow(self.rope.slice(line_start..char_idx));
        (row, prefix.graphemes(true).count())
    }

    pub fn move_left(&mut self) {
        let (row, col) = self.cursor;
        if col > 0 {
            self.cursor = (row, col - 1);
        } else if row > 0 {
            self.cursor = (row - 1, self.line_grapheme_len(row - 1));
        }
    }

    pub fn move_right(&mut self) {
        let (row, col) = self.cursor;
        if col < self.line_grapheme_len(row) {
            self.cursor = (row, col + 1);
        } else if row + 1 < self.len_lines() {
            self.cursor = (row + 1, 0);
        }
    }

    pub fn move_up(&mut self) {
        let (row, col) = self.cursor;
        if row > 0 {
            self.set_cursor(row - 1, col);
        }
    }

    pub fn move_down(&mut self) {
        let (row, col) = self.cursor;
        if row + 1 < self.len_lines() {
            self.set_cursor(row + 1, col);
        }
    }

    pub fn move_home(&mut self) {
        self.cursor.1 = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor.1 = self.line_grapheme_len(self.cursor.0);
    }
}

fn normalize_line_endings(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace("\r\n", "\n").replace('\r', "\n"))
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
