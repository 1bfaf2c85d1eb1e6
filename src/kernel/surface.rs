//! In-process editing surface backed by [`TextBuffer`].

use super::binding::{ChangeHandler, EditorBinding, EditorOptions};
use super::language::SyntaxMode;
use crate::models::TextBuffer;
use std::fmt;

pub struct TextSurface {
    buffer: TextBuffer,
    options: EditorOptions,
    on_change: Option<ChangeHandler>,
}

impl fmt::Debug for TextSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextSurface")
            .field("buffer", &self.buffer)
            .field("options", &self.options)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl TextSurface {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            buffer: TextBuffer::new(),
            options,
            on_change: None,
        }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.buffer.cursor()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    // User edits. Each returns whether the text changed; refused while read-only.

    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut tmp = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut tmp))
    }

    pub fn insert_str(&mut self, s: &str) -> bool {
        if self.options.read_only || s.is_empty() {
            return false;
        }
        self.buffer.insert_str(s);
        self.notify();
        true
    }

    pub fn newline(&mut self) -> bool {
        self.insert_char('\n')
    }

    pub fn backspace(&mut self) -> bool {
        if self.options.read_only || !self.buffer.delete_backward() {
            return false;
        }
        self.notify();
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.options.read_only || !self.buffer.delete_forward() {
            return false;
        }
        self.notify();
        true
    }

    /// Clamped to the text.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.buffer.set_cursor(row, col);
    }

    pub fn move_left(&mut self) {
        self.buffer.move_left();
    }

    pub fn move_right(&mut self) {
        self.buffer.move_right();
    }

    pub fn move_up(&mut self) {
        self.buffer.move_up();
    }

    pub fn move_down(&mut self) {
        self.buffer.move_down();
    }

    pub fn move_home(&mut self) {
        self.buffer.move_home();
    }

    pub fn move_end(&mut self) {
        self.buffer.move_end();
    }

    fn notify(&mut self) {
        if let Some(handler) = self.on_change.as_mut() {
            let text = self.buffer.text();
            handler(&text);
        }
    }
}

impl Default for TextSurface {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

impl EditorBinding for TextSurface {
    fn load_content(&mut self, text: &str) {
        self.buffer.set_text(text);
    }

    fn read_content(&self) -> String {
        self.buffer.text()
    }

    fn set_mode(&mut self, mode: SyntaxMode) {
        self.options.mode = mode;
    }

    fn mode(&self) -> SyntaxMode {
        self.options.mode
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.options.read_only = read_only;
    }

    fn is_read_only(&self) -> bool {
        self.options.read_only
    }

    fn on_change(&mut self, handler: Option<ChangeHandler>) {
        self.on_change = handler;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/surface.rs"]
mod tests;
