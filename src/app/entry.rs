//! Inline text entry for naming a new file.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEntry {
    value: String,
    cursor: usize,
    error: Option<String>,
}

impl NameEntry {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Byte offset of the cursor in [`NameEntry::value`].
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn insert(&mut self, ch: char) {
        self.error = None;
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        for ch in s.chars().filter(|ch| !ch.is_control()) {
            self.insert(ch);
        }
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.error = None;
        let prev = self.prev_boundary();
        self.value.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = self.prev_boundary();
        true
    }

    pub fn cursor_right(&mut self) -> bool {
        let Some(ch) = self.value[self.cursor..].chars().next() else {
            return false;
        };
        self.cursor += ch.len_utf8();
        true
    }

    /// The trimmed name, or `None` (with an error set) when it is blank.
    pub fn accept(&mut self) -> Option<String> {
        let name = self.value.trim();
        if name.is_empty() {
            self.error = Some("Name required".to_string());
            return None;
        }
        Some(name.to_string())
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/entry.rs"]
mod tests;
