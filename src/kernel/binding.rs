//! Contract between the sync controller and the text-editing widget.

use super::language::SyntaxMode;
use serde::{Deserialize, Serialize};

/// Invoked with the full text after every user edit.
pub type ChangeHandler = Box<dyn FnMut(&str)>;

/// Options a binding is constructed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorOptions {
    #[serde(default)]
    pub mode: SyntaxMode,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_true")]
    pub line_numbers: bool,
    #[serde(default = "default_true")]
    pub read_only: bool,
}

fn default_theme() -> String {
    "dracula".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            mode: SyntaxMode::default(),
            theme: default_theme(),
            line_numbers: true,
            read_only: true,
        }
    }
}

pub trait EditorBinding {
    /// Replaces the visible text. Must not invoke the change handler.
    fn load_content(&mut self, text: &str);

    fn read_content(&self) -> String;

    fn set_mode(&mut self, mode: SyntaxMode);

    fn mode(&self) -> SyntaxMode;

    fn set_read_only(&mut self, read_only: bool);

    fn is_read_only(&self) -> bool;

    /// Registers the edit handler, replacing any previous one. `None` clears it.
    fn on_change(&mut self, handler: Option<ChangeHandler>);
}
