//! Terminal shell: file list, new-file entry, and the shared editor pane.
//!
//! The shell owns no file state of its own. Every file operation goes through
//! [`SyncController::dispatch`]; the shell only tracks focus, list selection,
//! and what is on screen.

use crate::kernel::{Action, EditorBinding, SyncController, TextSurface};
use crate::models::FileId;
use crate::settings::Settings;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::sync::mpsc::Receiver;

mod entry;
mod render;
pub mod theme;

pub use entry::NameEntry;
pub use theme::UiTheme;

const MAX_LOG_DRAIN_PER_TICK: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Files,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

#[derive(Debug, Clone, Copy, Default)]
struct ShellAreas {
    activity: Option<Rect>,
    files: Option<Rect>,
    file_rows: usize,
    editor: Option<Rect>,
    editor_gutter: u16,
}

pub struct Shell {
    sync: SyncController,
    focus: Focus,
    selected: usize,
    entry: Option<NameEntry>,
    sidebar_visible: bool,
    message: Option<String>,
    log_rx: Option<Receiver<String>>,
    last_log: Option<String>,
    theme: UiTheme,
    editor_scroll: usize,
    editor_anchor: Option<(usize, usize)>,
    files_scroll: usize,
    areas: ShellAreas,
}

impl Shell {
    pub fn new(settings: &Settings, theme: UiTheme) -> Self {
        let mut sync = if settings.seed_samples {
            SyncController::with_samples()
        } else {
            SyncController::new()
        };
        sync.set_idle_mode(settings.editor.initial_mode);
        sync.attach(TextSurface::new(settings.editor.editor_options()));
        Self::with_controller(sync, settings.sidebar_visible, theme)
    }

    pub fn with_controller(sync: SyncController, sidebar_visible: bool, theme: UiTheme) -> Self {
        Self {
            sync,
            focus: if sidebar_visible {
                Focus::Files
            } else {
                Focus::Editor
            },
            selected: 0,
            entry: None,
            sidebar_visible,
            message: None,
            log_rx: None,
            last_log: None,
            theme,
            editor_scroll: 0,
            editor_anchor: None,
            files_scroll: 0,
            areas: ShellAreas::default(),
        }
    }

    pub fn set_log_receiver(&mut self, rx: Receiver<String>) {
        self.log_rx = Some(rx);
    }

    pub fn sync(&self) -> &SyncController {
        &self.sync
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn entry(&self) -> Option<&NameEntry> {
        self.entry.as_ref()
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Pulls pending log lines; returns whether the status line changed.
    pub fn tick(&mut self) -> bool {
        let Some(rx) = self.log_rx.as_ref() else {
            return false;
        };
        let mut latest = None;
        for line in rx.try_iter().take(MAX_LOG_DRAIN_PER_TICK) {
            latest = Some(line);
        }
        match latest {
            Some(line) => {
                self.last_log = Some(line);
                true
            }
            None => false,
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => self.handle_paste(text),
            Event::Resize(..) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') if ctrl => return EventResult::Quit,
            KeyCode::Char('b') if ctrl => {
                self.toggle_sidebar();
                return EventResult::Consumed;
            }
            KeyCode::Char('s') if ctrl => {
                self.flush_active();
                return EventResult::Consumed;
            }
            _ => {}
        }

        if self.entry.is_some() {
            return self.handle_entry_key(key);
        }

        if key.code == KeyCode::Tab {
            self.toggle_focus();
            return EventResult::Consumed;
        }

        match self.focus {
            Focus::Files => self.handle_files_key(key),
            Focus::Editor => self.handle_editor_key(key),
        }
    }

    fn handle_files_key(&mut self, key: &KeyEvent) -> EventResult {
        let len = self.sync.files().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                let Some(id) = self.sync.files().id_at(self.selected) else {
                    return EventResult::Ignored;
                };
                self.switch_to(id);
                self.focus = Focus::Editor;
            }
            KeyCode::Char('n') => self.open_entry(),
            KeyCode::Char('d') | KeyCode::Delete => {
                let Some(id) = self.sync.files().id_at(self.selected) else {
                    return EventResult::Ignored;
                };
                self.delete(id);
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn handle_entry_key(&mut self, key: &KeyEvent) -> EventResult {
        let Some(entry) = self.entry.as_mut() else {
            return EventResult::Ignored;
        };
        match key.code {
            KeyCode::Esc => self.entry = None,
            KeyCode::Enter => {
                if let Some(name) = entry.accept() {
                    self.entry = None;
                    self.sync.dispatch(Action::CreateFile { name });
                }
            }
            KeyCode::Backspace => {
                entry.backspace();
            }
            KeyCode::Left => {
                entry.cursor_left();
            }
            KeyCode::Right => {
                entry.cursor_right();
            }
            KeyCode::Char(ch) if !has_command_modifier(key.modifiers) => entry.insert(ch),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn handle_editor_key(&mut self, key: &KeyEvent) -> EventResult {
        if key.code == KeyCode::Esc {
            if self.sidebar_visible {
                self.focus = Focus::Files;
            }
            return EventResult::Consumed;
        }

        let Some(surface) = self.sync.binding_mut() else {
            return EventResult::Ignored;
        };
        let handled = match key.code {
            KeyCode::Char(ch) if !has_command_modifier(key.modifiers) => surface.insert_char(ch),
            KeyCode::Enter => surface.newline(),
            KeyCode::Backspace => surface.backspace(),
            KeyCode::Delete => surface.delete_forward(),
            KeyCode::Left => {
                surface.move_left();
                true
            }
            KeyCode::Right => {
                surface.move_right();
                true
            }
            KeyCode::Up => {
                surface.move_up();
                true
            }
            KeyCode::Down => {
                surface.move_down();
                true
            }
            KeyCode::Home => {
                surface.move_home();
                true
            }
            KeyCode::End => {
                surface.move_end();
                true
            }
            _ => return EventResult::Ignored,
        };

        if !handled && surface.is_read_only() {
            self.message = Some("Create a file to start editing".to_string());
        }
        EventResult::Consumed
    }

    fn handle_paste(&mut self, text: &str) -> EventResult {
        if let Some(entry) = self.entry.as_mut() {
            entry.insert_str(text);
            return EventResult::Consumed;
        }
        if self.focus != Focus::Editor {
            return EventResult::Ignored;
        }
        match self.sync.binding_mut() {
            Some(surface) => {
                surface.insert_str(text);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventResult {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {}
            MouseEventKind::ScrollUp if hit(self.areas.editor, column, row) => {
                self.editor_scroll = self.editor_scroll.saturating_sub(3);
                return EventResult::Consumed;
            }
            MouseEventKind::ScrollDown if hit(self.areas.editor, column, row) => {
                let lines = self.sync.binding().map_or(0, TextSurface::line_count);
                self.editor_scroll = (self.editor_scroll + 3).min(lines.saturating_sub(1));
                return EventResult::Consumed;
            }
            _ => return EventResult::Ignored,
        }

        if hit(self.areas.activity, column, row) {
            self.toggle_sidebar();
            return EventResult::Consumed;
        }

        if let Some(area) = self.areas.files.filter(|a| hit(Some(*a), column, row)) {
            self.focus = Focus::Files;
            let line = usize::from(row - area.y);
            if line == 0 {
                if column >= area.right().saturating_sub(render::CREATE_LABEL.len() as u16) {
                    self.open_entry();
                }
                return EventResult::Consumed;
            }
            if line > self.areas.file_rows {
                return EventResult::Consumed;
            }
            let index = self.files_scroll + line - 1;
            if let Some(id) = self.sync.files().id_at(index) {
                self.selected = index;
                if column + 1 >= area.right() {
                    self.delete(id);
                } else {
                    self.switch_to(id);
                }
            }
            return EventResult::Consumed;
        }

        if let Some(area) = self.areas.editor.filter(|a| hit(Some(*a), column, row)) {
            self.focus = Focus::Editor;
            let gutter = self.areas.editor_gutter;
            let target_row = self.editor_scroll + usize::from(row - area.y);
            let target_col = usize::from(column.saturating_sub(area.x + gutter));
            if let Some(surface) = self.sync.binding_mut() {
                surface.set_cursor(target_row, target_col);
            }
            return EventResult::Consumed;
        }

        EventResult::Ignored
    }

    fn switch_to(&mut self, id: FileId) {
        let result = self.sync.dispatch(Action::SwitchTo(id));
        if result.state_changed {
            self.reset_editor_view();
            self.message = None;
        }
    }

    fn delete(&mut self, id: FileId) {
        let name = self
            .sync
            .files()
            .get(id)
            .map(|record| record.name().to_string());
        let result = self.sync.dispatch(Action::DeleteFile(id));
        if !result.state_changed {
            return;
        }
        if self.sync.is_no_file() {
            self.reset_editor_view();
        }
        self.clamp_selection();
        if let Some(name) = name {
            self.message = Some(format!("Deleted {name}"));
        }
    }

    fn flush_active(&mut self) {
        let result = self.sync.dispatch(Action::FlushActive);
        if let Some(record) = self.sync.active_record() {
            self.message = Some(if result.state_changed {
                format!("Saved {}", record.name())
            } else {
                format!("{} is up to date", record.name())
            });
        }
    }

    fn reset_editor_view(&mut self) {
        self.editor_scroll = 0;
        self.editor_anchor = None;
    }

    fn open_entry(&mut self) {
        if !self.sidebar_visible {
            self.sidebar_visible = true;
        }
        self.focus = Focus::Files;
        self.entry = Some(NameEntry::default());
    }

    fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
        if !self.sidebar_visible {
            self.entry = None;
            self.focus = Focus::Editor;
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Files => Focus::Editor,
            Focus::Editor if self.sidebar_visible => Focus::Files,
            Focus::Editor => Focus::Editor,
        };
    }

    fn clamp_selection(&mut self) {
        let len = self.sync.files().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

fn has_command_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

fn hit(area: Option<Rect>, column: u16, row: u16) -> bool {
    area.is_some_and(|a| {
        column >= a.x && column < a.right() && row >= a.y && row < a.bottom()
    })
}

#[cfg(test)]
#[path = "../../tests/unit/app/shell.rs"]
mod tests;
