//! Keeps the single shared editing surface in step with the active file.
//!
//! Content moves between the surface and the collection only at explicit
//! boundaries: the outgoing file is flushed *before* the active pointer moves,
//! and the incoming file is loaded after. Keystrokes in between only update
//! the shadow copy through the binding's change handler.
//!
//! Deleting the active file discards whatever was typed since the last flush,
//! and text typed while no file is active has nowhere to go.

use super::action::{Action, DispatchResult, SyncEvent};
use super::binding::EditorBinding;
use super::language::SyntaxMode;
use super::samples::sample_files;
use super::surface::TextSurface;
use crate::models::{FileCollection, FileId, FileRecord};
use std::cell::RefCell;
use std::rc::Rc;

pub struct SyncController<B: EditorBinding = TextSurface> {
    files: FileCollection,
    active: Option<FileId>,
    binding: Option<B>,
    shadow: Rc<RefCell<String>>,
    idle_mode: SyntaxMode,
}

impl<B: EditorBinding> Default for SyncController<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: EditorBinding> SyncController<B> {
    pub fn new() -> Self {
        Self {
            files: FileCollection::new(),
            active: None,
            binding: None,
            shadow: Rc::new(RefCell::new(String::new())),
            idle_mode: SyntaxMode::from_extension(None),
        }
    }

    /// A controller seeded with the sample files, no file active.
    pub fn with_samples() -> Self {
        let mut controller = Self::new();
        controller.bootstrap();
        controller
    }

    pub fn files(&self) -> &FileCollection {
        &self.files
    }

    /// `None` is the "no file" state.
    pub fn active(&self) -> Option<FileId> {
        self.active
    }

    pub fn active_record(&self) -> Option<&FileRecord> {
        self.active.and_then(|id| self.files.get(id))
    }

    pub fn is_no_file(&self) -> bool {
        self.active.is_none()
    }

    /// Mode the editor shows while no file is active.
    pub fn idle_mode(&self) -> SyntaxMode {
        self.idle_mode
    }

    pub fn set_idle_mode(&mut self, mode: SyntaxMode) {
        self.idle_mode = mode;
        if self.active.is_none() {
            if let Some(binding) = self.binding.as_mut() {
                binding.set_mode(mode);
            }
        }
    }

    pub fn binding(&self) -> Option<&B> {
        self.binding.as_ref()
    }

    pub fn binding_mut(&mut self) -> Option<&mut B> {
        self.binding.as_mut()
    }

    pub fn is_attached(&self) -> bool {
        self.binding.is_some()
    }

    /// Whether the editor should accept edits right now.
    pub fn editor_enabled(&self) -> bool {
        !self.files.is_empty()
    }

    /// Text currently on the surface (the shadow copy while detached).
    pub fn live_content(&self) -> String {
        match self.binding.as_ref() {
            Some(binding) => binding.read_content(),
            None => self.shadow.borrow().clone(),
        }
    }

    /// Takes ownership of `binding` and brings it up to date. Returns the
    /// previously attached binding, already detached.
    pub fn attach(&mut self, mut binding: B) -> Option<B> {
        let previous = self.detach();

        let shadow = self.shadow.clone();
        binding.on_change(Some(Box::new(move |text: &str| {
            let mut shadow = shadow.borrow_mut();
            shadow.clear();
            shadow.push_str(text);
        })));
        binding.set_read_only(self.files.is_empty());
        binding.set_mode(self.active_mode());
        binding.load_content(&self.shadow.borrow());
        self.binding = Some(binding);

        tracing::debug!(active = ?self.active, "editor attached");
        previous
    }

    pub fn detach(&mut self) -> Option<B> {
        let mut binding = self.binding.take()?;
        let live = binding.read_content();
        *self.shadow.borrow_mut() = live;
        binding.on_change(None);
        tracing::debug!("editor detached");
        Some(binding)
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Bootstrap => self.bootstrap(),
            Action::SwitchTo(id) => self.switch(id),
            Action::SwitchToName(name) => self.switch_by_name(&name),
            Action::CreateFile { name } => self.create_file(&name),
            Action::DeleteFile(id) => self.delete_file(id),
            Action::DeleteFileNamed(name) => self.delete_by_name(&name),
            Action::RenameFile { id, name } => self.rename_file(id, &name),
            Action::FlushActive => self.flush_active(),
        }
    }

    pub fn bootstrap(&mut self) -> DispatchResult {
        let was_empty = self.files.is_empty();
        let mut events = Vec::new();
        for record in sample_files() {
            events.push(SyncEvent::Created(self.files.insert(record)));
        }
        self.sync_enablement(was_empty, &mut events);
        tracing::info!(files = self.files.len(), "seeded sample files");
        DispatchResult::from_events(events)
    }

    pub fn switch(&mut self, target: FileId) -> DispatchResult {
        if self.active == Some(target) || !self.files.contains(target) {
            return DispatchResult::unchanged();
        }

        let mut events = Vec::new();
        self.flush_into_active(&mut events);
        let from = self.active.replace(target);
        self.load_active();
        events.push(SyncEvent::ActiveChanged {
            from,
            to: Some(target),
        });

        tracing::debug!(
            ?from,
            to = ?target,
            name = self.active_record().map(FileRecord::name),
            "switched active file"
        );
        DispatchResult::from_events(events)
    }

    /// Switches to the first file called `name`.
    pub fn switch_by_name(&mut self, name: &str) -> DispatchResult {
        match self.files.find_by_name(name) {
            Some(id) => self.switch(id),
            None => DispatchResult::unchanged(),
        }
    }

    /// Appends an empty file. The active file does not change.
    pub fn create_file(&mut self, name: &str) -> DispatchResult {
        let was_empty = self.files.is_empty();
        let id = self.files.create(name);
        let mut events = vec![SyncEvent::Created(id)];
        self.sync_enablement(was_empty, &mut events);

        tracing::debug!(?id, name, "created file");
        DispatchResult::from_events(events)
    }

    pub fn delete_file(&mut self, target: FileId) -> DispatchResult {
        let was_empty = self.files.is_empty();
        let Some(record) = self.files.remove(target) else {
            return DispatchResult::unchanged();
        };

        let mut events = vec![SyncEvent::Deleted(target)];
        if self.active == Some(target) {
            self.active = None;
            self.load_active();
            events.push(SyncEvent::ActiveChanged {
                from: Some(target),
                to: None,
            });
        }
        self.sync_enablement(was_empty, &mut events);

        tracing::debug!(id = ?target, name = record.name(), "deleted file");
        DispatchResult::from_events(events)
    }

    pub fn delete_by_name(&mut self, name: &str) -> DispatchResult {
        match self.files.find_by_name(name) {
            Some(id) => self.delete_file(id),
            None => DispatchResult::unchanged(),
        }
    }

    /// Renames without touching content; the active file's mode follows the
    /// new extension.
    pub fn rename_file(&mut self, id: FileId, name: &str) -> DispatchResult {
        if !self.files.rename(id, name) {
            return DispatchResult::unchanged();
        }
        if self.active == Some(id) {
            let mode = self.active_mode();
            if let Some(binding) = self.binding.as_mut() {
                binding.set_mode(mode);
            }
        }

        tracing::debug!(?id, name, "renamed file");
        DispatchResult::from_events(vec![SyncEvent::Renamed(id)])
    }

    /// Commits the live content into the active file without switching.
    pub fn flush_active(&mut self) -> DispatchResult {
        let mut events = Vec::new();
        self.flush_into_active(&mut events);
        DispatchResult::from_events(events)
    }

    fn flush_into_active(&mut self, events: &mut Vec<SyncEvent>) {
        let Some(id) = self.active else {
            return;
        };
        let Some(record) = self.files.get(id) else {
            return;
        };

        let content = self.live_content();
        if record.content == content {
            return;
        }

        let mut updated = record.clone();
        updated.content = content;
        self.files.replace(id, updated);
        events.push(SyncEvent::Flushed(id));
        tracing::trace!(?id, "flushed editor content");
    }

    fn active_mode(&self) -> SyntaxMode {
        match self.active_record() {
            Some(record) => SyntaxMode::from_extension(record.extension()),
            None => self.idle_mode,
        }
    }

    /// Mode first, then content.
    fn load_active(&mut self) {
        let mode = self.active_mode();
        let content = self
            .active_record()
            .map(|record| record.content.clone())
            .unwrap_or_default();

        if let Some(binding) = self.binding.as_mut() {
            binding.set_mode(mode);
            binding.load_content(&content);
        }
        *self.shadow.borrow_mut() = content;
    }

    fn sync_enablement(&mut self, was_empty: bool, events: &mut Vec<SyncEvent>) {
        match (was_empty, self.files.is_empty()) {
            (true, false) => {
                self.on_collection_non_empty();
                events.push(SyncEvent::CollectionNonEmpty);
            }
            (false, true) => {
                self.on_collection_empty();
                events.push(SyncEvent::CollectionEmpty);
            }
            _ => {}
        }
    }

    fn on_collection_empty(&mut self) {
        if let Some(binding) = self.binding.as_mut() {
            binding.set_read_only(true);
        }
        tracing::debug!("collection empty, editor disabled");
    }

    fn on_collection_non_empty(&mut self) {
        if let Some(binding) = self.binding.as_mut() {
            binding.set_read_only(false);
        }
        tracing::debug!("collection non-empty, editor enabled");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/sync.rs"]
mod tests;
