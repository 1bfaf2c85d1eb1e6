use crate::models::FileId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Bootstrap,
    SwitchTo(FileId),
    SwitchToName(String),
    CreateFile { name: String },
    DeleteFile(FileId),
    DeleteFileNamed(String),
    RenameFile { id: FileId, name: String },
    FlushActive,
}

/// What a dispatch did, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncEvent {
    /// Editor content was committed into this file.
    Flushed(FileId),
    ActiveChanged {
        from: Option<FileId>,
        to: Option<FileId>,
    },
    Created(FileId),
    Deleted(FileId),
    Renamed(FileId),
    /// Last file removed; the editor went read-only.
    CollectionEmpty,
    /// First file added; the editor became editable.
    CollectionNonEmpty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchResult {
    pub events: Vec<SyncEvent>,
    pub state_changed: bool,
}

impl DispatchResult {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub(crate) fn from_events(events: Vec<SyncEvent>) -> Self {
        Self {
            state_changed: !events.is_empty(),
            events,
        }
    }

    /// Id of the first file created by this dispatch.
    pub fn created(&self) -> Option<FileId> {
        self.events.iter().find_map(|event| match event {
            SyncEvent::Created(id) => Some(*id),
            _ => None,
        })
    }

    pub fn extend(&mut self, other: DispatchResult) {
        self.state_changed |= other.state_changed;
        self.events.extend(other.events);
    }
}
