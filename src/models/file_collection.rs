//! Ordered, identity-keyed collection of virtual files

use super::file_record::{FileId, FileRecord};
use slotmap::SlotMap;

/// Owns every [`FileRecord`]. Insertion order is display order; records are
/// addressed by the [`FileId`] handed out at creation, never by name.
#[derive(Debug, Clone, Default)]
pub struct FileCollection {
    arena: SlotMap<FileId, FileRecord>,
    order: Vec<FileId>,
}

impl FileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty file. Duplicate names are accepted.
    pub fn create(&mut self, name: &str) -> FileId {
        self.insert(FileRecord::new(name))
    }

    pub fn insert(&mut self, record: FileRecord) -> FileId {
        let id = self.arena.insert(record);
        self.order.push(id);
        id
    }

    pub fn remove(&mut self, id: FileId) -> Option<FileRecord> {
        let record = self.arena.remove(id)?;
        self.order.retain(|&other| other != id);
        Some(record)
    }

    /// Overwrites the record in place, keeping its position.
    pub fn replace(&mut self, id: FileId, updated: FileRecord) -> bool {
        match self.arena.get_mut(id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    pub fn rename(&mut self, id: FileId, name: &str) -> bool {
        match self.arena.get_mut(id) {
            Some(record) => {
                record.set_name(name);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: FileId) -> Option<&FileRecord> {
        self.arena.get(id)
    }

    pub fn get_mut(&mut self, id: FileId) -> Option<&mut FileRecord> {
        self.arena.get_mut(id)
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.arena.contains_key(id)
    }

    pub fn position(&self, id: FileId) -> Option<usize> {
        self.order.iter().position(|&other| other == id)
    }

    pub fn id_at(&self, index: usize) -> Option<FileId> {
        self.order.get(index).copied()
    }

    pub fn ids(&self) -> &[FileId] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = (FileId, &FileRecord)> + '_ {
        self.order.iter().map(|&id| (id, &self.arena[id]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // Name-addressed operations. With duplicate names these act on the first
    // match in display order.

    pub fn find_by_name(&self, name: &str) -> Option<FileId> {
        self.iter()
            .find(|(_, record)| record.name() == name)
            .map(|(id, _)| id)
    }

    pub fn remove_by_name(&mut self, name: &str) -> Option<FileRecord> {
        let id = self.find_by_name(name)?;
        self.remove(id)
    }

    pub fn replace_by_name(&mut self, name: &str, updated: FileRecord) -> bool {
        match self.find_by_name(name) {
            Some(id) => self.replace(id, updated),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_collection.rs"]
mod tests;
