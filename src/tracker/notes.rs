use std::path::Path;

use crate::entity::{Note, NoteUpdate, RecordId};
use crate::storage::RecordStore;

/// Note collection with free-text search.
pub struct NoteTracker {
    store: RecordStore<Note>,
}

impl NoteTracker {
    pub fn open(data_dir: &Path) -> Self {
        Self {
            store: RecordStore::open(data_dir),
        }
    }

    pub fn all(&self) -> &[Note] {
        self.store.all()
    }

    pub fn get(&self, id: RecordId) -> Option<&Note> {
        self.store.get(id)
    }

    pub fn add(&mut self, note: Note) -> &Note {
        self.store.add(note)
    }

    pub fn update(&mut self, id: RecordId, update: NoteUpdate) -> Option<&Note> {
        self.store.update(id, |note| note.apply(update))
    }

    pub fn remove(&mut self, id: RecordId) {
        self.store.remove(id)
    }

    pub fn save(&mut self) {
        self.store.save()
    }

    pub fn replace_all(&mut self, notes: Vec<Note>) {
        self.store.replace_all(notes)
    }

    /// Case-insensitive substring search over title, content and the
    /// subject's display label. A blank query returns every note.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.store.all().iter().collect();
        }

        self.store
            .all()
            .iter()
            .filter(|note| {
                note.title.to_lowercase().contains(&query)
                    || note.content.to_lowercase().contains(&query)
                    || note.subject.label().to_lowercase().contains(&query)
            })
            .collect()
    }
}
