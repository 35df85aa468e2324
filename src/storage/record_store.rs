use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use crate::entity::{Record, RecordId};

/// File-backed store for one record collection.
///
/// The collection lives in a single JSON file inside the data directory. A
/// missing or unreadable file falls back to the seeded defaults, which are
/// persisted immediately. Persistence failures degrade to in-memory-only state
/// for that operation; they are logged and never surface to the caller.
pub struct RecordStore<T: Record> {
    path: PathBuf,
    records: Vec<T>,
    last_id: RecordId,
}

impl<T: Record> RecordStore<T> {
    /// Open the collection inside `data_dir`, creating the directory and
    /// seeding the collection if needed.
    pub fn open(data_dir: &Path) -> Self {
        if let Err(e) = fs::create_dir_all(data_dir) {
            warn!(dir = %data_dir.display(), error = %e, "cannot create data directory");
        }

        let path = data_dir.join(T::COLLECTION);
        match read_collection::<T>(&path) {
            Some(records) => {
                let last_id = max_id(&records);
                Self {
                    path,
                    records,
                    last_id,
                }
            }
            None => {
                let records = T::seed(Utc::now());
                let last_id = max_id(&records);
                let mut store = Self {
                    path,
                    records,
                    last_id,
                };
                store.save();
                store
            }
        }
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Assign a fresh id, stamp timestamps, append and persist. Returns the
    /// stored record.
    pub fn add(&mut self, mut record: T) -> &T {
        let now = Utc::now();
        record.set_id(self.next_id());
        record.stamp_created(now);
        self.records.push(record);
        self.save();
        self.records.last().expect("record was just pushed")
    }

    /// Apply `patch` to the record with `id`, refresh its update timestamp and
    /// persist. Returns `None` when no such record exists; callers treat that
    /// as a no-op.
    pub fn update(&mut self, id: RecordId, patch: impl FnOnce(&mut T)) -> Option<&T> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        patch(&mut self.records[index]);
        self.records[index].touch(Utc::now());
        self.save();
        Some(&self.records[index])
    }

    /// Remove the record with `id` and persist. Removing an unknown id is a
    /// no-op.
    pub fn remove(&mut self, id: RecordId) {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        if self.records.len() != before {
            self.save();
        }
    }

    /// Replace the whole collection (bulk import) and persist.
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.last_id = self.last_id.max(max_id(&records));
        self.records = records;
        self.save();
    }

    /// Write the collection to disk. The write goes through a temp file and a
    /// rename, so readers never observe a partially written collection.
    pub fn save(&mut self) {
        let result = serde_json::to_vec_pretty(&self.records)
            .map_err(|e| e.to_string())
            .and_then(|bytes| {
                let tmp = self.path.with_extension("json.tmp");
                fs::write(&tmp, bytes)
                    .and_then(|_| fs::rename(&tmp, &self.path))
                    .map_err(|e| e.to_string())
            });

        match result {
            Ok(()) => debug!(path = %self.path.display(), count = self.records.len(), "collection saved"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "persistence failed, keeping in-memory state"),
        }
    }

    /// Next unique id: a millisecond timestamp, floored above every id issued
    /// or loaded so far.
    fn next_id(&mut self) -> RecordId {
        let id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id
    }
}

fn max_id<T: Record>(records: &[T]) -> RecordId {
    records.iter().map(|r| r.id()).max().unwrap_or(0)
}

/// Read a collection file; `None` means absent or corrupt and the caller
/// should fall back to seeds.
fn read_collection<T: Record>(path: &Path) -> Option<Vec<T>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "collection unreadable, reseeding");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(records) => Some(records),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "collection corrupt, reseeding");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Note, Priority, Subject, Task};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn note(title: &str) -> Note {
        Note::new(title.to_string(), Subject::Math, "content".to_string())
    }

    #[test]
    fn test_open_seeds_and_persists_defaults() {
        let tmp = TempDir::new().unwrap();
        let store: RecordStore<Note> = RecordStore::open(tmp.path());

        assert_eq!(store.all().len(), 2);
        assert!(tmp.path().join("notes.json").exists());

        // Reopen reads the persisted seed rather than reseeding.
        let reopened: RecordStore<Note> = RecordStore::open(tmp.path());
        assert_eq!(reopened.all().len(), 2);
    }

    #[test]
    fn test_add_assigns_unique_monotonic_ids() {
        let tmp = TempDir::new().unwrap();
        let mut store: RecordStore<Note> = RecordStore::open(tmp.path());

        let a = store.add(note("a")).id;
        let b = store.add(note("b")).id;
        let c = store.add(note("c")).id;

        assert!(a < b && b < c);
        assert!(a > 2, "fresh ids must not collide with seed ids");
    }

    #[test]
    fn test_ids_survive_sessions() {
        let tmp = TempDir::new().unwrap();
        let first = {
            let mut store: RecordStore<Note> = RecordStore::open(tmp.path());
            store.add(note("a")).id
        };

        let mut store: RecordStore<Note> = RecordStore::open(tmp.path());
        let second = store.add(note("b")).id;
        assert!(second > first);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let tmp = TempDir::new().unwrap();
        let mut store: RecordStore<Note> = RecordStore::open(tmp.path());
        let before = store.all().to_vec();

        assert!(store.update(999_999, |n| n.title = "x".to_string()).is_none());
        assert_eq!(store.all().len(), before.len());
    }

    #[test]
    fn test_update_refreshes_timestamp() {
        let tmp = TempDir::new().unwrap();
        let mut store: RecordStore<Note> = RecordStore::open(tmp.path());
        let id = store.add(note("a")).id;
        let created = store.get(id).unwrap().created_at;

        let updated = store
            .update(id, |n| n.title = "renamed".to_string())
            .unwrap();
        assert_eq!(updated.title, "renamed");
        assert!(updated.updated_at >= created);
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let mut store: RecordStore<Note> = RecordStore::open(tmp.path());
        let id = store.add(note("a")).id;
        let len_with = store.all().len();

        store.remove(id);
        assert_eq!(store.all().len(), len_with - 1);
        let after_first = store.all().to_vec();

        store.remove(id);
        assert_eq!(store.all().len(), after_first.len());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_seeds() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("todos.json"), b"{not json").unwrap();

        let store: RecordStore<Task> = RecordStore::open(tmp.path());
        assert_eq!(store.all().len(), 2);

        // The seed overwrote the corrupt file.
        let raw = fs::read(tmp.path().join("todos.json")).unwrap();
        let parsed: Vec<Task> = serde_json::from_slice(&raw).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_saved_file_is_wire_compatible() {
        let tmp = TempDir::new().unwrap();
        let mut store: RecordStore<Task> = RecordStore::open(tmp.path());
        let due = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        store.add(Task::new("Read chapter 4".to_string(), due, Priority::High));

        let raw = fs::read_to_string(tmp.path().join("todos.json")).unwrap();
        assert!(raw.contains("\"dueDate\": \"2026-09-01\""));
        assert!(raw.contains("\"createdAt\""));
    }
}
