//! Dashboard session: per-user UI state, overview stats, bulk export/import
//! and the periodic autosave.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::{Note, NoteUpdate, RecordId, Task, TaskUpdate};
use crate::error::{Result, StudydeskError};
use crate::tracker::{NoteTracker, TodoTracker};

/// The full note and task collections are re-persisted on this interval.
pub const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Overview,
    Notes,
    Todos,
    Courses,
    Progress,
    Calendar,
    Users,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_notes: usize,
    pub pending_tasks: usize,
    pub total_users: usize,
    pub newsletter_subscribers: usize,
}

/// A recent-activity feed entry, as plain data for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    NoteCreated { title: String, at: DateTime<Utc> },
    TaskAdded { title: String, at: DateTime<Utc> },
    TaskCompleted { title: String, at: DateTime<Utc> },
}

/// Bulk export/import document: both collections plus the export timestamp.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub notes: Vec<Note>,
    pub todos: Vec<Task>,
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
}

/// One user's dashboard: the trackers plus explicit UI state. Edit-in-place
/// is tracked as an optional "currently editing" id per modal rather than
/// state smuggled through the form element.
pub struct Session {
    notes: NoteTracker,
    todos: TodoTracker,
    active_section: Section,
    editing_note: Option<RecordId>,
    editing_task: Option<RecordId>,
}

impl Session {
    pub fn open(data_dir: &Path) -> Self {
        Self {
            notes: NoteTracker::open(data_dir),
            todos: TodoTracker::open(data_dir),
            active_section: Section::default(),
            editing_note: None,
            editing_task: None,
        }
    }

    pub fn notes(&self) -> &NoteTracker {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut NoteTracker {
        &mut self.notes
    }

    pub fn todos(&self) -> &TodoTracker {
        &self.todos
    }

    pub fn todos_mut(&mut self) -> &mut TodoTracker {
        &mut self.todos
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn switch_section(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Open the note editor for an existing note. Returns false (and leaves
    /// the editor closed) when the id is unknown.
    pub fn open_note_editor(&mut self, id: RecordId) -> bool {
        let exists = self.notes.get(id).is_some();
        self.editing_note = exists.then_some(id);
        exists
    }

    pub fn editing_note(&self) -> Option<RecordId> {
        self.editing_note
    }

    /// Apply the editor's changes to the note being edited and close the
    /// editor. Without an open editor this is a no-op.
    pub fn save_note_editor(&mut self, update: NoteUpdate) -> Option<&Note> {
        let id = self.editing_note.take()?;
        self.notes.update(id, update)
    }

    pub fn close_note_editor(&mut self) {
        self.editing_note = None;
    }

    pub fn open_task_editor(&mut self, id: RecordId) -> bool {
        let exists = self.todos.get(id).is_some();
        self.editing_task = exists.then_some(id);
        exists
    }

    pub fn editing_task(&self) -> Option<RecordId> {
        self.editing_task
    }

    pub fn save_task_editor(&mut self, update: TaskUpdate) -> Option<&Task> {
        let id = self.editing_task.take()?;
        self.todos.update(id, update)
    }

    pub fn close_task_editor(&mut self) {
        self.editing_task = None;
    }

    pub fn stats(&self, total_users: usize, newsletter_subscribers: usize) -> DashboardStats {
        DashboardStats {
            total_notes: self.notes.all().len(),
            pending_tasks: self.todos.pending_count(),
            total_users,
            newsletter_subscribers,
        }
    }

    /// Up to three notes and three tasks, in collection order.
    pub fn recent_activity(&self) -> Vec<Activity> {
        let mut feed = Vec::new();
        for note in self.notes.all().iter().take(3) {
            feed.push(Activity::NoteCreated {
                title: note.title.clone(),
                at: note.created_at,
            });
        }
        for task in self.todos.all().iter().take(3) {
            feed.push(if task.completed {
                Activity::TaskCompleted {
                    title: task.title.clone(),
                    at: task.created_at,
                }
            } else {
                Activity::TaskAdded {
                    title: task.title.clone(),
                    at: task.created_at,
                }
            });
        }
        feed
    }

    pub fn export_document(&self) -> ExportDocument {
        ExportDocument {
            notes: self.notes.all().to_vec(),
            todos: self.todos.all().to_vec(),
            export_date: Some(Utc::now()),
        }
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export_document())?)
    }

    /// Replace both collections from an export document. Both top-level
    /// fields must be present; nothing is assigned until the whole document
    /// parses, so a malformed file leaves the current collections untouched.
    pub fn import_json(&mut self, json: &str) -> Result<()> {
        let document: ExportDocument = serde_json::from_str(json)
            .map_err(|e| StudydeskError::ImportFormat(e.to_string()))?;

        self.notes.replace_all(document.notes);
        self.todos.replace_all(document.todos);
        Ok(())
    }

    /// Re-persist both collections unconditionally.
    pub fn autosave(&mut self) {
        self.notes.save();
        self.todos.save();
        debug!("autosave complete");
    }
}

/// Run the 30-second autosave loop on a background thread. The session is
/// shared behind a mutex so UI-event access stays serialized.
pub fn spawn_autosave(session: Arc<Mutex<Session>>) -> JoinHandle<()> {
    thread::spawn(move || loop {
        thread::sleep(AUTOSAVE_INTERVAL);
        match session.lock() {
            Ok(mut session) => session.autosave(),
            Err(_) => return,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Priority, Subject};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn session() -> (TempDir, Session) {
        let tmp = TempDir::new().unwrap();
        let session = Session::open(tmp.path());
        (tmp, session)
    }

    #[test]
    fn test_edit_state_tracks_existing_note_only() {
        let (_tmp, mut session) = session();
        let id = session
            .notes_mut()
            .add(Note::new("n".to_string(), Subject::Math, "c".to_string()))
            .id;

        assert!(!session.open_note_editor(999_999));
        assert!(session.editing_note().is_none());

        assert!(session.open_note_editor(id));
        assert_eq!(session.editing_note(), Some(id));

        let updated = session
            .save_note_editor(NoteUpdate {
                title: Some("renamed".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.title, "renamed");
        assert!(session.editing_note().is_none(), "save closes the editor");
    }

    #[test]
    fn test_save_without_open_editor_is_noop() {
        let (_tmp, mut session) = session();
        assert!(session.save_task_editor(TaskUpdate::default()).is_none());
    }

    #[test]
    fn test_stats_count_pending_only() {
        let (_tmp, mut session) = session();
        let id = session.todos().all()[0].id;
        session.todos_mut().toggle_completed(id);

        let stats = session.stats(4, 2);
        assert_eq!(stats.total_notes, 2);
        assert_eq!(stats.pending_tasks, 1);
        assert_eq!(stats.total_users, 4);
    }

    #[test]
    fn test_recent_activity_reports_completion() {
        let (_tmp, mut session) = session();
        let id = session.todos().all()[0].id;
        session.todos_mut().toggle_completed(id);

        let feed = session.recent_activity();
        assert_eq!(feed.len(), 4); // 2 seeded notes + 2 seeded tasks
        assert!(feed
            .iter()
            .any(|a| matches!(a, Activity::TaskCompleted { .. })));
    }

    #[test]
    fn test_export_import_round_trip() {
        let (_tmp, mut session) = session();
        session.notes_mut().add(Note::new(
            "Exported".to_string(),
            Subject::History,
            "body".to_string(),
        ));
        let json = session.export_json().unwrap();

        let tmp2 = TempDir::new().unwrap();
        let mut other = Session::open(tmp2.path());
        other.import_json(&json).unwrap();

        assert_eq!(other.notes().all().len(), session.notes().all().len());
        assert!(other.notes().all().iter().any(|n| n.title == "Exported"));
    }

    #[test]
    fn test_import_replaces_wholesale() {
        let (_tmp, mut session) = session();
        let due = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let mut task = Task::new("imported".to_string(), due, Priority::Low);
        task.id = 77;
        let document = ExportDocument {
            notes: vec![],
            todos: vec![task],
            export_date: None,
        };

        session
            .import_json(&serde_json::to_string(&document).unwrap())
            .unwrap();

        // Empty notes replaces the prior notes, it does not preserve them.
        assert!(session.notes().all().is_empty());
        assert_eq!(session.todos().all().len(), 1);
        assert_eq!(session.todos().all()[0].title, "imported");
    }

    #[test]
    fn test_import_missing_field_leaves_state_untouched() {
        let (_tmp, mut session) = session();
        let notes_before = session.notes().all().len();
        let todos_before = session.todos().all().len();

        let err = session.import_json(r#"{"notes": []}"#).unwrap_err();
        assert!(matches!(err, StudydeskError::ImportFormat(_)));

        assert_eq!(session.notes().all().len(), notes_before);
        assert_eq!(session.todos().all().len(), todos_before);
    }

    #[test]
    fn test_import_rejects_malformed_json() {
        let (_tmp, mut session) = session();
        assert!(session.import_json("{oops").is_err());
    }

    #[test]
    fn test_autosave_persists_both_collections() {
        let tmp = TempDir::new().unwrap();
        let mut session = Session::open(tmp.path());
        session.autosave();

        assert!(tmp.path().join("notes.json").exists());
        assert!(tmp.path().join("todos.json").exists());
    }
}
