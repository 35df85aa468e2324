mod course;
mod note;
mod task;
mod user;

pub use course::{Category, Course, Instructor, Level};
pub use note::{Note, NoteUpdate, Subject};
pub use task::{Priority, Task, TaskUpdate};
pub use user::{EducationLevel, UserProfile};

use chrono::{DateTime, Utc};

/// Record identifier, derived from a millisecond UTC timestamp at creation.
pub type RecordId = i64;

/// A persistable dashboard record (note or task).
pub trait Record: Clone + serde::Serialize + serde::de::DeserializeOwned {
    /// File name of the record's collection inside the data directory.
    const COLLECTION: &'static str;

    fn id(&self) -> RecordId;
    fn set_id(&mut self, id: RecordId);

    /// Stamp creation (and, where present, update) timestamps on a new record.
    fn stamp_created(&mut self, now: DateTime<Utc>);

    /// Refresh the update timestamp, for record types that carry one.
    fn touch(&mut self, _now: DateTime<Utc>) {}

    /// Default records seeded when no collection exists yet.
    fn seed(now: DateTime<Utc>) -> Vec<Self>;
}
