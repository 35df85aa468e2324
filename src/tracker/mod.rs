mod notes;
mod todos;

pub use notes::NoteTracker;
pub use todos::{TaskFilter, TodoTracker};
