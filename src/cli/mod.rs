pub mod commands;
pub mod handlers;

pub use commands::{
    Cli, Commands, CoursesAction, CoursesCommand, NoteAction, NoteCommand, TodoAction, TodoCommand,
};
pub use handlers::{
    handle_calendar, handle_courses_list, handle_export, handle_import, handle_note_add,
    handle_note_list, handle_note_remove, handle_note_search, handle_note_update, handle_overview,
    handle_todo_add, handle_todo_list, handle_todo_remove, handle_todo_toggle, handle_todo_update,
};
