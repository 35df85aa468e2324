use clap::Parser;
use studydesk::cli::{
    handle_calendar, handle_courses_list, handle_export, handle_import, handle_note_add,
    handle_note_list, handle_note_remove, handle_note_search, handle_note_update, handle_overview,
    handle_todo_add, handle_todo_list, handle_todo_remove, handle_todo_toggle, handle_todo_update,
    Cli, Commands, CoursesAction, NoteAction, TodoAction,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir;

    let result = match cli.command {
        Commands::Note(note) => match note.action {
            NoteAction::Add {
                title,
                subject,
                content,
                stdin,
                json,
            } => handle_note_add(data_dir, title, subject, content, stdin, json),
            NoteAction::List { json } => handle_note_list(data_dir, json),
            NoteAction::Search { query, json } => handle_note_search(data_dir, query, json),
            NoteAction::Update {
                id,
                title,
                subject,
                content,
                json,
            } => handle_note_update(data_dir, id, title, subject, content, json),
            NoteAction::Remove { id } => handle_note_remove(data_dir, id),
        },
        Commands::Todo(todo) => match todo.action {
            TodoAction::Add {
                title,
                due,
                priority,
                description,
                json,
            } => handle_todo_add(data_dir, title, due, priority, description, json),
            TodoAction::List { filter, json } => handle_todo_list(data_dir, filter, json),
            TodoAction::Toggle { id, json } => handle_todo_toggle(data_dir, id, json),
            TodoAction::Update {
                id,
                title,
                description,
                clear_description,
                due,
                priority,
                json,
            } => handle_todo_update(
                data_dir,
                id,
                title,
                description,
                clear_description,
                due,
                priority,
                json,
            ),
            TodoAction::Remove { id } => handle_todo_remove(data_dir, id),
        },
        Commands::Courses(courses) => match courses.action {
            CoursesAction::List {
                search,
                level,
                duration,
                price,
                category,
                sort,
                all,
                json,
            } => handle_courses_list(search, level, duration, price, category, sort, all, json),
        },
        Commands::Calendar { month } => handle_calendar(data_dir, month),
        Commands::Overview { json } => handle_overview(data_dir, json),
        Commands::Export { output } => handle_export(data_dir, output),
        Commands::Import { file } => handle_import(data_dir, file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
