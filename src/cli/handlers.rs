use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::catalog::{CatalogEngine, DurationBucket, PriceFilter, SortKey};
use crate::calendar::Calendar;
use crate::dashboard::{Activity, Session};
use crate::entity::{Note, NoteUpdate, Priority, Subject, Task, TaskUpdate};
use crate::error::{Result, StudydeskError};
use crate::storage::DATA_DIR;
use crate::tracker::{NoteTracker, TaskFilter, TodoTracker};

/// Resolve the data directory: an explicit override wins, otherwise the
/// nearest ancestor carrying `.studydesk/`, otherwise the current directory.
fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = data_dir {
        return dir;
    }

    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(DATA_DIR);
        if candidate.exists() {
            return candidate;
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd.join(DATA_DIR),
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| StudydeskError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s)))
}

fn parse_flag<T: std::str::FromStr<Err = String>>(s: &str) -> Result<T> {
    s.parse().map_err(StudydeskError::Validation)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn print_notes(notes: &[&Note]) {
    for note in notes {
        println!(
            "{} {} [{}] (updated {})",
            note.id,
            note.title,
            note.subject.label(),
            note.updated_at.format("%b %e, %Y")
        );
        if !note.content.is_empty() {
            println!("    {}", note.content);
        }
    }
}

pub fn handle_note_add(
    data_dir: Option<PathBuf>,
    title: String,
    subject: String,
    content: String,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let mut tracker = NoteTracker::open(&resolve_data_dir(data_dir));

    let subject: Subject = parse_flag(&subject)?;
    let content = if stdin {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        content
    };

    let note = tracker.add(Note::new(title, subject, content));

    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        println!("Created note {} - {}", note.id, note.title);
    }
    Ok(())
}

pub fn handle_note_list(data_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let tracker = NoteTracker::open(&resolve_data_dir(data_dir));

    if json {
        println!("{}", serde_json::to_string_pretty(tracker.all())?);
    } else {
        print_notes(&tracker.all().iter().collect::<Vec<_>>());
    }
    Ok(())
}

pub fn handle_note_search(data_dir: Option<PathBuf>, query: String, json: bool) -> Result<()> {
    let tracker = NoteTracker::open(&resolve_data_dir(data_dir));
    let hits = tracker.search(&query);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else if hits.is_empty() {
        println!("No notes match your search");
    } else {
        print_notes(&hits);
    }
    Ok(())
}

pub fn handle_note_update(
    data_dir: Option<PathBuf>,
    id: i64,
    title: Option<String>,
    subject: Option<String>,
    content: Option<String>,
    json: bool,
) -> Result<()> {
    let mut tracker = NoteTracker::open(&resolve_data_dir(data_dir));

    let update = NoteUpdate {
        title,
        subject: subject.as_deref().map(parse_flag).transpose()?,
        content,
    };

    match tracker.update(id, update) {
        Some(note) if json => println!("{}", serde_json::to_string_pretty(note)?),
        Some(note) => println!("Updated note {} - {}", note.id, note.title),
        None => return Err(StudydeskError::RecordNotFound(id)),
    }
    Ok(())
}

pub fn handle_note_remove(data_dir: Option<PathBuf>, id: i64) -> Result<()> {
    let mut tracker = NoteTracker::open(&resolve_data_dir(data_dir));
    tracker.remove(id);
    println!("Removed note {}", id);
    Ok(())
}

pub fn handle_todo_add(
    data_dir: Option<PathBuf>,
    title: String,
    due: String,
    priority: String,
    description: Option<String>,
    json: bool,
) -> Result<()> {
    let mut tracker = TodoTracker::open(&resolve_data_dir(data_dir));

    let due = parse_date(&due)?;
    let priority: Priority = parse_flag(&priority)?;
    let mut task = Task::new(title, due, priority);
    task.description = description;

    let task = tracker.add(task);

    if json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        println!("Created task {} - {} (due {})", task.id, task.title, task.due_date);
    }
    Ok(())
}

pub fn handle_todo_list(data_dir: Option<PathBuf>, filter: String, json: bool) -> Result<()> {
    let tracker = TodoTracker::open(&resolve_data_dir(data_dir));
    let filter: TaskFilter = parse_flag(&filter)?;
    let tasks = tracker.filter(filter, today());

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else if tasks.is_empty() {
        println!("No tasks match your filter");
    } else {
        for task in tasks {
            let mark = if task.completed { "x" } else { " " };
            let description = task
                .description
                .as_deref()
                .map(|d| format!(" - {}", d))
                .unwrap_or_default();
            println!(
                "[{}] {} {} (due {}, {}){}",
                mark, task.id, task.title, task.due_date, task.priority, description
            );
        }
    }
    Ok(())
}

pub fn handle_todo_toggle(data_dir: Option<PathBuf>, id: i64, json: bool) -> Result<()> {
    let mut tracker = TodoTracker::open(&resolve_data_dir(data_dir));

    match tracker.toggle_completed(id) {
        Some(task) if json => println!("{}", serde_json::to_string_pretty(task)?),
        Some(task) => {
            let state = if task.completed { "completed" } else { "pending" };
            println!("Task {} is now {}", task.id, state);
        }
        None => return Err(StudydeskError::RecordNotFound(id)),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_todo_update(
    data_dir: Option<PathBuf>,
    id: i64,
    title: Option<String>,
    description: Option<String>,
    clear_description: bool,
    due: Option<String>,
    priority: Option<String>,
    json: bool,
) -> Result<()> {
    let mut tracker = TodoTracker::open(&resolve_data_dir(data_dir));

    let description = if clear_description {
        Some(None)
    } else {
        description.map(Some)
    };
    let update = TaskUpdate {
        title,
        description,
        due_date: due.as_deref().map(parse_date).transpose()?,
        priority: priority.as_deref().map(parse_flag).transpose()?,
    };

    match tracker.update(id, update) {
        Some(task) if json => println!("{}", serde_json::to_string_pretty(task)?),
        Some(task) => println!("Updated task {} - {}", task.id, task.title),
        None => return Err(StudydeskError::RecordNotFound(id)),
    }
    Ok(())
}

pub fn handle_todo_remove(data_dir: Option<PathBuf>, id: i64) -> Result<()> {
    let mut tracker = TodoTracker::open(&resolve_data_dir(data_dir));
    tracker.remove(id);
    println!("Removed task {}", id);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_courses_list(
    search: Option<String>,
    level: Option<String>,
    duration: Option<String>,
    price: Option<String>,
    category: Option<String>,
    sort: Option<String>,
    all: bool,
    json: bool,
) -> Result<()> {
    let mut engine = CatalogEngine::default();

    if let Some(search) = search {
        engine.set_search(search);
    }
    if let Some(level) = level {
        engine.set_level(Some(parse_flag(&level)?));
    }
    if let Some(duration) = duration {
        let bucket: DurationBucket = parse_flag(&duration)?;
        engine.set_duration(Some(bucket));
    }
    if let Some(price) = price {
        let price: PriceFilter = parse_flag(&price)?;
        engine.set_price(Some(price));
    }
    if let Some(category) = category {
        engine.toggle_category(parse_flag(&category)?);
    }
    if let Some(sort) = sort {
        let key: SortKey = parse_flag(&sort)?;
        engine.set_sort(key);
    }
    while all && engine.has_more() {
        engine.load_more();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(engine.visible_page())?);
        return Ok(());
    }

    if engine.visible_page().is_empty() {
        println!("No courses found");
        return Ok(());
    }

    for course in engine.visible_page() {
        println!(
            "{:>3}  {:<34} {:<11} {:<12} {:>8} ${:<4} {:.1}* ({} students)",
            course.id,
            course.title,
            course.category,
            course.level,
            course.duration,
            course.price,
            course.rating,
            course.students
        );
    }
    if engine.has_more() {
        let remaining = engine.filtered().len() - engine.visible_page().len();
        println!("... {} more (use --all)", remaining);
    }
    Ok(())
}

pub fn handle_calendar(data_dir: Option<PathBuf>, month: Option<String>) -> Result<()> {
    let tracker = TodoTracker::open(&resolve_data_dir(data_dir));
    let today = today();

    let calendar = match month {
        Some(month) => {
            let first = NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
                .map_err(|_| {
                    StudydeskError::Validation(format!("Invalid month (expected YYYY-MM): {}", month))
                })?;
            Calendar::new(first)
        }
        None => Calendar::for_today(today),
    };

    println!("{:^29}", calendar.month_label());
    println!("Sun Mon Tue Wed Thu Fri Sat");

    let cells = calendar.day_cells(tracker.all(), today);
    for week in cells.chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                use chrono::Datelike;
                if !cell.in_month {
                    "  . ".to_string()
                } else if cell.is_today {
                    format!("[{:>2}]", cell.date.day())
                } else if cell.has_due_task {
                    format!("{:>3}*", cell.date.day())
                } else {
                    format!("{:>3} ", cell.date.day())
                }
            })
            .collect();
        println!("{}", row.join(""));
    }
    println!("\n* task due  [n] today");
    Ok(())
}

pub fn handle_overview(data_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let session = Session::open(&resolve_data_dir(data_dir));
    let stats = session.stats(0, 0);

    if json {
        let value = serde_json::json!({
            "totalNotes": stats.total_notes,
            "pendingTasks": stats.pending_tasks,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Notes:         {}", stats.total_notes);
    println!("Pending tasks: {}", stats.pending_tasks);
    println!();
    println!("Recent activity:");
    for activity in session.recent_activity() {
        match activity {
            Activity::NoteCreated { title, at } => {
                println!("  Created note: \"{}\" ({})", title, at.format("%b %e, %Y"))
            }
            Activity::TaskAdded { title, at } => {
                println!("  Added task: \"{}\" ({})", title, at.format("%b %e, %Y"))
            }
            Activity::TaskCompleted { title, at } => {
                println!("  Completed task: \"{}\" ({})", title, at.format("%b %e, %Y"))
            }
        }
    }
    Ok(())
}

pub fn handle_export(data_dir: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let session = Session::open(&resolve_data_dir(data_dir));
    let json = session.export_json()?;

    match output {
        Some(path) => {
            fs::write(&path, json)?;
            println!("Exported data to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn handle_import(data_dir: Option<PathBuf>, file: PathBuf) -> Result<()> {
    let mut session = Session::open(&resolve_data_dir(data_dir));
    let json = fs::read_to_string(&file)?;
    session.import_json(&json)?;

    println!(
        "Imported {} notes and {} tasks",
        session.notes().all().len(),
        session.todos().all().len()
    );
    Ok(())
}
