use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "studydesk")]
#[command(version, about = "Course catalog browsing and study dashboard")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory (defaults to the nearest .studydesk/ up the tree)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage study notes
    Note(NoteCommand),

    /// Manage the to-do list
    Todo(TodoCommand),

    /// Browse the course catalog
    Courses(CoursesCommand),

    /// Show the month calendar with task due dates
    Calendar {
        /// Month to display, as YYYY-MM (defaults to the current month)
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// Show dashboard stats and recent activity
    Overview {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export notes and todos as a single JSON document
    Export {
        /// Write to a file instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Replace notes and todos from an exported JSON document
    Import {
        /// Export file to read
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct NoteCommand {
    #[command(subcommand)]
    pub action: NoteAction,
}

#[derive(Subcommand, Debug)]
pub enum NoteAction {
    /// Add a new note
    Add {
        /// Note title
        title: String,

        /// Subject (math, science, history, literature)
        #[arg(long, short = 's', default_value = "math")]
        subject: String,

        /// Note content
        #[arg(long, short = 'c', default_value = "")]
        content: String,

        /// Read content from stdin
        #[arg(long, conflicts_with = "content")]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all notes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search notes by title, content or subject
    Search {
        /// Search query
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update an existing note
    Update {
        /// Note id
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New subject
        #[arg(long, short = 's')]
        subject: Option<String>,

        /// New content
        #[arg(long, short = 'c')]
        content: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a note
    Remove {
        /// Note id
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct TodoCommand {
    #[command(subcommand)]
    pub action: TodoAction,
}

#[derive(Subcommand, Debug)]
pub enum TodoAction {
    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Due date, as YYYY-MM-DD
        #[arg(long, value_name = "DATE")]
        due: String,

        /// Priority (low, medium, high)
        #[arg(long, short = 'p', default_value = "medium")]
        priority: String,

        /// Task description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List tasks
    List {
        /// Which tasks to show (all, pending, completed, overdue)
        #[arg(long, short = 'f', default_value = "all")]
        filter: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle a task's completion
    Toggle {
        /// Task id
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update an existing task
    Update {
        /// Task id
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long, short = 'd', conflicts_with = "clear_description")]
        description: Option<String>,

        /// Remove the description
        #[arg(long)]
        clear_description: bool,

        /// New due date, as YYYY-MM-DD
        #[arg(long, value_name = "DATE")]
        due: Option<String>,

        /// New priority
        #[arg(long, short = 'p')]
        priority: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a task
    Remove {
        /// Task id
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct CoursesCommand {
    #[command(subcommand)]
    pub action: CoursesAction,
}

#[derive(Subcommand, Debug)]
pub enum CoursesAction {
    /// List catalog courses
    List {
        /// Free-text search over title, description and instructor
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Level filter (beginner, intermediate, advanced)
        #[arg(long, short = 'l')]
        level: Option<String>,

        /// Duration filter (0-5, 5-10, 10-20, 20+)
        #[arg(long, short = 'd')]
        duration: Option<String>,

        /// Price filter (free, paid)
        #[arg(long)]
        price: Option<String>,

        /// Category filter (technology, design, business, languages, music)
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Sort order (popular, newest, rating, price-low, price-high)
        #[arg(long)]
        sort: Option<String>,

        /// Show every match instead of the first page
        #[arg(long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
