// src/entity/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Record, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    #[default]
    Math,
    Science,
    History,
    Literature,
}

impl Subject {
    /// Human-readable label, also matched by free-text note search.
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Math => "Mathematics",
            Subject::Science => "Science",
            Subject::History => "History",
            Subject::Literature => "Literature",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Math => write!(f, "math"),
            Subject::Science => write!(f, "science"),
            Subject::History => write!(f, "history"),
            Subject::Literature => write!(f, "literature"),
        }
    }
}

impl std::str::FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "math" | "mathematics" => Ok(Subject::Math),
            "science" => Ok(Subject::Science),
            "history" => Ok(Subject::History),
            "literature" => Ok(Subject::Literature),
            _ => Err(format!("Invalid subject: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub subject: Subject,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: String, subject: Subject, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title,
            subject,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: NoteUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(subject) = update.subject {
            self.subject = subject;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
    }
}

/// Update payload for a note
#[derive(Debug, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub subject: Option<Subject>,
    pub content: Option<String>,
}

impl Record for Note {
    const COLLECTION: &'static str = "notes.json";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn stamp_created(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
        self.updated_at = now;
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn seed(now: DateTime<Utc>) -> Vec<Self> {
        vec![
            Note {
                id: 1,
                title: "JavaScript Fundamentals".to_string(),
                subject: Subject::Math,
                content: "Variables, functions, and basic syntax. Important concepts for web development.".to_string(),
                created_at: now,
                updated_at: now,
            },
            Note {
                id: 2,
                title: "CSS Grid Layout".to_string(),
                subject: Subject::Science,
                content: "Modern CSS layout system using grid. Great for responsive design.".to_string(),
                created_at: now,
                updated_at: now,
            },
        ]
    }
}
