// src/entity/task.rs
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Record, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(title: String, due_date: NaiveDate, priority: Priority) -> Self {
        Self {
            id: 0,
            title,
            description: None,
            due_date,
            priority,
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, update: TaskUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
    }

    /// Date-only comparison; an uncompleted task due strictly before `today` is overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }
}

/// Update payload for a task
#[derive(Debug, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>, // Some(None) to clear, Some(Some(s)) to set
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
}

impl Record for Task {
    const COLLECTION: &'static str = "todos.json";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn stamp_created(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
    }

    fn seed(now: DateTime<Utc>) -> Vec<Self> {
        let today = now.date_naive();
        vec![
            Task {
                id: 1,
                title: "Complete JavaScript Assignment".to_string(),
                description: Some("Finish the final project for JavaScript course".to_string()),
                due_date: today + Duration::days(7),
                priority: Priority::High,
                completed: false,
                created_at: now,
            },
            Task {
                id: 2,
                title: "Review CSS Concepts".to_string(),
                description: Some("Go through CSS Grid and Flexbox tutorials".to_string()),
                due_date: today + Duration::days(3),
                priority: Priority::Medium,
                completed: false,
                created_at: now,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overdue_requires_past_due_date() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let mut task = Task::new("t".to_string(), today - Duration::days(1), Priority::Low);
        assert!(task.is_overdue(today));

        task.due_date = today;
        assert!(!task.is_overdue(today));
    }

    #[test]
    fn test_completed_task_never_overdue() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let mut task = Task::new("t".to_string(), today - Duration::days(1), Priority::Low);
        task.completed = true;
        assert!(!task.is_overdue(today));
    }

    #[test]
    fn test_update_clears_description() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let mut task = Task::new("t".to_string(), today, Priority::Low);
        task.description = Some("old".to_string());

        task.apply(TaskUpdate {
            description: Some(None),
            ..Default::default()
        });
        assert!(task.description.is_none());
    }
}
