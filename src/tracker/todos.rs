use std::path::Path;

use chrono::NaiveDate;

use crate::entity::{RecordId, Task, TaskUpdate};
use crate::storage::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
    Overdue,
}

impl std::str::FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(TaskFilter::All),
            "pending" => Ok(TaskFilter::Pending),
            "completed" => Ok(TaskFilter::Completed),
            "overdue" => Ok(TaskFilter::Overdue),
            _ => Err(format!("Invalid task filter: {}", s)),
        }
    }
}

/// Task collection with completion toggling and due-date filters.
pub struct TodoTracker {
    store: RecordStore<Task>,
}

impl TodoTracker {
    pub fn open(data_dir: &Path) -> Self {
        Self {
            store: RecordStore::open(data_dir),
        }
    }

    pub fn all(&self) -> &[Task] {
        self.store.all()
    }

    pub fn get(&self, id: RecordId) -> Option<&Task> {
        self.store.get(id)
    }

    pub fn add(&mut self, task: Task) -> &Task {
        self.store.add(task)
    }

    pub fn update(&mut self, id: RecordId, update: TaskUpdate) -> Option<&Task> {
        self.store.update(id, |task| task.apply(update))
    }

    pub fn remove(&mut self, id: RecordId) {
        self.store.remove(id)
    }

    pub fn save(&mut self) {
        self.store.save()
    }

    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.store.replace_all(tasks)
    }

    /// Flip the completion flag and persist. Unknown ids are a no-op.
    pub fn toggle_completed(&mut self, id: RecordId) -> Option<&Task> {
        self.store.update(id, |task| task.completed = !task.completed)
    }

    /// Tasks matching `filter`, in insertion order.
    pub fn filter(&self, filter: TaskFilter, today: NaiveDate) -> Vec<&Task> {
        self.store
            .all()
            .iter()
            .filter(|task| match filter {
                TaskFilter::All => true,
                TaskFilter::Pending => !task.completed,
                TaskFilter::Completed => task.completed,
                TaskFilter::Overdue => task.is_overdue(today),
            })
            .collect()
    }

    pub fn pending_count(&self) -> usize {
        self.store.all().iter().filter(|t| !t.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Priority;
    use chrono::Duration;
    use tempfile::TempDir;

    fn task(title: &str, due: NaiveDate) -> Task {
        Task::new(title.to_string(), due, Priority::Medium)
    }

    #[test]
    fn test_overdue_filter_excludes_completed() {
        let tmp = TempDir::new().unwrap();
        let mut tracker = TodoTracker::open(tmp.path());
        let today = NaiveDate::from_ymd_opt(2026, 5, 20).unwrap();

        let id = tracker.add(task("yesterday", today - Duration::days(1))).id;

        let overdue = tracker.filter(TaskFilter::Overdue, today);
        assert!(overdue.iter().any(|t| t.id == id));

        tracker.toggle_completed(id);
        let overdue = tracker.filter(TaskFilter::Overdue, today);
        assert!(!overdue.iter().any(|t| t.id == id));
    }

    #[test]
    fn test_pending_and_completed_partition() {
        let tmp = TempDir::new().unwrap();
        let mut tracker = TodoTracker::open(tmp.path());
        let today = NaiveDate::from_ymd_opt(2026, 5, 20).unwrap();
        let id = tracker.add(task("t", today)).id;
        tracker.toggle_completed(id);

        let total = tracker.all().len();
        let pending = tracker.filter(TaskFilter::Pending, today).len();
        let completed = tracker.filter(TaskFilter::Completed, today).len();
        assert_eq!(pending + completed, total);
        assert_eq!(tracker.filter(TaskFilter::All, today).len(), total);
    }

    #[test]
    fn test_filter_preserves_insertion_order() {
        let tmp = TempDir::new().unwrap();
        let mut tracker = TodoTracker::open(tmp.path());
        let today = NaiveDate::from_ymd_opt(2026, 5, 20).unwrap();

        tracker.add(task("first", today));
        tracker.add(task("second", today));

        let titles: Vec<_> = tracker
            .filter(TaskFilter::All, today)
            .iter()
            .map(|t| t.title.clone())
            .collect();
        let all_titles: Vec<_> = tracker.all().iter().map(|t| t.title.clone()).collect();
        assert_eq!(titles, all_titles);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let tmp = TempDir::new().unwrap();
        let mut tracker = TodoTracker::open(tmp.path());
        assert!(tracker.toggle_completed(424_242).is_none());
    }
}
