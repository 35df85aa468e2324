//! Month grid derivation for the dashboard calendar.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::entity::Task;

/// Cells per grid: always 6 rows of 7 days, Sunday-first.
pub const GRID_CELLS: usize = 42;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Whether the date belongs to the displayed month.
    pub in_month: bool,
    pub is_today: bool,
    /// Whether at least one task is due on this date.
    pub has_due_task: bool,
}

/// Tracks the displayed month and derives its 6-week grid.
pub struct Calendar {
    /// First day of the displayed month.
    month: NaiveDate,
}

impl Calendar {
    pub fn new(month: NaiveDate) -> Self {
        Self {
            month: first_of_month(month),
        }
    }

    pub fn for_today(today: NaiveDate) -> Self {
        Self::new(today)
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn month_label(&self) -> String {
        self.month.format("%B %Y").to_string()
    }

    pub fn next_month(&mut self) {
        self.month = self.month + Months::new(1);
    }

    pub fn previous_month(&mut self) {
        self.month = self.month - Months::new(1);
    }

    /// The 42-cell grid for the displayed month, annotated with task due
    /// dates.
    pub fn day_cells(&self, tasks: &[Task], today: NaiveDate) -> Vec<DayCell> {
        let offset = self.month.weekday().num_days_from_sunday() as u64;
        let start = self.month - Days::new(offset);

        (0..GRID_CELLS as u64)
            .map(|i| {
                let date = start + Days::new(i);
                DayCell {
                    date,
                    in_month: date.month() == self.month.month()
                        && date.year() == self.month.year(),
                    is_today: date == today,
                    has_due_task: tasks.iter().any(|t| t.due_date == date),
                }
            })
            .collect()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Priority;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_is_always_42_cells() {
        let calendar = Calendar::new(date(2026, 2, 1));
        let cells = calendar.day_cells(&[], date(2026, 2, 10));
        assert_eq!(cells.len(), GRID_CELLS);
    }

    #[test]
    fn test_grid_starts_on_sunday() {
        // March 2026 starts on a Sunday; the grid leads with March 1 itself.
        let calendar = Calendar::new(date(2026, 3, 15));
        let cells = calendar.day_cells(&[], date(2026, 3, 15));
        assert_eq!(cells[0].date, date(2026, 3, 1));
        assert_eq!(cells[0].date.weekday(), Weekday::Sun);

        // August 2026 starts on a Saturday; six leading July days.
        let calendar = Calendar::new(date(2026, 8, 1));
        let cells = calendar.day_cells(&[], date(2026, 8, 1));
        assert_eq!(cells[0].date, date(2026, 7, 26));
        assert!(!cells[0].in_month);
        assert!(cells[6].in_month);
    }

    #[test]
    fn test_month_membership_and_today() {
        let today = date(2026, 8, 27);
        let calendar = Calendar::for_today(today);
        let cells = calendar.day_cells(&[], today);

        let in_month = cells.iter().filter(|c| c.in_month).count();
        assert_eq!(in_month, 31);
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn test_due_task_marks_day() {
        let today = date(2026, 8, 27);
        let task = Task::new("deadline".to_string(), date(2026, 8, 30), Priority::High);

        let calendar = Calendar::for_today(today);
        let cells = calendar.day_cells(&[task], today);

        let cell = cells.iter().find(|c| c.date == date(2026, 8, 30)).unwrap();
        assert!(cell.has_due_task);
        assert_eq!(cells.iter().filter(|c| c.has_due_task).count(), 1);
    }

    #[test]
    fn test_month_paging_rolls_over_year() {
        let mut calendar = Calendar::new(date(2026, 12, 31));
        calendar.next_month();
        assert_eq!(calendar.month(), date(2027, 1, 1));

        calendar.previous_month();
        calendar.previous_month();
        assert_eq!(calendar.month(), date(2026, 11, 1));
    }

    #[test]
    fn test_month_label() {
        let calendar = Calendar::new(date(2026, 4, 9));
        assert_eq!(calendar.month_label(), "April 2026");
    }
}
