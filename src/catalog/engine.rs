//! Catalog filter/sort/pagination engine.

use crate::entity::{Category, Course, Level};

/// Courses shown per page; `load_more` grows the page by the same amount.
pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationBucket {
    UpToFive,
    FiveToTen,
    TenToTwenty,
    OverTwenty,
}

impl DurationBucket {
    fn matches(&self, hours: u32) -> bool {
        match self {
            DurationBucket::UpToFive => hours <= 5,
            DurationBucket::FiveToTen => hours > 5 && hours <= 10,
            DurationBucket::TenToTwenty => hours > 10 && hours <= 20,
            DurationBucket::OverTwenty => hours > 20,
        }
    }
}

impl std::str::FromStr for DurationBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0-5" => Ok(DurationBucket::UpToFive),
            "5-10" => Ok(DurationBucket::FiveToTen),
            "10-20" => Ok(DurationBucket::TenToTwenty),
            "20+" => Ok(DurationBucket::OverTwenty),
            _ => Err(format!("Invalid duration bucket: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceFilter {
    /// No built-in course is free; the predicate is kept for catalogs that
    /// carry free courses.
    Free,
    Paid,
}

impl PriceFilter {
    fn matches(&self, price: u32) -> bool {
        match self {
            PriceFilter::Free => price == 0,
            PriceFilter::Paid => price > 0,
        }
    }
}

impl std::str::FromStr for PriceFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(PriceFilter::Free),
            "paid" => Ok(PriceFilter::Paid),
            _ => Err(format!("Invalid price filter: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Popular,
    Newest,
    Rating,
    PriceLow,
    PriceHigh,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "popular" => Ok(SortKey::Popular),
            "newest" => Ok(SortKey::Newest),
            "rating" => Ok(SortKey::Rating),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}

/// Current narrowing criteria; empty fields impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub search: String,
    pub level: Option<Level>,
    pub duration: Option<DurationBucket>,
    pub price: Option<PriceFilter>,
    pub category: Option<Category>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.level.is_none()
            && self.duration.is_none()
            && self.price.is_none()
            && self.category.is_none()
    }

    /// All non-empty fields must match (conjunctive AND).
    fn matches(&self, course: &Course) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty() {
            let hit = course.title.to_lowercase().contains(&search)
                || course.description.to_lowercase().contains(&search)
                || course.instructor.name.to_lowercase().contains(&search);
            if !hit {
                return false;
            }
        }
        if let Some(level) = self.level {
            if course.level != level {
                return false;
            }
        }
        if let Some(bucket) = self.duration {
            if !bucket.matches(course.duration_hours()) {
                return false;
            }
        }
        if let Some(price) = self.price {
            if !price.matches(course.price) {
                return false;
            }
        }
        if let Some(category) = self.category {
            if course.category != category {
                return false;
            }
        }
        true
    }
}

/// Holds the immutable catalog and the filter/sort/page state, and keeps the
/// filtered sequence derived from them.
pub struct CatalogEngine {
    catalog: Vec<Course>,
    filters: FilterState,
    sort: Option<SortKey>,
    filtered: Vec<Course>,
    displayed: usize,
}

impl CatalogEngine {
    pub fn new(catalog: Vec<Course>) -> Self {
        let filtered = catalog.clone();
        Self {
            catalog,
            filters: FilterState::default(),
            sort: None,
            filtered,
            displayed: PAGE_SIZE,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn catalog(&self) -> &[Course] {
        &self.catalog
    }

    pub fn filtered(&self) -> &[Course] {
        &self.filtered
    }

    pub fn set_search(&mut self, search: String) {
        self.filters.search = search;
        self.recompute();
    }

    pub fn set_level(&mut self, level: Option<Level>) {
        self.filters.level = level;
        self.recompute();
    }

    pub fn set_duration(&mut self, duration: Option<DurationBucket>) {
        self.filters.duration = duration;
        self.recompute();
    }

    pub fn set_price(&mut self, price: Option<PriceFilter>) {
        self.filters.price = price;
        self.recompute();
    }

    /// Selecting the active category clears it; any other replaces it.
    pub fn toggle_category(&mut self, category: Category) {
        self.filters.category = match self.filters.category {
            Some(current) if current == category => None,
            _ => Some(category),
        };
        self.recompute();
    }

    /// Re-sort the current filtered sequence in place. Keeps the page count.
    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = Some(key);
        sort_courses(&mut self.filtered, key);
    }

    /// Drop every filter and the sort; the filtered sequence becomes the full
    /// catalog in original order.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.sort = None;
        self.recompute();
    }

    pub fn load_more(&mut self) {
        self.displayed += PAGE_SIZE;
    }

    /// First `displayed` courses of the filtered+sorted sequence.
    pub fn visible_page(&self) -> &[Course] {
        let end = self.displayed.min(self.filtered.len());
        &self.filtered[..end]
    }

    pub fn has_more(&self) -> bool {
        self.displayed < self.filtered.len()
    }

    /// Rebuild the filtered sequence from the full catalog and reset paging.
    fn recompute(&mut self) {
        self.filtered = self
            .catalog
            .iter()
            .filter(|c| self.filters.matches(c))
            .cloned()
            .collect();
        if let Some(key) = self.sort {
            sort_courses(&mut self.filtered, key);
        }
        self.displayed = PAGE_SIZE;
    }
}

impl Default for CatalogEngine {
    fn default() -> Self {
        Self::new(crate::catalog::builtin())
    }
}

fn sort_courses(courses: &mut [Course], key: SortKey) {
    match key {
        SortKey::Popular => courses.sort_by(|a, b| b.students.cmp(&a.students)),
        SortKey::Newest => courses.sort_by(|a, b| b.id.cmp(&a.id)),
        SortKey::Rating => courses.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::PriceLow => courses.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => courses.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}
