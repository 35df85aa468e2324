mod data;
mod engine;

pub use data::builtin;
pub use engine::{CatalogEngine, DurationBucket, FilterState, PriceFilter, SortKey, PAGE_SIZE};
