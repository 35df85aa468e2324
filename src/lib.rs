pub mod auth;
pub mod calendar;
pub mod catalog;
pub mod cli;
pub mod dashboard;
pub mod entity;
pub mod error;
pub mod storage;
pub mod tracker;

pub use catalog::CatalogEngine;
pub use dashboard::Session;
pub use error::{Result, StudydeskError};
