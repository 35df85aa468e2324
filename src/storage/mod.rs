mod record_store;

pub use record_store::RecordStore;

/// Directory holding all persisted collections.
pub const DATA_DIR: &str = ".studydesk";
