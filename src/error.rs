use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudydeskError {
    #[error("{0}")]
    Validation(String),

    #[error("Record not found: {0}")]
    RecordNotFound(i64),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid import file: {0}")]
    ImportFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StudydeskError>;
