//! Error types for combi-format.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CombiFormatError {
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid material spec: {0}")]
    InvalidSpec(String),

    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    #[error("Select count {select} out of range for {total} items")]
    SelectOutOfRange { select: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, CombiFormatError>;
