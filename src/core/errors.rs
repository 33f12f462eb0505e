use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum SplitterError {
    /// Amount, title or participant set rejected before any split is computed
    #[error("Invalid expense input for field `{0}`: {1:?}")]
    InvalidExpenseInput(String, FieldError),

    /// Group creation input rejected
    #[error("Invalid group input for field `{0}`: {1:?}")]
    InvalidGroupInput(String, FieldError),

    /// A group or user id that does not resolve in the repository
    #[error("Unknown {0} reference: {1}")]
    UnknownReference(&'static str, String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl SplitterError {
    pub fn invalid_expense(field: &str, title: &str, description: impl Into<String>) -> Self {
        SplitterError::InvalidExpenseInput(field.to_string(), FieldError::new(field, title, description))
    }

    pub fn invalid_group(field: &str, title: &str, description: impl Into<String>) -> Self {
        SplitterError::InvalidGroupInput(field.to_string(), FieldError::new(field, title, description))
    }

    pub fn unknown_user(user_id: &str) -> Self {
        SplitterError::UnknownReference("user", user_id.to_string())
    }

    pub fn unknown_group(group_id: &str) -> Self {
        SplitterError::UnknownReference("group", group_id.to_string())
    }
}

impl From<serde_json::Error> for SplitterError {
    fn from(err: serde_json::Error) -> Self {
        SplitterError::StorageError(format!("Serialization error: {}", err))
    }
}

impl From<std::io::Error> for SplitterError {
    fn from(err: std::io::Error) -> Self {
        SplitterError::StorageError(format!("I/O error: {}", err))
    }
}
