use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Failed to read stored cards: {0}")]
    StorageRead(String),

    #[error("Failed to save cards: {0}")]
    StorageWrite(String),

    #[error("{field} is required")]
    Validation { field: &'static str },

    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    #[error("Invalid card ID: {0:?}")]
    InvalidCardId(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[cfg(feature = "sqlite-storage")]
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
