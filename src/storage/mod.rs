use crate::{
    domain::Card,
    error::{KanbanError, Result},
};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "sqlite-storage")]
pub mod sqlite_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

#[cfg(feature = "sqlite-storage")]
pub use sqlite_storage::SqliteStorage;

/// Key/value persistence backend for the card collection
#[async_trait]
pub trait Storage: Send + Sync {
    /// Prepares the backend (directories, tables). Safe to call repeatedly.
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    /// Reads the raw value stored under `key`
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`
    async fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`; missing keys are not an error
    async fn remove(&self, key: &str) -> Result<()>;

    /// Loads the card collection stored under `key`.
    /// An unparsable value is reported as [`KanbanError::StorageRead`].
    async fn load_cards(&self, key: &str) -> Result<Option<Vec<Card>>> {
        match self.read(key).await? {
            Some(raw) => parse_cards(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Serializes the whole collection as a JSON array under `key`
    async fn save_cards(&self, key: &str, cards: &[Card]) -> Result<()> {
        let json = serde_json::to_string_pretty(cards)?;
        self.write(key, &json).await
    }
}

pub(crate) fn parse_cards(raw: &str) -> Result<Vec<Card>> {
    serde_json::from_str(raw).map_err(|e| KanbanError::StorageRead(e.to_string()))
}

#[async_trait]
impl<T: Storage + ?Sized> Storage for std::sync::Arc<T> {
    async fn initialize(&self) -> Result<()> {
        (**self).initialize().await
    }

    async fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key).await
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key).await
    }
}

#[async_trait]
impl<T: Storage + ?Sized> Storage for Box<T> {
    async fn initialize(&self) -> Result<()> {
        (**self).initialize().await
    }

    async fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key).await
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key).await
    }
}
