use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "kanban-speech-tech";

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key the card collection is persisted under
    pub storage_key: String,
    /// Seed sample cards when nothing is stored yet
    pub seed_when_empty: bool,
    /// Copy an unparsable stored value aside before reseeding
    pub quarantine_corrupt: bool,
}

impl StoreConfig {
    /// Returns the config with a different storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Key that receives a copy of an unparsable collection
    pub fn quarantine_key(&self) -> String {
        format!("{}.corrupt", self.storage_key)
    }

    /// Backup key for the `attempt`-th corrupt copy: `<key>.corrupt` first,
    /// then `<key>.corrupt.1`, `<key>.corrupt.2` and so on
    pub fn quarantine_key_for(&self, attempt: usize) -> String {
        match attempt {
            0 => self.quarantine_key(),
            n => format!("{}.{n}", self.quarantine_key()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(KanbanError::ConfigError(
                "storage key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_when_empty: true,
            quarantine_corrupt: true,
        }
    }
}
