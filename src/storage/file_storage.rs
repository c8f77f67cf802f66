use crate::{
    error::{KanbanError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage: one JSON file per key inside a data directory
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const EXTENSION: &'static str = "json";

    /// Creates a new FileStorage rooted at the given data directory
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            root_path: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Path of the file backing `key`
    pub fn key_file(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty() && !key.starts_with('.') && !key.contains(['/', '\\']);
        if !valid {
            return Err(KanbanError::ConfigError(format!(
                "storage key {key:?} cannot be used as a file name"
            )));
        }
        Ok(self
            .root_path
            .join(format!("{}.{}", key, Self::EXTENSION)))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await
    }

    async fn read(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.key_file(key)?;

        if !file_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&file_path)
            .await
            .map_err(|e| KanbanError::StorageRead(format!("{}: {e}", file_path.display())))?;
        Ok(Some(contents))
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let file_path = self.key_file(key)?;
        self.ensure_directory_exists(&self.root_path).await?;

        // Write then rename so a failed write never truncates the last good copy
        let tmp_path = file_path.with_extension("json.tmp");
        let result: std::io::Result<()> = async {
            fs::write(&tmp_path, value).await?;
            fs::rename(&tmp_path, &file_path).await
        }
        .await;

        result.map_err(|e| KanbanError::StorageWrite(format!("{}: {e}", file_path.display())))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let file_path = self.key_file(key)?;

        if file_path.exists() {
            fs::remove_file(file_path).await?;
        }
        Ok(())
    }
}
