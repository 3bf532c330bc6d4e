//! JSON File Store Implementation
//!
//! DurableStoreのJSONファイル実装（キーごとの文字列を1つのJSONオブジェクトで保持）

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::errors::StorageError;
use crate::domain::repositories::durable_store::DurableStore;

/// JSONファイルベースのキーバリューストア
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// 新しいストアを作成
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルから全エントリを読み込む
    fn load_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            debug!("Store file {} does not exist yet", path.display());
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(path).context("Failed to read store file")?;
        let entries: BTreeMap<String, String> =
            serde_json::from_str(&content).context("Failed to parse store file JSON")?;

        Ok(entries)
    }

    /// 全エントリをファイルに保存する
    fn save_entries(path: &Path, entries: &BTreeMap<String, String>) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create store directory")?;
        }

        let json = serde_json::to_string_pretty(entries).context("Failed to serialize store")?;
        fs::write(path, json).context("Failed to write store file")?;

        info!("Saved {} store entries to {}", entries.len(), path.display());

        Ok(())
    }
}

/// Convert an error chain into a StorageError message
fn storage_error(e: anyhow::Error) -> StorageError {
    StorageError(format!("{:#}", e))
}

impl DurableStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut entries = Self::load_entries(&self.path).map_err(storage_error)?;
        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = match Self::load_entries(&self.path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "Existing store file {} is unreadable, rewriting it: {:#}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
        };

        entries.insert(key.to_string(), value.to_string());
        Self::save_entries(&self.path, &entries).map_err(storage_error)
    }
}
