//! File-backed key-value storage.
//!
//! Each key maps to `<root>/<key>.json`. Writes land in a temporary file in
//! the same directory and are renamed into place, so a concurrent reader sees
//! either the old or the new document, never a partial one.

use crate::domain::KeyValueStorage;
use anyhow::{bail, Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStorage {
    // ---
    root: PathBuf,
}

impl FileStorage {
    // ---
    /// Opens (and creates if needed) the data directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        // ---
        let root = root.into();
        std::fs::create_dir_all(&root)
            .with_context(|| format!("failed to create data directory {}", root.display()))?;

        tracing::info!("File storage at {}", root.display());
        Ok(Self { root })
    }

    /// The data directory holding the `<key>.json` files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // ---
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            bail!("invalid storage key: {key:?}");
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait::async_trait]
impl KeyValueStorage for FileStorage {
    // ---
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        // ---
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        // ---
        let path = self.path_for(key)?;
        let tmp = self.root.join(format!(".{key}.{}.tmp", Uuid::new_v4().simple()));

        tokio::fs::write(&tmp, value)
            .await
            .with_context(|| format!("failed to write {}", tmp.display()))?;

        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e).with_context(|| format!("failed to replace {}", path.display()));
        }

        tracing::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        // ---
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("failed to remove {}", path.display())),
        }
    }
}
