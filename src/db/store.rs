use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Whole-blob storage addressed by dataset name. Writes always replace the
/// previous content; there is no locking between readers and writers.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Returns `None` when nothing has been stored under `key`.
    async fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>>;

    async fn write(&self, key: &str, bytes: Vec<u8>) -> io::Result<()>;
}

/// One file per dataset.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    dir: PathBuf,
    files: HashMap<String, PathBuf>,
}

impl FsBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            files: HashMap::new(),
        }
    }

    /// Maps `key` to `file`. Relative paths are resolved against the store
    /// directory, absolute ones are used as is.
    pub fn with_file(mut self, key: &str, file: impl AsRef<Path>) -> Self {
        let path = self.dir.join(file);
        self.files.insert(key.to_string(), path);
        self
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.files
            .get(key)
            .cloned()
            .unwrap_or_else(|| self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match tokio::fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn write(&self, key: &str, bytes: Vec<u8>) -> io::Result<()> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, bytes).await
    }
}

#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, bytes: Vec<u8>) -> io::Result<()> {
        self.blobs.write().await.insert(key.to_string(), bytes);
        Ok(())
    }
}
