mod codec;
mod error;
mod store;

pub use codec::{decode, encode};
pub use error::{Result, StorageError};
pub use store::{BlobStore, FsBlobStore, MemoryBlobStore};

use crate::config::StorageConfig;
use crate::models::{Hashtag, Product, ProductHashtag};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    Hashtags,
    ProductHashtags,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Products,
        Collection::Hashtags,
        Collection::ProductHashtags,
    ];

    /// Envelope key, also used as the blob key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Hashtags => "hashtags",
            Self::ProductHashtags => "productHashtags",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An entity stored in one of the collection documents.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: Collection;

    fn id(&self) -> i64;
}

impl Record for Product {
    const COLLECTION: Collection = Collection::Products;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Hashtag {
    const COLLECTION: Collection = Collection::Hashtags;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for ProductHashtag {
    const COLLECTION: Collection = Collection::ProductHashtags;

    fn id(&self) -> i64 {
        self.product_id
    }
}

/// How a new record's id is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// `len + 1`. Reuses an id after a deletion from the middle of a
    /// collection, so ids are only unique at the moment they are assigned.
    #[default]
    Sequential,
    /// `max(id) + 1`, starting at 1.
    NextAfterMax,
}

impl IdPolicy {
    pub fn next_id<R: Record>(self, records: &[R]) -> i64 {
        match self {
            Self::Sequential => records.len() as i64 + 1,
            Self::NextAfterMax => records.iter().map(Record::id).max().unwrap_or(0) + 1,
        }
    }
}

/// Handle to the three collection documents. Every `load` reads a whole
/// document and every `save` rewrites it; concurrent read-modify-write cycles
/// on the same collection can lose updates.
#[derive(Clone)]
pub struct Database {
    store: Arc<dyn BlobStore>,
    id_policy: IdPolicy,
}

impl Database {
    pub fn open(config: &StorageConfig) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.dir)?;

        let store = FsBlobStore::new(&config.dir)
            .with_file(Collection::Products.key(), &config.products)
            .with_file(Collection::Hashtags.key(), &config.hashtags)
            .with_file(Collection::ProductHashtags.key(), &config.product_hashtags);

        Ok(Self::with_store(Arc::new(store)))
    }

    pub fn open_memory() -> Self {
        Self::with_store(Arc::new(MemoryBlobStore::new()))
    }

    pub fn with_store(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            id_policy: IdPolicy::default(),
        }
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn next_id<R: Record>(&self, records: &[R]) -> i64 {
        let collection = R::COLLECTION;
        let id = self.id_policy.next_id(records);
        tracing::debug!(%collection, id, "Allocated id");
        id
    }

    pub async fn load<R: Record>(&self) -> Result<Vec<R>> {
        let key = R::COLLECTION.key();
        let bytes = self
            .store
            .read(key)
            .await
            .map_err(|source| StorageError::Io {
                key: key.to_string(),
                source,
            })?
            .ok_or_else(|| StorageError::Missing {
                key: key.to_string(),
            })?;
        decode(R::COLLECTION, &bytes)
    }

    pub async fn save<R: Record>(&self, records: &[R]) -> Result<()> {
        let key = R::COLLECTION.key();
        let bytes = encode(R::COLLECTION, records)?;
        self.store
            .write(key, bytes)
            .await
            .map_err(|source| StorageError::Io {
                key: key.to_string(),
                source,
            })
    }

    /// Writes an empty document for every collection that has none yet and
    /// returns the ones it created.
    pub async fn ensure_collections(&self) -> Result<Vec<Collection>> {
        let mut created = Vec::new();
        for collection in Collection::ALL {
            let key = collection.key();
            let io_err = |source| StorageError::Io {
                key: key.to_string(),
                source,
            };

            if self.store.read(key).await.map_err(io_err)?.is_none() {
                self.store
                    .write(key, codec::empty(collection)?)
                    .await
                    .map_err(io_err)?;
                tracing::info!("Created empty '{}' collection", key);
                created.push(collection);
            }
        }
        Ok(created)
    }
}
