//! Envelope encoding for collection documents.
//!
//! Each collection is stored as a single object holding one array under the
//! collection's key, e.g. `{"products": [...]}`.

use super::error::{Result, StorageError};
use super::Collection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

pub fn encode<R: Serialize>(collection: Collection, records: &[R]) -> Result<Vec<u8>> {
    let key = collection.key();
    let encode_err = |source| StorageError::Encode {
        key: key.to_string(),
        source,
    };

    let items = serde_json::to_value(records).map_err(encode_err)?;
    let mut envelope = Map::new();
    envelope.insert(key.to_string(), items);

    serde_json::to_vec_pretty(&Value::Object(envelope)).map_err(encode_err)
}

pub fn decode<R: DeserializeOwned>(collection: Collection, bytes: &[u8]) -> Result<Vec<R>> {
    let key = collection.key();
    let parse_err = |source| StorageError::Parse {
        key: key.to_string(),
        source,
    };

    let mut document: Value = serde_json::from_slice(bytes).map_err(parse_err)?;
    let items = document
        .get_mut(key)
        .filter(|v| v.is_array())
        .map(Value::take)
        .ok_or_else(|| StorageError::MissingEnvelope {
            key: key.to_string(),
        })?;

    serde_json::from_value(items).map_err(parse_err)
}

pub fn empty(collection: Collection) -> Result<Vec<u8>> {
    encode::<Value>(collection, &[])
}
