use thiserror::Error;

/// Failures reading or writing a collection document.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("collection '{key}' has no backing document")]
    Missing { key: String },

    #[error("collection '{key}' is not valid JSON: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("collection '{key}' has no \"{key}\" array")]
    MissingEnvelope { key: String },

    #[error("could not encode collection '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;
