use thiserror::Error;

/// Failures reported by a [`KeyValueStore`](crate::KeyValueStore) backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The backend could not be reached (no window, storage disabled, poisoned lock).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the write (quota, private mode).
    #[error("Storage write failed for key '{0}'")]
    Write(String),

    /// A stored value did not deserialize into the expected type.
    #[error("Corrupt value for key '{key}': {reason}")]
    Corrupt { key: String, reason: String },
}
