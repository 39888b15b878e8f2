//! Persisted session: the `token` and `user` keys.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{KeyValueStore, StorageError};

/// Key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "token";
/// Key holding the JSON-serialized signed-in user.
pub const USER_KEY: &str = "user";

/// Typed access to the persisted token/user pair.
///
/// A stored token says nothing about its validity; callers that restore a
/// session must still confirm it with the backend.
#[derive(Clone)]
pub struct SessionStorage {
    inner: Arc<dyn KeyValueStore>,
}

impl SessionStorage {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    pub fn token(&self) -> Result<Option<String>, StorageError> {
        Ok(self.inner.get(TOKEN_KEY)?.filter(|t| !t.is_empty()))
    }

    pub fn user<T: DeserializeOwned>(&self) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.inner.get(USER_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                key: USER_KEY.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.inner.set(TOKEN_KEY, token)
    }

    pub fn set_user<T: Serialize>(&self, user: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(user).map_err(|e| StorageError::Corrupt {
            key: USER_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.inner.set(USER_KEY, &json)
    }

    /// Persist both halves of a session, token first. Not atomic: a caller
    /// that needs all-or-nothing must [`clear`](Self::clear) on error.
    pub fn save<T: Serialize>(&self, token: &str, user: &T) -> Result<(), StorageError> {
        self.set_token(token)?;
        self.set_user(user)
    }

    /// Remove both keys. Both removals are attempted; the first error wins.
    pub fn clear(&self) -> Result<(), StorageError> {
        let token = self.inner.remove(TOKEN_KEY);
        let user = self.inner.remove(USER_KEY);
        if token.is_err() || user.is_err() {
            tracing::debug!("partial session clear: token={:?} user={:?}", token, user);
        }
        token.and(user)
    }
}

impl std::fmt::Debug for SessionStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStorage").finish_non_exhaustive()
    }
}
