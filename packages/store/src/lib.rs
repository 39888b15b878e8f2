//! # Store crate: durable client-side key-value storage
//!
//! Everything the application needs to survive a page reload lives here: the
//! bearer token and the serialized signed-in user. Backends implement the
//! small synchronous [`KeyValueStore`] trait; [`SessionStorage`] layers the two
//! well-known keys on top of whichever backend the platform provides.
//!
//! | Backend | Platform | Notes |
//! |---------|----------|-------|
//! | [`MemoryStore`] | native, tests | `Arc<Mutex<HashMap>>`, cloned handles share data |
//! | [`LocalStore`] | wasm + `web` feature | `window.localStorage` |

mod error;
mod memory;
mod session;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use session::{SessionStorage, TOKEN_KEY, USER_KEY};

/// Synchronous string key-value store.
///
/// Browser `localStorage` is synchronous, so the trait is too. Implementations
/// must be cheap to call repeatedly; callers do not cache values.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// The store used by the running platform.
pub fn platform_store() -> std::sync::Arc<dyn KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        std::sync::Arc::new(LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        std::sync::Arc::new(MemoryStore::new())
    }
}
