pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod memory_store;

pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;

/// Key holding the session token or the offline sentinel.
pub const SESSION_TOKEN_KEY: &str = "maca_art_session_token";

/// Key holding the JSON-encoded local copy of the profile.
pub const LOCAL_USER_KEY: &str = "maca_art_local_user";

/// Durable string key/value storage on the device.
pub trait LocalStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
