//! Storage contract for client credentials and the in-memory backend.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

/// Key the session token is stored under.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Credential storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Credential storage is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Keychain error: {0}")]
    Keychain(#[from] keyring::Error),
}

/// Persistent key/value storage for client credentials.
///
/// Implementations are shared between the request pipeline and the
/// navigator, so they synchronise internally.
pub trait TokenStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value under `key`. Removing an absent key is a no-op.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Process-local store, used by tests and short-lived tools.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Arc<RwLock<HashMap<String, String>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a session token.
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store
            .0
            .write()
            .insert(ACCESS_TOKEN_KEY.to_string(), token.to_string());
        store
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.0.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.0.write().remove(key);
        Ok(())
    }
}
