use std::fmt;
use std::sync::Arc;

use tracing::warn;

use super::store::{StoreError, TokenStore, ACCESS_TOKEN_KEY};

/// Handle on the session token.
///
/// Clone is cheap - all clones share the same underlying store, so a token
/// cleared by the request pipeline is immediately gone for the navigator too.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Get the bearer token if one is stored.
    ///
    /// A store that cannot be read is treated as holding no token.
    pub fn token(&self) -> Option<String> {
        match self.store.get(ACCESS_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, "Failed to read session token, treating as signed out");
                None
            }
        }
    }

    /// Check if a session token is present
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Replace the session token
    pub fn update(&self, token: &str) -> Result<(), StoreError> {
        self.store.set(ACCESS_TOKEN_KEY, token)
    }

    /// Remove the session token. Clearing an empty session is a no-op.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.delete(ACCESS_TOKEN_KEY)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryStore;

    #[test]
    fn test_session_lifecycle() {
        let session = Session::new(Arc::new(MemoryStore::new()));
        assert!(!session.is_authenticated());

        session.update("abc").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc"));

        session.clear().unwrap();
        assert!(!session.is_authenticated());
        // Clearing twice is fine
        session.clear().unwrap();
    }

    #[test]
    fn test_session_empty_token_is_absent() {
        let session = Session::new(Arc::new(MemoryStore::with_token("")));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_session_clones_share_store() {
        let session = Session::new(Arc::new(MemoryStore::with_token("abc")));
        let other = session.clone();
        other.clear().unwrap();
        assert!(!session.is_authenticated());
    }
}
