//! Authentication module for managing the session token and saved logins.
//!
//! This module provides:
//! - `TokenStore`: the key/value capability the session token lives in,
//!   with in-memory, file-backed and OS keychain backends
//! - `Session`: a cheap-to-clone handle over a store that reads, writes and
//!   clears the `accessToken` entry
//! - `CredentialStore`: remembered login passwords for auto-login
//!
//! Tokens carry no expiry on the client. A session ends on logout or when
//! the server answers 401.

pub mod credentials;
pub mod file;
pub mod keychain;
pub mod session;
pub mod store;

pub use credentials::CredentialStore;
pub use file::FileStore;
pub use keychain::KeychainStore;
pub use session::Session;
pub use store::{MemoryStore, StoreError, TokenStore, ACCESS_TOKEN_KEY};
