use anyhow::{Context, Result};
use keyring::Entry;

use super::keychain::SERVICE_NAME;

/// Remembered login passwords, used for auto-login.
pub struct CredentialStore;

impl CredentialStore {
    /// Store a user's password in the OS keychain
    pub fn store(user_id: &str, password: &str) -> Result<()> {
        let entry = Entry::new(SERVICE_NAME, user_id)
            .context("Failed to create keyring entry")?;
        entry
            .set_password(password)
            .context("Failed to store password in keychain")?;
        Ok(())
    }

    /// Retrieve the remembered password for a user, if any
    pub fn get_password(user_id: &str) -> Result<Option<String>> {
        let entry = Entry::new(SERVICE_NAME, user_id)
            .context("Failed to create keyring entry")?;
        match entry.get_password() {
            Ok(password) => Ok(Some(password)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("Failed to retrieve password from keychain"),
        }
    }

    /// Forget the remembered password for a user
    pub fn delete(user_id: &str) -> Result<()> {
        let entry = Entry::new(SERVICE_NAME, user_id)
            .context("Failed to create keyring entry")?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).context("Failed to delete credential from keychain"),
        }
    }
}
