use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::store::{StoreError, TokenStore};

/// Session file name in the cache directory
pub const SESSION_FILE: &str = "session.json";

/// Token store persisted as a JSON object on disk.
///
/// Every operation re-reads the file so that separate processes (the CLI
/// run twice in a row, for example) observe each other's writes.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Store at `<dir>/session.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SESSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    /// Like `load`, but a file that no longer parses is discarded so a
    /// write can replace it.
    fn load_for_write(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match self.load() {
            Err(StoreError::Corrupt(e)) => {
                warn!(path = %self.path.display(), error = %e, "Discarding unreadable session file");
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if entries.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_vec_pretty(entries)?;

        let mut tmp_path = self.path.clone();
        tmp_path.set_extension("tmp");
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(&contents)?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl TokenStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock();
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        let mut entries = self.load_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)?;
        debug!(key, path = %self.path.display(), "Stored credential entry");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(StoreError::Corrupt(e)) => {
                warn!(path = %self.path.display(), error = %e, "Removing unreadable session file");
                fs::remove_file(&self.path)?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        if entries.remove(key).is_some() {
            self.save(&entries)?;
            debug!(key, path = %self.path.display(), "Removed credential entry");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ACCESS_TOKEN_KEY;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "stockpilot-file-store-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = temp_dir("reopen");
        FileStore::in_dir(&dir).set(ACCESS_TOKEN_KEY, "abc").unwrap();

        let reopened = FileStore::in_dir(&dir);
        assert_eq!(reopened.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("abc"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_delete_removes_file_and_is_idempotent() {
        let dir = temp_dir("delete");
        let store = FileStore::in_dir(&dir);
        store.set(ACCESS_TOKEN_KEY, "abc").unwrap();
        assert!(store.path().exists());

        store.delete(ACCESS_TOKEN_KEY).unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);

        // Second delete of an absent key
        assert!(store.delete(ACCESS_TOKEN_KEY).is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = temp_dir("other-keys");
        let store = FileStore::in_dir(&dir);
        store.set(ACCESS_TOKEN_KEY, "abc").unwrap();
        store.set("deviceId", "phone-1").unwrap();

        store.delete(ACCESS_TOKEN_KEY).unwrap();
        assert_eq!(store.get("deviceId").unwrap().as_deref(), Some("phone-1"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = temp_dir("corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SESSION_FILE), "not json").unwrap();

        let store = FileStore::in_dir(&dir);
        assert!(matches!(store.get(ACCESS_TOKEN_KEY), Err(StoreError::Corrupt(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_set_replaces_truncated_file() {
        let dir = temp_dir("truncated-set");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SESSION_FILE), r#"{"accessToken": "abc"#).unwrap();

        let store = FileStore::in_dir(&dir);
        store.set(ACCESS_TOKEN_KEY, "fresh").unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("fresh"));
        assert!(!dir.join("session.tmp").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_delete_removes_truncated_file() {
        let dir = temp_dir("truncated-delete");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SESSION_FILE), r#"{"accessToken": "abc"#).unwrap();

        let store = FileStore::in_dir(&dir);
        store.delete(ACCESS_TOKEN_KEY).unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
