//! Desktop session persistence using the OS keyring.

use keyring::Entry;

use tokodoc_core::models::SessionPersistence;
use tokodoc_core::{Error, Result, Session};

const KEYRING_SERVICE_NAME: &str = "tokodoc";
const KEYRING_SESSION_USERNAME: &str = "session";

/// Session store backed by the OS keyring (`keyring` crate).
#[derive(Debug, Clone)]
pub struct KeyringSessionStore {
    service_name: String,
    username: String,
}

impl Default for KeyringSessionStore {
    fn default() -> Self {
        Self {
            service_name: KEYRING_SERVICE_NAME.to_string(),
            username: KEYRING_SESSION_USERNAME.to_string(),
        }
    }
}

impl KeyringSessionStore {
    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service_name, &self.username)
            .map_err(|error| Error::SessionStorage(error.to_string()))
    }
}

impl SessionPersistence for KeyringSessionStore {
    fn load(&self) -> Result<Option<Session>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(Error::SessionStorage(error.to_string())),
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        let serialized = serde_json::to_string(session)?;
        self.entry()?
            .set_password(&serialized)
            .map_err(|error| Error::SessionStorage(error.to_string()))
    }

    fn clear(&self) -> Result<()> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(Error::SessionStorage(error.to_string())),
        }
    }
}
