//! OS keychain backend (macOS Keychain, Linux kernel keyutils, etc.).
//!
//! ## Error handling
//!
//! Only a missing entry reads as absent. Any other keychain failure (locked,
//! access denied, undecodable value) is [`AwsenvError::StoreUnavailable`]:
//! callers materialize defaults on absence, and doing that over an entry that
//! merely could not be read would overwrite it.

use keyring::Entry;
use tracing::debug;

use super::{NAMESPACE, SecretStore};
use crate::error::{AwsenvError, Result};

/// [`SecretStore`] backed by the platform credential store.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    /// Store scoped to the standard awsenv namespace.
    pub fn new() -> Self {
        Self::with_service(NAMESPACE)
    }

    /// Store scoped to a custom keychain service name.
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry> {
        Ok(Entry::new(&self.service, key)?)
    }

    /// Check whether the OS keychain backend is functional.
    ///
    /// Performs a write/read/delete round trip on a probe entry; this catches
    /// the `keyring` crate silently falling back to a non-persistent store.
    pub fn available(&self) -> bool {
        let entry = match self.entry("__awsenv_probe__") {
            Ok(e) => e,
            Err(_) => return false,
        };

        let probe_value = "__awsenv_probe_value__";
        if entry.set_password(probe_value).is_err() {
            return false;
        }

        let ok = entry
            .get_password()
            .map(|v| v == probe_value)
            .unwrap_or(false);

        let _ = entry.delete_credential();

        ok
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a keychain read: `NoEntry` is absence, anything else is an error.
fn read_entry(result: keyring::Result<String>) -> Result<Option<String>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl SecretStore for KeyringStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = read_entry(self.entry(key)?.get_password())?;
        debug!(key, found = value.is_some(), "read keychain entry");
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!(key, "writing keychain entry");
        self.entry(key)?
            .set_password(value)
            .map_err(AwsenvError::from)
    }

    fn delete(&self, key: &str) -> Result<()> {
        debug!(key, "deleting keychain entry");
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
