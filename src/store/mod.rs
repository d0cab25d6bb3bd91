//! Durable key/value storage for environment records.
//!
//! Everything awsenv persists is a string under a key inside one fixed
//! namespace. The registry lives under [`META_KEY`], an environment's
//! configuration under its own name, and its derived session under
//! `{name}-derived`.

mod keychain;
mod memory;

pub use keychain::KeyringStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Namespace (keychain service) for every awsenv entry.
pub const NAMESPACE: &str = "devenv-awsenv";

/// Key holding the environment registry document.
pub const META_KEY: &str = "__meta__";

/// Key holding the derived session of an environment.
pub fn derived_key(env: &str) -> String {
    format!("{}-derived", env)
}

/// Opaque string storage keyed by name.
///
/// `get` returns `Ok(None)` when the key is absent; absence is never an
/// error and is distinct from an empty string. Deleting an absent key is
/// not an error either.
pub trait SecretStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn delete(&self, key: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_key() {
        assert_eq!(derived_key("dev"), "dev-derived");
        assert_eq!(derived_key("my env"), "my env-derived");
    }
}
