//! Per-environment configuration and derived-session records.
//!
//! Both slots are stored as raw text. Saving never validates: whatever the
//! operator wrote is what gets persisted, and parsing happens on the way
//! out via [`Configuration::parse`].

use tracing::{debug, warn};

use super::registry::Registry;
use super::template::Template;
use super::types::{Configuration, EMPTY_DERIVED, EnvMap};
use crate::error::Result;
use crate::store::{SecretStore, derived_key};

pub struct RecordStore<'a> {
    store: &'a dyn SecretStore,
    template: &'a Template,
}

impl<'a> RecordStore<'a> {
    pub fn new(store: &'a dyn SecretStore, template: &'a Template) -> Self {
        Self { store, template }
    }

    pub fn store(&self) -> &'a dyn SecretStore {
        self.store
    }

    /// Raw configuration text of `name`.
    ///
    /// An absent record is materialized from the template and persisted.
    /// `name` is added to the registry if it was not known yet.
    pub fn load_raw(&self, registry: &mut Registry, name: &str) -> Result<String> {
        let raw = match self.store.get(name)? {
            Some(raw) => raw,
            None => {
                debug!(env = name, "materializing environment from template");
                let text = self.template.read()?;
                self.store.set(name, &text)?;
                text
            }
        };
        if registry.ensure_known(name) {
            registry.persist(self.store)?;
        }
        Ok(raw)
    }

    pub fn load(&self, registry: &mut Registry, name: &str) -> Result<Configuration> {
        Ok(Configuration::parse(&self.load_raw(registry, name)?))
    }

    /// Raw derived-session text of `name`, initialized to `{}` if absent.
    pub fn load_derived_raw(&self, name: &str) -> Result<String> {
        let key = derived_key(name);
        match self.store.get(&key)? {
            Some(raw) => Ok(raw),
            None => {
                self.store.set(&key, EMPTY_DERIVED)?;
                Ok(EMPTY_DERIVED.to_string())
            }
        }
    }

    /// Derived session of `name`. Unreadable text counts as no session.
    pub fn load_derived(&self, name: &str) -> Result<EnvMap> {
        let raw = self.load_derived_raw(name)?;
        match serde_json::from_str::<EnvMap>(&raw) {
            Ok(map) => Ok(map),
            Err(e) => {
                warn!(env = name, error = %e, "derived session is malformed, ignoring it");
                Ok(EnvMap::new())
            }
        }
    }

    pub fn save(&self, name: &str, raw: &str) -> Result<()> {
        self.store.set(name, raw)
    }

    pub fn save_derived(&self, name: &str, raw: &str) -> Result<()> {
        self.store.set(&derived_key(name), raw)
    }

    /// Replace the derived session with `derived`, pretty-printed with sorted keys.
    pub fn replace_derived(&self, name: &str, derived: &EnvMap) -> Result<()> {
        let text = serde_json::to_string_pretty(derived)?;
        self.save_derived(name, &text)
    }

    /// Remove both slots of `name`.
    pub fn delete(&self, name: &str) -> Result<()> {
        self.store.delete(name)?;
        self.store.delete(&derived_key(name))
    }

    /// Duplicate both slots of `src` onto `dst` byte for byte.
    ///
    /// A slot missing on `src` ends up missing on `dst` as well.
    pub fn copy(&self, src: &str, dst: &str) -> Result<()> {
        for (from, to) in [
            (src.to_string(), dst.to_string()),
            (derived_key(src), derived_key(dst)),
        ] {
            match self.store.get(&from)? {
                Some(raw) => self.store.set(&to, &raw)?,
                None => self.store.delete(&to)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{META_KEY, MemoryStore};

    const TEMPLATE: &str = "{\"AWS_DEFAULT_REGION\": \"us-east-1\"}\n";

    fn template() -> Template {
        Template::Text(TEMPLATE.to_string())
    }

    #[test]
    fn test_fresh_env_materializes_template() {
        let store = MemoryStore::new();
        let template = template();
        let records = RecordStore::new(&store, &template);
        let mut registry = Registry::load(&store).unwrap();

        assert_eq!(records.load_raw(&mut registry, "dev").unwrap(), TEMPLATE);
        assert_eq!(store.raw("dev").unwrap(), TEMPLATE);
        assert_eq!(registry.envs(), ["dev"]);

        assert_eq!(records.load_derived_raw("dev").unwrap(), "{}");
        assert_eq!(store.raw("dev-derived").unwrap(), "{}");
    }

    #[test]
    fn test_load_registers_unknown_env() {
        let store = MemoryStore::new();
        let template = template();
        let records = RecordStore::new(&store, &template);
        let mut registry = Registry::load(&store).unwrap();

        records.load(&mut registry, "another").unwrap();
        assert_eq!(registry.envs(), ["dev", "another"]);
        assert_eq!(Registry::load(&store).unwrap(), registry);
    }

    #[test]
    fn test_load_tolerates_malformed_configuration() {
        let store = MemoryStore::new();
        let template = template();
        let records = RecordStore::new(&store, &template);
        let mut registry = Registry::load(&store).unwrap();
        store.set("profile", "{malformed").unwrap();

        let config = records.load(&mut registry, "profile").unwrap();
        assert_eq!(config, Configuration::Unparsed("{malformed".into()));
        assert_eq!(store.raw("profile").unwrap(), "{malformed");
    }

    #[test]
    fn test_derived_round_trip() {
        let store = MemoryStore::new();
        let template = template();
        let records = RecordStore::new(&store, &template);

        let text = "{\n  \"AWS_SESSION_TOKEN\": \"tok\"\n}";
        records.save_derived("dev", text).unwrap();
        assert_eq!(records.load_derived_raw("dev").unwrap(), text);
        assert_eq!(records.load_derived("dev").unwrap()["AWS_SESSION_TOKEN"], "tok");
    }

    #[test]
    fn test_malformed_derived_reads_as_empty() {
        let store = MemoryStore::new();
        let template = template();
        let records = RecordStore::new(&store, &template);
        store.set("dev-derived", "garbage").unwrap();

        assert!(records.load_derived("dev").unwrap().is_empty());
        assert_eq!(store.raw("dev-derived").unwrap(), "garbage");
    }

    #[test]
    fn test_delete_removes_both_slots() {
        let store = MemoryStore::new();
        let template = template();
        let records = RecordStore::new(&store, &template);
        store.set("another", "{}").unwrap();
        store.set("another-derived", "{}").unwrap();
        store.set("profile", "{}").unwrap();

        records.delete("another").unwrap();
        assert_eq!(store.keys(), vec!["profile".to_string()]);
    }

    #[test]
    fn test_copy_is_byte_for_byte() {
        let store = MemoryStore::new();
        let template = template();
        let records = RecordStore::new(&store, &template);
        store.set("dev", "{broken json").unwrap();
        store.set("dev-derived", "{\"a\":\"5\"}").unwrap();

        records.copy("dev", "staging").unwrap();
        assert_eq!(store.raw("staging"), store.raw("dev"));
        assert_eq!(store.raw("staging-derived"), store.raw("dev-derived"));
        assert_eq!(store.raw(META_KEY), None);
    }

    #[test]
    fn test_copy_missing_half_stays_missing() {
        let store = MemoryStore::new();
        let template = template();
        let records = RecordStore::new(&store, &template);
        store.set("dev", "{}").unwrap();
        store.set("staging-derived", "{\"stale\":\"1\"}").unwrap();

        records.copy("dev", "staging").unwrap();
        assert_eq!(store.raw("staging").unwrap(), "{}");
        assert_eq!(store.raw("staging-derived"), None);
    }
}
