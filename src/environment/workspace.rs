//! The current environment, opened at the start of every command.

use super::records::RecordStore;
use super::registry::Registry;
use super::template::Template;
use super::types::{Configuration, EnvMap};
use crate::error::Result;
use crate::store::SecretStore;

/// Registry plus the current environment's configuration and session.
///
/// Opening materializes whatever is missing: the registry (as `["dev"]`),
/// the current configuration (from the template) and its derived slot
/// (as `{}`).
pub struct Workspace<'a> {
    pub records: RecordStore<'a>,
    pub registry: Registry,
    pub current: String,
    pub configuration: Configuration,
    pub derived: EnvMap,
}

impl<'a> Workspace<'a> {
    pub fn open(store: &'a dyn SecretStore, template: &'a Template) -> Result<Self> {
        let records = RecordStore::new(store, template);
        let mut registry = Registry::load(store)?;
        let current = registry.current()?.to_string();
        let configuration = records.load(&mut registry, &current)?;
        let derived = records.load_derived(&current)?;
        Ok(Self {
            records,
            registry,
            current,
            configuration,
            derived,
        })
    }

    /// Configuration merged with the derived session, session values winning.
    pub fn merged(&self) -> EnvMap {
        let mut vars = self.configuration.parsed().cloned().unwrap_or_default();
        vars.extend(self.derived.clone());
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::DEFAULT_TEMPLATE;
    use crate::store::{META_KEY, MemoryStore};

    #[test]
    fn test_open_fresh_store() {
        let store = MemoryStore::new();
        let template = Template::default();
        let ws = Workspace::open(&store, &template).unwrap();

        assert_eq!(ws.current, "dev");
        assert_eq!(ws.registry.envs(), ["dev"]);
        assert_eq!(store.raw("dev").unwrap(), DEFAULT_TEMPLATE);
        assert_eq!(store.raw("dev-derived").unwrap(), "{}");
        assert!(ws.derived.is_empty());
        assert!(store.raw(META_KEY).is_some());
    }

    #[test]
    fn test_open_with_missing_half() {
        let store = MemoryStore::new();
        store.set(META_KEY, r#"{"envs": ["prod"]}"#).unwrap();
        store.set("prod-derived", r#"{"AWS_SESSION_TOKEN": "t"}"#).unwrap();
        let template = Template::Text("{}".into());

        let ws = Workspace::open(&store, &template).unwrap();
        assert_eq!(ws.current, "prod");
        assert_eq!(store.raw("prod").unwrap(), "{}");
        assert_eq!(ws.derived["AWS_SESSION_TOKEN"], "t");
    }

    #[test]
    fn test_merged_prefers_session_values() {
        let store = MemoryStore::new();
        store
            .set("dev", r#"{"AWS_ACCESS_KEY_ID": "long-term", "AWS_DEFAULT_REGION": "us-east-1"}"#)
            .unwrap();
        store
            .set("dev-derived", r#"{"AWS_ACCESS_KEY_ID": "temporary"}"#)
            .unwrap();
        let template = Template::default();

        let ws = Workspace::open(&store, &template).unwrap();
        let merged = ws.merged();
        assert_eq!(merged["AWS_ACCESS_KEY_ID"], "temporary");
        assert_eq!(merged["AWS_DEFAULT_REGION"], "us-east-1");
    }
}
