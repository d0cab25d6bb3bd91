//! Ordered registry of known environment names.
//!
//! The registry is a plain value: every mutation is a transform of the
//! in-memory sequence, and the caller persists the whole document once
//! afterwards with [`Registry::persist`]. The head of the sequence is the
//! current environment; the rest are in recency order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AwsenvError, Result};
use crate::store::{META_KEY, SecretStore};

/// Environment created when the registry is first initialized.
pub const DEFAULT_ENV: &str = "dev";

/// One row of `awsenv list` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    envs: Vec<String>,
}

impl Registry {
    /// Build a registry from names, dropping duplicates after the first.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut envs: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !envs.contains(&name) {
                envs.push(name);
            }
        }
        Self { envs }
    }

    /// Read the registry, creating and persisting `["dev"]` if absent.
    pub fn load(store: &dyn SecretStore) -> Result<Self> {
        match store.get(META_KEY)? {
            Some(text) => {
                let registry: Registry = serde_json::from_str(&text)
                    .map_err(|e| AwsenvError::RegistryCorrupt(e.to_string()))?;
                Ok(Self::new(registry.envs))
            }
            None => {
                debug!("initializing env registry");
                let registry = Self::new([DEFAULT_ENV]);
                registry.persist(store)?;
                Ok(registry)
            }
        }
    }

    /// Write the whole registry document.
    pub fn persist(&self, store: &dyn SecretStore) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        store.set(META_KEY, &text)
    }

    pub fn envs(&self) -> &[String] {
        &self.envs
    }

    pub fn contains(&self, name: &str) -> bool {
        self.envs.iter().any(|e| e == name)
    }

    pub fn current(&self) -> Result<&str> {
        self.envs
            .first()
            .map(String::as_str)
            .ok_or_else(|| AwsenvError::RegistryCorrupt("no environments registered".into()))
    }

    fn is_current(&self, name: &str) -> bool {
        self.envs.first().is_some_and(|c| c == name)
    }

    /// Append `name` if unknown. Returns whether the registry changed.
    pub fn ensure_known(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.envs.push(name.to_string());
        true
    }

    /// Move `name` to the head, keeping the others in order.
    pub fn switch(&mut self, name: &str) -> Result<()> {
        let pos = self
            .envs
            .iter()
            .position(|e| e == name)
            .ok_or_else(|| AwsenvError::unknown_environment(name))?;
        let env = self.envs.remove(pos);
        self.envs.insert(0, env);
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> Result<()> {
        if self.current()? == name {
            return Err(AwsenvError::CannotDeleteCurrent(name.to_string()));
        }
        if !self.contains(name) {
            return Err(AwsenvError::unknown_environment(name));
        }
        self.envs.retain(|e| e != name);
        Ok(())
    }

    /// Register `dst` as a copy target of `src`. Record bytes are the caller's job.
    pub fn copy(&mut self, src: &str, dst: &str) -> Result<()> {
        if !self.contains(src) {
            return Err(AwsenvError::unknown_environment(src));
        }
        if self.is_current(dst) {
            return Err(AwsenvError::CannotOverwriteCurrent(dst.to_string()));
        }
        self.ensure_known(dst);
        Ok(())
    }

    /// Names in lexicographic order, tagged with whether each is current.
    pub fn list(&self) -> Vec<ListEntry> {
        let mut names: Vec<&String> = self.envs.iter().collect();
        names.sort();
        names
            .into_iter()
            .map(|name| ListEntry {
                name: name.clone(),
                current: self.is_current(name),
            })
            .collect()
    }
}
