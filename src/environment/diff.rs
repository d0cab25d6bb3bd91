//! Deciding whether a derived session survives a configuration edit.

use std::collections::BTreeSet;

use super::types::{EMPTY_DERIVED, EnvMap, SENSITIVE_KEYS};

/// Keys of `new` whose value differs from (or is missing in) `old`.
///
/// Keys removed in `new` are not counted.
pub fn changed_keys(old: &EnvMap, new: &EnvMap) -> BTreeSet<String> {
    new.iter()
        .filter(|(k, v)| old.get(*k) != Some(*v))
        .map(|(k, _)| k.clone())
        .collect()
}

/// Derived text to store after `old` was edited into `new`.
///
/// The previous session is kept only when every sensitive key changed;
/// any sensitive key left untouched clears it to `{}`.
pub fn derived_after_edit(old: &EnvMap, new: &EnvMap, previous_derived: &str) -> String {
    let changed = changed_keys(old, new);
    if SENSITIVE_KEYS.iter().any(|k| !changed.contains(*k)) {
        return EMPTY_DERIVED.to_string();
    }
    previous_derived.to_string()
}
