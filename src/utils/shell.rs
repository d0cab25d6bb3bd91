//! Shell export formatting.

use crate::environment::{EnvMap, INTERNAL_PREFIX};

/// `KEY=value` / `export KEY` line pairs for every public key, sorted by key.
///
/// Values are shell-quoted; keys carrying the internal prefix are skipped.
pub fn export_lines(vars: &EnvMap) -> Vec<String> {
    vars.iter()
        .filter(|(k, _)| !k.starts_with(INTERNAL_PREFIX))
        .flat_map(|(k, v)| {
            [
                format!("{}={}", k, shell_words::quote(v)),
                format!("export {}", k),
            ]
        })
        .collect()
}
