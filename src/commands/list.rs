//! List command handler.

use crate::environment::{ListEntry, Registry};

/// One line per environment, sorted, the current one marked with `*`.
pub fn list_lines(entries: &[ListEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| {
            if e.current {
                format!("{} *", e.name)
            } else {
                e.name.clone()
            }
        })
        .collect()
}

/// Handle the list command - print all known environments
pub fn handle_list(registry: &Registry) {
    for line in list_lines(&registry.list()) {
        println!("{}", line);
    }
}
