//! Default command handler - when no subcommand is provided.

use crate::environment::Workspace;

/// Print the current environment name.
pub fn handle_default(ws: &Workspace<'_>) {
    println!("{}", ws.current);
}
