//! Switch command handler.

use super::hint::show_activation_hint;
use crate::environment::Workspace;
use crate::error::Result;

/// Make `name` the current environment.
pub fn handle_switch(ws: &mut Workspace<'_>, name: &str) -> Result<()> {
    ws.registry.switch(name)?;
    ws.registry.persist(ws.records.store())?;
    show_activation_hint(None);
    Ok(())
}
