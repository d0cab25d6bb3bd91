//! Delete command handler.

use tracing::debug;

use crate::environment::Workspace;
use crate::error::Result;

/// Remove `name` from the registry, then drop its stored records.
///
/// Nothing is written when the registry refuses the deletion.
pub fn handle_delete(ws: &mut Workspace<'_>, name: &str) -> Result<()> {
    ws.registry.delete(name)?;
    ws.registry.persist(ws.records.store())?;
    ws.records.delete(name)?;
    debug!(env = name, "environment deleted");
    Ok(())
}
