//! Copy command handler.

use crate::environment::Workspace;
use crate::error::Result;

/// Copy `source` onto `target`, registering `target` if needed.
///
/// Stored text is copied as-is, malformed or not.
pub fn handle_copy(ws: &mut Workspace<'_>, source: &str, target: &str) -> Result<()> {
    ws.registry.copy(source, target)?;
    ws.records.copy(source, target)?;
    ws.registry.persist(ws.records.store())
}
