//! Edit command handler.

use super::hint::show_activation_hint;
use crate::environment::{Workspace, edit_environment};
use crate::error::Result;
use crate::utils::Editor;

/// Edit `name` (default: the current environment) in the operator's editor.
pub fn handle_edit(ws: &mut Workspace<'_>, editor: &dyn Editor, name: Option<String>) -> Result<()> {
    let name = name.unwrap_or_else(|| ws.current.clone());
    let outcome = edit_environment(&ws.records, &mut ws.registry, editor, &name)?;

    if outcome.changed {
        let other = (outcome.env != ws.current).then_some(outcome.env.as_str());
        show_activation_hint(other);
    }

    Ok(())
}
