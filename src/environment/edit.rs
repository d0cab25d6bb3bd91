//! Interactive editing of an environment's configuration.

use tracing::debug;

use super::diff::derived_after_edit;
use super::records::RecordStore;
use super::registry::Registry;
use super::types::{EnvMap, missing_required_keys};
use crate::error::{AwsenvError, Result};
use crate::utils::{Editor, ScratchFile};

/// Result of a completed edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Environment that was edited.
    pub env: String,
    /// Whether the parsed configuration differs from before the edit.
    pub changed: bool,
}

/// Let the operator edit `name` and persist the result.
///
/// The edited text is saved even when it is malformed or incomplete, so no
/// work is lost; in those cases a re-editable error is returned and the
/// derived session is left untouched. A valid edit runs session
/// invalidation. The scratch file is removed on every path.
pub fn edit_environment(
    records: &RecordStore<'_>,
    registry: &mut Registry,
    editor: &dyn Editor,
    name: &str,
) -> Result<EditOutcome> {
    let old_raw = records.load_raw(registry, name)?;
    let old: EnvMap = serde_json::from_str(&old_raw).unwrap_or_default();

    let scratch = ScratchFile::create(&old_raw)?;
    editor.edit(scratch.path())?;
    let new_raw = scratch.read()?;
    drop(scratch);

    let new: EnvMap = match serde_json::from_str(&new_raw) {
        Ok(map) => map,
        Err(e) => {
            records.save(name, &new_raw)?;
            return Err(AwsenvError::MalformedConfiguration(e.to_string()));
        }
    };

    let missing = missing_required_keys(&new);
    if !missing.is_empty() {
        records.save(name, &new_raw)?;
        return Err(AwsenvError::MissingRequiredKeys(missing));
    }

    records.save(name, &new_raw)?;
    let previous_derived = records.load_derived_raw(name)?;
    let derived = derived_after_edit(&old, &new, &previous_derived);
    records.save_derived(name, &derived)?;

    let changed = old != new;
    debug!(env = name, changed, "configuration saved");
    Ok(EditOutcome {
        env: name.to_string(),
        changed,
    })
}
