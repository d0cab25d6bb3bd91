//! Environments: the registry of names and the records stored per name.

mod diff;
mod edit;
mod records;
mod registry;
mod template;
mod types;
mod workspace;

pub use diff::{changed_keys, derived_after_edit};
pub use edit::{EditOutcome, edit_environment};
pub use records::RecordStore;
pub use registry::{DEFAULT_ENV, ListEntry, Registry};
pub use template::{DEFAULT_TEMPLATE, Template};
pub use types::{
    ACCOUNT_ID_KEY, Configuration, EMPTY_DERIVED, EnvMap, INTERNAL_PREFIX, MFA_DEVICE_KEY,
    MFA_SECRET_KEY, REQUIRED_KEYS, SENSITIVE_KEYS, missing_required_keys,
};
pub use workspace::Workspace;
