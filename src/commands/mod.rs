//! Command handlers for the awsenv CLI.
//!
//! Each handler works on the already-opened [`Workspace`](crate::environment::Workspace)
//! and prints its own output.

mod auth;
mod copy;
mod default;
mod delete;
mod edit;
mod export;
mod hint;
mod list;
mod switch;

pub use auth::{handle_auth, handle_mfaleft};
pub use copy::handle_copy;
pub use default::handle_default;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use export::{ENV_NAME_VAR, build_export, handle_export};
pub use hint::{activation_hint, store_failure_hint};
pub use list::{handle_list, list_lines};
pub use switch::handle_switch;
