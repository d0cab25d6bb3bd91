//! Configuration loading and management.

mod loader;
mod types;

pub use types::{
    Config, DEFAULT_EDITOR, Defaults, MANAGE_PROFILES_ENV, Overrides, Settings, TEMPLATE_ENV,
    expand_tilde,
};
