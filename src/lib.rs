//! awsenv - named AWS credential environments kept in the OS keychain.
//!
//! This crate provides functionality to:
//! - Keep several named AWS configurations, one of them current
//! - Edit a configuration in the operator's editor, with validation
//! - Trade long-term keys plus an MFA code for a temporary session
//! - Render the current environment as shell `export` lines
//!
//! # Example
//!
//! ```no_run
//! use awsenv::environment::{Template, Workspace};
//! use awsenv::store::KeyringStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = KeyringStore::new();
//!     let template = Template::default();
//!     let ws = Workspace::open(&store, &template)?;
//!
//!     for entry in ws.registry.list() {
//!         println!("{}{}", entry.name, if entry.current { " *" } else { "" });
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod environment;
pub mod error;
pub mod session;
pub mod store;
pub mod utils;

// Re-export commonly used types at the crate root
pub use config::{Config, Settings};
pub use environment::{Configuration, EnvMap, Registry, Workspace};
pub use error::{AwsenvError, Result};
pub use store::{KeyringStore, MemoryStore, SecretStore};
