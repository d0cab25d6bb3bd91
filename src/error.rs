//! Unified error type for awsenv.
//!
//! All public APIs return `Result<T, AwsenvError>`. Registry and validation
//! failures get their own variants so callers (and tests) can match on them;
//! everything else is easy to construct from a message.

use std::collections::BTreeSet;
use std::fmt;

/// The unified error type for all awsenv operations.
#[derive(Debug)]
pub enum AwsenvError {
    // ── I/O & serialization ────────────────────────────────────────────
    /// Filesystem or process I/O failed.
    Io(std::io::Error),

    /// JSON serialization/deserialization error.
    Json(serde_json::Error),

    /// KDL config file parsing error.
    Config(String),

    // ── Secret store ───────────────────────────────────────────────────
    /// The OS credential store could not be reached or refused a write.
    StoreUnavailable(String),

    // ── Registry ───────────────────────────────────────────────────────
    /// The named environment is not in the registry.
    UnknownEnvironment(String),

    /// The current environment cannot be deleted.
    CannotDeleteCurrent(String),

    /// An environment cannot be copied on top of the current one.
    CannotOverwriteCurrent(String),

    /// The registry document is empty or unreadable.
    RegistryCorrupt(String),

    // ── Configuration ──────────────────────────────────────────────────
    /// Edited configuration text is not a JSON object of strings.
    MalformedConfiguration(String),

    /// Configuration lacks required keys.
    MissingRequiredKeys(BTreeSet<String>),

    // ── Authentication ─────────────────────────────────────────────────
    /// The session-token exchange failed with a code that retrying cannot change.
    AuthenticationRejected(String),

    /// The authentication CLI produced output we could not use.
    Exchange(String),

    // ── External tools ─────────────────────────────────────────────────
    /// The editor could not be launched.
    Editor(String),

    // ── Catch-all ──────────────────────────────────────────────────────
    /// Any other error.
    Other(String),
}

// ── Display ────────────────────────────────────────────────────────────

impl fmt::Display for AwsenvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwsenvError::Io(e) => write!(f, "{}", e),
            AwsenvError::Json(e) => write!(f, "JSON error: {}", e),
            AwsenvError::Config(msg) => write!(f, "config error: {}", msg),
            AwsenvError::StoreUnavailable(msg) => {
                write!(f, "credential store unavailable: {}", msg)
            }
            AwsenvError::UnknownEnvironment(name) => write!(f, "No such env {}", name),
            AwsenvError::CannotDeleteCurrent(_) => write!(f, "Cannot delete current env"),
            AwsenvError::CannotOverwriteCurrent(name) => {
                write!(f, "Cannot copy on top of current env {}", name)
            }
            AwsenvError::RegistryCorrupt(msg) => write!(f, "env registry is corrupt: {}", msg),
            AwsenvError::MalformedConfiguration(msg) => {
                write!(f, "Could not deserialize new data, re-edit ({})", msg)
            }
            AwsenvError::MissingRequiredKeys(keys) => {
                let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
                write!(f, "missing required keys: {}, re-edit", keys.join(", "))
            }
            AwsenvError::AuthenticationRejected(msg) => {
                write!(f, "MFA authentication rejected: {}", msg)
            }
            AwsenvError::Exchange(msg) => write!(f, "session token exchange failed: {}", msg),
            AwsenvError::Editor(msg) => write!(f, "editor error: {}", msg),
            AwsenvError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AwsenvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AwsenvError::Io(e) => Some(e),
            AwsenvError::Json(e) => Some(e),
            _ => None,
        }
    }
}

// ── From implementations for common error types ────────────────────────

impl From<std::io::Error> for AwsenvError {
    fn from(e: std::io::Error) -> Self {
        AwsenvError::Io(e)
    }
}

impl From<serde_json::Error> for AwsenvError {
    fn from(e: serde_json::Error) -> Self {
        AwsenvError::Json(e)
    }
}

impl From<keyring::Error> for AwsenvError {
    fn from(e: keyring::Error) -> Self {
        AwsenvError::StoreUnavailable(e.to_string())
    }
}

impl From<String> for AwsenvError {
    fn from(s: String) -> Self {
        AwsenvError::Other(s)
    }
}

impl From<&str> for AwsenvError {
    fn from(s: &str) -> Self {
        AwsenvError::Other(s.to_string())
    }
}

// ── Convenience constructors ───────────────────────────────────────────

impl AwsenvError {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        AwsenvError::Config(message.into())
    }

    /// Create an unknown-environment error.
    pub fn unknown_environment(name: impl Into<String>) -> Self {
        AwsenvError::UnknownEnvironment(name.into())
    }

    /// Create an exchange error.
    pub fn exchange(message: impl Into<String>) -> Self {
        AwsenvError::Exchange(message.into())
    }

    /// Create an editor error.
    pub fn editor(message: impl Into<String>) -> Self {
        AwsenvError::Editor(message.into())
    }

    /// Create a missing-keys error from any iterator of key names.
    pub fn missing_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AwsenvError::MissingRequiredKeys(keys.into_iter().map(Into::into).collect())
    }

    /// Whether the operator can fix this by editing the environment again.
    pub fn is_reeditable(&self) -> bool {
        matches!(
            self,
            AwsenvError::MalformedConfiguration(_) | AwsenvError::MissingRequiredKeys(_)
        )
    }
}

/// Convenience type alias for Results using AwsenvError.
pub type Result<T> = std::result::Result<T, AwsenvError>;
