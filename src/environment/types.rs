//! Environment data model: key sets and the configuration variant.

use std::collections::{BTreeMap, BTreeSet};

/// Flat string map used for both configuration and derived session data.
pub type EnvMap = BTreeMap<String, String>;

/// Keys every valid configuration must carry.
pub const REQUIRED_KEYS: [&str; 5] = [
    "AWS_ACCESS_KEY_ID",
    "AWS_ACCOUNT_ID",
    "AWS_DEFAULT_OUTPUT",
    "AWS_DEFAULT_REGION",
    "AWS_SECRET_ACCESS_KEY",
];

/// Keys whose change pattern decides whether a derived session survives an edit.
pub const SENSITIVE_KEYS: [&str; 5] = [
    "AWS_ACCESS_KEY_ID",
    "AWS_ACCOUNT_ID",
    "AWS_SECRET_ACCESS_KEY",
    "DEVENV_AWSENV_MFA_DEVICE_NAME",
    "DEVENV_AWSENV_MFA_OTP_AUTHSECRET",
];

/// Prefix of awsenv-internal keys; these are never exported to the shell.
pub const INTERNAL_PREFIX: &str = "DEVENV_AWSENV_";

/// MFA device name (the part after `mfa/` in the device ARN).
pub const MFA_DEVICE_KEY: &str = "DEVENV_AWSENV_MFA_DEVICE";

/// Base32 TOTP secret of the MFA device.
pub const MFA_SECRET_KEY: &str = "DEVENV_AWSENV_MFA_OTP_AUTHSECRET";

pub const ACCOUNT_ID_KEY: &str = "AWS_ACCOUNT_ID";

/// Text of an empty derived session.
pub const EMPTY_DERIVED: &str = "{}";

/// An environment's configuration as read from the store.
///
/// The store keeps whatever text the operator saved, so a configuration
/// may not be a JSON object of strings. That text is carried verbatim in
/// [`Configuration::Unparsed`] instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Configuration {
    Parsed(EnvMap),
    Unparsed(String),
}

impl Configuration {
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<EnvMap>(raw) {
            Ok(map) => Configuration::Parsed(map),
            Err(_) => Configuration::Unparsed(raw.to_string()),
        }
    }

    pub fn parsed(&self) -> Option<&EnvMap> {
        match self {
            Configuration::Parsed(map) => Some(map),
            Configuration::Unparsed(_) => None,
        }
    }

    /// Value of a key, treating empty strings as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.parsed()?
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Required keys absent from `config`.
pub fn missing_required_keys(config: &EnvMap) -> BTreeSet<String> {
    REQUIRED_KEYS
        .iter()
        .filter(|k| !config.contains_key(**k))
        .map(|k| k.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_malformed_text() {
        let config = Configuration::parse("{malformed");
        assert_eq!(config, Configuration::Unparsed("{malformed".to_string()));
        assert_eq!(config.get("AWS_ACCOUNT_ID"), None);
    }

    #[test]
    fn test_non_string_values_are_unparsed() {
        let config = Configuration::parse(r#"{"AWS_ACCOUNT_ID": 123}"#);
        assert!(config.parsed().is_none());
    }

    #[test]
    fn test_get_treats_empty_as_unset() {
        let config = Configuration::parse(r#"{"DEVENV_AWSENV_MFA_DEVICE": "", "A": "b"}"#);
        assert_eq!(config.get(MFA_DEVICE_KEY), None);
        assert_eq!(config.get("A"), Some("b"));
    }

    #[test]
    fn test_missing_required_keys() {
        let mut config: EnvMap = REQUIRED_KEYS
            .iter()
            .map(|k| (k.to_string(), "x".to_string()))
            .collect();
        assert!(missing_required_keys(&config).is_empty());

        config.remove("AWS_ACCESS_KEY_ID");
        let missing = missing_required_keys(&config);
        assert_eq!(missing.into_iter().collect::<Vec<_>>(), vec!["AWS_ACCESS_KEY_ID"]);
    }
}
