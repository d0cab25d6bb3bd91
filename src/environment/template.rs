//! Seed text for brand-new environments.

use std::path::PathBuf;

use crate::error::{AwsenvError, Result};

/// Template used when no template file is configured.
pub const DEFAULT_TEMPLATE: &str = r#"{
    "AWS_ACCESS_KEY_ID": "",
    "AWS_ACCOUNT_ID": "",
    "AWS_DEFAULT_OUTPUT": "json",
    "AWS_DEFAULT_REGION": "us-east-1",
    "AWS_SECRET_ACCESS_KEY": "",
    "DEVENV_AWSENV_MFA_DEVICE": "",
    "DEVENV_AWSENV_MFA_OTP_AUTHSECRET": ""
}
"#;

/// Where a new environment's configuration text comes from.
///
/// The text is copied verbatim; it does not have to be valid JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    File(PathBuf),
    Text(String),
}

impl Template {
    pub fn read(&self) -> Result<String> {
        match self {
            Template::File(path) => std::fs::read_to_string(path).map_err(|e| {
                AwsenvError::config(format!(
                    "could not read template {}: {}",
                    path.display(),
                    e
                ))
            }),
            Template::Text(text) => Ok(text.clone()),
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Template::Text(DEFAULT_TEMPLATE.to_string())
    }
}
