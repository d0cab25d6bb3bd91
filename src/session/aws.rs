//! The AWS command line, invoked as a subprocess.

use std::process::Command;

use serde::Deserialize;
use tracing::debug;

use crate::environment::{EnvMap, INTERNAL_PREFIX};
use crate::error::{AwsenvError, Result};

/// Default name of the AWS CLI wrapper on `PATH`.
pub const DEFAULT_AWS_CLI: &str = "awsenv-aws";

/// Captured result of one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs AWS CLI subcommands.
pub trait AwsCli {
    /// Run `args` with `env` added to the child's environment.
    fn run(&self, args: &[String], env: &EnvMap) -> Result<CliOutput>;
}

#[derive(Debug, Clone)]
pub struct SubprocessAwsCli {
    program: String,
}

impl SubprocessAwsCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SubprocessAwsCli {
    fn default() -> Self {
        Self::new(DEFAULT_AWS_CLI)
    }
}

impl AwsCli for SubprocessAwsCli {
    fn run(&self, args: &[String], env: &EnvMap) -> Result<CliOutput> {
        debug!(program = %self.program, ?args, "running AWS CLI");
        // A session token or profile left over from an earlier export would
        // override the long-term keys passed below.
        let output = Command::new(&self.program)
            .args(args)
            .env_remove("AWS_SESSION_TOKEN")
            .env_remove("AWS_PROFILE")
            .envs(
                env.iter()
                    .filter(|(k, _)| !k.starts_with(INTERNAL_PREFIX)),
            )
            .output()
            .map_err(|e| AwsenvError::exchange(format!("could not run {}: {}", self.program, e)))?;

        Ok(CliOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Arguments for `sts get-session-token` against an MFA device.
pub fn session_token_args(account_id: &str, device: &str, code: &str) -> Vec<String> {
    vec![
        "sts".to_string(),
        "get-session-token".to_string(),
        "--serial-number".to_string(),
        format!("arn:aws:iam::{}:mfa/{}", account_id, device),
        "--token-code".to_string(),
        code.to_string(),
    ]
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SessionTokenResponse {
    credentials: SessionCredentials,
}

/// Temporary credentials returned by `sts get-session-token`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionCredentials {
    pub session_token: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub expiration: String,
}

impl SessionCredentials {
    /// Parse the JSON document the CLI writes on success.
    pub fn from_response(stdout: &str) -> Result<Self> {
        let response: SessionTokenResponse = serde_json::from_str(stdout)
            .map_err(|e| AwsenvError::exchange(format!("unexpected response: {}", e)))?;
        Ok(response.credentials)
    }

    /// The derived-session map these credentials become.
    pub fn into_derived(self) -> EnvMap {
        EnvMap::from([
            ("AWS_SESSION_TOKEN".to_string(), self.session_token),
            ("AWS_ACCESS_KEY_ID".to_string(), self.access_key_id),
            ("AWS_SECRET_ACCESS_KEY".to_string(), self.secret_access_key),
            ("AWS_SESSION_EXPIRES".to_string(), self.expiration),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_args() {
        assert_eq!(
            session_token_args("123", "device", "654321"),
            vec![
                "sts",
                "get-session-token",
                "--serial-number",
                "arn:aws:iam::123:mfa/device",
                "--token-code",
                "654321",
            ]
        );
    }

    #[test]
    fn test_parse_response() {
        let stdout = r#"{"Credentials": {
            "SessionToken": "token",
            "SecretAccessKey": "key",
            "AccessKeyId": "id",
            "Expiration": "2024-03-01T20:00:00+00:00"
        }}"#;
        let derived = SessionCredentials::from_response(stdout)
            .unwrap()
            .into_derived();
        assert_eq!(derived["AWS_SESSION_TOKEN"], "token");
        assert_eq!(derived["AWS_ACCESS_KEY_ID"], "id");
        assert_eq!(derived["AWS_SECRET_ACCESS_KEY"], "key");
        assert_eq!(derived["AWS_SESSION_EXPIRES"], "2024-03-01T20:00:00+00:00");
        assert_eq!(derived.len(), 4);
    }

    #[test]
    fn test_parse_response_missing_credentials() {
        let err = SessionCredentials::from_response(r#"{"Other": {}}"#).unwrap_err();
        assert!(matches!(err, AwsenvError::Exchange(_)));
    }

    #[test]
    fn test_missing_program_is_exchange_error() {
        let cli = SubprocessAwsCli::new("awsenv-definitely-not-installed");
        let err = cli.run(&[], &EnvMap::new()).unwrap_err();
        assert!(matches!(err, AwsenvError::Exchange(_)));
    }
}
