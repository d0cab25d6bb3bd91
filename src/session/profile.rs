//! Named AWS CLI profiles mirroring an environment's static settings.

use tracing::warn;

use super::aws::AwsCli;
use crate::environment::EnvMap;
use crate::error::Result;

/// Configuration keys and the `aws configure` setting each one feeds.
const PROFILE_SETTINGS: [(&str, &str); 4] = [
    ("AWS_ACCESS_KEY_ID", "aws_access_key_id"),
    ("AWS_SECRET_ACCESS_KEY", "aws_secret_access_key"),
    ("AWS_DEFAULT_OUTPUT", "output"),
    ("AWS_DEFAULT_REGION", "region"),
];

/// Profile name managed for `env`.
pub fn profile_name(env: &str) -> String {
    format!("awsenv-{}", env)
}

/// `configure set` argument lists for every setting present in `config`.
pub fn profile_commands(env: &str, config: &EnvMap) -> Vec<Vec<String>> {
    let profile = profile_name(env);
    PROFILE_SETTINGS
        .iter()
        .filter_map(|(key, setting)| {
            config.get(*key).map(|value| {
                vec![
                    "configure".to_string(),
                    "set".to_string(),
                    setting.to_string(),
                    value.clone(),
                    "--profile".to_string(),
                    profile.clone(),
                ]
            })
        })
        .collect()
}

/// Write the managed profile for `env` and return its name.
///
/// A failing `configure set` is logged and skipped; the export that relies
/// on the profile still goes ahead.
pub fn configure_profile(cli: &dyn AwsCli, env: &str, config: &EnvMap) -> Result<String> {
    for args in profile_commands(env, config) {
        let output = cli.run(&args, &EnvMap::new())?;
        if !output.success {
            warn!(setting = %args[2], stderr = %output.stderr.trim(), "aws configure set failed");
        }
    }
    Ok(profile_name(env))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::session::aws::CliOutput;

    struct Recorder(RefCell<Vec<Vec<String>>>);

    impl AwsCli for Recorder {
        fn run(&self, args: &[String], _env: &EnvMap) -> Result<CliOutput> {
            self.0.borrow_mut().push(args.to_vec());
            Ok(CliOutput {
                success: true,
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }

    fn template_config() -> EnvMap {
        [
            ("AWS_ACCESS_KEY_ID", ""),
            ("AWS_ACCOUNT_ID", ""),
            ("AWS_DEFAULT_OUTPUT", "json"),
            ("AWS_DEFAULT_REGION", "us-east-1"),
            ("AWS_SECRET_ACCESS_KEY", ""),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_configure_profile() {
        let recorder = Recorder(RefCell::new(Vec::new()));
        let name = configure_profile(&recorder, "profile", &template_config()).unwrap();
        assert_eq!(name, "awsenv-profile");

        let expected: Vec<Vec<&str>> = vec![
            vec!["configure", "set", "aws_access_key_id", "", "--profile", "awsenv-profile"],
            vec!["configure", "set", "aws_secret_access_key", "", "--profile", "awsenv-profile"],
            vec!["configure", "set", "output", "json", "--profile", "awsenv-profile"],
            vec!["configure", "set", "region", "us-east-1", "--profile", "awsenv-profile"],
        ];
        assert_eq!(*recorder.0.borrow(), expected);
    }

    #[test]
    fn test_absent_settings_skipped() {
        let config = EnvMap::from([("AWS_DEFAULT_REGION".to_string(), "eu-west-1".to_string())]);
        let commands = profile_commands("dev", &config);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0][2], "region");
        assert_eq!(commands[0][5], "awsenv-dev");
    }
}
