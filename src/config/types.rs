//! Configuration type definitions.

use knuffel::Decode;
use std::path::PathBuf;

use crate::environment::Template;
use crate::session::DEFAULT_AWS_CLI;

/// Editor used when neither the config nor `EDITOR` names one.
pub const DEFAULT_EDITOR: &str = "nano";

/// Environment variable naming the template file for new environments.
pub const TEMPLATE_ENV: &str = "DEVENV_AWSENV_TEMPLATE";

/// Environment variable that turns on managed AWS profiles when non-empty.
pub const MANAGE_PROFILES_ENV: &str = "DEVENV_AWSENV_MANAGE_PROFILES";

/// Expand tilde (~) prefix to the user's home directory.
/// Handles both "~" alone and "~/path/to/something" patterns.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Main configuration structure parsed from awsenv.kdl.
#[derive(Debug, Decode, Clone, Default)]
pub struct Config {
    #[knuffel(child)]
    pub defaults: Option<Defaults>,
}

/// Default settings for awsenv.
#[derive(Debug, Decode, Clone, Default)]
pub struct Defaults {
    #[knuffel(property)]
    pub editor: Option<String>,

    /// Path of the template for new environments.
    #[knuffel(property)]
    pub template: Option<String>,

    /// AWS CLI executable used for session tokens and profiles.
    #[knuffel(property(name = "aws_cli"))]
    pub aws_cli: Option<String>,

    #[knuffel(property(name = "manage_profiles"))]
    pub manage_profiles: Option<bool>,
}

/// Values given on the command line, taking precedence over everything else.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub editor: Option<String>,
    pub template: Option<PathBuf>,
}

/// Effective settings after layering flags, environment, file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub editor: String,
    pub template: Template,
    pub aws_cli: String,
    pub manage_profiles: bool,
}

impl Config {
    fn defaults(&self) -> Defaults {
        self.defaults.clone().unwrap_or_default()
    }

    /// Resolve settings against the process environment.
    pub fn settings(&self, overrides: &Overrides) -> Settings {
        self.settings_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve settings with `env` standing in for environment lookups.
    ///
    /// Precedence: command line, then environment, then config file, then
    /// built-in defaults. Empty environment values count as unset.
    pub fn settings_with(
        &self,
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Settings {
        let env = |key: &str| env(key).filter(|v| !v.is_empty());
        let file = self.defaults();

        let editor = overrides
            .editor
            .clone()
            .or_else(|| env("EDITOR"))
            .or(file.editor)
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

        let template = overrides
            .template
            .clone()
            .or_else(|| env(TEMPLATE_ENV).map(PathBuf::from))
            .or_else(|| file.template.as_deref().map(expand_tilde))
            .map(Template::File)
            .unwrap_or_default();

        let manage_profiles =
            env(MANAGE_PROFILES_ENV).is_some() || file.manage_profiles.unwrap_or(false);

        Settings {
            editor,
            template,
            aws_cli: file
                .aws_cli
                .unwrap_or_else(|| DEFAULT_AWS_CLI.to_string()),
            manage_profiles,
        }
    }
}
