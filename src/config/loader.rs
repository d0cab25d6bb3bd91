//! Configuration file loading.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::error::{AwsenvError, Result};

impl Config {
    /// Get the explicit ~/.config/awsenv/awsenv.kdl path (XDG-style, cross-platform)
    fn xdg_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config/awsenv/awsenv.kdl"))
    }

    /// Get the list of config file search paths in priority order
    fn get_config_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. ./awsenv.kdl (project-local config wins)
        paths.push(PathBuf::from("awsenv.kdl"));

        // 2. ~/.config/awsenv/awsenv.kdl
        if let Some(xdg_path) = Self::xdg_config_path() {
            paths.push(xdg_path);
        }

        // 3. Platform-native config directory, unless it is the XDG path again
        if let Some(config_dir) = dirs::config_dir() {
            let native_path = config_dir.join("awsenv/awsenv.kdl");
            if Self::xdg_config_path().as_ref() != Some(&native_path) {
                paths.push(native_path);
            }
        }

        // 4. ~/.local/share/awsenv/awsenv.kdl
        if let Some(data_dir) = dirs::data_dir() {
            paths.push(data_dir.join("awsenv/awsenv.kdl"));
        }

        paths
    }

    /// Find existing config file by searching all standard locations
    pub fn find_existing_config() -> Option<PathBuf> {
        Self::get_config_search_paths()
            .into_iter()
            .find(|path| path.exists())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&path.to_string_lossy(), &content)
    }

    /// Parse KDL config text; `name` is used in error messages.
    pub fn parse(name: &str, content: &str) -> Result<Self> {
        knuffel::parse::<Config>(name, content).map_err(|e| AwsenvError::config(e.to_string()))
    }

    /// Load configuration from awsenv.kdl, searching multiple locations
    pub fn load() -> Result<Self> {
        match Self::find_existing_config() {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::load_from_path(&path)
            }
            None => Ok(Config::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_node() {
        let config = Config::parse(
            "awsenv.kdl",
            r#"defaults editor="vim" template="~/awsenv/template.json" aws_cli="aws" manage_profiles=true"#,
        )
        .unwrap();
        let defaults = config.defaults.unwrap();
        assert_eq!(defaults.editor.as_deref(), Some("vim"));
        assert_eq!(defaults.template.as_deref(), Some("~/awsenv/template.json"));
        assert_eq!(defaults.aws_cli.as_deref(), Some("aws"));
        assert_eq!(defaults.manage_profiles, Some(true));
    }

    #[test]
    fn test_parse_empty() {
        let config = Config::parse("awsenv.kdl", "").unwrap();
        assert!(config.defaults.is_none());
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let err = Config::parse("awsenv.kdl", "defaults editor=").unwrap_err();
        assert!(matches!(err, AwsenvError::Config(_)));
    }

    #[test]
    fn test_load_from_path() {
        let path = std::env::temp_dir().join(format!("awsenv_{}.kdl", uuid::Uuid::new_v4()));
        std::fs::write(&path, "defaults editor=\"ed\"\n").unwrap();
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.defaults.unwrap().editor.as_deref(), Some("ed"));
        std::fs::remove_file(&path).unwrap();
    }
}
