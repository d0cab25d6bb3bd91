//! CLI argument parsing structures.

use clap::{Args, Parser};
use std::path::PathBuf;

use super::commands::Commands;
use crate::config::Overrides;

/// Main CLI structure for awsenv.
#[derive(Parser, Debug)]
#[command(name = "awsenv")]
#[command(about = "Manage AWS credential environments and MFA sessions", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// No subcommand shows the current environment
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global configuration arguments available to all commands.
#[derive(Debug, Default, Args)]
pub struct ConfigArgs {
    /// Editor to use for editing environments
    #[arg(long, global = true)]
    pub editor: Option<String>,

    /// Template file used to seed new environments
    #[arg(long, global = true)]
    pub template: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            editor: self.editor.clone(),
            template: self.template.clone(),
        }
    }
}
