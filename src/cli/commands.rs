//! Command and subcommand definitions.

use clap::Subcommand;

/// Top-level commands available in awsenv.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Edit an environment
    Edit {
        /// The environment name to edit (default: the current environment)
        name: Option<String>,
    },
    /// Supply authentication values (e.g. for MFA) if necessary
    Auth {
        /// Force MFA even if credentials are not expired
        #[arg(long)]
        force: bool,
    },
    /// Make an environment the default
    Switch {
        /// The environment name to switch to
        name: String,
    },
    /// Show all available environments
    List,
    /// Delete an environment
    Delete {
        /// The environment name to delete
        name: String,
    },
    /// Copy an environment
    Copy {
        /// The source environment name
        source: String,
        /// The target environment name
        target: String,
    },
    /// Output shell commands to export the required envvars
    Export,
    /// Show how much time is left in the current MFA session (hh:mm)
    Mfaleft,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::parse_from(["awsenv", "auth", "--force"]);
        assert!(matches!(cli.command, Some(Commands::Auth { force: true })));

        let cli = Cli::parse_from(["awsenv", "copy", "dev", "staging"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Copy { ref source, ref target }) if source == "dev" && target == "staging"
        ));

        let cli = Cli::parse_from(["awsenv", "mfaleft"]);
        assert!(matches!(cli.command, Some(Commands::Mfaleft)));

        let cli = Cli::parse_from(["awsenv"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["awsenv", "edit", "prod", "--editor", "vim"]);
        assert_eq!(cli.config.editor.as_deref(), Some("vim"));
        assert!(matches!(cli.command, Some(Commands::Edit { name: Some(ref n) }) if n == "prod"));
    }
}
