//! Export command handler - shell variable assignments for the current environment.

use crate::environment::{EnvMap, Workspace};
use crate::error::Result;
use crate::session::{AwsCli, configure_profile};
use crate::utils::export_lines;

/// Variable name carrying the current environment's name.
pub const ENV_NAME_VAR: &str = "DEVENV_AWSENV";

/// Export lines for the current environment.
///
/// With `profile_cli` set, the managed AWS profile is written first and
/// `AWS_PROFILE` points at it.
pub fn build_export(ws: &Workspace<'_>, profile_cli: Option<&dyn AwsCli>) -> Result<Vec<String>> {
    let mut vars = EnvMap::new();
    vars.insert(ENV_NAME_VAR.to_string(), ws.current.clone());

    if let Some(cli) = profile_cli {
        let config = ws.configuration.parsed().cloned().unwrap_or_default();
        let profile = configure_profile(cli, &ws.current, &config)?;
        vars.insert("AWS_PROFILE".to_string(), profile);
    }

    vars.extend(ws.merged());
    Ok(export_lines(&vars))
}

/// Handle the export command - print the lines for `eval`
pub fn handle_export(ws: &Workspace<'_>, profile_cli: Option<&dyn AwsCli>) -> Result<()> {
    for line in build_export(ws, profile_cli)? {
        println!("{}", line);
    }
    Ok(())
}
