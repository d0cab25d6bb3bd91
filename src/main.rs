use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use awsenv::cli::{Cli, Commands};
use awsenv::commands::{
    handle_auth, handle_copy, handle_default, handle_delete, handle_edit, handle_export,
    handle_list, handle_mfaleft, handle_switch, store_failure_hint,
};
use awsenv::config::Config;
use awsenv::environment::Workspace;
use awsenv::error::Result;
use awsenv::session::{AwsCli, SubprocessAwsCli, TerminalPrompt};
use awsenv::store::KeyringStore;
use awsenv::utils::ExternalEditor;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // RUST_LOG controls the level (e.g. RUST_LOG=awsenv=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let store = KeyringStore::new();

    match run(cli, &store) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = store_failure_hint(&e, || store.available()) {
                eprintln!("{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, store: &KeyringStore) -> Result<()> {
    let config = Config::load()?;
    let settings = config.settings(&cli.config.overrides());
    debug!(
        editor = %settings.editor,
        aws_cli = %settings.aws_cli,
        manage_profiles = settings.manage_profiles,
        "resolved settings"
    );

    let mut ws = Workspace::open(store, &settings.template)?;
    let aws = SubprocessAwsCli::new(&settings.aws_cli);

    let Some(command) = cli.command else {
        handle_default(&ws);
        return Ok(());
    };

    match command {
        Commands::Edit { name } => {
            let editor = ExternalEditor::new(&settings.editor);
            handle_edit(&mut ws, &editor, name)?;
        }
        Commands::Auth { force } => {
            handle_auth(&mut ws, &aws, &TerminalPrompt, force)?;
        }
        Commands::Switch { name } => handle_switch(&mut ws, &name)?,
        Commands::List => handle_list(&ws.registry),
        Commands::Delete { name } => handle_delete(&mut ws, &name)?,
        Commands::Copy { source, target } => handle_copy(&mut ws, &source, &target)?,
        Commands::Export => {
            let profile_cli = settings.manage_profiles.then_some(&aws as &dyn AwsCli);
            handle_export(&ws, profile_cli)?;
        }
        Commands::Mfaleft => handle_mfaleft(&ws),
    }

    Ok(())
}
