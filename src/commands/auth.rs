//! Session command handlers - MFA authentication and remaining time.

use crate::environment::Workspace;
use crate::error::Result;
use crate::session::{AuthOutcome, Authenticator, AwsCli, CodePrompt, remaining};

/// Refresh the current environment's session if it expired (or `force`).
pub fn handle_auth(
    ws: &mut Workspace<'_>,
    cli: &dyn AwsCli,
    prompt: &dyn CodePrompt,
    force: bool,
) -> Result<AuthOutcome> {
    let outcome = Authenticator::new(cli, prompt).authenticate(
        &ws.records,
        &ws.current,
        &ws.configuration,
        &ws.derived,
        force,
    )?;

    if let AuthOutcome::Authenticated(session) = &outcome {
        ws.derived = session.clone();
        eprintln!("AWS MFA auth performed for {}", ws.current);
    }

    Ok(outcome)
}

/// Print the time left on the current session.
pub fn handle_mfaleft(ws: &Workspace<'_>) {
    println!("{}", remaining(&ws.derived));
}
