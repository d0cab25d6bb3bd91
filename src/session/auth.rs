//! MFA authentication state machine.
//!
//! One call to [`Authenticator::authenticate`] walks these states:
//!
//! - `NeedCheck`: an unexpired session is returned as-is unless forced.
//! - `NeedDevice`: without an MFA device there is nothing to do.
//! - `NeedCode`: a TOTP code from the shared secret, or one typed in.
//! - `Exchange`: `sts get-session-token` through the AWS CLI.
//! - `Evaluate`: success stores the new session; a rejected typed code
//!   goes back to `NeedCode`; a rejected generated code is fatal, since
//!   asking again would submit the same code.

use tracing::debug;

use super::aws::{AwsCli, CliOutput, SessionCredentials, session_token_args};
use super::code::{CodePrompt, prompt_code, totp_code};
use super::expiry::is_expired;
use crate::environment::{
    ACCOUNT_ID_KEY, Configuration, EnvMap, MFA_DEVICE_KEY, MFA_SECRET_KEY, RecordStore,
    missing_required_keys,
};
use crate::error::{AwsenvError, Result};

/// How an authentication attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The existing session is still valid and was left alone.
    StillValid(EnvMap),
    /// A new session was obtained and stored.
    Authenticated(EnvMap),
    /// No MFA device is configured.
    NotApplicable,
}

enum State {
    NeedCheck,
    NeedDevice,
    NeedCode {
        device: String,
    },
    Exchange {
        device: String,
        code: String,
        generated: bool,
    },
    Evaluate {
        device: String,
        output: CliOutput,
        generated: bool,
    },
    Done(AuthOutcome),
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::NeedCheck => "need-check",
            State::NeedDevice => "need-device",
            State::NeedCode { .. } => "need-code",
            State::Exchange { .. } => "exchange",
            State::Evaluate { .. } => "evaluate",
            State::Done(_) => "done",
        }
    }
}

pub struct Authenticator<'a> {
    cli: &'a dyn AwsCli,
    prompt: &'a dyn CodePrompt,
}

impl<'a> Authenticator<'a> {
    pub fn new(cli: &'a dyn AwsCli, prompt: &'a dyn CodePrompt) -> Self {
        Self { cli, prompt }
    }

    /// Make sure `env` has a live session, running the MFA exchange if needed.
    pub fn authenticate(
        &self,
        records: &RecordStore<'_>,
        env: &str,
        config: &Configuration,
        derived: &EnvMap,
        force: bool,
    ) -> Result<AuthOutcome> {
        let mut state = State::NeedCheck;
        loop {
            debug!(env, state = state.name(), "auth step");
            state = match state {
                State::NeedCheck => {
                    if force || is_expired(derived) {
                        State::NeedDevice
                    } else {
                        State::Done(AuthOutcome::StillValid(derived.clone()))
                    }
                }
                State::NeedDevice => match (config.get(MFA_DEVICE_KEY), config.parsed()) {
                    (Some(device), Some(map)) => {
                        let missing = missing_required_keys(map);
                        if !missing.is_empty() {
                            return Err(AwsenvError::MissingRequiredKeys(missing));
                        }
                        State::NeedCode {
                            device: device.to_string(),
                        }
                    }
                    _ => State::Done(AuthOutcome::NotApplicable),
                },
                State::NeedCode { device } => match config.get(MFA_SECRET_KEY) {
                    Some(secret) => State::Exchange {
                        device,
                        code: totp_code(secret)?,
                        generated: true,
                    },
                    None => State::Exchange {
                        device,
                        code: prompt_code(self.prompt, env)?,
                        generated: false,
                    },
                },
                State::Exchange {
                    device,
                    code,
                    generated,
                } => {
                    let account_id = config.get(ACCOUNT_ID_KEY).unwrap_or_default();
                    let args = session_token_args(account_id, &device, &code);
                    let child_env = config.parsed().cloned().unwrap_or_default();
                    let output = self.cli.run(&args, &child_env)?;
                    State::Evaluate {
                        device,
                        output,
                        generated,
                    }
                }
                State::Evaluate {
                    device,
                    output,
                    generated,
                } => {
                    if !output.stderr.is_empty() {
                        eprint!("{}", output.stderr);
                    }
                    if output.success {
                        let session =
                            SessionCredentials::from_response(&output.stdout)?.into_derived();
                        records.replace_derived(env, &session)?;
                        State::Done(AuthOutcome::Authenticated(session))
                    } else if generated {
                        return Err(AwsenvError::AuthenticationRejected(
                            output.stderr.trim().to_string(),
                        ));
                    } else {
                        self.prompt.code_rejected(env);
                        State::NeedCode { device }
                    }
                }
                State::Done(outcome) => return Ok(outcome),
            };
        }
    }
}
