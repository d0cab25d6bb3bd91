//! MFA-backed sessions: obtaining them, and telling when they run out.

mod auth;
mod aws;
mod code;
mod expiry;
mod profile;

pub use auth::{AuthOutcome, Authenticator};
pub use aws::{
    AwsCli, CliOutput, DEFAULT_AWS_CLI, SessionCredentials, SubprocessAwsCli, session_token_args,
};
pub use code::{CodePrompt, TerminalPrompt, prompt_code, totp_code};
pub use expiry::{
    EXPIRES_KEY, NO_SESSION, expiration, is_expired, is_expired_at, remaining, remaining_at,
};
pub use profile::{configure_profile, profile_commands, profile_name};
