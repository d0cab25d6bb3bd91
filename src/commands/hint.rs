//! Operator hints printed after state-changing commands.

use crate::error::AwsenvError;

/// Instructions for loading changed credentials into the shell.
///
/// `env` is set when the changed environment is not the current one, in
/// which case switching to it comes first.
pub fn activation_hint(env: Option<&str>) -> String {
    let prefix = match env {
        Some(env) => format!("  awsenv switch {} && ", env),
        None => "  ".to_string(),
    };
    format!(
        "To activate your changes, run:\n\n{}awsenv auth && eval \"$(awsenv export)\"\n\nOr exit and reenter the devenv shell\n",
        prefix
    )
}

pub(crate) fn show_activation_hint(env: Option<&str>) {
    eprint!("{}", activation_hint(env));
}

/// Extra advice for a failed command, checking the keychain only when the
/// failure came from the credential store.
pub fn store_failure_hint(
    err: &AwsenvError,
    keychain_available: impl FnOnce() -> bool,
) -> Option<&'static str> {
    match err {
        AwsenvError::StoreUnavailable(_) if !keychain_available() => {
            Some("The OS keychain is not reachable; unlock it or check access and retry")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_current_env() {
        let hint = activation_hint(None);
        assert!(hint.starts_with("To activate"));
        assert!(hint.contains("\n  awsenv auth && eval \"$(awsenv export)\"\n"));
    }

    #[test]
    fn test_store_hint_checks_keychain_only_for_store_errors() {
        let err = AwsenvError::unknown_environment("nope");
        let hint = store_failure_hint(&err, || panic!("keychain checked for a registry error"));
        assert!(hint.is_none());
    }

    #[test]
    fn test_store_hint_when_keychain_is_down() {
        let err = AwsenvError::StoreUnavailable("locked".into());
        assert!(store_failure_hint(&err, || false).is_some());
        assert!(store_failure_hint(&err, || true).is_none());
    }

    #[test]
    fn test_hint_for_other_env() {
        let hint = activation_hint(Some("prod"));
        assert!(hint.contains("  awsenv switch prod && awsenv auth"));
    }
}
