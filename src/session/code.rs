//! One-time MFA codes: generated from a shared secret or typed by the operator.

use totp_rs::{Algorithm, Secret, TOTP};

use crate::error::{AwsenvError, Result};

/// Asks the operator for an MFA code.
pub trait CodePrompt {
    /// One line of input for `env`. May be empty; callers re-prompt.
    fn read_code(&self, env: &str) -> Result<String>;

    /// Called when the code just entered for `env` was refused.
    fn code_rejected(&self, env: &str) {
        eprintln!("MFA code for {} was rejected, try again", env);
    }
}

/// Prompts on the controlling terminal without echoing the code.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl CodePrompt for TerminalPrompt {
    fn read_code(&self, env: &str) -> Result<String> {
        Ok(rpassword::prompt_password(format!(
            "Input AWS MFA code for {}: ",
            env
        ))?)
    }
}

/// Prompt until a non-blank code is entered.
pub fn prompt_code(prompt: &dyn CodePrompt, env: &str) -> Result<String> {
    loop {
        let code = prompt.read_code(env)?;
        let code = code.trim();
        if !code.is_empty() {
            return Ok(code.to_string());
        }
    }
}

/// Current 6-digit TOTP code for a base32 shared secret.
pub fn totp_code(secret: &str) -> Result<String> {
    let normalized: String = secret
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '=')
        .collect::<String>()
        .to_uppercase();
    let bytes = Secret::Encoded(normalized)
        .to_bytes()
        .map_err(|e| AwsenvError::config(format!("invalid MFA secret: {:?}", e)))?;
    // Common 16-character secrets are 80 bits, below the RFC 6238 minimum
    // that `TOTP::new` enforces.
    let totp = TOTP::new_unchecked(Algorithm::SHA1, 6, 1, 30, bytes);
    totp.generate_current()
        .map_err(|e| AwsenvError::Other(format!("system clock error: {}", e)))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    const SECRET: &str = "E2OVN6XH7LXUR22ZQ64MAEM2NQ22JEKILF3QUV7W7S6JHYL5BZVAFZNDDLSRW3AZ";

    struct Answers(RefCell<Vec<&'static str>>);

    impl CodePrompt for Answers {
        fn read_code(&self, _env: &str) -> Result<String> {
            Ok(self.0.borrow_mut().remove(0).to_string())
        }
    }

    #[test]
    fn test_totp_code_is_six_digits() {
        let code = totp_code(SECRET).unwrap();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_totp_code_tolerates_formatting() {
        let spaced = SECRET.to_lowercase();
        assert_eq!(totp_code(&spaced).unwrap().len(), 6);
    }

    #[test]
    fn test_totp_accepts_80_bit_secret() {
        let code = totp_code("JBSWY3DPEHPK3PXP").unwrap();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));

        assert_eq!(totp_code("jbsw y3dp ehpk 3pxp").unwrap().len(), 6);
    }

    #[test]
    fn test_totp_rejects_garbage() {
        assert!(matches!(totp_code("!!!"), Err(AwsenvError::Config(_))));
    }

    #[test]
    fn test_prompt_code_reprompts_on_blank() {
        let answers = Answers(RefCell::new(vec!["", "   ", " 12345\n"]));
        assert_eq!(prompt_code(&answers, "dev").unwrap(), "12345");
        assert!(answers.0.borrow().is_empty());
    }
}
