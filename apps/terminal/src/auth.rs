//! # Access Gate
//!
//! One-shot operator authentication at startup.
//!
//! The gate prompts for a username and password, compares them
//! case-sensitively against the fixed [`Credentials`] from the store
//! configuration, and either lets the session begin or ends the program
//! with a failure exit status. There is no retry.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::console::Console;
use crate::error::{AppError, AppResult};

// =============================================================================
// Credentials
// =============================================================================

/// Fixed operator credentials.
///
/// Held in `StoreConfig` and passed in explicitly, so real credential
/// storage can replace this struct without touching the gate or the
/// session loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Case-sensitive comparison of both fields.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

// =============================================================================
// Access Gate
// =============================================================================

/// The startup credential check.
#[derive(Debug)]
pub struct AccessGate<'a> {
    credentials: &'a Credentials,
}

impl<'a> AccessGate<'a> {
    /// Creates a gate over the configured credentials.
    pub fn new(credentials: &'a Credentials) -> Self {
        AccessGate { credentials }
    }

    /// Runs the one-shot check.
    ///
    /// ## Errors
    /// `AppError::AuthenticationFailed` when either token is wrong or the
    /// input ends before both tokens arrive. The caller maps this to a
    /// non-zero exit status.
    pub fn authenticate<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> AppResult<()> {
        let username = console.prompt_token("Enter username: ")?;
        let password = console.prompt_token("Enter password: ")?;

        let verified = match (&username, &password) {
            (Some(user), Some(pass)) => self.credentials.verify(user, pass),
            _ => false,
        };

        if !verified {
            console.write_line("Invalid credentials. Exiting program.")?;
            warn!(username = username.as_deref().unwrap_or(""), "authentication failed");
            return Err(AppError::AuthenticationFailed);
        }

        info!(username = username.as_deref().unwrap_or(""), "operator authenticated");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn fixed_credentials() -> Credentials {
        Credentials {
            username: "admin".to_string(),
            password: "password".to_string(),
        }
    }

    fn gate_run(input: &str) -> (AppResult<()>, String) {
        let credentials = fixed_credentials();
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = AccessGate::new(&credentials).authenticate(&mut console);
        let output = String::from_utf8(console.into_writer()).unwrap();
        (result, output)
    }

    #[test]
    fn test_correct_credentials_pass() {
        let (result, output) = gate_run("admin password\n");
        assert!(result.is_ok());
        assert!(output.contains("Enter username: "));
        assert!(output.contains("Enter password: "));
        assert!(!output.contains("Invalid credentials"));
    }

    #[test]
    fn test_wrong_password_fails() {
        let (result, output) = gate_run("admin hunter2\n");
        assert!(matches!(result, Err(AppError::AuthenticationFailed)));
        assert!(output.contains("Invalid credentials. Exiting program."));
    }

    #[test]
    fn test_credentials_are_case_sensitive() {
        let (result, _) = gate_run("Admin password\n");
        assert!(matches!(result, Err(AppError::AuthenticationFailed)));

        let (result, _) = gate_run("admin PASSWORD\n");
        assert!(matches!(result, Err(AppError::AuthenticationFailed)));
    }

    #[test]
    fn test_eof_before_both_tokens_fails() {
        let (result, _) = gate_run("admin\n");
        assert!(matches!(result, Err(AppError::AuthenticationFailed)));

        let (result, _) = gate_run("");
        assert!(matches!(result, Err(AppError::AuthenticationFailed)));
    }
}
