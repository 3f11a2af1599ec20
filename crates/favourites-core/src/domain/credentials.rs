//! Login / Signup Credentials

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("Please input your username!")]
    MissingUsername,
    #[error("Please input your password!")]
    MissingPassword,
}

/// Username and password, both non-blank
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, CredentialsError> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() {
            return Err(CredentialsError::MissingUsername);
        }
        if password.trim().is_empty() {
            return Err(CredentialsError::MissingPassword);
        }
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
