//! Login and session identity
//!
//! One successful login establishes the session for the rest of the process;
//! there is no logout and no lockout. The controller re-prompts on failure.

use recordstore::{CredentialStore, DEFAULT_ADMIN_USER};
use thiserror::Error;
use tracing::info;

/// What the active user is allowed to see and do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The seeded `admin` account
    Admin,
    /// Everyone else
    Standard,
}

/// Authenticated identity for the current process run
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("incorrect username or password")]
    InvalidCredentials,
}

/// Validate a username/password pair and establish the session
pub fn login(credentials: &CredentialStore, username: &str, password: &str) -> Result<Session, AuthError> {
    if !credentials.verify(username, password) {
        return Err(AuthError::InvalidCredentials);
    }

    let role = if username == DEFAULT_ADMIN_USER {
        Role::Admin
    } else {
        Role::Standard
    };
    info!(username, ?role, "login succeeded");

    Ok(Session {
        username: username.to_string(),
        role,
    })
}
