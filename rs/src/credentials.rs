//! Credential store backed by `user.txt`
//!
//! Loaded once at open into an ordered in-memory list; `insert` is the only
//! mutator and writes through to the file immediately.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::codec::{self, StoreError};

/// Seeded administrator username
pub const DEFAULT_ADMIN_USER: &str = "admin";

/// Password the administrator account is seeded with
pub const DEFAULT_ADMIN_PASSWORD: &str = "adm1n";

/// One username/password pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

/// Ordered credential store
pub struct CredentialStore {
    path: PathBuf,
    entries: Vec<Credential>,
}

impl CredentialStore {
    /// Open the store, seeding the file with the admin account if missing.
    ///
    /// Malformed lines are skipped with a warning; they never fail the open.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            let seed = codec::encode_credential(&Credential {
                username: DEFAULT_ADMIN_USER.to_string(),
                password: DEFAULT_ADMIN_PASSWORD.to_string(),
            });
            fs::write(&path, seed).map_err(|e| StoreError::io(&path, e))?;
            info!(path = %path.display(), "seeded credential file with admin account");
        }

        let content = fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;
        let mut entries = Vec::new();
        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match codec::decode_credential(line) {
                Ok(credential) => entries.push(credential),
                Err(e) => warn!(line = number + 1, error = %e, "skipping malformed credential line"),
            }
        }

        debug!(path = %path.display(), count = entries.len(), "loaded credentials");
        Ok(Self { path, entries })
    }

    /// Whether a username is registered
    pub fn contains(&self, username: &str) -> bool {
        self.entries.iter().any(|c| c.username == username)
    }

    /// Check a username/password pair against the loaded entries
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.entries
            .iter()
            .any(|c| c.username == username && c.password == password)
    }

    /// Append a credential to the file and the in-memory list.
    ///
    /// Uniqueness is the caller's responsibility.
    pub fn insert(&mut self, credential: Credential) -> Result<(), StoreError> {
        crate::append_line(&self.path, &codec::encode_credential(&credential))?;
        debug!(username = %credential.username, "registered credential");
        self.entries.push(credential);
        Ok(())
    }

    /// Number of loaded credentials, the seed admin included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
