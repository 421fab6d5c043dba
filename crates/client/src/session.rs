//! Session manager owning the credential lifecycle.
//!
//! The credential exists in exactly one of two states: absent
//! (unauthenticated) or present (authenticated). `login` stores and
//! persists it, `logout` clears both copies, and `restore` re-reads the
//! persisted slot once at startup. No validation happens here - an
//! expired-but-present token is indistinguishable from a valid one until a
//! downstream call fails.
//!
//! Persistence goes through an injected [`CredentialStore`] collaborator so
//! tests can substitute [`MemoryCredentialStore`] for the file-backed store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use shopfront_core::Credential;

/// Errors raised by a credential store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The underlying key-value storage failed.
    #[error("Credential store error: {0}")]
    Store(#[from] std::io::Error),
}

/// Single-slot key-value storage for the credential.
///
/// The analog of a browser's local-storage slot: `get`, `set`, `remove`
/// against one well-known key.
pub trait CredentialStore: Send {
    /// Read the persisted credential, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read.
    fn get(&self) -> Result<Option<Credential>, SessionError>;

    /// Persist the credential, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    fn set(&mut self, credential: &Credential) -> Result<(), SessionError>;

    /// Remove the persisted credential. Removing an empty slot is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be removed.
    fn remove(&mut self) -> Result<(), SessionError>;
}

/// In-memory credential store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: Option<Credential>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { slot: None }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Result<Option<Credential>, SessionError> {
        Ok(self.slot.clone())
    }

    fn set(&mut self, credential: &Credential) -> Result<(), SessionError> {
        self.slot = Some(credential.clone());
        Ok(())
    }

    fn remove(&mut self) -> Result<(), SessionError> {
        self.slot = None;
        Ok(())
    }
}

/// File-backed credential store.
///
/// Persists the raw token as the entire contents of a single file.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store persisting to the given path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the credential file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Result<Option<Credential>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(token) => Ok(Some(Credential::new(token))),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SessionError::Store(source)),
        }
    }

    fn set(&mut self, credential: &Credential) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, credential.expose())?;
        Ok(())
    }

    fn remove(&mut self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Store(source)),
        }
    }
}

/// Owner of the credential lifecycle.
pub struct SessionManager {
    store: Box<dyn CredentialStore>,
    credential: Option<Credential>,
}

impl SessionManager {
    /// Create a session manager over the given store. The in-memory state
    /// starts unauthenticated; call [`restore`](Self::restore) to pick up a
    /// previously persisted credential.
    #[must_use]
    pub fn new(store: Box<dyn CredentialStore>) -> Self {
        Self {
            store,
            credential: None,
        }
    }

    /// Read a previously persisted credential, if any. Purely local; no
    /// network call is made and no validation happens.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn restore(&mut self) -> Result<Option<Credential>, SessionError> {
        self.credential = self.store.get()?;
        Ok(self.credential.clone())
    }

    /// Accept a credential obtained from the authentication collaborator,
    /// keep it in memory, and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written. The in-memory
    /// credential is set regardless, so the current session stays usable.
    pub fn login(&mut self, credential: Credential) -> Result<(), SessionError> {
        self.credential = Some(credential);
        if let Some(credential) = &self.credential {
            self.store.set(credential)?;
        }
        Ok(())
    }

    /// Clear the in-memory credential and remove the persisted copy.
    /// Idempotent: logging out while unauthenticated is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted copy cannot be removed.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.credential = None;
        self.store.remove()
    }

    /// The current credential, if authenticated.
    #[must_use]
    pub const fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Whether a credential is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unauthenticated() {
        let session = SessionManager::new(Box::new(MemoryCredentialStore::new()));
        assert!(!session.is_authenticated());
        assert!(session.credential().is_none());
    }

    #[test]
    fn test_login_then_restore_yields_same_credential() {
        let mut session = SessionManager::new(Box::new(MemoryCredentialStore::new()));
        session
            .login(Credential::from("tok-1"))
            .expect("login should persist");

        // Restoring re-reads the persisted slot, as a reload would.
        let restored = session.restore().expect("restore should read the store");
        assert_eq!(restored, Some(Credential::from("tok-1")));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut session = SessionManager::new(Box::new(MemoryCredentialStore::new()));
        session
            .login(Credential::from("tok"))
            .expect("login should persist");
        session.logout().expect("logout should succeed");
        assert!(!session.is_authenticated());

        // Logging out again stays unauthenticated and does not error.
        session.logout().expect("repeated logout should succeed");
        assert!(!session.is_authenticated());
        assert_eq!(session.restore().expect("restore should succeed"), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir should be creatable");
        let path = dir.path().join("token");
        let mut store = FileCredentialStore::new(path.clone());

        assert!(store.get().expect("empty slot should read").is_none());
        store
            .set(&Credential::from("persisted-token"))
            .expect("set should write the file");
        assert_eq!(
            store.get().expect("slot should read"),
            Some(Credential::from("persisted-token"))
        );

        store.remove().expect("remove should delete the file");
        assert!(!path.exists());
        assert!(store.get().expect("empty slot should read").is_none());
    }

    #[test]
    fn test_file_store_remove_missing_is_ok() {
        let dir = tempfile::tempdir().expect("tempdir should be creatable");
        let mut store = FileCredentialStore::new(dir.path().join("missing"));
        store.remove().expect("removing a missing slot should be ok");
    }

    #[test]
    fn test_logout_then_restore_is_unauthenticated() {
        let dir = tempfile::tempdir().expect("tempdir should be creatable");
        let path = dir.path().join("token");

        let mut session = SessionManager::new(Box::new(FileCredentialStore::new(path.clone())));
        session
            .login(Credential::from("tok"))
            .expect("login should persist");
        session.logout().expect("logout should succeed");

        // Fresh startup against the same file.
        let mut fresh = SessionManager::new(Box::new(FileCredentialStore::new(path)));
        assert_eq!(fresh.restore().expect("restore should succeed"), None);
        assert!(!fresh.is_authenticated());
    }

    #[test]
    fn test_file_backed_login_survives_restart() {
        let dir = tempfile::tempdir().expect("tempdir should be creatable");
        let path = dir.path().join("token");

        let mut session = SessionManager::new(Box::new(FileCredentialStore::new(path.clone())));
        session
            .login(Credential::from("reload-me"))
            .expect("login should persist");

        let mut fresh = SessionManager::new(Box::new(FileCredentialStore::new(path)));
        assert_eq!(
            fresh.restore().expect("restore should succeed"),
            Some(Credential::from("reload-me"))
        );
    }
}
