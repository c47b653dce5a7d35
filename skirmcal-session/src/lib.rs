//! In-memory credential session for SkirmCal clients.
//!
//! Owns the AES-256-GCM key handle derived at login and drops it on logout.
//! This is the explicit context object that replaces the original client's
//! global user store: call sites get encrypt/decrypt over the session, never
//! the key itself.
//!
//! PBKDF2 at production iteration counts pins a core for tens to hundreds of
//! milliseconds, so derivations run on `spawn_blocking` instead of the async
//! executor. Encrypt/decrypt of ordinary payloads is cheap and stays inline.

use serde::de::DeserializeOwned;
use serde::Serialize;
use skirmcal_crypto::{
    derive_encryption_key, derive_login_hash, CryptoError, EncryptionKey,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Errors surfaced by the credential session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No key is held — the user is not logged in (or already logged out).
    #[error("session is locked")]
    Locked,

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// The blocking derivation task panicked or was cancelled.
    #[error("background derivation task failed: {0}")]
    Task(String),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Holds the session's encryption key between login and logout.
///
/// Cheap to clone; clones share the same key slot. The key is dropped (and
/// zeroized) on [`CredentialSession::lock`], after which every encrypt or
/// decrypt fails with [`SessionError::Locked`].
#[derive(Clone, Default)]
pub struct CredentialSession {
    key: Arc<RwLock<Option<EncryptionKey>>>,
}

impl CredentialSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the login hash without unlocking the session.
    ///
    /// Used at registration, where the server only needs the hash to store
    /// and no client-side key is required yet.
    pub async fn login_hash(
        &self,
        password: &str,
        email: &str,
        iterations: u32,
    ) -> SessionResult<String> {
        let password = password.to_owned();
        let email = email.to_owned();
        let hash = run_derivation(move || derive_login_hash(&password, &email, iterations)).await?;
        Ok(hash)
    }

    /// Derives the login hash and the encryption key, storing the key.
    ///
    /// Returns the hash for the caller to submit to its auth collaborator;
    /// the key never leaves the session. The two derivations are independent
    /// recomputations from the same inputs.
    pub async fn unlock(
        &self,
        password: &str,
        email: &str,
        iterations: u32,
    ) -> SessionResult<String> {
        let owned_password = password.to_owned();
        let owned_email = email.to_owned();
        let (hash, key) = run_derivation(move || {
            let hash = derive_login_hash(&owned_password, &owned_email, iterations)?;
            let key = derive_encryption_key(&owned_password, &owned_email, iterations)?;
            Ok((hash, key))
        })
        .await?;

        *self.key.write().await = Some(key);
        debug!(email = %email, "credential session unlocked");
        Ok(hash)
    }

    /// Discards the key on logout.
    pub async fn lock(&self) {
        *self.key.write().await = None;
        debug!("credential session locked");
    }

    pub async fn is_unlocked(&self) -> bool {
        self.key.read().await.is_some()
    }

    /// Encrypts a payload under the session key.
    pub async fn encrypt<T: Serialize>(&self, payload: &T) -> SessionResult<String> {
        let guard = self.key.read().await;
        let key = guard.as_ref().ok_or(SessionError::Locked)?;
        Ok(skirmcal_crypto::encrypt(payload, key)?)
    }

    /// Decrypts an encoded payload under the session key.
    pub async fn decrypt<T: DeserializeOwned>(&self, encoded: &str) -> SessionResult<T> {
        let guard = self.key.read().await;
        let key = guard.as_ref().ok_or(SessionError::Locked)?;
        Ok(skirmcal_crypto::decrypt(encoded, key)?)
    }
}

async fn run_derivation<T, F>(f: F) -> SessionResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, CryptoError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| SessionError::Task(e.to_string()))?
        .map_err(SessionError::from)
}
