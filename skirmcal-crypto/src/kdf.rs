//! Password-based key derivation (PBKDF2-HMAC-SHA256).
//!
//! Two independent derivations share the `(password, email, iterations)`
//! inputs:
//!
//! - master key / encryption key: salt = raw UTF-8 bytes of the email
//! - login hash: a second PBKDF2 pass over the password with the
//!   **master-key bytes** as salt, base64-encoded
//!
//! The email is used exactly as given — no case folding or trimming — so a
//! different spelling at login than at registration derives different keys.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::error::{CryptoError, CryptoResult};
use crate::key::{EncryptionKey, MasterKey, KEY_SIZE};

/// Default PBKDF2 iteration count for accounts without a stored override.
///
/// The per-account count is fetched by the caller and passed in; this core
/// never chooses or persists it.
pub const DEFAULT_ITERATIONS: u32 = 600_000;

fn check_params(password: &str, iterations: u32) -> CryptoResult<()> {
    if password.is_empty() {
        return Err(CryptoError::InvalidParameter(
            "password must not be empty".into(),
        ));
    }
    if iterations == 0 {
        return Err(CryptoError::InvalidParameter(
            "iteration count must be positive".into(),
        ));
    }
    Ok(())
}

fn pbkdf2_sha256(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_SIZE] {
    let mut out = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut out);
    out
}

/// Derives the 256-bit master key from `(password, email, iterations)`.
///
/// Intermediate step only: the result salts [`derive_login_hash`] and is
/// never used for encryption directly.
pub fn derive_master_key(
    password: &str,
    email: &str,
    iterations: u32,
) -> CryptoResult<MasterKey> {
    check_params(password, iterations)?;
    Ok(MasterKey::from_bytes(pbkdf2_sha256(
        password,
        email.as_bytes(),
        iterations,
    )))
}

/// Derives the session's AES-256-GCM key handle.
///
/// Same derivation as [`derive_master_key`], imported as an opaque handle
/// usable only through [`crate::encrypt`] / [`crate::decrypt`]. Each call
/// recomputes from scratch; nothing is cached.
pub fn derive_encryption_key(
    password: &str,
    email: &str,
    iterations: u32,
) -> CryptoResult<EncryptionKey> {
    check_params(password, iterations)?;
    Ok(EncryptionKey::from_bytes(pbkdf2_sha256(
        password,
        email.as_bytes(),
        iterations,
    )))
}

/// Derives the base64 login hash sent to the server.
///
/// Second-stage PBKDF2 over the password with the master-key bytes as salt
/// and the same iteration count. Keying the second stage by the master key
/// means the transmitted value neither equals the encryption key nor allows
/// recovering it.
pub fn derive_login_hash(
    password: &str,
    email: &str,
    iterations: u32,
) -> CryptoResult<String> {
    let master = derive_master_key(password, email, iterations)?;
    let hash = pbkdf2_sha256(password, master.as_bytes(), iterations);
    Ok(STANDARD.encode(hash))
}
