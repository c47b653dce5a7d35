//! Key material types.
//!
//! `MasterKey` is the intermediate PBKDF2 output; it exists only long enough
//! to salt the login-hash derivation. `EncryptionKey` is the opaque handle
//! call sites use for encrypt/decrypt — it has no raw-byte accessor and no
//! serde impls, so it cannot end up in logs or storage by accident. Both
//! zeroize on drop.

use aes_gcm::aead::KeyInit;
use aes_gcm::{Aes256Gcm, Key};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key length in bytes (256-bit, AES-256).
pub const KEY_SIZE: usize = 32;

/// Intermediate secret derived directly from the password.
///
/// Used only as salt material for the second-stage login-hash derivation,
/// never for encryption and never transmitted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MasterKey {
    bytes: [u8; KEY_SIZE],
}

impl MasterKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterKey(..)")
    }
}

/// Opaque AES-256-GCM key handle for the session.
///
/// Owned by whoever holds the login session; dropped (and zeroized) on
/// logout. The only operations over it are [`crate::encrypt`] and
/// [`crate::decrypt`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EncryptionKey {
    bytes: [u8; KEY_SIZE],
}

impl EncryptionKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    pub(crate) fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&self.bytes))
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncryptionKey(..)")
    }
}
