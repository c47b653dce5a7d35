//! Credential derivation and payload encryption for SkirmCal.
//!
//! Implements the client-side pipeline that turns a user's master password
//! into the two values the rest of the app needs:
//!
//! 1. **Login hash**: a second-stage PBKDF2 output, base64-encoded, sent to
//!    the server at registration and on every login. The server stores and
//!    compares this value verbatim, so it must be byte-for-byte reproducible
//!    for fixed inputs.
//! 2. **Encryption key**: an opaque AES-256-GCM handle held in memory for
//!    the session and used to encrypt/decrypt JSON payloads client-side.
//!    It is never transmitted.
//!
//! Both are deterministic functions of `(password, email, iterations)`: the
//! email is the PBKDF2 salt (no normalization — the same string must be used
//! at registration and at login) and the iteration count is fetched per
//! account so the hashing cost can be raised over time. The login hash is
//! keyed by the intermediate master key, not the email, so the value on the
//! wire reveals nothing about the encryption key.
//!
//! Everything here is a pure synchronous computation with no shared state.
//! Derivation at production iteration counts is CPU-bound; async callers
//! should run it on a blocking pool (see `skirmcal-session`).

mod cipher;
mod error;
mod kdf;
mod key;

pub use cipher::{decrypt, encrypt, IV_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use kdf::{
    derive_encryption_key, derive_login_hash, derive_master_key, DEFAULT_ITERATIONS,
};
pub use key::{EncryptionKey, MasterKey, KEY_SIZE};
