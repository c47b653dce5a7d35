//! Authenticated payload encryption (AES-256-GCM).
//!
//! Payloads are serialized to JSON, encrypted under a fresh random 96-bit
//! IV, and encoded as `<ciphertext_b64>|<iv_b64>`. The IV travels with the
//! ciphertext, so the encoded string is self-contained; the GCM tag is
//! appended to the ciphertext per the aead crate's convention.

use aes_gcm::aead::{Aead, AeadCore, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CryptoError, CryptoResult};
use crate::key::EncryptionKey;

/// IV length in bytes (96-bit, the AES-GCM standard nonce size).
pub const IV_SIZE: usize = 12;

const SEPARATOR: char = '|';

/// Encrypts a JSON-serializable payload under the session key.
///
/// A fresh random IV is generated per call — encrypting the same payload
/// twice produces different ciphertexts, both of which decrypt correctly.
pub fn encrypt<T: Serialize>(payload: &T, key: &EncryptionKey) -> CryptoResult<String> {
    let plaintext = serde_json::to_vec(payload)
        .map_err(|e| CryptoError::Encryption(format!("payload serialization failed: {e}")))?;

    let iv = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = key
        .cipher()
        .encrypt(&iv, plaintext.as_ref())
        .map_err(|e| CryptoError::Encryption(format!("AES-GCM encryption failed: {e}")))?;

    Ok(format!(
        "{}{}{}",
        STANDARD.encode(&ciphertext),
        SEPARATOR,
        STANDARD.encode(iv)
    ))
}

/// Decrypts an encoded `<ciphertext_b64>|<iv_b64>` string.
///
/// Tag verification failure (wrong key, corrupted or tampered ciphertext)
/// surfaces as [`CryptoError::Authentication`]; partial or altered plaintext
/// is never returned. Instantiate with `T = serde_json::Value` for untyped
/// payloads.
pub fn decrypt<T: DeserializeOwned>(encoded: &str, key: &EncryptionKey) -> CryptoResult<T> {
    let mut parts = encoded.split(SEPARATOR);
    let (ct_b64, iv_b64) = match (parts.next(), parts.next(), parts.next()) {
        (Some(ct), Some(iv), None) => (ct, iv),
        _ => {
            return Err(CryptoError::MalformedInput(
                "expected exactly one '|' separator".into(),
            ))
        }
    };

    let ciphertext = STANDARD
        .decode(ct_b64)
        .map_err(|e| CryptoError::MalformedInput(format!("invalid ciphertext base64: {e}")))?;
    let iv = STANDARD
        .decode(iv_b64)
        .map_err(|e| CryptoError::MalformedInput(format!("invalid IV base64: {e}")))?;
    if iv.len() != IV_SIZE {
        return Err(CryptoError::MalformedInput(format!(
            "invalid IV length: expected {IV_SIZE} bytes, got {}",
            iv.len()
        )));
    }

    let plaintext = key
        .cipher()
        .decrypt(Nonce::from_slice(&iv), ciphertext.as_ref())
        .map_err(|_| CryptoError::Authentication)?;

    serde_json::from_slice(&plaintext)
        .map_err(|e| CryptoError::Deserialization(e.to_string()))
}
