//! Error types for the crypto pipeline.

/// Errors surfaced by key derivation and payload encryption/decryption.
///
/// All of these are deterministic given fixed inputs — retrying with the
/// same inputs reproduces the same failure, so none are retried internally.
/// Messages never contain passwords, key bytes, or plaintext.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// Rejected before derivation: zero iteration count or empty password.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Encoded ciphertext is not `<ciphertext_b64>|<iv_b64>`.
    #[error("malformed ciphertext: {0}")]
    MalformedInput(String),

    /// AES-GCM tag verification failed: wrong key or tampered ciphertext.
    #[error("authentication failed (wrong key or tampered ciphertext)")]
    Authentication,

    /// Decrypted plaintext is not valid JSON.
    #[error("payload deserialization failed: {0}")]
    Deserialization(String),

    /// Payload could not be serialized (or the cipher itself failed).
    #[error("encryption failed: {0}")]
    Encryption(String),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
