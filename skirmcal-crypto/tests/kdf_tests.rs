use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use pretty_assertions::assert_eq;
use skirmcal_crypto::{
    derive_login_hash, derive_master_key, CryptoError, DEFAULT_ITERATIONS,
};

// Cheap count for everything except the end-to-end scenario
const ITERS: u32 = 1_000;

#[test]
fn login_hash_is_deterministic() {
    let a = derive_login_hash("CorrectHorse123", "user@example.com", ITERS).unwrap();
    let b = derive_login_hash("CorrectHorse123", "user@example.com", ITERS).unwrap();
    assert_eq!(a, b);
}

#[test]
fn login_hash_encodes_32_bytes() {
    let hash = derive_login_hash("CorrectHorse123", "user@example.com", ITERS).unwrap();
    assert_eq!(hash.len(), 44);
    assert_eq!(STANDARD.decode(&hash).unwrap().len(), 32);
}

#[test]
fn changing_password_changes_hash() {
    let a = derive_login_hash("CorrectHorse123", "user@example.com", ITERS).unwrap();
    let b = derive_login_hash("CorrectHorse124", "user@example.com", ITERS).unwrap();
    assert_ne!(a, b);
}

#[test]
fn changing_email_changes_hash() {
    let a = derive_login_hash("CorrectHorse123", "user@example.com", ITERS).unwrap();
    let b = derive_login_hash("CorrectHorse123", "other@example.com", ITERS).unwrap();
    assert_ne!(a, b);
}

#[test]
fn changing_iterations_changes_hash() {
    let a = derive_login_hash("CorrectHorse123", "user@example.com", ITERS).unwrap();
    let b = derive_login_hash("CorrectHorse123", "user@example.com", ITERS + 1).unwrap();
    assert_ne!(a, b);
}

#[test]
fn email_is_not_normalized() {
    // Case and whitespace are salt-significant
    let a = derive_login_hash("CorrectHorse123", "user@example.com", ITERS).unwrap();
    let b = derive_login_hash("CorrectHorse123", "User@Example.com", ITERS).unwrap();
    let c = derive_login_hash("CorrectHorse123", " user@example.com", ITERS).unwrap();
    assert_ne!(a, b);
    assert_ne!(a, c);
}

#[test]
fn login_hash_is_not_the_derived_key() {
    // The encryption key shares the master key's derivation, so comparing
    // against the master-key bytes covers both: the hash sent over the wire
    // must be an independent second-stage value.
    let master = derive_master_key("CorrectHorse123", "user@example.com", ITERS).unwrap();
    let hash = derive_login_hash("CorrectHorse123", "user@example.com", ITERS).unwrap();
    assert_ne!(hash, STANDARD.encode(master.as_bytes()));
}

#[test]
fn zero_iterations_rejected_before_derivation() {
    for result in [
        derive_master_key("pw", "a@b.c", 0).map(|_| ()),
        derive_login_hash("pw", "a@b.c", 0).map(|_| ()),
    ] {
        assert!(matches!(result.unwrap_err(), CryptoError::InvalidParameter(_)));
    }
}

#[test]
fn empty_password_rejected() {
    let err = derive_login_hash("", "a@b.c", ITERS).unwrap_err();
    assert!(matches!(err, CryptoError::InvalidParameter(_)));
}

// Full-cost scenario: registration-time and login-time derivations must
// agree exactly, and an upgraded iteration count must invalidate the hash.
#[test]
fn end_to_end_at_default_iterations() {
    let registered =
        derive_login_hash("CorrectHorse123", "user@example.com", DEFAULT_ITERATIONS).unwrap();
    assert_eq!(registered.len(), 44);

    let login =
        derive_login_hash("CorrectHorse123", "user@example.com", DEFAULT_ITERATIONS).unwrap();
    assert_eq!(registered, login);

    let upgraded =
        derive_login_hash("CorrectHorse123", "user@example.com", DEFAULT_ITERATIONS + 1).unwrap();
    assert_ne!(registered, upgraded);
}
