//! Integration tests for the secretfile crypto module.

use rand::rngs::StdRng;
use rand::SeedableRng;
use secretfile::crypto::{decrypt, encrypt, generate_key, generate_key_with, KEY_SIZE};
use secretfile::errors::VaultError;

/// IV used throughout these tests — any 16 bytes will do, the transform
/// takes it as an explicit parameter.
const IV: [u8; 16] = [7u8; 16];

const KEY: [u8; 32] = [0xABu8; 32];

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let plaintext = b"DATABASE_URL=postgres://localhost/mydb";

    let ciphertext = encrypt(&KEY, &IV, plaintext).expect("encrypt should succeed");
    let recovered = decrypt(&KEY, &IV, &ciphertext).expect("decrypt should succeed");

    assert_eq!(recovered, plaintext);
}

#[test]
fn empty_plaintext_roundtrip() {
    // Stream cipher: empty in, empty out.
    let ciphertext = encrypt(&KEY, &IV, b"").expect("encrypt");
    assert!(ciphertext.is_empty());

    let recovered = decrypt(&KEY, &IV, &ciphertext).expect("decrypt");
    assert!(recovered.is_empty());
}

#[test]
fn non_ascii_plaintext_roundtrip() {
    let plaintext = "héllo wörld — ☃ 秘密".as_bytes();

    let ciphertext = encrypt(&KEY, &IV, plaintext).expect("encrypt");
    let recovered = decrypt(&KEY, &IV, &ciphertext).expect("decrypt");

    assert_eq!(recovered, plaintext);
}

#[test]
fn ciphertext_length_equals_plaintext_length() {
    // CFB adds no padding, no tag, no embedded IV.
    for len in [1usize, 7, 16, 17, 100] {
        let plaintext = vec![0x42u8; len];
        let ciphertext = encrypt(&KEY, &IV, &plaintext).expect("encrypt");
        assert_eq!(ciphertext.len(), len);
    }
}

// ---------------------------------------------------------------------------
// Determinism (the fixed-IV weakness, stated as a property)
// ---------------------------------------------------------------------------

#[test]
fn encrypt_is_deterministic_for_same_key_and_iv() {
    let plaintext = b"SECRET=hello";

    let ct1 = encrypt(&KEY, &IV, plaintext).expect("encrypt 1");
    let ct2 = encrypt(&KEY, &IV, plaintext).expect("encrypt 2");

    // No randomness inside the transform: same (P, K, IV) always yields
    // the same ciphertext.  This is why sharing one IV across writes
    // leaks keystream reuse.
    assert_eq!(ct1, ct2);
}

#[test]
fn different_iv_different_ciphertext() {
    let other_iv = [8u8; 16];
    let plaintext = b"SECRET=hello";

    let ct1 = encrypt(&KEY, &IV, plaintext).expect("encrypt 1");
    let ct2 = encrypt(&KEY, &other_iv, plaintext).expect("encrypt 2");

    assert_ne!(ct1, ct2);
}

// ---------------------------------------------------------------------------
// Key-size sensitivity
// ---------------------------------------------------------------------------

#[test]
fn encrypt_rejects_wrong_key_size() {
    for len in [0usize, 10, 16, 31, 33] {
        let key = vec![0x11u8; len];
        let result = encrypt(&key, &IV, b"payload");
        assert!(
            matches!(result, Err(VaultError::CipherConstruction(_))),
            "key of {len} bytes must be rejected"
        );
    }
}

#[test]
fn decrypt_rejects_wrong_key_size() {
    let key = vec![0x11u8; 10];
    let result = decrypt(&key, &IV, b"whatever");
    assert!(matches!(result, Err(VaultError::CipherConstruction(_))));
}

#[test]
fn wrong_key_of_valid_size_decrypts_to_garbage_without_error() {
    // No integrity tag: decryption under the wrong (but correctly
    // sized) key succeeds and silently yields the wrong bytes.
    let wrong_key = [0xCDu8; 32];
    let plaintext = b"TOP_SECRET=42";

    let ciphertext = encrypt(&KEY, &IV, plaintext).expect("encrypt");
    let recovered = decrypt(&wrong_key, &IV, &ciphertext).expect("decrypt must not error");

    assert_ne!(recovered, plaintext);
}

// ---------------------------------------------------------------------------
// Password generation
// ---------------------------------------------------------------------------

#[test]
fn generated_key_has_cipher_key_length() {
    let key = generate_key();
    assert_eq!(key.len(), KEY_SIZE);
}

#[test]
fn generated_key_is_alphanumeric() {
    let key = generate_key();
    assert!(key.bytes().all(|b| b.is_ascii_alphanumeric()));
}

#[test]
fn successive_keys_differ() {
    assert_ne!(generate_key(), generate_key());
}

#[test]
fn seeded_rng_gives_reproducible_keys() {
    let key1 = generate_key_with(&mut StdRng::seed_from_u64(1234));
    let key2 = generate_key_with(&mut StdRng::seed_from_u64(1234));
    let key3 = generate_key_with(&mut StdRng::seed_from_u64(5678));

    assert_eq!(key1, key2);
    assert_ne!(key1, key3);
}

#[test]
fn generated_key_is_usable_as_cipher_key() {
    let key = generate_key();
    let ciphertext = encrypt(key.as_bytes(), &IV, b"hello").expect("encrypt");
    let recovered = decrypt(key.as_bytes(), &IV, &ciphertext).expect("decrypt");
    assert_eq!(recovered, b"hello");
}
