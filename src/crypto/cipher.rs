//! AES-256-CFB encryption.
//!
//! The key material is used verbatim as the AES-256 key — there is no
//! derivation step — and the IV is an explicit parameter so the one
//! place that decides it (the vault layer, which passes a single fixed
//! constant for every file) is visible at the call site.
//!
//! This is a confidentiality-only scheme: CFB produces ciphertext of
//! exactly the plaintext's length, with no authentication tag.
//! Decrypting tampered bytes, or decrypting under the wrong (but
//! correctly sized) key, succeeds and yields garbage.

use aes::Aes256;
use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};
use cfb_mode::{Decryptor, Encryptor};

use crate::errors::{Result, VaultError};

/// Size of the AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of the CFB initialization vector in bytes (one AES block).
pub const IV_SIZE: usize = 16;

type Aes256CfbEnc = Encryptor<Aes256>;
type Aes256CfbDec = Decryptor<Aes256>;

/// Encrypt `plaintext` with a 32-byte `key` and the given IV.
///
/// The output has exactly the plaintext's length.  Fails with
/// `CipherConstruction` if the key is not exactly [`KEY_SIZE`] bytes.
pub fn encrypt(key: &[u8], iv: &[u8; IV_SIZE], plaintext: &[u8]) -> Result<Vec<u8>> {
    let enc = Aes256CfbEnc::new_from_slices(key, iv).map_err(|e| {
        VaultError::CipherConstruction(format!("key must be {KEY_SIZE} bytes: {e}"))
    })?;

    let mut buf = plaintext.to_vec();
    enc.encrypt(&mut buf);
    Ok(buf)
}

/// Decrypt data that was produced by `encrypt` under the same key and IV.
pub fn decrypt(key: &[u8], iv: &[u8; IV_SIZE], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let dec = Aes256CfbDec::new_from_slices(key, iv).map_err(|e| {
        VaultError::CipherConstruction(format!("key must be {KEY_SIZE} bytes: {e}"))
    })?;

    let mut buf = ciphertext.to_vec();
    dec.decrypt(&mut buf);
    Ok(buf)
}
