//! Cryptographic primitives for secretfile.
//!
//! This module provides:
//! - AES-256-CFB encryption and decryption (`cipher`)
//! - Random password generation (`keygen`)

pub mod cipher;
pub mod keygen;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, generate_key, ...};
pub use cipher::{decrypt, encrypt, IV_SIZE, KEY_SIZE};
pub use keygen::{generate_key, generate_key_with};
