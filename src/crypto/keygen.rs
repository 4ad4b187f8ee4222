//! Vault password generation.
//!
//! Passwords are 32 characters drawn from `[a-zA-Z0-9]` so they can be
//! pasted into an environment variable or stored in the keyring as
//! plain text while still being exactly one AES-256 key long.  The
//! quality target is "fit for a local single-user secret", not
//! hardened key material.

use rand::distr::Alphanumeric;
use rand::Rng;

use super::cipher::KEY_SIZE;

/// Generate a fresh 32-character vault password from the process RNG.
///
/// Useful for setting up the env-var backend out-of-band:
/// `export MYVAULT_KEY=$(secretfile new-key)`.
pub fn generate_key() -> String {
    generate_key_with(&mut rand::rng())
}

/// Generate a vault password from a caller-supplied random source.
///
/// Tests pass a seeded RNG to get reproducible output.
pub fn generate_key_with<R: Rng>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(KEY_SIZE)
        .map(char::from)
        .collect()
}
