//! Environment-variable password source.
//!
//! For platforms without a usable keyring the user exports a 32-char
//! password (see `crypto::keygen::generate_key`) into a variable of
//! their choosing and points the vault at its name.

use zeroize::Zeroizing;

/// Read the password from the named environment variable.
///
/// An unset or empty variable is `None`; the two cases are not
/// distinguished.
pub fn get_password(name: &str) -> Option<Zeroizing<String>> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(Zeroizing::new(value)),
        _ => None,
    }
}
