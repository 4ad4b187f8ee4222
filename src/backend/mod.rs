//! Password backends — where the cipher key comes from.
//!
//! A vault resolves its key material through exactly one backend:
//! - `Keyring`: an entry in the OS credential store, created on first use.
//! - `EnvVar`: a named environment variable the user populates out-of-band.
//!
//! Both share the same resolve contract, and key material is never cached
//! between calls — rotating the keyring entry or the env var takes effect
//! on the next read/write without rebuilding the vault.

pub mod envvar;
pub mod keyring;

use zeroize::Zeroizing;

use crate::errors::{Result, VaultError};

/// The password source a vault is bound to for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyBackend {
    /// OS keyring entry under (service, user).
    Keyring { service: String, user: String },
    /// Named environment variable holding the raw key string.
    EnvVar { name: String },
}

impl KeyBackend {
    /// Look up the current key material.
    ///
    /// Three-way outcome: `Ok(Some(_))` means a secret was found,
    /// `Ok(None)` means the backend is reachable but holds no secret yet
    /// (keyring entry absent, env var unset or empty), and `Err` means
    /// the backend itself is unusable (keyring only).
    pub fn try_resolve(&self) -> Result<Option<Zeroizing<String>>> {
        match self {
            Self::Keyring { service, user } => keyring::get_password(service, user),
            Self::EnvVar { name } => Ok(envvar::get_password(name)),
        }
    }

    /// Look up the current key material, treating a missing secret as an
    /// error.  Used by every read/write; no length validation happens
    /// here — a wrong-sized value surfaces when the cipher is built.
    pub fn resolve(&self) -> Result<Zeroizing<String>> {
        self.try_resolve()?.ok_or_else(|| match self {
            Self::Keyring { service, user } => VaultError::KeyringEntryMissing {
                service: service.clone(),
                user: user.clone(),
            },
            Self::EnvVar { name } => VaultError::EnvVarMissing(name.clone()),
        })
    }
}
