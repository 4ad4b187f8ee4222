//! OS keyring integration.
//!
//! Stores and retrieves the vault password from the operating system's
//! secure credential store:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring / KDE Wallet)
//!
//! "No entry stored" is reported as `Ok(None)` so callers can mint a
//! fresh password; every other failure means the keyring itself is
//! unusable on this platform and the caller should fall back to the
//! env-var backend.

use zeroize::Zeroizing;

use crate::errors::{Result, VaultError};

/// Retrieve the vault password stored under (service, user).
///
/// Returns `None` if the keyring works but holds no entry yet.
pub fn get_password(service: &str, user: &str) -> Result<Option<Zeroizing<String>>> {
    let entry = keyring::Entry::new(service, user).map_err(|e| {
        VaultError::BackendUnavailable(format!("failed to create keyring entry: {e}"))
    })?;

    match entry.get_password() {
        Ok(password) => Ok(Some(Zeroizing::new(password))),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(VaultError::BackendUnavailable(format!(
            "failed to read from keyring: {e}"
        ))),
    }
}

/// Store a vault password under (service, user).
pub fn store_password(service: &str, user: &str, password: &str) -> Result<()> {
    let entry = keyring::Entry::new(service, user).map_err(|e| {
        VaultError::BackendUnavailable(format!("failed to create keyring entry: {e}"))
    })?;

    entry.set_password(password).map_err(|e| {
        VaultError::BackendUnavailable(format!("failed to store password in keyring: {e}"))
    })?;

    Ok(())
}
