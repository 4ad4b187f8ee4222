use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in secretfile.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Key backend errors ---
    #[error("Keyring unavailable: {0}")]
    BackendUnavailable(String),

    #[error("No secret found in the keyring for '{service}/{user}'")]
    KeyringEntryMissing { service: String, user: String },

    #[error("No password found in {0} env var")]
    EnvVarMissing(String),

    // --- Crypto errors ---
    #[error("Invalid key material: {0}")]
    CipherConstruction(String),

    #[error("Decrypted contents are not valid UTF-8")]
    InvalidUtf8,

    // --- File errors ---
    #[error("Vault file not found at {0}")]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Encoding errors ---
    #[error("Vault file is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Convenience type alias for secretfile results.
pub type Result<T> = std::result::Result<T, VaultError>;
