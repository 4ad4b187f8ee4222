//! Vault module — one encrypted file, one password backend.
//!
//! A `Vault` binds a ciphertext file on disk to a [`KeyBackend`] and
//! exposes whole-file `read`/`write` of decrypted text.  Construct one
//! with [`Vault::init_smart`] (or the explicit `init_keyring` /
//! `init_env_var`), then call `write`/`read` any number of times; every
//! call re-resolves the password, so rotating the keyring entry or the
//! env var takes effect immediately.
//!
//! On-disk format: the standard padded base64 encoding of the raw
//! AES-256-CFB ciphertext.  No header, no embedded IV, no integrity
//! tag — the same fixed IV is used for every write, so two writes under
//! one key reuse the keystream, and tampered bytes decrypt to garbage
//! without a detectable error.  Known limitations, kept for
//! compatibility with existing files.
//!
//! There is no locking: concurrent writers to the same file or keyring
//! slot race, and the last writer wins.

use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use zeroize::Zeroize;

use crate::backend::{keyring, KeyBackend};
use crate::crypto::cipher::{decrypt, encrypt, IV_SIZE};
use crate::crypto::keygen;
use crate::errors::{Result, VaultError};

/// IV shared by every encryption this store performs, for every key.
/// Kept byte-identical across versions so existing files stay readable.
const FILE_IV: [u8; IV_SIZE] = [35, 46, 57, 24, 85, 35, 24, 74, 87, 35, 88, 98, 66, 32, 14, 5];

/// Input for the [`Vault`] initializers.
///
/// `service`/`user` are the keyring coordinates; `password_env_var`
/// names an environment variable holding a 32-byte password.  Supplying
/// a non-empty `password_env_var` makes [`Vault::init_smart`] pick the
/// env-var backend even when keyring coordinates are also present.
#[derive(Debug, Clone)]
pub struct VaultConfig {
    pub service: String,
    pub user: String,
    pub password_env_var: String,
    pub filename: PathBuf,
}

/// A handle bound to one ciphertext file and one password backend.
///
/// The backend is fixed for the handle's lifetime; switching backends
/// means running an initializer again.  The handle holds no open file
/// or keyring connection between calls.
#[derive(Debug, Clone)]
pub struct Vault {
    backend: KeyBackend,
    filename: PathBuf,
}

impl Vault {
    // ------------------------------------------------------------------
    // Initializers
    // ------------------------------------------------------------------

    /// Pick an initializer from the config: a non-empty
    /// `password_env_var` selects the env-var backend, otherwise the
    /// keyring is used.
    ///
    /// The "try keyring, on error retry with an env var" fallback is
    /// deliberately left to the caller (see the CLI) — this method never
    /// retries on its own.
    pub fn init_smart(config: &VaultConfig) -> Result<Self> {
        if !config.password_env_var.is_empty() {
            return Self::init_env_var(config);
        }
        Self::init_keyring(config)
    }

    /// Initialize a new or existing vault backed by the OS keyring.
    ///
    /// If the keyring works but holds no entry for (service, user), a
    /// fresh password is generated and stored — the only keyring write
    /// in the system.  If the ciphertext file is missing it is
    /// bootstrapped by writing empty contents, so a later `read` finds a
    /// decryptable (empty) file.  Idempotent: an existing entry is never
    /// overwritten and an existing file is never truncated.
    ///
    /// A `BackendUnavailable` error means the keyring is unusable on
    /// this platform; callers can fall back to `init_env_var`.
    pub fn init_keyring(config: &VaultConfig) -> Result<Self> {
        let vault = Self {
            backend: KeyBackend::Keyring {
                service: config.service.clone(),
                user: config.user.clone(),
            },
            filename: config.filename.clone(),
        };

        // Make sure a keyring password exists, minting one on first use.
        if vault.backend.try_resolve()?.is_none() {
            let key = keygen::generate_key();
            keyring::store_password(&config.service, &config.user, &key)?;
        }

        match vault.load_from_disk() {
            Ok(_) => Ok(vault),
            Err(VaultError::FileNotFound(_)) => {
                vault.write("")?;
                Ok(vault)
            }
            Err(e) => Err(e),
        }
    }

    /// Initialize a vault backed by the named environment variable.
    ///
    /// Fails with `EnvVarMissing` if the variable is unset or empty.
    /// Never touches the ciphertext file — a missing file only surfaces
    /// on the first `read`.  Re-running this initializer is cheap, so a
    /// caller that populates the variable afterwards simply initializes
    /// again.
    pub fn init_env_var(config: &VaultConfig) -> Result<Self> {
        let vault = Self {
            backend: KeyBackend::EnvVar {
                name: config.password_env_var.clone(),
            },
            filename: config.filename.clone(),
        };

        vault.backend.resolve()?;
        Ok(vault)
    }

    // ------------------------------------------------------------------
    // Read / write
    // ------------------------------------------------------------------

    /// Encrypt `contents` and replace the file with it.
    ///
    /// Resolves the current password, encrypts under the fixed IV,
    /// base64-encodes, and overwrites the whole file (owner-only
    /// permissions, created if absent).  A resolution or cipher error
    /// leaves the file untouched.
    pub fn write(&self, contents: &str) -> Result<()> {
        let password = self.backend.resolve()?;
        let ciphertext = encrypt(password.as_bytes(), &FILE_IV, contents.as_bytes())?;
        write_owner_only(&self.filename, BASE64.encode(&ciphertext).as_bytes())
    }

    /// Decrypt and return the file's contents.
    pub fn read(&self) -> Result<String> {
        self.load_from_disk()
    }

    fn load_from_disk(&self) -> Result<String> {
        let encoded = match fs::read_to_string(&self.filename) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(VaultError::FileNotFound(self.filename.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let password = self.backend.resolve()?;
        let ciphertext = BASE64.decode(encoded.as_bytes())?;
        let plaintext = decrypt(password.as_bytes(), &FILE_IV, &ciphertext)?;

        // from_utf8 takes ownership (no copy); on error, zeroize the
        // bytes inside the error before discarding.
        String::from_utf8(plaintext).map_err(|e| {
            let mut bad_bytes = e.into_bytes();
            bad_bytes.zeroize();
            VaultError::InvalidUtf8
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the backend this vault resolves its password through.
    pub fn backend(&self) -> &KeyBackend {
        &self.backend
    }

    /// Returns the path to the ciphertext file.
    pub fn filename(&self) -> &Path {
        &self.filename
    }
}

/// Overwrite `path` with `data`, restricting a newly created file to
/// owner read/write.  Whole-file, non-atomic: a crash mid-write can
/// leave a truncated file.
#[cfg(unix)]
fn write_owner_only(path: &Path, data: &[u8]) -> Result<()> {
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(data)?;
    Ok(())
}

#[cfg(not(unix))]
fn write_owner_only(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data)?;
    Ok(())
}
