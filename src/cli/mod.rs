//! CLI module — Clap argument parser, output helpers, and command
//! implementations for the demo binary.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::vault::VaultConfig;

/// Env var the commands fall back to when the OS keyring is unusable
/// and no `--env-var` was given.
pub const FALLBACK_ENV_VAR: &str = "SECRETFILE_KEY";

/// secretfile CLI: encrypted single-file secret store.
#[derive(Parser)]
#[command(
    name = "secretfile",
    about = "Encrypted single-file secret store",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Ciphertext file to read and write
    #[arg(short, long, default_value = "secrets.vault", global = true)]
    pub file: PathBuf,

    /// Keyring service label the password is stored under
    #[arg(long, default_value = "secretfile", global = true)]
    pub service: String,

    /// Keyring user label the password is stored under
    #[arg(long, default_value = "default", global = true)]
    pub user: String,

    /// Env var holding a 32-byte password (selects the env-var backend)
    #[arg(long, global = true)]
    pub env_var: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a message and write it to the vault file
    Encrypt {
        /// Text to encrypt (replaces the file's whole contents)
        message: String,
    },

    /// Decrypt the vault file and print its contents
    Decrypt,

    /// Generate a fresh 32-character vault password
    NewKey,
}

impl Cli {
    /// Build a `VaultConfig` from the global arguments.
    pub fn vault_config(&self) -> VaultConfig {
        VaultConfig {
            service: self.service.clone(),
            user: self.user.clone(),
            password_env_var: self.env_var.clone().unwrap_or_default(),
            filename: self.file.clone(),
        }
    }
}
