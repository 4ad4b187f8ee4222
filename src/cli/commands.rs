//! Command implementations for the demo binary.

use crate::cli::{output, Cli, FALLBACK_ENV_VAR};
use crate::crypto::keygen;
use crate::errors::Result;
use crate::vault::Vault;

/// Encrypt `message` and write it to the vault file.
pub fn encrypt(cli: &Cli, message: &str) -> Result<()> {
    let vault = open_vault(cli)?;
    vault.write(message)?;
    output::success(&format!("Encrypted message written to {}", cli.file.display()));
    Ok(())
}

/// Decrypt the vault file and print its contents to stdout.
pub fn decrypt(cli: &Cli) -> Result<()> {
    let vault = open_vault(cli)?;
    let contents = vault.read()?;
    println!("{contents}");
    Ok(())
}

/// Print a freshly generated vault password.
///
/// Plain stdout so it can be captured:
/// `export SECRETFILE_KEY=$(secretfile new-key)`.
pub fn new_key() -> Result<()> {
    println!("{}", keygen::generate_key());
    Ok(())
}

/// Initialize a vault from the CLI arguments.
///
/// With `--env-var` this is a plain `init_smart`.  Without it, a
/// keyring failure falls back to the `SECRETFILE_KEY` env var — the
/// caller-level retry pattern the vault itself never performs.
fn open_vault(cli: &Cli) -> Result<Vault> {
    let config = cli.vault_config();

    match Vault::init_smart(&config) {
        Ok(vault) => Ok(vault),
        Err(e) if cli.env_var.is_none() => {
            output::warning(&format!("Keyring init failed: {e}"));
            output::tip(&format!("Falling back to the {FALLBACK_ENV_VAR} env var"));
            let mut fallback = config;
            fallback.password_env_var = FALLBACK_ENV_VAR.to_string();
            Vault::init_smart(&fallback)
        }
        Err(e) => Err(e),
    }
}
