//! CLI module — Clap argument parser, prompts, output helpers, and command
//! implementations.

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::VaultKey;
use crate::errors::{RecoveryError, Result};

/// vault-opener: offline recovery tool for encrypted vault files.
#[derive(Parser)]
#[command(
    name = "vault-opener",
    about = "Offline recovery tool for encrypted vault files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// File containing the hex-encoded master key (prompts if omitted)
    #[arg(long, global = true)]
    pub key_file: Option<PathBuf>,

    /// Log pipeline diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Decrypt a vault and display its entries
    Open {
        /// Path to the .vault file (prompts if omitted)
        vault: Option<PathBuf>,

        /// Hide secret values in the output table
        #[arg(long)]
        mask: bool,

        /// Do not offer to save the recovered data afterwards
        #[arg(long)]
        no_save_prompt: bool,
    },

    /// Decrypt a vault and write its entries to a JSON file
    Export {
        /// Path to the .vault file (prompts if omitted)
        vault: Option<PathBuf>,

        /// Output file path (default: RECOVERED_DATA.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Overwrite the output file if it exists
        #[arg(short, long)]
        force: bool,
    },

    /// Show envelope details without decrypting
    Inspect {
        /// Path to the .vault file (prompts if omitted)
        vault: Option<PathBuf>,
    },

    /// Show version
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master key, trying in order:
/// 1. `--key-file` (hex text in a file)
/// 2. Interactive hidden prompt
pub fn read_key(cli: &Cli) -> Result<VaultKey> {
    if let Some(path) = &cli.key_file {
        return VaultKey::load_key_file(path);
    }

    output::info("Enter the Master Key provided by the Vault Creator.");
    let input = dialoguer::Password::new()
        .with_prompt("Master Key (input hidden)")
        .interact()
        .map_err(|e| RecoveryError::CommandFailed(format!("key prompt: {e}")))?;
    let input = Zeroizing::new(input);

    VaultKey::from_hex(&input)
}

/// Use the vault path from the command line, or prompt for one.
pub fn resolve_vault_path(arg: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = arg {
        return Ok(path.to_path_buf());
    }

    let input = dialoguer::Input::<String>::new()
        .with_prompt("Path to .vault file (e.g., my_legacy.vault)")
        .interact_text()
        .map_err(|e| RecoveryError::CommandFailed(format!("path prompt: {e}")))?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RecoveryError::UserCancelled);
    }
    Ok(PathBuf::from(trimmed))
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| RecoveryError::CommandFailed(format!("confirmation prompt: {e}")))
}

/// Load settings from the current working directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_vault_path_skips_prompt() {
        let path = resolve_vault_path(Some(Path::new("my_legacy.vault"))).unwrap();
        assert_eq!(path, PathBuf::from("my_legacy.vault"));
    }

    #[test]
    fn key_file_flag_is_used() {
        let dir = TempDir::new().unwrap();
        let key_path = dir.path().join("key.txt");
        std::fs::write(&key_path, "000102030405060708090a0b0c0d0e0f").unwrap();

        let cli = Cli::parse_from([
            "vault-opener",
            "--key-file",
            key_path.to_str().unwrap(),
            "inspect",
            "x.vault",
        ]);
        let key = read_key(&cli).unwrap();
        assert_eq!(key.as_bytes().len(), 16);
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["vault-opener", "open", "a.vault", "--mask", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Open {
                vault,
                mask,
                no_save_prompt,
            } => {
                assert_eq!(vault, Some(PathBuf::from("a.vault")));
                assert!(mask);
                assert!(!no_save_prompt);
            }
            _ => panic!("expected open"),
        }
    }
}
