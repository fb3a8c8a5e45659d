//! `vault-opener open` — decrypt a vault and show its entries.

use std::path::Path;

use crate::cli::commands::export::write_export;
use crate::cli::output;
use crate::cli::{confirm, load_settings, read_key, resolve_vault_path, Cli};
use crate::errors::Result;
use crate::vault::{Entry, VaultFile};

/// Execute the `open` command.
pub fn execute(cli: &Cli, vault: Option<&Path>, mask: bool, no_save_prompt: bool) -> Result<()> {
    let settings = load_settings()?;
    output::banner();

    // The file is read and checked before asking for the key.
    let path = resolve_vault_path(vault)?;
    let file = VaultFile::read(&path)?;

    let key = read_key(cli)?;
    let entries = file.open(&key)?;

    output::print_entries(&entries, mask || settings.mask_secrets);

    if no_save_prompt || entries.is_empty() {
        return Ok(());
    }

    let cwd = std::env::current_dir()?;
    let dest = settings.output_path(&cwd, None);
    if !offer_save(&dest, &entries, settings.export_indent, confirm)? {
        output::tip("Run `vault-opener export -o <file>` later to save the recovered data.");
    }

    Ok(())
}

/// Ask before saving, and again before replacing an existing file.
///
/// Returns whether the file was written.
fn offer_save<F>(dest: &Path, entries: &[Entry], indent: usize, mut ask: F) -> Result<bool>
where
    F: FnMut(&str) -> Result<bool>,
{
    if !ask("Save decrypted data to text file?")? {
        return Ok(false);
    }

    if dest.exists() {
        let question = format!("{} already exists. Overwrite it?", dest.display());
        if !ask(&question)? {
            return Ok(false);
        }
    }

    write_export(dest, entries, indent, true)?;
    Ok(true)
}
