//! `vault-opener export` — write recovered entries to a JSON file.
//!
//! The output is a JSON array of entry objects in the same shape as the
//! vault's own payload. Nothing is written without confirmation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{confirm, load_settings, read_key, resolve_vault_path, Cli};
use crate::config::MAX_EXPORT_INDENT;
use crate::errors::{RecoveryError, Result};
use crate::vault::{Entry, VaultFile};

/// Execute the `export` command.
pub fn execute(
    cli: &Cli,
    vault: Option<&Path>,
    output_path: Option<&Path>,
    yes: bool,
    force: bool,
) -> Result<()> {
    let settings = load_settings()?;
    let path = resolve_vault_path(vault)?;
    let file = VaultFile::read(&path)?;

    let key = read_key(cli)?;
    let entries = file.open(&key)?;

    let cwd = std::env::current_dir()?;
    let dest = settings.output_path(&cwd, output_path);

    if !yes {
        let question = format!(
            "Write {} decrypted entries to {} in plain text?",
            entries.len(),
            dest.display()
        );
        if !confirm(&question)? {
            return Err(RecoveryError::UserCancelled);
        }
    }

    write_export(&dest, &entries, settings.export_indent, force)
}

/// Write `entries` to `dest` as indented JSON.
///
/// Refuses to replace a `.vault` file, and any existing file unless
/// `force` is set. On Unix the file is created owner-only.
pub fn write_export(dest: &Path, entries: &[Entry], indent: usize, force: bool) -> Result<()> {
    if dest
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("vault"))
    {
        return Err(RecoveryError::CommandFailed(
            "refusing to export over a .vault file".into(),
        ));
    }

    if dest.exists() && !force {
        return Err(RecoveryError::CommandFailed(format!(
            "{} already exists (use `export --force` to overwrite)",
            dest.display()
        )));
    }

    let content = format_as_json(entries, indent)?;
    write_private(dest, &content).map_err(|e| {
        RecoveryError::CommandFailed(format!("failed to write export file: {e}"))
    })?;

    info!(entries = entries.len(), "exported recovered entries");
    output::success(&format!(
        "Data saved to {} ({} entries).",
        dest.display(),
        entries.len()
    ));
    output::warning("DELETE THIS FILE AFTER USE. It contains your secrets in plain text.");

    Ok(())
}

/// Serialize entries as a JSON array indented by `indent` spaces, capped
/// at [`MAX_EXPORT_INDENT`].
fn format_as_json(entries: &[Entry], indent: usize) -> Result<Zeroizing<Vec<u8>>> {
    let indent = " ".repeat(indent.min(MAX_EXPORT_INDENT));
    let mut buf = Zeroizing::new(Vec::new());

    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut *buf, formatter);
    entries
        .serialize(&mut serializer)
        .map_err(|e| RecoveryError::SerializationError(format!("JSON export: {e}")))?;

    buf.push(b'\n');
    Ok(buf)
}

fn write_private(dest: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(dest)?;

    // `mode` only applies on create; an overwritten file keeps its old bits.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(content)?;
    file.flush()
}
