//! `vault-opener inspect` — describe a vault envelope without the key.

use std::path::Path;

use comfy_table::Table;

use crate::cli::{output, resolve_vault_path};
use crate::crypto::{AesVariant, NONCE_LEN, TAG_LEN};
use crate::errors::Result;
use crate::vault::{VaultEnvelope, VaultFile};

/// Execute the `inspect` command.
pub fn execute(vault: Option<&Path>) -> Result<()> {
    let path = resolve_vault_path(vault)?;
    let file = VaultFile::read(&path)?;

    output::success(&format!("{} is a well-formed vault", file.path().display()));
    println!("{}", envelope_table(file.envelope()));
    output::tip("Run `vault-opener open` with the master key to decrypt it.");

    Ok(())
}

fn envelope_table(envelope: &VaultEnvelope) -> Table {
    let accepted_keys = [AesVariant::Aes128, AesVariant::Aes192, AesVariant::Aes256]
        .iter()
        .map(|v| format!("{v} ({} hex digits)", v.key_len() * 2))
        .collect::<Vec<_>>()
        .join(", ");

    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![
        "Nonce (iv)".to_string(),
        format!("{} bytes", envelope.nonce.len()),
    ]);
    table.add_row(vec![
        "Ciphertext".to_string(),
        format!("{} bytes", envelope.ciphertext.len()),
    ]);
    table.add_row(vec!["Auth tag".to_string(), format!("{TAG_LEN} bytes")]);
    table.add_row(vec![
        "Plaintext".to_string(),
        format!("{} bytes", envelope.plaintext_len()),
    ]);
    table.add_row(vec!["Accepted keys".to_string(), accepted_keys]);
    table.add_row(vec![
        "Cipher".to_string(),
        format!("AES-GCM, {}-bit nonce, no associated data", NONCE_LEN * 8),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_reports_lengths() {
        let envelope = VaultEnvelope {
            ciphertext: vec![0; 50],
            nonce: vec![0; NONCE_LEN],
        };
        let rendered = envelope_table(&envelope).to_string();
        assert!(rendered.contains("50 bytes"));
        assert!(rendered.contains("34 bytes"));
        assert!(rendered.contains("12 bytes"));
        assert!(rendered.contains("AES-256-GCM (64 hex digits)"));
    }
}
