//! The recovery pipeline and the vault file handle used by CLI commands.
//!
//! `open_vault` runs the three stages in order: envelope, decrypt,
//! payload. Each stage either hands its output to the next or stops the
//! pipeline; nothing is shared between calls.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::crypto::aead::decrypt;
use crate::crypto::keys::VaultKey;
use crate::errors::{RecoveryError, Result};

use super::entry::Entry;
use super::envelope::VaultEnvelope;
use super::payload::deserialize_entries;

/// Recover the entries of a vault from its file contents and raw key.
///
/// The envelope is validated before the key is looked at, so a broken
/// file reports `MalformedEnvelope` whatever key was supplied.
pub fn open_vault(contents: &str, key: &[u8]) -> Result<Vec<Entry>> {
    let envelope = VaultEnvelope::parse(contents)?;
    open_envelope(&envelope, key)
}

/// Decrypt an already parsed envelope and decode its entries.
pub fn open_envelope(envelope: &VaultEnvelope, key: &[u8]) -> Result<Vec<Entry>> {
    let plaintext = decrypt(key, &envelope.nonce, &envelope.ciphertext)?;
    let entries = deserialize_entries(&plaintext)?;

    info!(entries = entries.len(), "vault decrypted");
    Ok(entries)
}

/// A vault file read from disk with its envelope validated.
///
/// Reading happens before the user is asked for a key, so a missing or
/// corrupt file is reported first.
pub struct VaultFile {
    /// Where the file was read from.
    path: PathBuf,

    envelope: VaultEnvelope,
}

impl VaultFile {
    /// Read a vault file and parse its envelope.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RecoveryError::FileNotFound(path.display().to_string()));
        }

        let contents = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = contents.len(), "read vault file");

        let envelope = VaultEnvelope::parse(&contents)?;

        Ok(Self {
            path: path.to_path_buf(),
            envelope,
        })
    }

    /// Path of the vault file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed envelope.
    pub fn envelope(&self) -> &VaultEnvelope {
        &self.envelope
    }

    /// Decrypt the vault with `key`.
    pub fn open(&self, key: &VaultKey) -> Result<Vec<Entry>> {
        open_envelope(&self.envelope, key.as_bytes())
    }
}
