//! The vault master key.
//!
//! The key is supplied out-of-band as hex text: typed at a hidden prompt
//! or read from a key file. No derivation happens here, the decoded bytes
//! are the AES key.

use std::fmt;
use std::fs;
use std::path::Path;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::aead::AesVariant;
use crate::errors::{RecoveryError, Result};

/// Raw AES key bytes, zeroed when dropped.
///
/// Construction validates the length, so a `VaultKey` always selects one
/// of the supported AES variants.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct VaultKey {
    bytes: Vec<u8>,
}

impl VaultKey {
    /// Wrap raw key bytes after checking their length.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let key = Self { bytes };
        AesVariant::from_key_len(key.bytes.len())?;
        Ok(key)
    }

    /// Decode a hex key as typed by a user.
    ///
    /// Surrounding whitespace and an optional `0x` prefix are ignored.
    /// Error messages give positions only, never the offending text.
    pub fn from_hex(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(RecoveryError::InvalidKeyMaterial("key is empty".into()));
        }

        let bytes = hex::decode(digits).map_err(|e| {
            RecoveryError::InvalidKeyMaterial(match e {
                hex::FromHexError::OddLength => "key hex has an odd number of digits".into(),
                hex::FromHexError::InvalidHexCharacter { index, .. } => {
                    format!("key contains a non-hex character at position {index}")
                }
                hex::FromHexError::InvalidStringLength => "key hex has an invalid length".into(),
            })
        })?;

        Self::from_bytes(bytes)
    }

    /// Read a key file holding hex text.
    pub fn load_key_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RecoveryError::FileNotFound(path.display().to_string()));
        }

        let text = Zeroizing::new(fs::read_to_string(path)?);
        Self::from_hex(&text)
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The AES variant this key selects.
    pub fn variant(&self) -> AesVariant {
        // Length was validated in `from_bytes`.
        match self.bytes.len() {
            16 => AesVariant::Aes128,
            24 => AesVariant::Aes192,
            _ => AesVariant::Aes256,
        }
    }
}

impl fmt::Debug for VaultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultKey")
            .field("variant", &self.variant())
            .finish_non_exhaustive()
    }
}
