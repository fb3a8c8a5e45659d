//! On-disk vault envelope.
//!
//! A vault file is a UTF-8 JSON object:
//!
//! ```text
//! { "ciphertext": "<hex>", "iv": "<hex>" }
//! ```
//!
//! - **ciphertext**: AES-GCM output with the 16-byte tag appended.
//! - **iv**: the 12-byte nonce.
//!
//! Any other members are ignored.

use serde::Deserialize;
use tracing::debug;

use crate::crypto::aead::{ensure_nonce_len, TAG_LEN};
use crate::errors::{RecoveryError, Result};

/// Decoded envelope fields. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultEnvelope {
    /// Ciphertext followed by the authentication tag.
    pub ciphertext: Vec<u8>,

    /// AEAD nonce (`iv` on disk).
    pub nonce: Vec<u8>,
}

/// Envelope members as they appear in JSON, before hex decoding.
///
/// Both are optional here so a missing member gets a precise message
/// instead of a generic serde one.
#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    ciphertext: Option<String>,

    #[serde(default)]
    iv: Option<String>,
}

impl VaultEnvelope {
    /// Parse and validate the text of a vault file.
    ///
    /// Fails with `MalformedEnvelope` when the text is not a JSON object,
    /// a member is missing, empty, or not hex, the nonce is not 12 bytes,
    /// or the ciphertext is too short to hold a tag.
    pub fn parse(contents: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(contents)
            .map_err(|e| RecoveryError::MalformedEnvelope(format!("not valid JSON: {e}")))?;

        if !value.is_object() {
            return Err(RecoveryError::MalformedEnvelope(
                "expected a JSON object".into(),
            ));
        }

        let raw: RawEnvelope = serde_json::from_value(value)
            .map_err(|e| RecoveryError::MalformedEnvelope(e.to_string()))?;

        let ciphertext = decode_member("ciphertext", raw.ciphertext.as_deref())?;
        let nonce = decode_member("iv", raw.iv.as_deref())?;

        ensure_nonce_len(&nonce)?;

        if ciphertext.len() < TAG_LEN {
            return Err(RecoveryError::MalformedEnvelope(format!(
                "ciphertext is {} bytes, shorter than the {TAG_LEN}-byte authentication tag",
                ciphertext.len()
            )));
        }

        debug!(
            nonce_len = nonce.len(),
            ciphertext_len = ciphertext.len(),
            "parsed vault envelope"
        );

        Ok(Self { ciphertext, nonce })
    }

    /// Length of the plaintext the ciphertext will decrypt to.
    pub fn plaintext_len(&self) -> usize {
        self.ciphertext.len().saturating_sub(TAG_LEN)
    }
}

/// Hex-decode one required envelope member.
fn decode_member(name: &str, value: Option<&str>) -> Result<Vec<u8>> {
    let text = match value {
        Some(text) if !text.is_empty() => text,
        Some(_) => {
            return Err(RecoveryError::MalformedEnvelope(format!(
                "field `{name}` is empty"
            )))
        }
        None => {
            return Err(RecoveryError::MalformedEnvelope(format!(
                "missing field `{name}`"
            )))
        }
    };

    hex::decode(text).map_err(|e| {
        RecoveryError::MalformedEnvelope(format!("field `{name}` is not valid hex: {e}"))
    })
}
