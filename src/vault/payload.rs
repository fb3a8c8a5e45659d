//! Decrypted payload decoding.
//!
//! The plaintext is UTF-8 JSON: an array of entry objects. Errors report
//! the byte offset or line/column only, because serde's own messages can
//! quote the decrypted text.

use serde_json::error::Category;

use super::entry::Entry;
use crate::errors::{RecoveryError, Result};

/// Decode plaintext bytes into entries, keeping the array order.
pub fn deserialize_entries(plaintext: &[u8]) -> Result<Vec<Entry>> {
    let text = std::str::from_utf8(plaintext)
        .map_err(|e| RecoveryError::InvalidEncoding(e.valid_up_to()))?;

    serde_json::from_str(text).map_err(|e| RecoveryError::MalformedPayload(describe(&e)))
}

/// Position-only description of a JSON error.
fn describe(err: &serde_json::Error) -> String {
    let what = match err.classify() {
        Category::Syntax => "invalid JSON",
        Category::Eof => "unexpected end of JSON",
        Category::Data => "expected an array of entry objects",
        Category::Io => "read error",
    };
    format!("{what} at line {} column {}", err.line(), err.column())
}
