//! AES-GCM authenticated decryption.
//!
//! The key length picks the AES variant. The nonce is always 96 bits and
//! the ciphertext carries the 16-byte tag at its end:
//!   [ ciphertext | 16-byte auth tag ]
//!
//! Associated data is always empty. `aes-gcm` verifies the tag before it
//! decrypts anything, so a failed check never yields plaintext.

use std::fmt;

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, Payload};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm, Nonce};
use tracing::debug;
use zeroize::Zeroizing;

use crate::errors::{RecoveryError, Result};

/// Size of the AES-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the authentication tag appended to the ciphertext.
pub const TAG_LEN: usize = 16;

/// `aes-gcm` only names the 128 and 256-bit variants.
type Aes192Gcm = AesGcm<Aes192, U12>;

/// AES key sizes accepted for vault keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesVariant {
    Aes128,
    Aes192,
    Aes256,
}

impl AesVariant {
    /// Pick the variant matching a raw key length in bytes.
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(RecoveryError::InvalidKeyMaterial(format!(
                "key must be 16, 24, or 32 bytes, got {other}"
            ))),
        }
    }

    /// Key length in bytes.
    pub fn key_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }
}

impl fmt::Display for AesVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}-GCM", self.key_len() * 8)
    }
}

/// Reject any nonce that is not exactly 96 bits.
pub fn ensure_nonce_len(nonce: &[u8]) -> Result<()> {
    if nonce.len() != NONCE_LEN {
        return Err(RecoveryError::MalformedEnvelope(format!(
            "nonce must be {NONCE_LEN} bytes, got {}",
            nonce.len()
        )));
    }
    Ok(())
}

/// Decrypt `ciphertext` (tag appended) under `key` and `nonce` with empty
/// associated data.
///
/// Key and nonce lengths are checked before any cipher work, so those
/// failures stay distinct from `AuthenticationFailed`. A wrong key and a
/// corrupted ciphertext produce the same error.
pub fn decrypt(key: &[u8], nonce: &[u8], ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let variant = AesVariant::from_key_len(key.len())?;
    ensure_nonce_len(nonce)?;

    debug!(%variant, ciphertext_len = ciphertext.len(), "decrypting vault payload");

    let nonce = Nonce::<U12>::from_slice(nonce);
    let payload = Payload {
        msg: ciphertext,
        aad: &[],
    };

    let plaintext = match variant {
        AesVariant::Aes128 => open::<Aes128Gcm>(key, nonce, payload)?,
        AesVariant::Aes192 => open::<Aes192Gcm>(key, nonce, payload)?,
        AesVariant::Aes256 => open::<Aes256Gcm>(key, nonce, payload)?,
    };

    Ok(Zeroizing::new(plaintext))
}

fn open<C>(key: &[u8], nonce: &Nonce<U12>, payload: Payload<'_, '_>) -> Result<Vec<u8>>
where
    C: KeyInit + AeadCore<NonceSize = U12> + Aead,
{
    let cipher = C::new_from_slice(key)
        .map_err(|_| RecoveryError::InvalidKeyMaterial("key rejected by cipher".into()))?;

    cipher
        .decrypt(nonce, payload)
        .map_err(|_| RecoveryError::AuthenticationFailed)
}
