//! Cryptographic primitives for vault recovery.
//!
//! This module provides:
//! - AES-GCM authenticated decryption with 128/192/256-bit keys (`aead`)
//! - The zeroizing `VaultKey` wrapper and hex key parsing (`keys`)

pub mod aead;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{decrypt, VaultKey, ...};
pub use aead::{decrypt, AesVariant, NONCE_LEN, TAG_LEN};
pub use keys::VaultKey;
