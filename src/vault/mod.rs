//! Vault module — recovering entries from an encrypted vault file.
//!
//! This module provides:
//! - The JSON vault envelope and its validation (`envelope`)
//! - `Entry` records with their field defaults (`entry`)
//! - Decoding of the decrypted payload (`payload`)
//! - The `open_vault` pipeline and the `VaultFile` handle (`store`)

pub mod entry;
pub mod envelope;
pub mod payload;
pub mod store;

// Re-export the most commonly used items.
pub use entry::{Entry, DEFAULT_CATEGORY};
pub use envelope::VaultEnvelope;
pub use payload::deserialize_entries;
pub use store::{open_envelope, open_vault, VaultFile};
