//! Offline recovery of AES-GCM encrypted JSON vaults.
//!
//! The core is [`vault::open_vault`]: envelope parsing, authenticated
//! decryption, then payload decoding. Everything under [`cli`] is the
//! interactive wrapper around it.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod vault;
