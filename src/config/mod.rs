//! Configuration module — optional `.vault-opener.toml` settings.

pub mod settings;

pub use settings::{Settings, MAX_EXPORT_INDENT};
