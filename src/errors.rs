use std::fmt;

use thiserror::Error;

/// Coarse classification of a [`RecoveryError`], listed in the order a
/// caller usually meets them while recovering a vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The vault file (or key file) could not be read.
    FileUnreadable,
    /// The envelope is not a JSON object with hex `ciphertext` and `iv`.
    MalformedEnvelope,
    /// The key has an unsupported length or is not valid hex.
    InvalidKeyMaterial,
    /// Tag verification failed: wrong key, corruption, or tampering.
    AuthenticationFailed,
    /// The decrypted bytes are not UTF-8.
    InvalidEncoding,
    /// The decrypted text is not a JSON array of entry objects.
    MalformedPayload,
    /// Failure in the interactive/CLI layer rather than the vault itself.
    Cli,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FileUnreadable => "file-unreadable",
            Self::MalformedEnvelope => "malformed-envelope",
            Self::InvalidKeyMaterial => "invalid-key-material",
            Self::AuthenticationFailed => "authentication-failed",
            Self::InvalidEncoding => "invalid-encoding",
            Self::MalformedPayload => "malformed-payload",
            Self::Cli => "cli",
        };
        f.write_str(name)
    }
}

/// All errors that can occur while recovering a vault.
///
/// Messages describe structure only (which field, which stage). They never
/// include key bytes or decrypted content.
#[derive(Debug, Error)]
pub enum RecoveryError {
    // --- Input errors ---
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Pipeline errors ---
    #[error("Invalid vault file format: {0}")]
    MalformedEnvelope(String),

    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    #[error("Decryption failed — invalid key or corrupted data (tag verification failed)")]
    AuthenticationFailed,

    #[error("Decrypted data is not valid UTF-8 (invalid byte at offset {0})")]
    InvalidEncoding(usize),

    #[error("Decrypted data is not a list of entries: {0}")]
    MalformedPayload(String),

    // --- CLI errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

impl RecoveryError {
    /// The tag callers should branch on.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound(_) | Self::Io(_) => ErrorKind::FileUnreadable,
            Self::MalformedEnvelope(_) => ErrorKind::MalformedEnvelope,
            Self::InvalidKeyMaterial(_) => ErrorKind::InvalidKeyMaterial,
            Self::AuthenticationFailed => ErrorKind::AuthenticationFailed,
            Self::InvalidEncoding(_) => ErrorKind::InvalidEncoding,
            Self::MalformedPayload(_) => ErrorKind::MalformedPayload,
            Self::ConfigError(_)
            | Self::SerializationError(_)
            | Self::CommandFailed(_)
            | Self::UserCancelled => ErrorKind::Cli,
        }
    }
}

/// Convenience type alias for recovery results.
pub type Result<T> = std::result::Result<T, RecoveryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_file_unreadable() {
        let err: RecoveryError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.kind(), ErrorKind::FileUnreadable);
    }

    #[test]
    fn authentication_failure_has_its_own_kind() {
        assert_eq!(
            RecoveryError::AuthenticationFailed.kind(),
            ErrorKind::AuthenticationFailed
        );
        assert_ne!(
            RecoveryError::MalformedEnvelope("missing field `iv`".into()).kind(),
            ErrorKind::AuthenticationFailed
        );
    }

    #[test]
    fn cli_failures_share_one_kind() {
        assert_eq!(RecoveryError::UserCancelled.kind(), ErrorKind::Cli);
        assert_eq!(
            RecoveryError::ConfigError("bad".into()).kind(),
            ErrorKind::Cli
        );
    }

    #[test]
    fn kind_display_is_kebab_case() {
        assert_eq!(
            ErrorKind::AuthenticationFailed.to_string(),
            "authentication-failed"
        );
        assert_eq!(ErrorKind::MalformedPayload.to_string(), "malformed-payload");
    }
}
