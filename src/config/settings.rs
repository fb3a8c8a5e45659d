use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{RecoveryError, Result};

/// Widest JSON indentation accepted from the config file.
pub const MAX_EXPORT_INDENT: usize = 16;

/// Recovery settings, loaded from `.vault-opener.toml`.
///
/// Every field has a default, so the tool works without any config
/// file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Where recovered data is written when no `--output` is given.
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Hide secret values in the entry table.
    #[serde(default)]
    pub mask_secrets: bool,

    /// Indentation width of the exported JSON.
    #[serde(default = "default_export_indent")]
    pub export_indent: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_output_file() -> String {
    "RECOVERED_DATA.txt".to_string()
}

fn default_export_indent() -> usize {
    4
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            mask_secrets: false,
            export_indent: default_export_indent(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".vault-opener.toml";

    /// Load settings from `<dir>/.vault-opener.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, or `export_indent` is
    /// above [`MAX_EXPORT_INDENT`], an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            RecoveryError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        if settings.export_indent > MAX_EXPORT_INDENT {
            return Err(RecoveryError::ConfigError(format!(
                "export_indent in {} must be at most {MAX_EXPORT_INDENT}, got {}",
                config_path.display(),
                settings.export_indent
            )));
        }

        Ok(settings)
    }

    /// Resolve the export destination: an explicit path wins over the
    /// configured default, which is relative to `dir`.
    pub fn output_path(&self, dir: &Path, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => dir.join(&self.output_file),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
