//! Entry records recovered from a vault.
//!
//! Every field is optional in the source JSON. A missing `category` reads
//! as "General"; everything else stays `None` and means "unknown".
//! A known field holding a number, boolean, array or object is kept as its
//! JSON text so one odd value never hides the rest of the vault.
//! Members outside the known schema are kept in `extra` so an export
//! reproduces the original payload.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Category used when an entry does not name one.
pub const DEFAULT_CATEGORY: &str = "General";

/// A single credential or note stored in the vault.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Grouping label (e.g. "Email", "Banking").
    #[serde(default = "default_category", deserialize_with = "category_or_default")]
    pub category: String,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<String>,

    /// The password or other secret value.
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub secret: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,

    /// Members not covered by the fields above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// An explicit `"category": null` also falls back to the default.
fn category_or_default<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_else(default_category))
}

/// Accept any JSON value for a text field. Strings pass through, `null`
/// is absent, and anything else becomes its compact JSON text.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            category: default_category(),
            title: None,
            username: None,
            secret: None,
            notes: None,
            extra: Map::new(),
        }
    }
}

// Secrets stay out of debug output and therefore out of logs.
impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("category", &self.category)
            .field("title", &self.title)
            .field("username", &self.username)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("notes", &self.notes)
            .field("extra", &self.extra.keys().collect::<Vec<_>>())
            .finish()
    }
}
