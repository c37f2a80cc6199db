//! Listing presentation settings.

use hookhub_core::constants::ALL_CATEGORIES;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How listings are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable cards.
    #[default]
    Text,
    /// Records as a JSON array in dataset wire format.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_owned()))
            .map_err(|_| format!("unknown output format: {s}"))
    }
}

/// Presentation defaults for `list` and `browse`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    /// Selector applied when none is given: `"All"` or a category key.
    pub default_category: String,
    /// Output format for `list`.
    pub format: OutputFormat,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            default_category: ALL_CATEGORIES.to_string(),
            format: OutputFormat::Text,
        }
    }
}
