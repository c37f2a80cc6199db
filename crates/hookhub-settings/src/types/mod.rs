//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and implement
//! [`Default`]. Types marked with `#[serde(default)]` allow partial JSON:
//! missing fields get their default value during deserialization.

mod display;

pub use display::*;

use hookhub_core::HookCategory;
use hookhub_core::constants::ALL_CATEGORIES;
use hookhub_core::logging::DEFAULT_LEVEL;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SettingsError};

/// Root settings type for HookHub.
///
/// ```json
/// {
///   "data": { "path": "/srv/hookhub/hooks.json" },
///   "display": { "defaultCategory": "SECURITY" }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HookhubSettings {
    /// Settings schema version.
    pub version: String,
    /// Application name.
    pub name: String,
    /// Dataset source.
    pub data: DataSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
    /// Listing presentation.
    pub display: DisplaySettings,
}

impl Default for HookhubSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            name: "hookhub".to_string(),
            data: DataSettings::default(),
            logging: LoggingSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

impl HookhubSettings {
    /// Check values that serde alone cannot constrain.
    pub fn validate(&self) -> Result<()> {
        let selector = self.display.default_category.as_str();
        if selector != ALL_CATEGORIES && selector.parse::<HookCategory>().is_err() {
            return Err(SettingsError::InvalidValue(format!(
                "display.defaultCategory must be \"{ALL_CATEGORIES}\" or a category key, got \"{selector}\""
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Where the hook dataset is read from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataSettings {
    /// Path to a `{"hooks": [...]}` file. `None` uses the bundled dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// `tracing` filter directive (e.g. `"warn"`, `"hookhub_catalog=debug"`).
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(HookhubSettings::default()).unwrap();
        assert_eq!(json["display"]["defaultCategory"], "All");
        assert_eq!(json["display"]["format"], "text");
        assert_eq!(json["logging"]["level"], "warn");
        assert!(json["data"].get("path").is_none());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: HookhubSettings =
            serde_json::from_str(r#"{"data": {"path": "/tmp/hooks.json"}}"#).unwrap();
        assert_eq!(settings.data.path.as_deref(), Some("/tmp/hooks.json"));
        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.display, DisplaySettings::default());
    }

    #[test]
    fn validate_accepts_category_key() {
        let mut settings = HookhubSettings::default();
        settings.display.default_category = "SECURITY".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn validate_rejects_unknown_category() {
        let mut settings = HookhubSettings::default();
        settings.display.default_category = "security".to_string();
        assert_matches!(
            settings.validate(),
            Err(SettingsError::InvalidValue(msg)) if msg.contains("security")
        );
    }

    #[test]
    fn validate_rejects_blank_level() {
        let mut settings = HookhubSettings::default();
        settings.logging.level = "  ".to_string();
        assert_matches!(settings.validate(), Err(SettingsError::InvalidValue(_)));
    }
}
