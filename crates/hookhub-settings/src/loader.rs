//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`HookhubSettings::default()`]
//! 2. If `~/.hookhub/settings.json` exists, deep-merge user values over defaults
//! 3. Apply environment variable overrides (highest priority)
//! 4. Validate the result
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use hookhub_core::HookCategory;
use hookhub_core::constants::ALL_CATEGORIES;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::types::{HookhubSettings, OutputFormat};

/// Env var naming the dataset file.
pub const ENV_DATA_PATH: &str = "HOOKHUB_DATA_PATH";
/// Env var holding the log filter.
pub const ENV_LOG_LEVEL: &str = "HOOKHUB_LOG_LEVEL";
/// Env var holding the default category selector.
pub const ENV_DEFAULT_CATEGORY: &str = "HOOKHUB_DEFAULT_CATEGORY";
/// Env var holding the output format.
pub const ENV_OUTPUT_FORMAT: &str = "HOOKHUB_OUTPUT_FORMAT";

/// Resolve the path to the settings file (`~/.hookhub/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".hookhub").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<HookhubSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with process env var overrides.
///
/// If the file does not exist, returns defaults. If the file contains
/// invalid JSON, returns an error.
pub fn load_settings_from_path(path: &Path) -> Result<HookhubSettings> {
    load_settings_with_env(path, |name| std::env::var(name).ok())
}

/// Load settings from `path`, resolving overrides through `env`.
pub fn load_settings_with_env<F>(path: &Path, env: F) -> Result<HookhubSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = serde_json::to_value(HookhubSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    let mut settings: HookhubSettings = serde_json::from_value(merged)?;
    apply_overrides(&mut settings, env);
    settings.validate()?;
    Ok(settings)
}

/// Recursive deep merge of two JSON values.
///
/// - Objects are merged recursively (source overrides target per-key)
/// - Arrays and primitives are replaced entirely by source
/// - Null values in source are skipped (preserving target)
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply environment overrides read through `env`.
///
/// Empty values are treated as unset. Invalid values are ignored with a
/// warning and the file/default value is kept.
pub fn apply_overrides<F>(settings: &mut HookhubSettings, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| env(name).filter(|v| !v.is_empty());

    if let Some(v) = read(ENV_DATA_PATH) {
        settings.data.path = Some(v);
    }
    if let Some(v) = read(ENV_LOG_LEVEL) {
        settings.logging.level = v;
    }
    if let Some(v) = read(ENV_DEFAULT_CATEGORY) {
        if is_selector(&v) {
            settings.display.default_category = v;
        } else {
            warn!(key = ENV_DEFAULT_CATEGORY, value = %v, "invalid category env var, ignoring");
        }
    }
    if let Some(v) = read(ENV_OUTPUT_FORMAT) {
        match v.parse::<OutputFormat>() {
            Ok(format) => settings.display.format = format,
            Err(_) => {
                warn!(
                    key = ENV_OUTPUT_FORMAT,
                    value = %v,
                    "invalid output format env var, ignoring"
                );
            }
        }
    }
}

/// Whether `value` is `"All"` or a category key.
pub fn is_selector(value: &str) -> bool {
    value == ALL_CATEGORIES || value.parse::<HookCategory>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SettingsError;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    // ── deep_merge ──────────────────────────────────────────────────

    #[test]
    fn merge_nested_override() {
        let target = serde_json::json!({"display": {"format": "text", "defaultCategory": "All"}});
        let source = serde_json::json!({"display": {"format": "json"}});
        let merged = deep_merge(target, source);
        assert_eq!(merged["display"]["format"], "json");
        assert_eq!(merged["display"]["defaultCategory"], "All");
    }

    #[test]
    fn merge_array_replace() {
        let target = serde_json::json!({"items": [1, 2, 3]});
        let source = serde_json::json!({"items": [4]});
        assert_eq!(deep_merge(target, source)["items"], serde_json::json!([4]));
    }

    #[test]
    fn merge_null_preserves_target() {
        let target = serde_json::json!({"a": 1, "b": 2});
        let source = serde_json::json!({"a": null});
        let merged = deep_merge(target, source);
        assert_eq!(merged["a"], 1);
        assert_eq!(merged["b"], 2);
    }

    #[test]
    fn merge_new_keys_added() {
        let merged = deep_merge(serde_json::json!({"a": 1}), serde_json::json!({"b": 2}));
        assert_eq!(merged, serde_json::json!({"a": 1, "b": 2}));
    }

    #[test]
    fn merge_primitive_replaces_object() {
        let target = serde_json::json!({"a": {"nested": true}});
        let source = serde_json::json!({"a": 42});
        assert_eq!(deep_merge(target, source)["a"], 42);
    }

    // ── load_settings_with_env ──────────────────────────────────────

    #[test]
    fn load_missing_file_returns_defaults() {
        let path = Path::new("/nonexistent/settings.json");
        let settings = load_settings_with_env(path, no_env).unwrap();
        assert_eq!(settings, HookhubSettings::default());
    }

    #[test]
    fn load_partial_json_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"display": {"defaultCategory": "TESTING"}, "logging": {"level": "debug"}}"#,
        )
        .unwrap();

        let settings = load_settings_with_env(&path, no_env).unwrap();
        assert_eq!(settings.display.default_category, "TESTING");
        assert_eq!(settings.display.format, OutputFormat::Text);
        assert_eq!(settings.logging.level, "debug");
        assert!(settings.data.path.is_none());
    }

    #[test]
    fn load_null_data_path_keeps_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"data": {"path": null}}"#).unwrap();

        let settings = load_settings_with_env(&path, no_env).unwrap();
        assert!(settings.data.path.is_none());
    }

    #[test]
    fn load_invalid_json_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result = load_settings_with_env(&path, no_env);
        assert!(matches!(result.unwrap_err(), SettingsError::Json(_)));
    }

    #[test]
    fn load_invalid_category_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"display": {"defaultCategory": "Security"}}"#).unwrap();

        let result = load_settings_with_env(&path, no_env);
        assert!(matches!(result.unwrap_err(), SettingsError::InvalidValue(_)));
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"data": {"path": "/from/file.json"}}"#).unwrap();

        let env = env_from(&[
            (ENV_DATA_PATH, "/from/env.json"),
            (ENV_LOG_LEVEL, "info"),
            (ENV_DEFAULT_CATEGORY, "WORKFLOW"),
            (ENV_OUTPUT_FORMAT, "json"),
        ]);
        let settings = load_settings_with_env(&path, env).unwrap();
        assert_eq!(settings.data.path.as_deref(), Some("/from/env.json"));
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.display.default_category, "WORKFLOW");
        assert_eq!(settings.display.format, OutputFormat::Json);
    }

    // ── apply_overrides ─────────────────────────────────────────────

    #[test]
    fn invalid_env_values_are_ignored() {
        let mut settings = HookhubSettings::default();
        let env = env_from(&[
            (ENV_DEFAULT_CATEGORY, "workflow"),
            (ENV_OUTPUT_FORMAT, "yaml"),
        ]);
        apply_overrides(&mut settings, env);
        assert_eq!(settings.display, crate::types::DisplaySettings::default());
    }

    #[test]
    fn invalid_env_value_is_logged() {
        let (logs, _guard) = hookhub_core::logging::capture_logs();
        let mut settings = HookhubSettings::default();
        apply_overrides(&mut settings, env_from(&[(ENV_OUTPUT_FORMAT, "xml")]));
        assert!(logs.has_event(tracing::Level::WARN, "invalid output format"));
    }

    #[test]
    fn empty_env_values_are_unset() {
        let mut settings = HookhubSettings::default();
        apply_overrides(&mut settings, env_from(&[(ENV_DATA_PATH, ""), (ENV_LOG_LEVEL, "")]));
        assert!(settings.data.path.is_none());
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn selector_values() {
        assert!(is_selector("All"));
        assert!(is_selector("TEAM"));
        assert!(!is_selector("all"));
        assert!(!is_selector("Team Collaboration"));
    }
}
