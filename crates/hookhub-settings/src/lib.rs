//! # hookhub-settings
//!
//! Configuration management with layered sources for HookHub.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`HookhubSettings::default()`]
//! 2. **User file**: `~/.hookhub/settings.json` (deep-merged over defaults)
//! 3. **Environment variables**: `HOOKHUB_*` overrides (highest priority)
//!
//! Command-line flags are applied on top by the binary.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::*;

use std::sync::OnceLock;

/// Global settings singleton.
///
/// Initialized either explicitly via [`init_settings`] or lazily on first
/// access via [`get_settings`].
static SETTINGS: OnceLock<HookhubSettings> = OnceLock::new();

/// Get the global settings instance.
///
/// On first call, loads settings from `~/.hookhub/settings.json` with env var
/// overrides. If loading fails, returns compiled defaults.
pub fn get_settings() -> &'static HookhubSettings {
    SETTINGS.get_or_init(|| load_settings().unwrap_or_default())
}

/// Initialize the global settings with a specific value.
///
/// Returns `Err(settings)` if the global was already initialized.
#[allow(clippy::result_large_err)]
pub fn init_settings(settings: HookhubSettings) -> std::result::Result<(), HookhubSettings> {
    SETTINGS.set(settings)
}
