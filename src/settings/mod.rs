//! Persisted front-end settings: the last directory searched.

mod error;

pub use error::{SettingsError, SettingsErrorCode, SettingsResult};

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const SETTINGS_ENV: &str = "PLAYFINDER_SETTINGS";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_directory: Option<String>,
}

pub fn settings_path() -> SettingsResult<PathBuf> {
    if let Some(raw) = std::env::var_os(SETTINGS_ENV) {
        if !raw.is_empty() {
            return Ok(PathBuf::from(raw));
        }
    }
    let base = dirs_next::data_dir().ok_or_else(|| {
        SettingsError::new(
            SettingsErrorCode::DataDirUnavailable,
            "Data directory is not available",
        )
    })?;
    Ok(base.join("playfinder").join(SETTINGS_FILE))
}

/// A missing file is not an error; it just means nothing was saved yet.
pub fn load_settings(path: &Path) -> SettingsResult<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => {
            return Err(SettingsError::new(
                SettingsErrorCode::ReadFailed,
                format!("Cannot read settings {}: {e}", path.display()),
            ))
        }
    };
    serde_json::from_str(&raw).map_err(|e| {
        SettingsError::new(
            SettingsErrorCode::ParseFailed,
            format!("Invalid settings file {}: {e}", path.display()),
        )
    })
}

pub fn save_settings(path: &Path, settings: &Settings) -> SettingsResult<()> {
    let write_failed = |e: std::io::Error| {
        SettingsError::new(
            SettingsErrorCode::WriteFailed,
            format!("Cannot write settings {}: {e}", path.display()),
        )
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_failed)?;
    }
    let json = serde_json::to_string_pretty(settings).map_err(|e| {
        SettingsError::new(SettingsErrorCode::SerializeFailed, e.to_string())
    })?;
    fs::write(path, json).map_err(write_failed)?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Saved directory, or `None` when settings are missing or unusable.
pub fn last_directory() -> Option<String> {
    let path = settings_path()
        .map_err(|e| warn!("settings unavailable: {e}"))
        .ok()?;
    match load_settings(&path) {
        Ok(settings) => settings.last_directory.filter(|d| !d.trim().is_empty()),
        Err(e) => {
            warn!("ignoring settings: {e}");
            None
        }
    }
}

pub fn remember_directory(directory: &str) -> SettingsResult<()> {
    let path = settings_path()?;
    let mut settings = load_settings(&path).unwrap_or_default();
    if settings.last_directory.as_deref() == Some(directory) {
        return Ok(());
    }
    settings.last_directory = Some(directory.to_string());
    save_settings(&path, &settings)
}
