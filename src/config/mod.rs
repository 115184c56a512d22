//! Configuration for pcjson
//!
//! Settings are read from a TOML file. Every section and member is optional;
//! missing values take their defaults.
//!
//! # Settings Location
//!
//! Without an explicit path, settings live in the platform data directory:
//! - **Linux**: `~/.local/share/dev.vksc.pipeline-json/settings.toml`
//! - **macOS**: `~/Library/Application Support/dev.vksc.pipeline-json/settings.toml`
//! - **Windows**: `%APPDATA%\dev.vksc.pipeline-json\settings.toml`
//!
//! # Example
//!
//! ```toml
//! [generator]
//! uuid_mode = "content_hash_excluding_filenames"
//! pretty = false
//!
//! [capture]
//! process_name = "demo"
//! output_dir = "/tmp/captures"
//!
//! [logging]
//! filter = "info"
//! ```

use crate::document::GeneratorOptions;
use crate::error::{PcJsonError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.vksc.pipeline-json";

/// Settings filename inside the app data directory
pub const SETTINGS_FILE: &str = "settings.toml";

/// Overrides the capture output directory when set
pub const OUTPUT_DIR_ENV: &str = "VK_JSON_FILE_PATH";

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info,vksc_pipeline_json=debug";

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Get the path to the default settings file
pub fn settings_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(SETTINGS_FILE))
}

// ==================== Settings ====================

/// Capture output options.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureSettings {
    /// Prefix of every artifact name; the executable name when unset
    pub process_name: Option<String>,

    /// Where artifacts are written; see [`CaptureSettings::resolve_output_dir`]
    pub output_dir: Option<PathBuf>,

    /// Also write `<process>_objectResInfo_<device>.hpp` when
    /// [`crate::capture::release_device`] forgets a device
    pub reservation_headers: bool,
}

impl CaptureSettings {
    /// Artifact name prefix
    pub fn process_name(&self) -> String {
        if let Some(name) = &self.process_name {
            return name.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "app".to_string())
    }

    /// Output directory.
    ///
    /// `VK_JSON_FILE_PATH` wins over the configured directory, which wins
    /// over `captures/` in the app data directory.
    pub fn resolve_output_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(OUTPUT_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        if let Some(dir) = &self.output_dir {
            return Ok(dir.clone());
        }
        app_data_dir().map(|p| p.join("captures")).ok_or_else(|| {
            PcJsonError::Config("Could not determine app data directory".to_string())
        })
    }
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset
    pub filter: String,

    /// Also write daily-rotated logs here
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            log_dir: None,
        }
    }
}

/// All settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Version for future migration support
    #[serde(default = "default_settings_version")]
    pub version: u32,

    #[serde(default)]
    pub generator: GeneratorOptions,

    #[serde(default)]
    pub capture: CaptureSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

fn default_settings_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: 1,
            generator: GeneratorOptions::default(),
            capture: CaptureSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PcJsonError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            PcJsonError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Load settings, returning defaults when the file is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save settings as TOML, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                PcJsonError::Config(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| PcJsonError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            PcJsonError::Config(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::UuidMode;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.version, 1);
        assert_eq!(settings.generator.uuid_mode, UuidMode::ContentHash);
        assert!(settings.generator.pretty);
        assert_eq!(settings.logging.filter, DEFAULT_LOG_FILTER);
        assert!(!settings.capture.reservation_headers);
    }

    #[test]
    fn test_partial_settings() {
        let settings: Settings = toml::from_str(
            r#"
            [generator]
            uuid_mode = "content_hash_excluding_filenames"

            [capture]
            process_name = "demo"
            "#,
        )
        .unwrap();
        assert_eq!(
            settings.generator.uuid_mode,
            UuidMode::ContentHashExcludingFilenames
        );
        assert!(settings.generator.pretty);
        assert_eq!(settings.capture.process_name(), "demo");
        assert_eq!(settings.logging, LoggingSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);

        let mut settings = Settings::default();
        settings.generator.pretty = false;
        settings.capture.output_dir = Some(PathBuf::from("/tmp/out"));
        settings.logging.log_dir = Some(PathBuf::from("/tmp/logs"));
        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_load_or_default_on_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "generator = 5").unwrap();

        assert!(Settings::load(&path).is_err());
        assert_eq!(Settings::load_or_default(&path), Settings::default());
        assert_eq!(
            Settings::load_or_default(dir.path().join("missing.toml")),
            Settings::default()
        );
    }

    #[test]
    fn test_configured_output_dir() {
        let capture = CaptureSettings {
            output_dir: Some(PathBuf::from("/tmp/captures")),
            ..Default::default()
        };
        if std::env::var_os(OUTPUT_DIR_ENV).is_none() {
            assert_eq!(
                capture.resolve_output_dir().unwrap(),
                PathBuf::from("/tmp/captures")
            );
        }
    }
}
