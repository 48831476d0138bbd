use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use brochure_types::ui::UiOptions;

/// Glide duration used when the config does not set one.
pub const DEFAULT_SCROLL_MS: u64 = 250;

#[derive(Debug, Default, Deserialize)]
pub struct BrochureConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable scroll glides; anchors jump instantly.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Duration of the smooth-scroll glide in milliseconds.
    pub scroll_ms: Option<u64>,
}

impl BrochureConfig {
    /// Load the config file, if one exists.
    ///
    /// `Ok(None)` means no file was found; that is the common case and not
    /// an error. A file that exists but cannot be read or parsed is an
    /// error so a typo does not silently fall back to defaults.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve the presentation options this config selects.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        match &self.app {
            Some(app) => UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            },
            None => UiOptions::default(),
        }
    }

    /// Glide duration for anchor scrolls.
    #[must_use]
    pub fn scroll_duration(&self) -> std::time::Duration {
        let ms = self
            .app
            .as_ref()
            .and_then(|app| app.scroll_ms)
            .unwrap_or(DEFAULT_SCROLL_MS);
        std::time::Duration::from_millis(ms)
    }
}

fn config_path() -> Option<PathBuf> {
    // Primary: ~/.brochure/config.toml; fallback for constrained
    // environments: ./.brochure/config.toml.
    if let Some(home) = dirs::home_dir() {
        let primary = home.join(".brochure").join("config.toml");
        if primary.exists() {
            return Some(primary);
        }
        let local = PathBuf::from(".brochure").join("config.toml");
        if local.exists() {
            return Some(local);
        }
        return Some(primary);
    }
    Some(PathBuf::from(".brochure").join("config.toml"))
}
