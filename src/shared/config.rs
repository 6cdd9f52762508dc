//! Site Configuration
//!
//! Everything the page behaviors treat as a constant lives here so it can be
//! tuned from `autoshine.toml`. Every field has a default; a missing or
//! partial file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::NotificationTimings;
use crate::domain::services::RevealOptions;

/// Config file name searched for in the standard locations
pub const CONFIG_FILE_NAME: &str = "autoshine.toml";

/// Root configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub navigation: NavigationConfig,
    pub reveal: RevealOptions,
    pub notification: NotificationTimings,
    pub pricing: PricingConfig,
    pub storage: StorageConfig,
    pub forms: FormsConfig,
    pub loading: LoadingConfig,
}

/// Navigation and scrolling
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Page assumed when the location has no file name
    pub default_page: String,
    /// Fixed header height subtracted from anchor scroll targets
    pub header_offset: f32,
    /// Duration of a smooth scroll
    pub smooth_scroll_ms: u64,
    /// Easing name for smooth scrolls (`ease-in-out`, `linear`, ...)
    pub smooth_scroll_easing: String,
    /// Animation frame interval
    pub frame_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            default_page: "index.html".to_string(),
            header_offset: 80.0,
            smooth_scroll_ms: 400,
            smooth_scroll_easing: "ease-in-out".to_string(),
            frame_ms: 16,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// How long the price display keeps the `pulse` class
    pub pulse_ms: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self { pulse_ms: 600 }
    }
}

/// Preference storage
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key the theme preference is stored under
    pub theme_key: String,
    /// Preference file; defaults to the user data directory
    pub path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            theme_key: "theme".to_string(),
            path: None,
        }
    }
}

impl NavigationConfig {
    /// Frame interval, never zero so each frame moves the clock
    pub fn frame_interval(&self) -> u64 {
        self.frame_ms.max(1)
    }
}

impl StorageConfig {
    /// Resolved preference file location, if any can be determined
    pub fn preferences_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("autoshine").join("preferences.json"))
        })
    }
}

/// Form messages and defaults
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    pub booking_message: String,
    pub contact_message: String,
    pub vehicle_missing_message: String,
    /// Year the vehicle form returns to after a successful submit
    pub vehicle_default_year: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            booking_message:
                "Thank you for your booking! We will contact you soon to confirm your appointment."
                    .to_string(),
            contact_message: "Thank you for your message! We will get back to you soon."
                .to_string(),
            vehicle_missing_message: "Please fill in all required fields (marked with *)"
                .to_string(),
            vehicle_default_year: "2020".to_string(),
        }
    }
}

/// Body fade-in after load
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    pub fade_delay_ms: u64,
    pub transition: String,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            fade_delay_ms: 100,
            transition: "opacity 0.5s ease".to_string(),
        }
    }
}

impl SiteConfig {
    /// Find autoshine.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("autoshine").join(CONFIG_FILE_NAME)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME))),
            Some(PathBuf::from(CONFIG_FILE_NAME)),
        ];

        candidates.into_iter().flatten().find(|c| c.exists())
    }

    /// Load configuration from the standard locations, returning defaults
    /// if none exists or it fails to parse
    pub fn load() -> Self {
        let Some(path) = Self::find_config_path() else {
            return Self::default();
        };
        match Self::load_from_path(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded site config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring site config");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}
