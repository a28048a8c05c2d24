//! Application configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file is a valid
//! configuration:
//!
//! ```toml
//! language = "zh"
//! theme = "dark"
//! small_screen_breakpoint = 768.0
//! primary_pages = ["home", "notifications", "me"]
//!
//! [scroll]
//! reveal_offset = 800.0
//! direction_delta = 20.0
//! bottom_tolerance = 20.0
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use jumble_i18n::Language;
use jumble_layout::{Breakpoints, VisibilityThresholds};
use jumble_theme::ThemeSetting;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub language: Language,
    pub theme: ThemeSetting,
    /// Viewports narrower than this scroll as a whole (small-screen mode)
    pub small_screen_breakpoint: f32,
    /// Primary pages in navigation order; the first one is shown at startup
    pub primary_pages: Vec<String>,
    pub scroll: VisibilityThresholds,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: ThemeSetting::default(),
            small_screen_breakpoint: Breakpoints::DEFAULT.md,
            primary_pages: vec!["home".into(), "notifications".into(), "me".into()],
            scroll: VisibilityThresholds::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.small_screen_breakpoint.is_nan() || self.small_screen_breakpoint <= 0.0 {
            return Err(ConfigError::Invalid(
                "small_screen_breakpoint must be positive".to_string(),
            ));
        }

        let t = &self.scroll;
        for (name, value) in [
            ("reveal_offset", t.reveal_offset),
            ("direction_delta", t.direction_delta),
            ("bottom_tolerance", t.bottom_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "scroll.{name} must be a non-negative number"
                )));
            }
        }

        if self.primary_pages.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one primary page is required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for page in &self.primary_pages {
            if page.trim().is_empty() {
                return Err(ConfigError::Invalid("primary page names cannot be empty".to_string()));
            }
            if !seen.insert(page.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate primary page `{page}`")));
            }
        }
        Ok(())
    }
}
