//! Theme preference and color scheme types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Concrete color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// The opposite scheme
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

/// User-facing theme preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    /// Follow the platform's color scheme
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeSetting {
    /// All settings in the order the selector lists them
    pub const ALL: [ThemeSetting; 3] = [ThemeSetting::System, ThemeSetting::Light, ThemeSetting::Dark];

    /// Stable identifier used in config files and select values
    pub fn id(self) -> &'static str {
        match self {
            ThemeSetting::System => "system",
            ThemeSetting::Light => "light",
            ThemeSetting::Dark => "dark",
        }
    }

    /// Resolve against the scheme the platform currently reports
    pub fn resolve(self, system: ColorScheme) -> ColorScheme {
        match self {
            ThemeSetting::System => system,
            ThemeSetting::Light => ColorScheme::Light,
            ThemeSetting::Dark => ColorScheme::Dark,
        }
    }
}

impl fmt::Display for ThemeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme setting `{0}` (expected system, light or dark)")]
pub struct ParseThemeSettingError(pub String);

impl FromStr for ThemeSetting {
    type Err = ParseThemeSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ThemeSetting::ALL
            .into_iter()
            .find(|setting| setting.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseThemeSettingError(trimmed.to_string()))
    }
}
