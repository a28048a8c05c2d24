//! Jumble Theme System
//!
//! Holds the user's theme preference and the color scheme it resolves to.
//!
//! # Overview
//!
//! - [`ThemeSetting`]: the tri-state preference shown in settings (system, light, dark)
//! - [`ColorScheme`]: the concrete scheme widgets paint with
//! - [`ThemeState`]: runtime state combining the preference with the scheme
//!   the host platform reports
//!
//! # Quick Start
//!
//! ```rust
//! use jumble_theme::{ColorScheme, ThemeSetting, ThemeState};
//!
//! let theme = ThemeState::new(ThemeSetting::System);
//! theme.set_system_scheme(ColorScheme::Dark);
//! assert_eq!(theme.scheme(), ColorScheme::Dark);
//!
//! theme.set_setting(ThemeSetting::Light);
//! assert_eq!(theme.scheme(), ColorScheme::Light);
//! ```

pub mod setting;
pub mod state;

pub use setting::{ColorScheme, ParseThemeSettingError, ThemeSetting};
pub use state::{set_redraw_callback, ThemeState};
