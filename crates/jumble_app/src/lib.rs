//! Jumble Application Shell
//!
//! Components and wiring for the Jumble client:
//!
//! - [`JumbleApp`]: dispatcher, viewport, theme, locale, navigation and one
//!   primary page layout per configured page
//! - [`Username`] / [`SimpleUsername`]: profile names with loading state
//! - [`SettingsPage`]: language, theme, relays, key copy and about rows
//! - Headless scenario runner for checking layout behavior without a window
//!
//! # Example
//!
//! ```rust
//! use jumble_app::{AppConfig, JumbleApp};
//!
//! let mut app = JumbleApp::new(AppConfig::default(), 390.0, 844.0)?;
//! app.set_content_height(12_000.0);
//!
//! app.scroll_to(900.0);
//! assert_eq!(app.chrome().bottom_navigation, Some(false));
//!
//! app.navigate_primary("notifications")?;
//! assert_eq!(app.chrome().bottom_navigation, Some(true));
//! # Ok::<(), jumble_app::AppError>(())
//! ```

pub mod app;
pub mod build_info;
pub mod config;
pub mod copy_feedback;
pub mod error;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_scenario;
pub mod logging;
pub mod services;
pub mod settings;
pub mod username;

pub use app::JumbleApp;
pub use build_info::BuildInfo;
pub use config::{AppConfig, ConfigError};
pub use copy_feedback::{CopyFeedback, COPY_FEEDBACK_DURATION};
pub use error::{AppError, Result};
pub use headless_report::{HeadlessReport, ReportStatus};
pub use headless_runner::{run_loaded_scenario, run_scenario, RunOutcome};
pub use headless_scenario::{HeadlessScenario, ScenarioStep};
pub use logging::init_tracing;
pub use services::{
    to_profile, to_relay_settings, Clipboard, Destination, MemoryClipboard, Navigator,
    PageManager, Profile, ProfileCache, ProfileSource,
};
pub use settings::{AccountSecrets, SecretFormat, SettingRow, SettingsPage};
pub use username::{SimpleUsername, Username, UsernameView};

/// Commonly used types across the workspace
pub mod prelude {
    pub use crate::app::JumbleApp;
    pub use crate::config::AppConfig;
    pub use crate::services::{Clipboard, Navigator, ProfileSource};
    pub use crate::settings::{SecretFormat, SettingsPage};
    pub use crate::username::{SimpleUsername, Username, UsernameView};

    pub use jumble_core::PageId;
    pub use jumble_i18n::{t, Label, Language};
    pub use jumble_layout::{PageChrome, PrimaryPageLayout, ScrollSurface};
    pub use jumble_theme::ThemeSetting;
}
