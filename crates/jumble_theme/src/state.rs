//! Theme state
//!
//! ThemeState is usable as a process-wide singleton (`init`/`get`) or as a
//! plain value owned by whoever wires the app together.

use crate::setting::{ColorScheme, ThemeSetting};
use std::sync::{atomic::AtomicBool, atomic::Ordering, Mutex, OnceLock, RwLock};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global redraw callback - set by the app layer to trigger UI updates
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
///
/// Called whenever the resolved color scheme changes.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK.lock().unwrap() = Some(callback);
}

/// Trigger a redraw via the registered callback
fn trigger_redraw() {
    if let Some(callback) = *REDRAW_CALLBACK.lock().unwrap() {
        callback();
    }
}

/// Theme preference plus the platform scheme it resolves against
pub struct ThemeState {
    /// The user's preference
    setting: RwLock<ThemeSetting>,

    /// Scheme last reported by the platform
    system_scheme: RwLock<ColorScheme>,

    /// Flag indicating the resolved scheme changed since the last paint
    needs_repaint: AtomicBool,
}

impl ThemeState {
    pub fn new(setting: ThemeSetting) -> Self {
        Self {
            setting: RwLock::new(setting),
            system_scheme: RwLock::new(ColorScheme::default()),
            needs_repaint: AtomicBool::new(false),
        }
    }

    /// Initialize the global theme state (call once at app startup)
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(setting: ThemeSetting) {
        let _ = THEME_STATE.set(ThemeState::new(setting));
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    // ========== Preference ==========

    pub fn setting(&self) -> ThemeSetting {
        *self.setting.read().unwrap()
    }

    /// Change the preference, repainting if the resolved scheme moves
    pub fn set_setting(&self, setting: ThemeSetting) {
        let before = self.scheme();
        {
            let mut current = self.setting.write().unwrap();
            if *current == setting {
                return;
            }
            tracing::debug!(
                "ThemeState::set_setting - switching from {} to {}",
                *current,
                setting
            );
            *current = setting;
        }
        self.after_change(before);
    }

    // ========== Color Scheme ==========

    /// The scheme widgets should paint with
    pub fn scheme(&self) -> ColorScheme {
        self.setting().resolve(self.system_scheme())
    }

    pub fn system_scheme(&self) -> ColorScheme {
        *self.system_scheme.read().unwrap()
    }

    /// Record the scheme the platform reports (e.g. on an OS appearance change)
    pub fn set_system_scheme(&self, scheme: ColorScheme) {
        let before = self.scheme();
        {
            let mut current = self.system_scheme.write().unwrap();
            if *current == scheme {
                return;
            }
            tracing::debug!(
                "ThemeState::set_system_scheme - platform reports {:?}",
                scheme
            );
            *current = scheme;
        }
        self.after_change(before);
    }

    fn after_change(&self, before: ColorScheme) {
        if self.scheme() != before {
            self.needs_repaint.store(true, Ordering::SeqCst);
            trigger_redraw();
        }
    }

    // ========== Dirty Flags ==========

    /// Check if theme changes require repaint
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint.load(Ordering::SeqCst)
    }

    /// Clear the repaint flag
    pub fn clear_repaint(&self) {
        self.needs_repaint.store(false, Ordering::SeqCst);
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeSetting::default())
    }
}
