//! Jumble Layout
//!
//! Page shells and the scroll tracking behind them.
//!
//! # Modules
//!
//! - [`surface`]: the viewport and internal scroll containers
//! - [`visibility`]: the per-event chrome visibility decision
//! - [`controller`]: listener lifecycle, page-change reset and scroll-to-top
//! - [`page_layout`]: [`PrimaryPageLayout`] and the [`PageChrome`] it renders
//! - [`responsive`]: breakpoints and small-screen detection

pub mod controller;
pub mod page_layout;
pub mod responsive;
pub mod surface;
pub mod visibility;

pub use controller::{ListenerState, ScrollToTopHandle, ScrollVisibilityController};
pub use page_layout::{PageChrome, PrimaryPageLayout};
pub use responsive::{device_class_for_width, is_small_screen_width, Breakpoints, DeviceClass};
pub use surface::{
    ScrollContainer, ScrollMetrics, ScrollSurface, SurfaceBinding, SurfaceKind, Viewport,
    VIEWPORT_TARGET,
};
pub use visibility::{decide, ScrollDecision, ScrollTrackingState, VisibilityThresholds};

/// Commonly used types
pub mod prelude {
    pub use crate::controller::{ScrollToTopHandle, ScrollVisibilityController};
    pub use crate::page_layout::{PageChrome, PrimaryPageLayout};
    pub use crate::surface::{ScrollContainer, ScrollSurface, Viewport};
    pub use crate::visibility::VisibilityThresholds;
}
