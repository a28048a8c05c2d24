//! Chrome visibility decisions
//!
//! Given the current geometry of the active scroll surface and the tracking
//! state from the previous decision, [`decide`] picks what happens to the
//! title bar and bottom navigation:
//!
//! 1. At the bottom edge (within `bottom_tolerance`) chrome is revealed and
//!    the recorded offset is left alone.
//! 2. Within `reveal_offset` of the top chrome is revealed and the offset is
//!    recorded.
//! 3. Past that, moving down by more than `direction_delta` since the last
//!    recorded offset hides chrome; moving up by more than `direction_delta`
//!    reveals it. Smaller movements are ignored.

use serde::{Deserialize, Serialize};

use crate::surface::ScrollMetrics;

/// Distances that drive the visibility decision, in logical pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityThresholds {
    /// Offsets at or above the top within this distance always show chrome
    pub reveal_offset: f32,
    /// Minimum movement since the last decision that counts as a direction change
    pub direction_delta: f32,
    /// How close to the end of the content counts as "at the bottom"
    pub bottom_tolerance: f32,
}

impl VisibilityThresholds {
    pub const DEFAULT: Self = Self {
        reveal_offset: 800.0,
        direction_delta: 20.0,
        bottom_tolerance: 20.0,
    };
}

impl Default for VisibilityThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Visibility plus the offset at which it was last decided
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrackingState {
    pub visible: bool,
    /// Offset recorded by the last decision that recorded one. Not the live offset.
    pub last_scroll_top: f32,
}

impl Default for ScrollTrackingState {
    fn default() -> Self {
        Self {
            visible: true,
            last_scroll_top: 0.0,
        }
    }
}

/// Outcome of one scroll event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDecision {
    /// Surface reached the bottom edge
    RevealAtBottom,
    /// Offset is within the reveal zone near the top
    RevealNearTop { scroll_top: f32 },
    /// Moved down past the delta
    Hide { scroll_top: f32 },
    /// Moved up past the delta
    Reveal { scroll_top: f32 },
    /// Movement inside the dead band
    Hold,
}

/// Decide what a scroll event at `metrics` does to `state`
pub fn decide(
    state: &ScrollTrackingState,
    metrics: &ScrollMetrics,
    thresholds: &VisibilityThresholds,
) -> ScrollDecision {
    if metrics.is_at_bottom(thresholds.bottom_tolerance) {
        return ScrollDecision::RevealAtBottom;
    }

    let scroll_top = metrics.offset;
    if scroll_top <= thresholds.reveal_offset {
        return ScrollDecision::RevealNearTop { scroll_top };
    }

    let diff = scroll_top - state.last_scroll_top;
    if diff > thresholds.direction_delta {
        ScrollDecision::Hide { scroll_top }
    } else if diff < -thresholds.direction_delta {
        ScrollDecision::Reveal { scroll_top }
    } else {
        ScrollDecision::Hold
    }
}

impl ScrollTrackingState {
    /// Apply a decision. Returns `true` if `visible` changed.
    pub fn apply(&mut self, decision: ScrollDecision) -> bool {
        let was_visible = self.visible;
        match decision {
            ScrollDecision::RevealAtBottom => self.visible = true,
            ScrollDecision::RevealNearTop { scroll_top } | ScrollDecision::Reveal { scroll_top } => {
                self.visible = true;
                self.last_scroll_top = scroll_top;
            }
            ScrollDecision::Hide { scroll_top } => {
                self.visible = false;
                self.last_scroll_top = scroll_top;
            }
            ScrollDecision::Hold => {}
        }
        was_visible != self.visible
    }

    /// Whether the scroll-to-top affordance should show
    pub fn shows_scroll_to_top(&self, thresholds: &VisibilityThresholds) -> bool {
        self.visible && self.last_scroll_top > thresholds.reveal_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: VisibilityThresholds = VisibilityThresholds::DEFAULT;

    /// Tall content so that none of the offsets below count as at-bottom
    fn at(offset: f32) -> ScrollMetrics {
        ScrollMetrics::new(offset, 800.0, 10_000.0)
    }

    fn run(offsets: &[f32]) -> ScrollTrackingState {
        let mut state = ScrollTrackingState::default();
        for &o in offsets {
            let d = decide(&state, &at(o), &T);
            state.apply(d);
        }
        state
    }

    #[test]
    fn test_scrolling_down_hides() {
        let state = run(&[0.0, 900.0, 950.0]);
        assert!(!state.visible);
        assert_eq!(state.last_scroll_top, 950.0);
    }

    #[test]
    fn test_scrolling_up_reveals() {
        let state = run(&[0.0, 900.0, 870.0]);
        assert!(state.visible);
        assert_eq!(state.last_scroll_top, 870.0);
    }

    #[test]
    fn test_small_movement_holds() {
        // 0 -> 900 hides (diff 900 from baseline 0), then +5 is in the band
        let before = run(&[0.0, 900.0]);
        let after = run(&[0.0, 900.0, 905.0]);
        assert_eq!(before.visible, after.visible);
        assert_eq!(after.last_scroll_top, 900.0);
    }

    #[test]
    fn test_band_is_measured_from_last_decision() {
        // Creeping down in small steps accumulates until it crosses the delta
        let state = run(&[0.0, 1000.0, 970.0, 980.0, 985.0]);
        assert!(state.visible);
        assert_eq!(state.last_scroll_top, 970.0);
        let state = run(&[0.0, 1000.0, 970.0, 980.0, 991.0]);
        assert!(!state.visible);
    }

    #[test]
    fn test_near_top_always_visible() {
        let mut state = ScrollTrackingState {
            visible: false,
            last_scroll_top: 3000.0,
        };
        for offset in [800.0, 640.0, 0.0, 799.5] {
            state.apply(decide(&state, &at(offset), &T));
            assert!(state.visible, "offset {offset} should reveal");
        }
    }

    #[test]
    fn test_at_bottom_reveals_without_recording() {
        let mut state = ScrollTrackingState {
            visible: false,
            last_scroll_top: 1500.0,
        };
        let bottom = ScrollMetrics::new(1985.0, 800.0, 2800.0);
        let d = decide(&state, &bottom, &T);
        assert_eq!(d, ScrollDecision::RevealAtBottom);
        assert!(state.apply(d));
        assert!(state.visible);
        assert_eq!(state.last_scroll_top, 1500.0);
    }

    #[test]
    fn test_scroll_to_top_affordance() {
        let state = run(&[0.0, 900.0]);
        assert!(!state.shows_scroll_to_top(&T));

        let state = run(&[0.0, 900.0, 1800.0, 1200.0]);
        assert!(state.visible);
        assert!(state.shows_scroll_to_top(&T));

        let state = run(&[0.0, 900.0, 1800.0, 700.0]);
        assert!(!state.shows_scroll_to_top(&T));
    }

    #[test]
    fn test_thresholds_deserialize_with_defaults() {
        let t: VisibilityThresholds = toml::from_str("reveal_offset = 400.0").unwrap();
        assert_eq!(t.reveal_offset, 400.0);
        assert_eq!(t.direction_delta, 20.0);
        assert_eq!(t.bottom_tolerance, 20.0);
    }
}
