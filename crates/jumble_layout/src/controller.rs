//! Scroll visibility controller
//!
//! Owns the listener lifecycle for one primary page layout. The controller
//! attaches exactly one `SCROLL` listener to the resolved surface while it is
//! mounted and its page is the current page, and detaches it otherwise.
//!
//! ```text
//!            mount / set_current_page / set_small_screen / bind_container
//!   Detached ───────────────────────────────────────────────────────────▶ Attached
//!      ▲            (mounted && owned == current && surface exists)          │
//!      └─────────────────────────────────────────────────────────────────────┘
//!                       unmount / page mismatch / re-sync / drop
//! ```
//!
//! The listener closure reads the tracking state through a shared handle, so
//! it always decides against the latest recorded offset without having to be
//! re-registered after every decision.

use std::sync::{Arc, Mutex};

use jumble_core::{event_types, ListenerId, PageId, SharedDispatcher, TargetId};
use tracing::{debug, trace};

use crate::surface::{ScrollContainer, ScrollSurface, SurfaceBinding, Viewport};
use crate::visibility::{decide, ScrollTrackingState, VisibilityThresholds};

/// Whether a scroll listener is currently registered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerState {
    Detached,
    Attached { target: TargetId, id: ListenerId },
}

impl ListenerState {
    pub fn is_attached(&self) -> bool {
        matches!(self, ListenerState::Attached { .. })
    }
}

/// Capability to jump the active surface back to the top.
///
/// Obtained from [`ScrollVisibilityController::handle`]. Always reads the
/// current screen mode and container binding when invoked.
#[derive(Clone)]
pub struct ScrollToTopHandle {
    binding: Arc<SurfaceBinding>,
}

impl ScrollToTopHandle {
    /// Scroll to offset 0. Visibility is left to the resulting scroll event.
    pub fn scroll_to_top(&self) {
        if self.binding.is_small_screen() {
            self.binding.viewport().scroll_to(0.0);
        } else if let Some(container) = self.binding.container() {
            container.scroll_to(0.0);
        }
    }
}

/// Derives chrome visibility from scroll events on one page's surface
pub struct ScrollVisibilityController {
    owned_page: PageId,
    current_page: PageId,
    thresholds: VisibilityThresholds,
    binding: Arc<SurfaceBinding>,
    tracking: Arc<Mutex<ScrollTrackingState>>,
    dispatcher: SharedDispatcher,
    listener: ListenerState,
    mounted: bool,
}

impl ScrollVisibilityController {
    pub fn new(
        owned_page: PageId,
        current_page: PageId,
        small_screen: bool,
        viewport: Arc<Viewport>,
        dispatcher: SharedDispatcher,
    ) -> Self {
        Self {
            owned_page,
            current_page,
            thresholds: VisibilityThresholds::default(),
            binding: Arc::new(SurfaceBinding::new(viewport, small_screen)),
            tracking: Arc::new(Mutex::new(ScrollTrackingState::default())),
            dispatcher,
            listener: ListenerState::Detached,
            mounted: false,
        }
    }

    /// Builder: use custom thresholds. Takes effect on the next attach.
    pub fn thresholds(mut self, thresholds: VisibilityThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn owned_page(&self) -> &PageId {
        &self.owned_page
    }

    pub fn current_page(&self) -> &PageId {
        &self.current_page
    }

    /// Whether this controller's page is the current page
    pub fn is_active(&self) -> bool {
        self.owned_page == self.current_page
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_small_screen(&self) -> bool {
        self.binding.is_small_screen()
    }

    pub fn viewport(&self) -> &Arc<Viewport> {
        self.binding.viewport()
    }

    pub fn container(&self) -> Option<Arc<ScrollContainer>> {
        self.binding.container()
    }

    pub fn listener_state(&self) -> ListenerState {
        self.listener
    }

    pub fn visibility_thresholds(&self) -> &VisibilityThresholds {
        &self.thresholds
    }

    pub fn state(&self) -> ScrollTrackingState {
        *self.tracking.lock().unwrap()
    }

    pub fn visible(&self) -> bool {
        self.state().visible
    }

    pub fn last_scroll_top(&self) -> f32 {
        self.state().last_scroll_top
    }

    /// Whether the scroll-to-top affordance should show
    pub fn scroll_to_top_visible(&self) -> bool {
        self.state().shows_scroll_to_top(&self.thresholds)
    }

    pub fn handle(&self) -> ScrollToTopHandle {
        ScrollToTopHandle {
            binding: Arc::clone(&self.binding),
        }
    }

    pub fn scroll_to_top(&self) {
        self.handle().scroll_to_top();
    }

    /// Layout entered the tree
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        debug!(page = %self.owned_page, small_screen = self.is_small_screen(), "layout mounted");
        self.sync_listener();
        self.reset_for_page();
    }

    /// Layout left the tree; removes the listener
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        debug!(page = %self.owned_page, "layout unmounted");
        self.detach();
    }

    /// Bind (or unbind) the internal scroll container used on large screens
    pub fn bind_container(&mut self, container: Option<Arc<ScrollContainer>>) {
        self.binding.bind_container(container);
        if self.mounted {
            self.sync_listener();
        }
    }

    /// Screen-size mode changed: move the listener and show chrome
    pub fn set_small_screen(&mut self, small_screen: bool) {
        if !self.binding.set_small_screen(small_screen) {
            return;
        }
        debug!(page = %self.owned_page, small_screen, "screen mode changed");
        self.tracking.lock().unwrap().visible = true;
        if self.mounted {
            self.sync_listener();
        }
    }

    /// The navigator's current page changed
    pub fn set_current_page(&mut self, page: PageId) {
        if page == self.current_page {
            return;
        }
        trace!(page = %self.owned_page, current = %page, "current page changed");
        self.current_page = page;
        if self.mounted {
            self.sync_listener();
            self.reset_for_page();
        }
    }

    /// Small-screen pages start at the top with chrome showing
    fn reset_for_page(&self) {
        if !self.is_small_screen() {
            return;
        }
        // Scroll first: the resulting event takes the tracking lock itself
        self.binding.viewport().scroll_to(0.0);
        self.tracking.lock().unwrap().visible = true;
    }

    /// Detach, then attach one listener if this page should be listening
    fn sync_listener(&mut self) {
        self.detach();
        if self.mounted && self.is_active() {
            self.attach();
        }
    }

    fn attach(&mut self) {
        let Some(surface) = self.binding.resolve() else {
            trace!(page = %self.owned_page, "no scroll surface bound; listener not attached");
            return;
        };

        let target = surface.target();
        let tracking = Arc::clone(&self.tracking);
        let thresholds = self.thresholds;
        let page = self.owned_page.clone();

        let id = self.dispatcher.lock().unwrap().register(
            target,
            event_types::SCROLL,
            move |_event| {
                let metrics = surface.metrics();
                let mut state = tracking.lock().unwrap();
                let decision = decide(&state, &metrics, &thresholds);
                if state.apply(decision) {
                    trace!(
                        page = %page,
                        offset = metrics.offset,
                        visible = state.visible,
                        ?decision,
                        "chrome visibility changed"
                    );
                }
            },
        );

        trace!(page = %self.owned_page, target_id = target, "scroll listener attached");
        self.listener = ListenerState::Attached { target, id };
    }

    fn detach(&mut self) {
        if let ListenerState::Attached { target, id } = self.listener {
            self.dispatcher.lock().unwrap().unregister(id);
            trace!(page = %self.owned_page, target_id = target, "scroll listener detached");
        }
        self.listener = ListenerState::Detached;
    }
}

impl Drop for ScrollVisibilityController {
    fn drop(&mut self) {
        if let ListenerState::Attached { id, .. } = self.listener {
            if let Ok(mut dispatcher) = self.dispatcher.lock() {
                dispatcher.unregister(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::VIEWPORT_TARGET;
    use jumble_core::shared_dispatcher;

    const HOME: PageId = PageId::from_static("home");
    const NOTIFICATIONS: PageId = PageId::from_static("notifications");

    fn small_screen_controller() -> (ScrollVisibilityController, SharedDispatcher) {
        let dispatcher = shared_dispatcher();
        let viewport = Arc::new(Viewport::new(dispatcher.clone(), 800.0, 10_000.0));
        let mut controller =
            ScrollVisibilityController::new(HOME, HOME, true, viewport, dispatcher.clone());
        controller.mount();
        (controller, dispatcher)
    }

    #[test]
    fn test_viewport_scrolls_drive_visibility() {
        let (controller, _) = small_screen_controller();
        let viewport = controller.viewport().clone();

        viewport.scroll_to(900.0);
        viewport.scroll_to(950.0);
        assert!(!controller.visible());

        viewport.scroll_to(870.0);
        assert!(controller.visible());
        assert_eq!(controller.last_scroll_top(), 870.0);
    }

    #[test]
    fn test_mount_attaches_one_listener() {
        let (controller, dispatcher) = small_screen_controller();
        assert_eq!(
            dispatcher
                .lock()
                .unwrap()
                .listener_count(VIEWPORT_TARGET, event_types::SCROLL),
            1
        );
        assert!(matches!(
            controller.listener_state(),
            ListenerState::Attached { target: VIEWPORT_TARGET, .. }
        ));
    }

    #[test]
    fn test_inactive_page_does_not_listen() {
        let (mut controller, dispatcher) = small_screen_controller();
        controller.set_current_page(NOTIFICATIONS);
        assert_eq!(controller.listener_state(), ListenerState::Detached);
        assert!(dispatcher.lock().unwrap().is_empty());

        // Scrolls while another page is active do not touch our state
        controller.viewport().scroll_to(2000.0);
        assert!(controller.visible());
        assert_eq!(controller.last_scroll_top(), 0.0);
    }

    #[test]
    fn test_page_change_resets_viewport_and_visibility() {
        let (mut controller, _) = small_screen_controller();
        let viewport = controller.viewport().clone();
        viewport.scroll_to(900.0);
        viewport.scroll_to(2000.0);
        assert!(!controller.visible());

        controller.set_current_page(NOTIFICATIONS);
        controller.set_current_page(HOME);
        assert!(controller.visible());
        assert_eq!(viewport.scroll_y(), 0.0);
    }

    #[test]
    fn test_large_screen_page_change_keeps_offset() {
        let dispatcher = shared_dispatcher();
        let viewport = Arc::new(Viewport::new(dispatcher.clone(), 800.0, 10_000.0));
        viewport.scroll_to(500.0);
        let mut controller =
            ScrollVisibilityController::new(HOME, HOME, false, viewport.clone(), dispatcher);
        controller.mount();
        controller.set_current_page(NOTIFICATIONS);
        assert_eq!(viewport.scroll_y(), 500.0);
    }

    #[test]
    fn test_unmount_and_drop_remove_listener() {
        let (mut controller, dispatcher) = small_screen_controller();
        controller.unmount();
        assert!(dispatcher.lock().unwrap().is_empty());

        controller.mount();
        assert_eq!(dispatcher.lock().unwrap().len(), 1);
        drop(controller);
        assert!(dispatcher.lock().unwrap().is_empty());
    }

    #[test]
    fn test_scroll_to_top_handle_follows_screen_mode() {
        let dispatcher = shared_dispatcher();
        let viewport = Arc::new(Viewport::new(dispatcher.clone(), 800.0, 10_000.0));
        let container = Arc::new(ScrollContainer::new(dispatcher.clone(), 600.0, 5_000.0));
        let mut controller =
            ScrollVisibilityController::new(HOME, HOME, false, viewport.clone(), dispatcher);
        controller.bind_container(Some(container.clone()));
        controller.mount();

        let handle = controller.handle();
        container.scroll_to(1200.0);
        viewport.scroll_to(300.0);
        handle.scroll_to_top();
        assert_eq!(container.scroll_top(), 0.0);
        assert_eq!(viewport.scroll_y(), 300.0);

        controller.set_small_screen(true);
        container.scroll_to(400.0);
        handle.scroll_to_top();
        assert_eq!(viewport.scroll_y(), 0.0);
        assert_eq!(container.scroll_top(), 400.0);
    }
}
