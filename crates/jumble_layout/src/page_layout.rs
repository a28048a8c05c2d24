//! Primary page layout
//!
//! The shell every primary page (home, notifications, me, ...) renders in.
//! It embeds a [`ScrollVisibilityController`] and turns its state into
//! [`PageChrome`]: which of the title bar, bottom navigation and scroll-to-top
//! affordance are present, and whether each is currently shown.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use jumble_core::{shared_dispatcher, PageId};
//! use jumble_layout::{PrimaryPageLayout, ScrollSurface, Viewport};
//!
//! let dispatcher = shared_dispatcher();
//! let viewport = Arc::new(Viewport::new(dispatcher.clone(), 800.0, 6000.0));
//!
//! let mut layout = PrimaryPageLayout::new(
//!     PageId::from_static("home"),
//!     PageId::from_static("home"),
//!     true,
//!     viewport.clone(),
//!     dispatcher,
//! )
//! .titlebar(true)
//! .scroll_to_top_button(true);
//! layout.mount();
//!
//! viewport.scroll_to(900.0);
//! assert_eq!(layout.chrome().titlebar, Some(false));
//! ```

use std::sync::Arc;

use jumble_core::{PageId, SharedDispatcher};

use crate::controller::{ScrollToTopHandle, ScrollVisibilityController};
use crate::surface::{ScrollContainer, Viewport};
use crate::visibility::VisibilityThresholds;

/// Which chrome elements a layout renders right now.
///
/// `None` means the element is not part of the layout at all; `Some(shown)`
/// means it is present and either shown or slid out of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageChrome {
    pub titlebar: Option<bool>,
    pub bottom_navigation: Option<bool>,
    pub scroll_to_top: Option<bool>,
}

/// Page shell with scroll-driven chrome
pub struct PrimaryPageLayout {
    controller: ScrollVisibilityController,
    has_titlebar: bool,
    display_scroll_to_top_button: bool,
}

impl PrimaryPageLayout {
    pub fn new(
        page: PageId,
        current_page: PageId,
        small_screen: bool,
        viewport: Arc<Viewport>,
        dispatcher: SharedDispatcher,
    ) -> Self {
        Self {
            controller: ScrollVisibilityController::new(
                page,
                current_page,
                small_screen,
                viewport,
                dispatcher,
            ),
            has_titlebar: false,
            display_scroll_to_top_button: false,
        }
    }

    /// Builder: render a title bar
    pub fn titlebar(mut self, enabled: bool) -> Self {
        self.has_titlebar = enabled;
        self
    }

    /// Builder: render the scroll-to-top affordance
    pub fn scroll_to_top_button(mut self, enabled: bool) -> Self {
        self.display_scroll_to_top_button = enabled;
        self
    }

    /// Builder: override the visibility thresholds
    pub fn thresholds(mut self, thresholds: VisibilityThresholds) -> Self {
        self.controller = self.controller.thresholds(thresholds);
        self
    }

    pub fn page(&self) -> &PageId {
        self.controller.owned_page()
    }

    pub fn controller(&self) -> &ScrollVisibilityController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ScrollVisibilityController {
        &mut self.controller
    }

    pub fn mount(&mut self) {
        self.controller.mount();
    }

    pub fn unmount(&mut self) {
        self.controller.unmount();
    }

    pub fn set_small_screen(&mut self, small_screen: bool) {
        self.controller.set_small_screen(small_screen);
    }

    pub fn set_current_page(&mut self, page: PageId) {
        self.controller.set_current_page(page);
    }

    /// Bind the internal container that scrolls on large screens
    pub fn bind_container(&mut self, container: Option<Arc<ScrollContainer>>) {
        self.controller.bind_container(container);
    }

    pub fn handle(&self) -> ScrollToTopHandle {
        self.controller.handle()
    }

    pub fn scroll_to_top(&self) {
        self.controller.scroll_to_top();
    }

    pub fn chrome(&self) -> PageChrome {
        let small = self.controller.is_small_screen();
        let visible = self.controller.visible();

        PageChrome {
            // Large screens keep the title bar pinned
            titlebar: self.has_titlebar.then_some(!small || visible),
            bottom_navigation: small.then_some(visible),
            scroll_to_top: self
                .display_scroll_to_top_button
                .then(|| self.controller.scroll_to_top_visible()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::ScrollSurface;
    use jumble_core::shared_dispatcher;

    fn layout(small_screen: bool) -> (PrimaryPageLayout, Arc<Viewport>, SharedDispatcher) {
        let dispatcher = shared_dispatcher();
        let viewport = Arc::new(Viewport::new(dispatcher.clone(), 800.0, 10_000.0));
        let layout = PrimaryPageLayout::new(
            PageId::from_static("home"),
            PageId::from_static("home"),
            small_screen,
            viewport.clone(),
            dispatcher.clone(),
        );
        (layout, viewport, dispatcher)
    }

    #[test]
    fn test_default_layout_has_no_optional_chrome() {
        let (mut layout, _, _) = layout(false);
        layout.mount();
        assert_eq!(layout.chrome(), PageChrome::default());
    }

    #[test]
    fn test_small_screen_chrome_follows_visibility() {
        let (layout, viewport, _) = layout(true);
        let mut layout = layout.titlebar(true).scroll_to_top_button(true);
        layout.mount();

        assert_eq!(
            layout.chrome(),
            PageChrome {
                titlebar: Some(true),
                bottom_navigation: Some(true),
                scroll_to_top: Some(false),
            }
        );

        viewport.scroll_to(900.0);
        viewport.scroll_to(2400.0);
        assert_eq!(
            layout.chrome(),
            PageChrome {
                titlebar: Some(false),
                bottom_navigation: Some(false),
                scroll_to_top: Some(false),
            }
        );

        viewport.scroll_to(2000.0);
        assert_eq!(
            layout.chrome(),
            PageChrome {
                titlebar: Some(true),
                bottom_navigation: Some(true),
                scroll_to_top: Some(true),
            }
        );
    }

    #[test]
    fn test_large_screen_titlebar_stays_pinned() {
        let (layout, _, dispatcher) = layout(false);
        let mut layout = layout.titlebar(true);
        let container = Arc::new(ScrollContainer::new(dispatcher, 600.0, 8_000.0));
        layout.bind_container(Some(container.clone()));
        layout.mount();

        container.scroll_to(900.0);
        container.scroll_to(1500.0);
        assert!(!layout.controller().visible());

        let chrome = layout.chrome();
        assert_eq!(chrome.titlebar, Some(true));
        assert_eq!(chrome.bottom_navigation, None);
    }
}
