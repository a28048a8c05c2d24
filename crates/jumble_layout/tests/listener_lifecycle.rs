//! Listener lifecycle across page switches and screen-mode toggles

use std::sync::Arc;

use jumble_core::{event_types, shared_dispatcher, PageId, SharedDispatcher};
use jumble_layout::{
    ListenerState, PrimaryPageLayout, ScrollContainer, ScrollSurface, Viewport, VIEWPORT_TARGET,
};

const HOME: PageId = PageId::from_static("home");
const ME: PageId = PageId::from_static("me");

struct Fixture {
    dispatcher: SharedDispatcher,
    viewport: Arc<Viewport>,
    container: Arc<ScrollContainer>,
}

impl Fixture {
    fn new() -> Self {
        let dispatcher = shared_dispatcher();
        let viewport = Arc::new(Viewport::new(dispatcher.clone(), 800.0, 12_000.0));
        let container = Arc::new(ScrollContainer::new(dispatcher.clone(), 700.0, 9_000.0));
        Self {
            dispatcher,
            viewport,
            container,
        }
    }

    fn layout(&self, page: PageId, current: PageId, small: bool) -> PrimaryPageLayout {
        let mut layout = PrimaryPageLayout::new(
            page,
            current,
            small,
            self.viewport.clone(),
            self.dispatcher.clone(),
        )
        .titlebar(true);
        layout.bind_container(Some(self.container.clone()));
        layout.mount();
        layout
    }

    fn viewport_listeners(&self) -> usize {
        self.dispatcher
            .lock()
            .unwrap()
            .listener_count(VIEWPORT_TARGET, event_types::SCROLL)
    }

    fn container_listeners(&self) -> usize {
        self.dispatcher
            .lock()
            .unwrap()
            .listener_count(self.container.target(), event_types::SCROLL)
    }

    fn total_listeners(&self) -> usize {
        self.dispatcher.lock().unwrap().len()
    }
}

#[test]
fn repeated_screen_mode_toggles_never_duplicate_listeners() {
    let fx = Fixture::new();
    let mut layout = fx.layout(HOME, HOME, false);
    assert_eq!(fx.container_listeners(), 1);
    assert_eq!(fx.viewport_listeners(), 0);

    for _ in 0..5 {
        layout.set_small_screen(true);
        assert_eq!(fx.viewport_listeners(), 1);
        assert_eq!(fx.container_listeners(), 0);

        layout.set_small_screen(false);
        assert_eq!(fx.viewport_listeners(), 0);
        assert_eq!(fx.container_listeners(), 1);
    }
    assert_eq!(fx.total_listeners(), 1);
}

#[test]
fn repeated_page_switches_never_duplicate_listeners() {
    let fx = Fixture::new();
    let mut home = fx.layout(HOME, HOME, true);
    let mut me = fx.layout(ME, HOME, true);

    for _ in 0..5 {
        home.set_current_page(ME);
        me.set_current_page(ME);
        assert_eq!(fx.viewport_listeners(), 1);
        assert!(!home.controller().listener_state().is_attached());
        assert!(me.controller().listener_state().is_attached());

        home.set_current_page(HOME);
        me.set_current_page(HOME);
        assert_eq!(fx.viewport_listeners(), 1);
        assert!(home.controller().listener_state().is_attached());
        assert_eq!(me.controller().listener_state(), ListenerState::Detached);
    }
}

#[test]
fn screen_mode_change_shows_chrome_without_scrolling() {
    let fx = Fixture::new();
    let mut layout = fx.layout(HOME, HOME, true);
    fx.viewport.scroll_to(1000.0);
    fx.viewport.scroll_to(3000.0);
    assert!(!layout.controller().visible());

    layout.set_small_screen(false);
    assert!(layout.controller().visible());
    assert_eq!(fx.viewport.scroll_y(), 3000.0);
}

#[test]
fn active_page_change_resets_small_screen_viewport() {
    let fx = Fixture::new();
    let mut layout = fx.layout(HOME, HOME, true);
    fx.viewport.scroll_to(1200.0);
    fx.viewport.scroll_to(4000.0);
    assert!(!layout.controller().visible());

    layout.set_current_page(ME);
    layout.set_current_page(HOME);
    assert!(layout.controller().visible());
    assert_eq!(fx.viewport.scroll_y(), 0.0);
}

#[test]
fn reaching_the_bottom_reveals_chrome() {
    let fx = Fixture::new();
    let layout = fx.layout(HOME, HOME, false);

    fx.container.scroll_to(1500.0);
    fx.container.scroll_to(5000.0);
    assert!(!layout.controller().visible());
    let last = layout.controller().last_scroll_top();

    // 700 visible + 8300 offset == 9000 content
    fx.container.scroll_to(8_300.0);
    assert!(layout.controller().visible());
    assert_eq!(layout.controller().last_scroll_top(), last);
}

#[test]
fn scroll_to_top_flows_through_the_decision() {
    let fx = Fixture::new();
    let layout = fx.layout(HOME, HOME, true).scroll_to_top_button(true);
    fx.viewport.scroll_to(1000.0);
    fx.viewport.scroll_to(2500.0);
    fx.viewport.scroll_to(2000.0);
    assert_eq!(layout.chrome().scroll_to_top, Some(true));

    layout.handle().scroll_to_top();
    assert_eq!(fx.viewport.scroll_y(), 0.0);
    assert!(layout.controller().visible());
    assert_eq!(layout.controller().last_scroll_top(), 0.0);
    assert_eq!(layout.chrome().scroll_to_top, Some(false));
}
