//! Scroll surfaces
//!
//! A scroll surface is whatever element receives scroll events for a page:
//! the whole [`Viewport`] in small-screen mode, or a bound [`ScrollContainer`]
//! otherwise. Both clamp offsets to their scrollable range and emit a
//! `SCROLL` event through the shared dispatcher whenever the offset actually
//! moves.
//!
//! [`SurfaceBinding`] holds the screen-size flag and both candidates, and
//! resolves which one is active.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use jumble_core::{emit, event_types, Event, EventData, SharedDispatcher, TargetId};
use tracing::trace;

/// Target id reserved for the global viewport
pub const VIEWPORT_TARGET: TargetId = 0;

/// Container target ids start after the viewport
static NEXT_CONTAINER_TARGET: AtomicU64 = AtomicU64::new(1);

/// Snapshot of a surface's scroll geometry along the vertical axis
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll offset (`scrollY` / `scrollTop`)
    pub offset: f32,
    /// Height of the visible region (`innerHeight` / `clientHeight`)
    pub visible_extent: f32,
    /// Height of the scrollable content (`document height` / `scrollHeight`)
    pub content_extent: f32,
}

impl ScrollMetrics {
    pub fn new(offset: f32, visible_extent: f32, content_extent: f32) -> Self {
        Self {
            offset,
            visible_extent,
            content_extent,
        }
    }

    /// Largest reachable offset
    pub fn max_offset(&self) -> f32 {
        (self.content_extent - self.visible_extent).max(0.0)
    }

    /// Whether the visible region reaches the end of the content, within `tolerance`
    pub fn is_at_bottom(&self, tolerance: f32) -> bool {
        self.visible_extent + self.offset >= self.content_extent - tolerance
    }
}

/// Which kind of element a surface is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    Viewport,
    Container,
}

/// An element that scrolls vertically and reports its geometry
pub trait ScrollSurface: Send + Sync {
    /// Event target that `SCROLL` events for this surface are sent to
    fn target(&self) -> TargetId;

    fn kind(&self) -> SurfaceKind;

    fn metrics(&self) -> ScrollMetrics;

    /// Current scroll offset
    fn offset(&self) -> f32 {
        self.metrics().offset
    }

    /// Scroll to an absolute offset, clamped to the scrollable range
    fn scroll_to(&self, offset: f32);

    /// Scroll relative to the current offset
    fn scroll_by(&self, delta: f32) {
        self.scroll_to(self.offset() + delta);
    }
}

/// Geometry plus event plumbing shared by both surface kinds
struct SurfaceCore {
    target: TargetId,
    kind: SurfaceKind,
    metrics: Mutex<ScrollMetrics>,
    dispatcher: SharedDispatcher,
}

impl SurfaceCore {
    fn new(
        target: TargetId,
        kind: SurfaceKind,
        visible_extent: f32,
        content_extent: f32,
        dispatcher: SharedDispatcher,
    ) -> Self {
        Self {
            target,
            kind,
            metrics: Mutex::new(ScrollMetrics::new(0.0, visible_extent, content_extent)),
            dispatcher,
        }
    }

    fn metrics(&self) -> ScrollMetrics {
        *self.metrics.lock().unwrap()
    }

    /// Update geometry with `f`, then re-clamp the offset
    fn update(&self, f: impl FnOnce(&mut ScrollMetrics)) {
        let moved = {
            let mut m = self.metrics.lock().unwrap();
            f(&mut m);
            let clamped = m.offset.clamp(0.0, m.max_offset());
            let old = m.offset;
            m.offset = clamped;
            (clamped != old).then_some((old, clamped))
        };
        if let Some((old, new)) = moved {
            self.notify(old, new);
        }
    }

    fn scroll_to(&self, offset: f32) {
        let moved = {
            let mut m = self.metrics.lock().unwrap();
            let clamped = offset.clamp(0.0, m.max_offset());
            if clamped == m.offset {
                None
            } else {
                let old = m.offset;
                m.offset = clamped;
                Some((old, clamped))
            }
        };
        // Emit with the geometry lock released; handlers read metrics back
        if let Some((old, new)) = moved {
            self.notify(old, new);
        }
    }

    fn notify(&self, old: f32, new: f32) {
        trace!(
            target_id = self.target,
            kind = ?self.kind,
            from = old,
            to = new,
            "surface scrolled"
        );
        emit(
            &self.dispatcher,
            Event::new(
                event_types::SCROLL,
                self.target,
                EventData::Scroll {
                    offset_y: new,
                    delta_y: new - old,
                },
            ),
        );
    }
}

/// The global viewport, scrolled as a whole in small-screen mode
pub struct Viewport {
    core: SurfaceCore,
}

impl Viewport {
    pub fn new(dispatcher: SharedDispatcher, inner_height: f32, document_height: f32) -> Self {
        Self {
            core: SurfaceCore::new(
                VIEWPORT_TARGET,
                SurfaceKind::Viewport,
                inner_height,
                document_height,
                dispatcher,
            ),
        }
    }

    pub fn inner_height(&self) -> f32 {
        self.core.metrics().visible_extent
    }

    pub fn scroll_y(&self) -> f32 {
        self.core.metrics().offset
    }

    pub fn document_height(&self) -> f32 {
        self.core.metrics().content_extent
    }

    /// Window resized vertically
    pub fn set_inner_height(&self, inner_height: f32) {
        self.core.update(|m| m.visible_extent = inner_height.max(0.0));
    }

    /// Content grew or shrank (e.g. a feed loaded another page)
    pub fn set_document_height(&self, document_height: f32) {
        self.core.update(|m| m.content_extent = document_height.max(0.0));
    }
}

impl ScrollSurface for Viewport {
    fn target(&self) -> TargetId {
        self.core.target
    }

    fn kind(&self) -> SurfaceKind {
        self.core.kind
    }

    fn metrics(&self) -> ScrollMetrics {
        self.core.metrics()
    }

    fn scroll_to(&self, offset: f32) {
        self.core.scroll_to(offset);
    }
}

/// An internal scrollable container, used when the viewport is large
pub struct ScrollContainer {
    core: SurfaceCore,
}

impl ScrollContainer {
    /// Create a container with a fresh event target
    pub fn new(dispatcher: SharedDispatcher, client_height: f32, scroll_height: f32) -> Self {
        let target = NEXT_CONTAINER_TARGET.fetch_add(1, Ordering::Relaxed);
        Self {
            core: SurfaceCore::new(
                target,
                SurfaceKind::Container,
                client_height,
                scroll_height,
                dispatcher,
            ),
        }
    }

    pub fn client_height(&self) -> f32 {
        self.core.metrics().visible_extent
    }

    pub fn scroll_top(&self) -> f32 {
        self.core.metrics().offset
    }

    pub fn scroll_height(&self) -> f32 {
        self.core.metrics().content_extent
    }

    pub fn set_client_height(&self, client_height: f32) {
        self.core.update(|m| m.visible_extent = client_height.max(0.0));
    }

    pub fn set_scroll_height(&self, scroll_height: f32) {
        self.core.update(|m| m.content_extent = scroll_height.max(0.0));
    }
}

impl ScrollSurface for ScrollContainer {
    fn target(&self) -> TargetId {
        self.core.target
    }

    fn kind(&self) -> SurfaceKind {
        self.core.kind
    }

    fn metrics(&self) -> ScrollMetrics {
        self.core.metrics()
    }

    fn scroll_to(&self, offset: f32) {
        self.core.scroll_to(offset);
    }
}

/// Screen-size flag plus both candidate surfaces for one layout instance
pub struct SurfaceBinding {
    small_screen: AtomicBool,
    viewport: Arc<Viewport>,
    container: RwLock<Option<Arc<ScrollContainer>>>,
}

impl SurfaceBinding {
    pub fn new(viewport: Arc<Viewport>, small_screen: bool) -> Self {
        Self {
            small_screen: AtomicBool::new(small_screen),
            viewport,
            container: RwLock::new(None),
        }
    }

    pub fn is_small_screen(&self) -> bool {
        self.small_screen.load(Ordering::SeqCst)
    }

    /// Returns `true` if the flag changed
    pub fn set_small_screen(&self, small_screen: bool) -> bool {
        self.small_screen.swap(small_screen, Ordering::SeqCst) != small_screen
    }

    pub fn viewport(&self) -> &Arc<Viewport> {
        &self.viewport
    }

    pub fn container(&self) -> Option<Arc<ScrollContainer>> {
        self.container.read().unwrap().clone()
    }

    pub fn bind_container(&self, container: Option<Arc<ScrollContainer>>) {
        *self.container.write().unwrap() = container;
    }

    /// The surface that currently receives scroll events, if any.
    ///
    /// Small-screen mode always resolves to the viewport. Otherwise the bound
    /// container, which may not exist yet.
    pub fn resolve(&self) -> Option<Arc<dyn ScrollSurface>> {
        if self.is_small_screen() {
            Some(self.viewport.clone() as Arc<dyn ScrollSurface>)
        } else {
            self.container().map(|c| c as Arc<dyn ScrollSurface>)
        }
    }
}
