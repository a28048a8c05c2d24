//! Application shell
//!
//! Wires the dispatcher, viewport, theme and locale state, page manager and
//! one [`PrimaryPageLayout`] per configured primary page. Each layout also
//! gets its own scroll container for large screens.

use std::sync::Arc;

use jumble_core::{shared_dispatcher, PageId, SharedDispatcher};
use jumble_i18n::I18nState;
use jumble_layout::{
    is_small_screen_width, PageChrome, PrimaryPageLayout, ScrollContainer, ScrollSurface,
    Viewport,
};
use jumble_theme::ThemeState;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::services::{Clipboard, Navigator, PageManager, ProfileCache};
use crate::settings::SettingsPage;

struct PrimaryPage {
    layout: PrimaryPageLayout,
    container: Arc<ScrollContainer>,
}

pub struct JumbleApp {
    config: AppConfig,
    dispatcher: SharedDispatcher,
    viewport: Arc<Viewport>,
    pages: PageManager,
    primary: Vec<PrimaryPage>,
    theme: ThemeState,
    i18n: I18nState,
    profiles: ProfileCache,
    width: f32,
}

impl JumbleApp {
    /// Build the shell for a `width` x `height` viewport and mount every
    /// primary layout. The first configured page starts out current.
    pub fn new(config: AppConfig, width: f32, height: f32) -> Result<Self> {
        config.validate()?;

        let dispatcher = shared_dispatcher();
        let viewport = Arc::new(Viewport::new(dispatcher.clone(), height, height));
        let small_screen = is_small_screen_width(width, config.small_screen_breakpoint);

        let first = PageId::new(config.primary_pages[0].clone());
        let pages = PageManager::new(first.clone());

        let primary: Vec<PrimaryPage> = config
            .primary_pages
            .iter()
            .map(|name| {
                let container = Arc::new(ScrollContainer::new(dispatcher.clone(), height, height));
                let mut layout = PrimaryPageLayout::new(
                    PageId::new(name.clone()),
                    first.clone(),
                    small_screen,
                    viewport.clone(),
                    dispatcher.clone(),
                )
                .titlebar(true)
                .scroll_to_top_button(true)
                .thresholds(config.scroll);
                layout.bind_container(Some(container.clone()));
                layout.mount();
                PrimaryPage { layout, container }
            })
            .collect();

        let theme = ThemeState::new(config.theme);
        let i18n = I18nState::with_builtin_catalogs(config.language)?;

        info!(
            width,
            height,
            small_screen,
            page = %first,
            language = %config.language,
            theme = %config.theme,
            "jumble app started"
        );

        Ok(Self {
            config,
            dispatcher,
            viewport,
            pages,
            primary,
            theme,
            i18n,
            profiles: ProfileCache::new(),
            width,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &SharedDispatcher {
        &self.dispatcher
    }

    pub fn viewport(&self) -> &Arc<Viewport> {
        &self.viewport
    }

    pub fn page_manager(&self) -> &PageManager {
        &self.pages
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn i18n(&self) -> &I18nState {
        &self.i18n
    }

    pub fn profiles(&self) -> &ProfileCache {
        &self.profiles
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_small_screen(&self) -> bool {
        is_small_screen_width(self.width, self.config.small_screen_breakpoint)
    }

    pub fn current_page(&self) -> PageId {
        self.pages.current_page()
    }

    /// Window resized. Crossing the breakpoint switches every layout's
    /// scroll surface.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.width = width;
        let small_screen = self.is_small_screen();
        debug!(width, height, small_screen, "viewport resized");

        self.viewport.set_inner_height(height);
        for page in &mut self.primary {
            page.container.set_client_height(height);
            page.layout.set_small_screen(small_screen);
        }
    }

    /// Height of the current page's content
    pub fn set_content_height(&self, height: f32) {
        self.viewport.set_document_height(height);
        if let Some(page) = self.find(self.pages.current_page().as_str()) {
            page.container.set_scroll_height(height);
        }
    }

    pub fn navigate_primary(&mut self, page: &str) -> Result<()> {
        if self.find(page).is_none() {
            return Err(AppError::UnknownPage(page.to_string()));
        }
        let id = PageId::new(page.to_string());
        if !self.pages.set_current_page(id.clone()) {
            return Ok(());
        }
        for primary in &mut self.primary {
            primary.layout.set_current_page(id.clone());
        }
        Ok(())
    }

    pub fn layout(&self, page: &str) -> Option<&PrimaryPageLayout> {
        self.find(page).map(|p| &p.layout)
    }

    pub fn current_layout(&self) -> Option<&PrimaryPageLayout> {
        self.layout(self.pages.current_page().as_str())
    }

    pub fn chrome(&self) -> PageChrome {
        self.current_layout()
            .map(PrimaryPageLayout::chrome)
            .unwrap_or_default()
    }

    /// The surface the current page scrolls on
    pub fn active_surface(&self) -> Option<Arc<dyn ScrollSurface>> {
        if self.is_small_screen() {
            return Some(self.viewport.clone() as Arc<dyn ScrollSurface>);
        }
        self.find(self.pages.current_page().as_str())
            .map(|p| p.container.clone() as Arc<dyn ScrollSurface>)
    }

    pub fn scroll_to(&self, offset: f32) {
        if let Some(surface) = self.active_surface() {
            surface.scroll_to(offset);
        }
    }

    pub fn scroll_by(&self, delta: f32) {
        if let Some(surface) = self.active_surface() {
            surface.scroll_by(delta);
        }
    }

    pub fn scroll_to_top(&self) {
        if let Some(layout) = self.current_layout() {
            layout.scroll_to_top();
        }
    }

    pub fn settings_page<'a>(&'a self, clipboard: &'a dyn Clipboard) -> SettingsPage<'a> {
        SettingsPage::new(&self.theme, &self.i18n, &self.pages as &dyn Navigator, clipboard)
    }

    fn find(&self, page: &str) -> Option<&PrimaryPage> {
        self.primary.iter().find(|p| p.layout.page().as_str() == page)
    }
}
