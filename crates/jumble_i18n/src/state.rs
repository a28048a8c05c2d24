use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, RwLock};

use tracing::debug;

use crate::catalog::SimpleCatalog;
use crate::label::{Label, Message};
use crate::locale::{locale_fallback_chain, normalize_locale, Language};
use crate::I18nError;

/// Catalogs compiled into the crate, one per supported language.
const BUILTIN_CATALOGS: [(Language, &str); 2] = [
    (Language::En, include_str!("../locales/en.yaml")),
    (Language::Zh, include_str!("../locales/zh.yaml")),
];

/// Global i18n singleton.
static I18N_STATE: OnceLock<I18nState> = OnceLock::new();

/// Global redraw callback - set by the app layer to trigger UI updates
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK.lock().unwrap() = Some(callback);
}

fn trigger_redraw() {
    if let Some(cb) = *REDRAW_CALLBACK.lock().unwrap() {
        cb();
    }
}

/// Runtime i18n state.
pub struct I18nState {
    language: RwLock<Language>,
    catalogs: RwLock<HashMap<String, SimpleCatalog>>,
}

impl I18nState {
    /// Create a state with no catalogs loaded; every lookup returns its key.
    pub fn new(language: Language) -> Self {
        Self {
            language: RwLock::new(language),
            catalogs: RwLock::new(HashMap::new()),
        }
    }

    /// Create a state with the built-in catalogs loaded.
    pub fn with_builtin_catalogs(language: Language) -> Result<Self, I18nError> {
        let st = Self::new(language);
        for (lang, src) in BUILTIN_CATALOGS {
            st.load_catalog_str(lang.code(), src)?;
        }
        Ok(st)
    }

    /// Initialize the global i18n state with the built-in catalogs.
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(language: Language) -> Result<(), I18nError> {
        if I18N_STATE.get().is_some() {
            return Ok(());
        }
        let _ = I18N_STATE.set(Self::with_builtin_catalogs(language)?);
        Ok(())
    }

    pub fn get() -> &'static I18nState {
        I18N_STATE
            .get()
            .expect("I18nState not initialized. Call I18nState::init() at app startup.")
    }

    pub fn try_get() -> Option<&'static I18nState> {
        I18N_STATE.get()
    }

    pub fn language(&self) -> Language {
        *self.language.read().unwrap()
    }

    /// Current locale code (`en`, `zh`)
    pub fn locale(&self) -> &'static str {
        self.language().code()
    }

    pub fn set_language(&self, language: Language) {
        let mut cur = self.language.write().unwrap();
        if *cur == language {
            return;
        }
        debug!("I18nState::set_language: {} -> {}", *cur, language);
        *cur = language;
        drop(cur);

        trigger_redraw();
    }

    /// Load a catalog for a locale, replacing any previous one.
    pub fn load_catalog(&self, locale: &str, catalog: SimpleCatalog) {
        let loc = normalize_locale(locale);
        debug!(locale = %loc, entries = catalog.len(), "catalog loaded");
        self.catalogs.write().unwrap().insert(loc, catalog);
    }

    /// Parse and load a YAML catalog for a locale.
    pub fn load_catalog_str(&self, locale: &str, src: &str) -> Result<(), I18nError> {
        let cat = SimpleCatalog::parse(src)?;
        self.load_catalog(locale, cat);
        Ok(())
    }

    /// Translate a message using the locale fallback chain.
    pub fn tr(&self, msg: &Message) -> String {
        let chain = locale_fallback_chain(self.locale());
        let catalogs = self.catalogs.read().unwrap();
        chain
            .iter()
            .filter_map(|l| catalogs.get(l))
            .find_map(|cat| cat.format_message(msg))
            // Fallback: show the key id.
            .unwrap_or_else(|| msg.id.to_string())
    }

    /// Translate a message id with no arguments.
    pub fn tr_id(&self, id: &'static str) -> String {
        self.tr(&Message::new(id))
    }

    pub fn resolve_label(&self, label: &Label) -> String {
        match label {
            Label::Raw(s) => s.clone(),
            Label::Msg(m) => self.tr(m),
        }
    }
}
