//! Jumble internationalization (i18n)
//!
//! - `Label` type for anything a component renders as text
//! - Runtime language switching with an app-provided redraw callback
//! - YAML mapping catalogs, with built-in English and Simplified Chinese

mod catalog;
mod error;
mod label;
mod locale;
mod state;

pub use catalog::{SimpleCatalog, SimpleParseError};
pub use error::I18nError;
pub use label::{ArgValue, Label, Message};
pub use locale::{locale_fallback_chain, normalize_locale, Language};
pub use state::{set_redraw_callback, I18nState};

/// Translate a label to a displayable string using the global [`I18nState`].
///
/// If the state isn't initialized, this degrades gracefully:
/// - `Label::Raw` returns its raw text
/// - `Label::Msg` returns the key id
pub fn resolve_label(label: &Label) -> String {
    if let Some(st) = I18nState::try_get() {
        st.resolve_label(label)
    } else {
        match label {
            Label::Raw(s) => s.clone(),
            Label::Msg(m) => m.id.to_string(),
        }
    }
}

/// Convenience macro for building a translation key + args as a [`Label`].
///
/// Examples:
/// - `t!("settings")`
/// - `t!("copy-private-key", { format: "nsec" })`
#[macro_export]
macro_rules! t {
    ($id:literal) => {
        $crate::Label::msg($crate::Message::new($id))
    };
    ($id:literal, { $($name:ident : $value:expr),* $(,)? }) => {{
        let mut m = $crate::Message::new($id);
        $(
            m = m.arg(stringify!($name), $value);
        )*
        $crate::Label::msg(m)
    }};
}
