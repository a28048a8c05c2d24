use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::I18nError;

/// Languages the client ships catalogs for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// All languages in the order the selector lists them
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];

    /// Catalog / select value code
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Name shown in the language selector, always in the language itself
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "简体中文",
        }
    }

    /// Match a platform locale (`zh_CN`, `en-US`, `zh`) to a supported language
    pub fn from_locale(locale: &str) -> Option<Self> {
        let normalized = normalize_locale(locale);
        let lang = normalized.split('-').next().unwrap_or_default();
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(lang))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_locale(s).ok_or_else(|| I18nError::UnsupportedLanguage(s.trim().to_string()))
    }
}

/// Normalize locale identifiers to a canonical-ish form for lookup.
///
/// - Converts `_` to `-` (platforms often report `zh_CN`).
/// - Trims whitespace.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-")
}

/// Create a fallback chain for translation lookup.
///
/// Example:
/// - `zh-CN` -> `["zh-CN", "zh", "en"]`
/// - `en` -> `["en"]`
pub fn locale_fallback_chain(locale: &str) -> Vec<String> {
    let l = normalize_locale(locale);
    let mut chain = Vec::new();

    if !l.is_empty() {
        chain.push(l.clone());
        if let Some(lang) = l.split('-').next() {
            if !lang.is_empty() {
                chain.push(lang.to_string());
            }
        }
    }

    // English catalog is complete; everything falls back to it.
    chain.push(Language::En.code().to_string());

    let mut seen = HashSet::new();
    chain.retain(|x| seen.insert(x.clone()));
    chain
}
