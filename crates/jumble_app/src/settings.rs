//! Settings page
//!
//! Rows, in order: language, theme, relays, one copy row per private key
//! format the account holds, and about. The page reads and writes the theme
//! and locale services directly; selections take effect immediately.

use std::fmt;
use std::str::FromStr;

use jumble_i18n::{t, I18nError, I18nState, Label, Language};
use jumble_theme::{ParseThemeSettingError, ThemeSetting, ThemeState};
use tracing::debug;

use crate::build_info::BuildInfo;
use crate::copy_feedback::CopyFeedback;
use crate::services::{to_relay_settings, Clipboard, Navigator};

/// Where the source code lives, linked from the About panel
pub const SOURCE_CODE_URL: &str = "https://github.com/CodyTseng/jumble";

/// Private key encodings the account may hold
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecretFormat {
    Nsec,
    Ncryptsec,
}

impl SecretFormat {
    pub const ALL: [SecretFormat; 2] = [SecretFormat::Nsec, SecretFormat::Ncryptsec];

    pub fn as_str(self) -> &'static str {
        match self {
            SecretFormat::Nsec => "nsec",
            SecretFormat::Ncryptsec => "ncryptsec",
        }
    }
}

impl fmt::Display for SecretFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Private keys the host already holds for the signed-in account
#[derive(Clone, Default)]
pub struct AccountSecrets {
    pub nsec: Option<String>,
    pub ncryptsec: Option<String>,
}

impl AccountSecrets {
    pub fn get(&self, format: SecretFormat) -> Option<&str> {
        let value = match format {
            SecretFormat::Nsec => self.nsec.as_deref(),
            SecretFormat::Ncryptsec => self.ncryptsec.as_deref(),
        };
        value.filter(|s| !s.is_empty())
    }
}

impl fmt::Debug for AccountSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |s: &Option<String>| s.as_ref().map(|_| "<redacted>");
        f.debug_struct("AccountSecrets")
            .field("nsec", &redact(&self.nsec))
            .field("ncryptsec", &redact(&self.ncryptsec))
            .finish()
    }
}

/// One entry of a select control
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingRow {
    Language {
        label: String,
        value: Language,
        options: Vec<SelectOption>,
    },
    Theme {
        label: String,
        value: ThemeSetting,
        options: Vec<SelectOption>,
    },
    Relays {
        label: String,
    },
    CopySecret {
        label: String,
        format: SecretFormat,
        copied: bool,
    },
    About {
        label: String,
        version: String,
    },
}

/// Contents of the About panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AboutInfo {
    pub description: String,
    pub version: String,
    pub source_code_label: String,
    pub source_code_url: &'static str,
}

fn theme_label(setting: ThemeSetting) -> Label {
    match setting {
        ThemeSetting::System => t!("theme-system"),
        ThemeSetting::Light => t!("theme-light"),
        ThemeSetting::Dark => t!("theme-dark"),
    }
}

pub struct SettingsPage<'a> {
    theme: &'a ThemeState,
    i18n: &'a I18nState,
    navigator: &'a dyn Navigator,
    clipboard: &'a dyn Clipboard,
    secrets: AccountSecrets,
    build: BuildInfo,
    copied_nsec: CopyFeedback,
    copied_ncryptsec: CopyFeedback,
}

impl<'a> SettingsPage<'a> {
    pub fn new(
        theme: &'a ThemeState,
        i18n: &'a I18nState,
        navigator: &'a dyn Navigator,
        clipboard: &'a dyn Clipboard,
    ) -> Self {
        Self {
            theme,
            i18n,
            navigator,
            clipboard,
            secrets: AccountSecrets::default(),
            build: BuildInfo::CURRENT,
            copied_nsec: CopyFeedback::new(),
            copied_ncryptsec: CopyFeedback::new(),
        }
    }

    /// Builder: private keys to offer for copying
    pub fn secrets(mut self, secrets: AccountSecrets) -> Self {
        self.secrets = secrets;
        self
    }

    /// Builder: build metadata for the About row
    pub fn build_info(mut self, build: BuildInfo) -> Self {
        self.build = build;
        self
    }

    pub fn title(&self) -> String {
        self.i18n.resolve_label(&t!("settings"))
    }

    pub fn rows(&self) -> Vec<SettingRow> {
        let i18n = self.i18n;
        let mut rows = vec![
            SettingRow::Language {
                label: i18n.tr_id("languages"),
                value: i18n.language(),
                options: Language::ALL
                    .into_iter()
                    .map(|l| SelectOption {
                        value: l.code(),
                        label: l.native_name().to_string(),
                    })
                    .collect(),
            },
            SettingRow::Theme {
                label: i18n.tr_id("theme"),
                value: self.theme.setting(),
                options: ThemeSetting::ALL
                    .into_iter()
                    .map(|s| SelectOption {
                        value: s.id(),
                        label: i18n.resolve_label(&theme_label(s)),
                    })
                    .collect(),
            },
            SettingRow::Relays {
                label: i18n.tr_id("relays"),
            },
        ];

        for format in SecretFormat::ALL {
            if self.secrets.get(format).is_none() {
                continue;
            }
            rows.push(SettingRow::CopySecret {
                label: i18n.resolve_label(&t!("copy-private-key", { format: format.as_str() })),
                format,
                copied: self.feedback(format).is_copied(),
            });
        }

        rows.push(SettingRow::About {
            label: i18n.tr_id("about"),
            version: i18n.resolve_label(&self.build.label()),
        });
        rows
    }

    pub fn change_language(&self, language: Language) {
        self.i18n.set_language(language);
    }

    /// Select-control variant: `en` or `zh`
    pub fn change_language_code(&self, code: &str) -> Result<(), I18nError> {
        self.change_language(Language::from_str(code)?);
        Ok(())
    }

    pub fn change_theme(&self, setting: ThemeSetting) {
        self.theme.set_setting(setting);
    }

    /// Select-control variant: `system`, `light` or `dark`
    pub fn change_theme_id(&self, id: &str) -> Result<(), ParseThemeSettingError> {
        self.change_theme(id.parse()?);
        Ok(())
    }

    pub fn open_relay_settings(&self) {
        self.navigator.push(to_relay_settings());
    }

    /// Copy a held private key. Returns `false` if the account has none in
    /// that format.
    pub fn copy_secret(&self, format: SecretFormat) -> bool {
        let Some(secret) = self.secrets.get(format) else {
            return false;
        };
        self.clipboard.write_text(secret);
        self.feedback(format).trigger();
        debug!(%format, "private key copied");
        true
    }

    pub fn is_copied(&self, format: SecretFormat) -> bool {
        self.feedback(format).is_copied()
    }

    pub fn about_info(&self) -> AboutInfo {
        AboutInfo {
            description: self.i18n.tr_id("about-description"),
            version: self.i18n.resolve_label(&self.build.label()),
            source_code_label: self.i18n.tr_id("about-source-code"),
            source_code_url: SOURCE_CODE_URL,
        }
    }

    fn feedback(&self, format: SecretFormat) -> &CopyFeedback {
        match format {
            SecretFormat::Nsec => &self.copied_nsec,
            SecretFormat::Ncryptsec => &self.copied_ncryptsec,
        }
    }
}
