use std::borrow::Cow;
use std::fmt;

use jumble_i18n::{t, Label};

/// Version and commit shown in the About row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: Cow<'static, str>,
    pub commit: Cow<'static, str>,
}

impl BuildInfo {
    /// Metadata of this build
    pub const CURRENT: BuildInfo = BuildInfo {
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        commit: Cow::Borrowed(env!("JUMBLE_GIT_COMMIT")),
    };

    pub fn new(version: impl Into<Cow<'static, str>>, commit: impl Into<Cow<'static, str>>) -> Self {
        Self {
            version: version.into(),
            commit: commit.into(),
        }
    }

    /// Translatable `v{version} ({commit})` label
    pub fn label(&self) -> Label {
        t!("about-version", {
            version: self.version.to_string(),
            commit: self.commit.to_string(),
        })
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{} ({})", self.version, self.commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumble_i18n::{I18nState, Language};

    #[test]
    fn display_and_label_agree() {
        let info = BuildInfo::new("0.4.2", "9f1c2ab");
        assert_eq!(info.to_string(), "v0.4.2 (9f1c2ab)");

        let i18n = I18nState::with_builtin_catalogs(Language::En).unwrap();
        assert_eq!(i18n.resolve_label(&info.label()), info.to_string());
    }

    #[test]
    fn current_build_has_version() {
        assert_eq!(BuildInfo::CURRENT.version, env!("CARGO_PKG_VERSION"));
        assert!(!BuildInfo::CURRENT.commit.is_empty());
    }
}
