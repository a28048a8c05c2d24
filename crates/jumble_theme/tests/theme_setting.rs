use jumble_theme::{ColorScheme, ThemeSetting, ThemeState};
use serde::Deserialize;

#[test]
fn selector_lists_system_light_dark_in_order() {
    let ids: Vec<&str> = ThemeSetting::ALL.iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec!["system", "light", "dark"]);
}

#[test]
fn settings_deserialize_from_lowercase_ids() {
    #[derive(Deserialize)]
    struct Prefs {
        theme: ThemeSetting,
    }

    let prefs: Prefs = toml::from_str("theme = \"dark\"").unwrap();
    assert_eq!(prefs.theme, ThemeSetting::Dark);

    let setting: ThemeSetting = serde_json::from_str("\"system\"").unwrap();
    assert_eq!(setting, ThemeSetting::System);

    assert!(serde_json::from_str::<ThemeSetting>("\"Dark\"").is_err());
}

#[test]
fn global_state_initializes_once() {
    ThemeState::init(ThemeSetting::Dark);
    // Second init is ignored
    ThemeState::init(ThemeSetting::Light);

    let theme = ThemeState::get();
    assert_eq!(theme.setting(), ThemeSetting::Dark);
    assert_eq!(theme.scheme(), ColorScheme::Dark);
    assert!(ThemeState::try_get().is_some());
}
