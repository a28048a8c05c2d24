use jumble_i18n::{resolve_label, t, I18nState, Label, Language};

#[test]
fn resolve_label_uses_global_state_once_initialized() {
    // Before init, keys come back as-is
    if I18nState::try_get().is_none() {
        assert_eq!(resolve_label(&t!("theme")), "theme");
    }

    I18nState::init(Language::Zh).unwrap();
    assert_eq!(resolve_label(&t!("theme")), "主题");
    assert_eq!(
        resolve_label(&t!("copy-private-key", { format: "nsec" })),
        "复制私钥 (nsec)"
    );
    assert_eq!(resolve_label(&Label::raw("Jumble")), "Jumble");
}

#[test]
fn language_select_values_parse() {
    assert_eq!("zh".parse::<Language>().unwrap(), Language::Zh);
    assert_eq!("en".parse::<Language>().unwrap(), Language::En);
    let err = "fr".parse::<Language>().unwrap_err();
    assert_eq!(err.to_string(), "unsupported language `fr`");

    let names: Vec<&str> = Language::ALL.iter().map(|l| l.native_name()).collect();
    assert_eq!(names, vec!["English", "简体中文"]);
}
