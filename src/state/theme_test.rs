use super::*;

#[test]
fn stored_dark_decodes_to_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn anything_else_decodes_to_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn toggle_twice_is_identity() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
        assert_ne!(theme.toggled(), theme);
    }
}

#[test]
fn storage_encoding_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn icon_tracks_theme() {
    assert_eq!(Theme::Light.icon_class(), "fa-moon");
    assert_eq!(Theme::Dark.icon_class(), "fa-sun");
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::default().is_dark());
}
