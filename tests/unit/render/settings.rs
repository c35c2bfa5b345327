use super::*;
use std::io::Cursor;

#[test]
fn defaults_match_seed_canvas() {
    let s = RenderSettings::default();
    assert_eq!((s.width, s.height), (512, 512));
    assert_eq!(s.background, Some(Rgba8::BLACK));
    s.validate().unwrap();
}

#[test]
fn empty_json_uses_defaults() {
    let s = RenderSettings::from_reader(Cursor::new("{}")).unwrap();
    assert_eq!(s, RenderSettings::default());
}

#[test]
fn json_overrides_fields() {
    let s = RenderSettings::from_reader(Cursor::new(
        r##"{"width": 256, "height": 128, "background": null}"##,
    ))
    .unwrap();
    assert_eq!((s.width, s.height), (256, 128));
    assert_eq!(s.background, None);

    let s = RenderSettings::from_reader(Cursor::new(r##"{"background": "#102030"}"##)).unwrap();
    assert_eq!(s.background, Some(Rgba8::rgb(0x10, 0x20, 0x30)));
}

#[test]
fn invalid_settings_are_rejected() {
    for json in [
        r#"{"width": 0}"#,
        r#"{"height": 70000}"#,
        r#"{"background": "nope"}"#,
        r#"{"depth": 3}"#,
        "not json",
    ] {
        let err = RenderSettings::from_reader(Cursor::new(json)).unwrap_err();
        assert!(matches!(err, FireError::Validation(_)), "{json}: {err}");
    }
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = RenderSettings::from_path("definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open render settings"));
}
