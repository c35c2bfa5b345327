use super::*;
use crate::foundation::core::Rgba8;
use crate::foundation::error::FireError;

const ID: &str = "0x000000000000000000000000000000000000aa";

fn small() -> RenderSettings {
    RenderSettings {
        width: 128,
        height: 128,
        background: Some(Rgba8::BLACK),
    }
}

#[test]
fn render_frame_matches_settings_size() {
    let frame = render_frame(&small(), ID, 0).unwrap();
    assert_eq!((frame.width, frame.height), (128, 128));
    assert_eq!(frame.data.len(), 128 * 128 * 4);
    assert!(frame.premultiplied);
}

#[test]
fn render_frame_is_deterministic() {
    let a = render_frame(&RenderSettings::default(), ID, 7).unwrap();
    let b = render_frame(&RenderSettings::default(), ID, 7).unwrap();
    assert_eq!(a.data, b.data);
}

#[test]
fn render_frame_paints_over_background() {
    let frame = render_frame(&RenderSettings::default(), ID, 0).unwrap();
    let non_black = frame
        .data
        .chunks_exact(4)
        .filter(|px| px[..3] != [0, 0, 0])
        .count();
    assert!(non_black > 0);
}

#[test]
fn render_frame_rejects_invalid_inputs() {
    let zero = RenderSettings {
        width: 0,
        ..small()
    };
    assert!(matches!(
        render_frame(&zero, ID, 0),
        Err(FireError::Validation(_))
    ));
    assert!(matches!(
        render_frame(&small(), "0xnothex", 0),
        Err(FireError::InvalidSeed(_))
    ));
}

#[test]
fn render_png_starts_with_signature() {
    let bytes = render_png(&small(), ID, 0).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
