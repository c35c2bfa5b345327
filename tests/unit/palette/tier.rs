use super::*;

#[test]
fn tier_boundaries() {
    assert_eq!(tier_of(0).get(), 1);
    assert_eq!(tier_of(49_999).get(), 1);
    assert_eq!(tier_of(50_000).get(), 2);
    assert_eq!(tier_of(99_999).get(), 2);
    assert_eq!(tier_of(100_000).get(), 3);
    assert_eq!(tier_of(1_000_000).get(), 5);
    assert_eq!(tier_of(49_999_999).get(), 7);
    assert_eq!(tier_of(50_000_000).get(), 8);
    assert_eq!(tier_of(999_999_999).get(), 8);
    assert_eq!(tier_of(u128::MAX).get(), 8);
}

#[test]
fn tiers_are_monotonic() {
    let mut last = tier_of(0);
    for c in (0..60_000_000u128).step_by(12_345) {
        let t = tier_of(c);
        assert!(t >= last);
        last = t;
    }
}

#[test]
fn tier_constructor_validates_range() {
    assert!(Tier::new(0).is_none());
    assert_eq!(Tier::new(1).map(Tier::get), Some(1));
    assert_eq!(Tier::new(8).map(Tier::get), Some(8));
    assert!(Tier::new(9).is_none());
}

#[test]
fn lowest_tier_palette_is_ash() {
    let p = palette_of(tier_of(0));
    assert_eq!(p.outer, Rgba8::from_hex("#414141").unwrap());
    assert_eq!(p.middle, Rgba8::from_hex("#797979").unwrap());
    assert_eq!(p.inner, Rgba8::from_hex("#ffffff").unwrap());
}

#[test]
fn every_tier_has_an_opaque_palette() {
    for ordinal in MIN_TIER..=MAX_TIER {
        let p = palette_of(Tier::new(ordinal).unwrap());
        for c in [p.outer, p.middle, p.inner] {
            assert_eq!(c.a, 255);
        }
    }
}

#[test]
fn palette_serializes_as_hex() {
    let json = serde_json::to_value(palette_of(tier_of(0))).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"outer": "#414141", "middle": "#797979", "inner": "#ffffff"})
    );
}
