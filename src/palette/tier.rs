//! Usage tiers and their flame palettes.

use crate::foundation::core::Rgba8;

/// Ascending counter thresholds; reaching the n-th one lifts the tier to n + 2.
pub const TIER_BOUNDARIES: [u128; 7] = [
    50_000,
    100_000,
    500_000,
    1_000_000,
    5_000_000,
    10_000_000,
    50_000_000,
];

pub const MIN_TIER: u8 = 1;
pub const MAX_TIER: u8 = TIER_BOUNDARIES.len() as u8 + 1;

/// Ordinal in `[1, 8]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Tier(u8);

impl Tier {
    pub fn new(ordinal: u8) -> Option<Self> {
        (MIN_TIER..=MAX_TIER).contains(&ordinal).then_some(Self(ordinal))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Outer, middle and inner flame colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    pub outer: Rgba8,
    pub middle: Rgba8,
    pub inner: Rgba8,
}

const fn palette(outer: u32, middle: u32, inner: u32) -> Palette {
    const fn c(v: u32) -> Rgba8 {
        Rgba8::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }
    Palette {
        outer: c(outer),
        middle: c(middle),
        inner: c(inner),
    }
}

/// One palette per tier, coldest (ash) to hottest.
const PALETTES: [Palette; MAX_TIER as usize] = [
    palette(0x414141, 0x797979, 0xffffff),
    palette(0x7a2e0e, 0xb8541a, 0xffd9a0),
    palette(0xa8320c, 0xe0661b, 0xffe08a),
    palette(0xc81e1e, 0xff6a00, 0xffe45c),
    palette(0xd63a00, 0xff9500, 0xfff3b0),
    palette(0x6a1fb5, 0xc04cf0, 0xf6e0ff),
    palette(0x1f4fd6, 0x3fa9ff, 0xe0f7ff),
    palette(0x0c7a6a, 0x2fe0c0, 0xf0fffb),
];

pub fn tier_of(counter: u128) -> Tier {
    let passed = TIER_BOUNDARIES.iter().filter(|&&b| counter >= b).count();
    Tier(MIN_TIER + passed as u8)
}

pub fn palette_of(tier: Tier) -> Palette {
    PALETTES[usize::from(tier.0 - MIN_TIER)]
}

#[cfg(test)]
#[path = "../../tests/unit/palette/tier.rs"]
mod tests;
