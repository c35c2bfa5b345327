//! Fireglyph draws a deterministic flame illustration for an account identifier and a usage
//! counter.
//!
//! The identifier seeds an xorshift128 generator that picks two to four seed silhouettes and
//! bends every one after the first onto a random "bar" with a four-point homography. The
//! counter selects a tier whose palette colors the layered flame.
//!
//! - Plan a [`Composition`] with [`plan_composition`]
//! - Paint it on any [`DrawSurface`] with [`draw_composition`] or [`render_image`]
//! - Rasterize and encode with [`render_frame`] and [`render_png`]
#![forbid(unsafe_code)]

mod foundation;

/// Identifier-seeded random generator.
pub mod random;
/// Rendering surfaces and the composition orchestrator.
pub mod render;
/// Flame shapes and the seed library.
pub mod shape;
/// Tier and palette lookup.
pub mod palette;
/// Homographies and placement generation.
pub mod transform;

pub use crate::foundation::core::{BezPath, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{FireError, FireResult};

pub use crate::palette::tier::{Palette, Tier, palette_of, tier_of};
pub use crate::random::xorshift::Xorshift128;
pub use crate::render::compose::{
    Composition, FlameInstance, draw_composition, plan_composition, render_image,
};
pub use crate::render::cpu::{CpuSurface, FrameRGBA};
pub use crate::render::debug::{draw_homography, draw_placements};
pub use crate::render::encode::{encode_png, write_png};
pub use crate::render::pipeline::{render_frame, render_png};
pub use crate::render::settings::RenderSettings;
pub use crate::render::surface::{DrawCall, DrawLog, DrawSurface};
pub use crate::shape::fire::{BezierSegment, FireShape};
pub use crate::shape::library::seed_shapes;
pub use crate::transform::homography::Homography;
pub use crate::transform::placement::{Bar, next_bar, next_placement, solve_placement};
