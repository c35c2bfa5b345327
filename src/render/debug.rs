//! Diagnostic overlays for placement transforms.

use crate::foundation::core::{Point, Rgba8};
use crate::render::compose::Composition;
use crate::render::surface::DrawSurface;
use crate::transform::homography::Homography;

const OUTLINE_WIDTH: f64 = 1.5;
const CORNER_RADIUS: f64 = 4.0;

/// Stroke `h`'s source and destination quadrilaterals and ring each destination corner.
pub fn draw_homography(surface: &mut dyn DrawSurface, h: &Homography, color: Rgba8) {
    stroke_quad(surface, &h.source(), color);
    stroke_quad(surface, &h.destination(), color);
    for corner in h.destination() {
        surface.begin_path();
        surface.arc(corner, CORNER_RADIUS, 0.0, std::f64::consts::TAU);
        surface.close_path();
        surface.stroke(color, OUTLINE_WIDTH);
    }
}

/// Overlay every bent instance's placement.
pub fn draw_placements(surface: &mut dyn DrawSurface, comp: &Composition, color: Rgba8) {
    for (_, h) in comp.instances.iter().filter_map(|i| i.placement.as_ref()) {
        draw_homography(surface, h, color);
    }
}

fn stroke_quad(surface: &mut dyn DrawSurface, quad: &[Point; 4], color: Rgba8) {
    surface.begin_path();
    surface.move_to(quad[0]);
    for p in &quad[1..] {
        surface.line_to(*p);
    }
    surface.close_path();
    surface.stroke(color, OUTLINE_WIDTH);
}

#[cfg(test)]
#[path = "../../tests/unit/render/debug.rs"]
mod tests;
