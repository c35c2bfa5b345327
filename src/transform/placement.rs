//! Random "bar" placements that bend a seed shape into a new flame tongue.
//!
//! A bar is a rotated segment somewhere in the upper half of the seed's frame. The seed frame's
//! top edge is mapped onto the bar while its bottom edge stays pinned, so every placement keeps
//! the flame rooted where the seed was authored.

use std::f64::consts::PI;

use kurbo::Affine;

use crate::foundation::core::{Point, Rect};
use crate::random::xorshift::Xorshift128;
use crate::shape::fire::FireShape;
use crate::transform::homography::Homography;

/// Shortest bar the generator will draw.
pub const MIN_BAR_LENGTH: i64 = 51;

/// Both ends of the allowed angle range are pulled in by this much.
pub const ANGLE_MARGIN_DEG: f64 = 30.0;

/// The randomly chosen destination segment for a seed frame's top edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Bar {
    /// Even length in pixels.
    pub length: i64,
    pub center: Point,
    /// Rotation in degrees, including the 180 degree flip when `flipped`.
    pub angle_deg: i64,
    pub flipped: bool,
}

impl Bar {
    pub fn radius(&self) -> f64 {
        (self.length / 2) as f64
    }

    /// The bar's two ends, `(left, right)` before rotation.
    pub fn endpoints(&self) -> (Point, Point) {
        let r = self.radius();
        let rot = Affine::rotate_about((self.angle_deg as f64).to_radians(), self.center);
        (
            rot * Point::new(self.center.x - r, self.center.y),
            rot * Point::new(self.center.x + r, self.center.y),
        )
    }

    /// Destination quadrilateral: bar ends on top, `frame`'s bottom corners below.
    pub fn destination(&self, frame: Rect) -> [Point; 4] {
        let (left, right) = self.endpoints();
        [
            left,
            right,
            Point::new(frame.x1, frame.y1),
            Point::new(frame.x0, frame.y1),
        ]
    }
}

/// Frame corners in the order used for every solve: top-left, top-right, bottom-right,
/// bottom-left.
pub fn frame_corners(frame: Rect) -> [Point; 4] {
    [
        Point::new(frame.x0, frame.y0),
        Point::new(frame.x1, frame.y0),
        Point::new(frame.x1, frame.y1),
        Point::new(frame.x0, frame.y1),
    ]
}

/// Draw a bar for `seed`'s frame on a canvas `canvas_width` pixels wide.
///
/// Generator draws happen in a fixed order: length, center x, center y, angle, flip.
pub fn next_bar(seed: &FireShape, canvas_width: u32, rng: &mut Xorshift128) -> Bar {
    let frame = seed.frame;

    let frame_width = frame.width().floor() as i64;
    let length = rng.next_in_range(MIN_BAR_LENGTH, frame_width + 1) & !1;
    let radius = length / 2;

    let cx = rng.next_in_range(radius, i64::from(canvas_width) - radius);
    let top = frame.y0.floor() as i64;
    let half_height = (frame.height() / 2.0).floor() as i64;
    let cy = rng.next_in_range(top, top + half_height);
    let center = Point::new(cx as f64, cy as f64);

    let (start, end) = angle_range(frame, center);
    let start = (start.to_degrees() + ANGLE_MARGIN_DEG).round() as i64;
    let end = (end.to_degrees() - ANGLE_MARGIN_DEG).round() as i64;
    let mut angle_deg = rng.next_in_range(start, end);

    let flipped = rng.next_in_range(0, 2) == 1;
    if flipped {
        angle_deg += 180;
    }

    Bar {
        length,
        center,
        angle_deg,
        flipped,
    }
}

/// Solve the transform bending `seed`'s frame onto a freshly drawn bar.
pub fn next_placement(seed: &FireShape, canvas_width: u32, rng: &mut Xorshift128) -> Homography {
    let bar = next_bar(seed, canvas_width, rng);
    solve_placement(seed, &bar)
}

/// Transform taking `seed`'s frame onto the quadrilateral spanned by `bar`.
pub fn solve_placement(seed: &FireShape, bar: &Bar) -> Homography {
    Homography::solve(frame_corners(seed.frame), bar.destination(seed.frame))
}

/// Allowed bar rotation (radians, unshrunk) for a bar centered at `center`.
///
/// Measured from the center towards the frame's pinned bottom corners: a bar outside the
/// frame may tilt up to the angle at which the nearer corner is seen, a bar above the frame
/// may swing between the two corners.
fn angle_range(frame: Rect, center: Point) -> (f64, f64) {
    let toward = |corner: Point| (corner.y - center.y).atan2(corner.x - center.x);
    let bottom_left = toward(Point::new(frame.x0, frame.y1));
    let bottom_right = toward(Point::new(frame.x1, frame.y1));

    if center.x < frame.x0 {
        (-bottom_left, bottom_left)
    } else if center.x > frame.x1 {
        (bottom_right - PI, PI - bottom_right)
    } else {
        (bottom_left - PI, bottom_right)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/placement.rs"]
mod tests;
