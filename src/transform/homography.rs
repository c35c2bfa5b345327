//! Planar projective transforms solved from four point correspondences.
//!
//! Each quadrilateral is first expressed as a projective basis: the 4x4 system
//!
//! ```text
//! | x1 x2 x3 x4 |   | l1 |   | 0 |
//! | y1 y2 y3 y4 | * | l2 | = | 0 |
//! |  1  1  1  1 |   | l3 |   | 0 |
//! |  0  0  0  1 |   | l4 |   | 1 |
//! ```
//!
//! is inverted in closed form, and the weights scale the first three homogeneous points into
//! the columns of a 3x3 basis matrix `B`. The map from `src` to `dest` is then
//! `B_dest * B_src^-1`, normalized so the last coefficient is 1.

use crate::foundation::core::Point;
use crate::foundation::math::{Mat4, reciprocal_or_epsilon};
use crate::shape::fire::FireShape;

/// Coordinates exactly equal to zero are nudged to this value before solving.
pub const ZERO_COORD_SUBSTITUTE: f64 = 0.5;

type Mat3 = [[f64; 3]; 3];

/// A 3x3 projective matrix together with the correspondence it was solved from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Homography {
    /// Row-major `[a, b, c, d, e, f, g, h, i]` with `i == 1`.
    coeffs: [f64; 9],
    src: [Point; 4],
    dest: [Point; 4],
}

impl Homography {
    /// Solve the transform mapping `src[k]` onto `dest[k]` for `k = 0..4`.
    ///
    /// Total: degenerate inputs produce a finite matrix rather than an error. Zero
    /// coordinates are replaced with [`ZERO_COORD_SUBSTITUTE`] and any exactly-zero
    /// determinant uses a small epsilon as its reciprocal.
    pub fn solve(src: [Point; 4], dest: [Point; 4]) -> Self {
        let src = src.map(nudge_zero);
        let dest = dest.map(nudge_zero);

        let m = mul3(&projective_basis(&dest), &inverse3(&projective_basis(&src)));
        let norm = reciprocal_or_epsilon(m[2][2]);

        let mut coeffs = [0.0; 9];
        for (c, v) in coeffs.iter_mut().zip(m.iter().flatten()) {
            *c = v * norm;
        }
        coeffs[8] = 1.0;

        Self { coeffs, src, dest }
    }

    /// The identity map over the unit square.
    pub fn identity() -> Self {
        let unit = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        Self {
            coeffs: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            src: unit,
            dest: unit,
        }
    }

    /// Row-major `[a, b, c, d, e, f, g, h, i]`.
    pub fn coefficients(&self) -> [f64; 9] {
        self.coeffs
    }

    /// Source quadrilateral, after zero substitution.
    pub fn source(&self) -> [Point; 4] {
        self.src
    }

    /// Destination quadrilateral, after zero substitution.
    pub fn destination(&self) -> [Point; 4] {
        self.dest
    }

    /// Projective map: `((a x + b y + c) / w, (d x + e y + f) / w)` with `w = g x + h y + i`.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let [a, b, c, d, e, f, g, h, i] = self.coeffs;
        let w = g * x + h * y + i;
        ((a * x + b * y + c) / w, (d * x + e * y + f) / w)
    }

    /// [`Homography::apply`] on a point.
    pub fn apply_point(&self, p: Point) -> Point {
        let (x, y) = self.apply(p.x, p.y);
        Point::new(x, y)
    }

    /// Map start, base and every control/end point of `shape`.
    ///
    /// The frame is copied as-is and no longer bounds the result.
    pub fn apply_to_shape(&self, shape: &FireShape) -> FireShape {
        shape.map_points(|p| self.apply_point(p))
    }
}

fn nudge_zero(p: Point) -> Point {
    let fix = |v: f64| if v == 0.0 { ZERO_COORD_SUBSTITUTE } else { v };
    Point::new(fix(p.x), fix(p.y))
}

fn projective_basis(q: &[Point; 4]) -> Mat3 {
    let system = Mat4::from_rows([
        [q[0].x, q[1].x, q[2].x, q[3].x],
        [q[0].y, q[1].y, q[2].y, q[3].y],
        [1.0, 1.0, 1.0, 1.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let l = system.inverse().mul_vec([0.0, 0.0, 0.0, 1.0]);
    [
        [l[0] * q[0].x, l[1] * q[1].x, l[2] * q[2].x],
        [l[0] * q[0].y, l[1] * q[1].y, l[2] * q[2].y],
        [l[0], l[1], l[2]],
    ]
}

fn inverse3(m: &Mat3) -> Mat3 {
    let [[a, b, c], [d, e, f], [g, h, i]] = *m;
    let adj = [
        [e * i - f * h, c * h - b * i, b * f - c * e],
        [f * g - d * i, a * i - c * g, c * d - a * f],
        [d * h - e * g, b * g - a * h, a * e - b * d],
    ];
    let det = a * adj[0][0] + b * adj[1][0] + c * adj[2][0];
    let inv = reciprocal_or_epsilon(det);
    adj.map(|row| row.map(|v| v * inv))
}

fn mul3(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/transform/homography.rs"]
mod tests;
