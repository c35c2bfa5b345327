use crate::foundation::core::{BezPath, Point, Rect, Vec2};

/// Number of samples per segment used by [`FireShape::centroid`].
pub const DEFAULT_CENTROID_SAMPLES: usize = 10;

/// One cubic piece; starts where the previous segment (or the shape's start) ended.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BezierSegment {
    pub cp1: Point,
    pub cp2: Point,
    pub end: Point,
}

impl BezierSegment {
    pub const fn new(cp1: Point, cp2: Point, end: Point) -> Self {
        Self { cp1, cp2, end }
    }

    fn map(self, f: &impl Fn(Point) -> Point) -> Self {
        Self {
            cp1: f(self.cp1),
            cp2: f(self.cp2),
            end: f(self.end),
        }
    }
}

/// A closed flame silhouette.
///
/// The path starts at `start`, follows `segments` in order and closes back to `start`.
/// `base` anchors the flame's foot: instances are aligned on it and the middle/inner passes
/// scale around it. `frame` is authoring metadata; it is carried through transforms but only
/// kept accurate by [`FireShape::translate`] and [`FireShape::scale_about`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FireShape {
    pub frame: Rect,
    pub start: Point,
    pub segments: Vec<BezierSegment>,
    pub base: Point,
}

impl FireShape {
    pub fn new(frame: Rect, start: Point, segments: Vec<BezierSegment>, base: Point) -> Self {
        Self {
            frame,
            start,
            segments,
            base,
        }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        let d = Vec2::new(dx, dy);
        Self {
            frame: self.frame + d,
            ..self.map_points(|p| p + d)
        }
    }

    /// Scale every coordinate about `(cx, cy)`: `c + (p - c) * factor`.
    pub fn scale_about(&self, cx: f64, cy: f64, factor: f64) -> Self {
        let c = Point::new(cx, cy);
        let f = move |p: Point| c + (p - c) * factor;
        let p0 = f(Point::new(self.frame.x0, self.frame.y0));
        let p1 = f(Point::new(self.frame.x1, self.frame.y1));
        Self {
            frame: Rect::new(p0.x, p0.y, p1.x, p1.y),
            ..self.map_points(f)
        }
    }

    /// Same shape with start, base and every segment point passed through `f`.
    ///
    /// The frame is copied unchanged.
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            frame: self.frame,
            start: f(self.start),
            segments: self.segments.iter().map(|s| s.map(&f)).collect(),
            base: f(self.base),
        }
    }

    /// Mean of `samples` evenly spaced points (endpoints included) on every segment.
    pub fn approximate_centroid(&self, samples: usize) -> Point {
        let samples = samples.max(2);
        let mut sum = Vec2::ZERO;
        let mut n = 0usize;
        let mut p0 = self.start;
        for seg in &self.segments {
            for j in 0..samples {
                let t = j as f64 / (samples - 1) as f64;
                sum += bernstein(p0, seg.cp1, seg.cp2, seg.end, t).to_vec2();
                n += 1;
            }
            p0 = seg.end;
        }
        if n == 0 {
            return self.start;
        }
        (sum / n as f64).to_point()
    }

    pub fn centroid(&self) -> Point {
        self.approximate_centroid(DEFAULT_CENTROID_SAMPLES)
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        for seg in &self.segments {
            path.curve_to(seg.cp1, seg.cp2, seg.end);
        }
        path.close_path();
        path
    }
}

/// `(1-t)^3 p0 + 3(1-t)^2 t c1 + 3(1-t) t^2 c2 + t^3 p3`
fn bernstein(p0: Point, c1: Point, c2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let b0 = mt * mt * mt;
    let b1 = 3.0 * mt * mt * t;
    let b2 = 3.0 * mt * t * t;
    let b3 = t * t * t;
    Point::new(
        b0 * p0.x + b1 * c1.x + b2 * c2.x + b3 * p3.x,
        b0 * p0.y + b1 * c1.y + b2 * c2.y + b3 * p3.y,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/shape/fire.rs"]
mod tests;
