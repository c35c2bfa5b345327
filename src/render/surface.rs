use crate::foundation::core::{Point, Rgba8};
use crate::shape::fire::FireShape;

/// A 2D drawing target with canvas-style path building.
///
/// A path is started with [`DrawSurface::begin_path`], built with the `*_to` and `arc`
/// calls, and painted with [`DrawSurface::fill`] or [`DrawSurface::stroke`]; painting does not
/// clear the current path.
pub trait DrawSurface {
    fn begin_path(&mut self);

    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    fn curve_to(&mut self, c1: Point, c2: Point, p: Point);

    fn close_path(&mut self);

    fn fill(&mut self, color: Rgba8);

    fn stroke(&mut self, color: Rgba8, width: f64);

    /// Circular arc around `center`, angles in radians, clockwise in y-down space.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);

    /// Fill a flame silhouette as one closed path.
    fn fill_shape(&mut self, shape: &FireShape, color: Rgba8) {
        self.begin_path();
        self.move_to(shape.start);
        for seg in &shape.segments {
            self.curve_to(seg.cp1, seg.cp2, seg.end);
        }
        self.close_path();
        self.fill(color);
    }
}

/// One recorded [`DrawSurface`] call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum DrawCall {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    CurveTo(Point, Point, Point),
    ClosePath,
    Fill(Rgba8),
    Stroke(Rgba8, f64),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

/// A surface that only records what was asked of it.
#[derive(Clone, Debug, Default)]
pub struct DrawLog {
    pub calls: Vec<DrawCall>,
}

impl DrawLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill colors in call order.
    pub fn fills(&self) -> Vec<Rgba8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Fill(color) => Some(*color),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for DrawLog {
    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.calls.push(DrawCall::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.calls.push(DrawCall::LineTo(p));
    }

    fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.calls.push(DrawCall::CurveTo(c1, c2, p));
    }

    fn close_path(&mut self) {
        self.calls.push(DrawCall::ClosePath);
    }

    fn fill(&mut self, color: Rgba8) {
        self.calls.push(DrawCall::Fill(color));
    }

    fn stroke(&mut self, color: Rgba8, width: f64) {
        self.calls.push(DrawCall::Stroke(color, width));
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.calls.push(DrawCall::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
