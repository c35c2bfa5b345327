//! Hand-authored seed silhouettes, drawn against a 512x512 canvas.

use std::sync::LazyLock;

use crate::foundation::core::{Point, Rect};
use crate::shape::fire::{BezierSegment, FireShape};

/// Canvas size the seed coordinates were authored for.
pub const SEED_CANVAS_SIZE: u32 = 512;

static SEED_SHAPES: LazyLock<Vec<FireShape>> = LazyLock::new(|| {
    vec![
        // teardrop
        FireShape::new(
            Rect::new(156.0, 100.0, 356.0, 430.0),
            Point::new(256.0, 430.0),
            vec![
                seg(350.0, 430.0, 360.0, 300.0, 300.0, 230.0),
                seg(260.0, 180.0, 280.0, 140.0, 256.0, 100.0),
                seg(220.0, 160.0, 156.0, 220.0, 160.0, 320.0),
                seg(163.0, 390.0, 200.0, 430.0, 256.0, 430.0),
            ],
            Point::new(256.0, 400.0),
        ),
        // forked tongue
        FireShape::new(
            Rect::new(150.0, 80.0, 370.0, 430.0),
            Point::new(250.0, 430.0),
            vec![
                seg(340.0, 430.0, 375.0, 350.0, 330.0, 270.0),
                seg(310.0, 235.0, 335.0, 190.0, 350.0, 150.0),
                seg(300.0, 175.0, 290.0, 130.0, 265.0, 80.0),
                seg(250.0, 150.0, 190.0, 190.0, 170.0, 280.0),
                seg(150.0, 360.0, 180.0, 430.0, 250.0, 430.0),
            ],
            Point::new(255.0, 395.0),
        ),
        // low blaze
        FireShape::new(
            Rect::new(130.0, 150.0, 380.0, 430.0),
            Point::new(255.0, 430.0),
            vec![
                seg(345.0, 430.0, 385.0, 370.0, 360.0, 300.0),
                seg(345.0, 260.0, 330.0, 230.0, 310.0, 150.0),
                seg(290.0, 210.0, 270.0, 220.0, 250.0, 190.0),
                seg(225.0, 230.0, 200.0, 210.0, 190.0, 170.0),
                seg(150.0, 240.0, 125.0, 330.0, 160.0, 390.0),
                seg(185.0, 425.0, 220.0, 430.0, 255.0, 430.0),
            ],
            Point::new(255.0, 405.0),
        ),
        // candle
        FireShape::new(
            Rect::new(180.0, 60.0, 330.0, 430.0),
            Point::new(255.0, 430.0),
            vec![
                seg(320.0, 430.0, 335.0, 360.0, 310.0, 290.0),
                seg(290.0, 230.0, 300.0, 150.0, 262.0, 60.0),
                seg(240.0, 130.0, 185.0, 200.0, 190.0, 300.0),
                seg(193.0, 380.0, 215.0, 430.0, 255.0, 430.0),
            ],
            Point::new(255.0, 400.0),
        ),
    ]
});

const fn seg(c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> BezierSegment {
    BezierSegment::new(Point::new(c1x, c1y), Point::new(c2x, c2y), Point::new(x, y))
}

/// The process-wide seed library. Never empty.
pub fn seed_shapes() -> &'static [FireShape] {
    &SEED_SHAPES
}

#[cfg(test)]
#[path = "../../tests/unit/shape/library.rs"]
mod tests;
