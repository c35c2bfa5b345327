use super::*;
use crate::foundation::core::Rect;
use crate::shape::fire::BezierSegment;

fn pts(raw: [(f64, f64); 4]) -> [Point; 4] {
    raw.map(|(x, y)| Point::new(x, y))
}

fn assert_round_trip(src: [Point; 4], dest: [Point; 4]) {
    let h = Homography::solve(src, dest);
    for (s, d) in h.source().iter().zip(h.destination()) {
        let got = h.apply_point(*s);
        let tol = 1e-6 * d.x.abs().max(d.y.abs()).max(1.0);
        assert!(
            (got - d).hypot() <= tol,
            "{s:?} mapped to {got:?}, expected {d:?}"
        );
    }
}

#[test]
fn round_trip_rect_to_bar_quad() {
    let frame = pts([
        (156.0, 100.0),
        (356.0, 100.0),
        (356.0, 430.0),
        (156.0, 430.0),
    ]);
    let bar = pts([
        (200.0, 150.0),
        (330.0, 170.0),
        (356.0, 430.0),
        (156.0, 430.0),
    ]);
    assert_round_trip(frame, bar);
    assert_round_trip(bar, frame);
}

#[test]
fn round_trip_general_quads() {
    let cases = [
        (
            pts([(2.0, 3.0), (3.0, 2.0), (2.0, 1.0), (1.0, 2.0)]),
            pts([(10.0, 10.0), (90.0, 5.0), (120.0, 90.0), (4.0, 100.0)]),
        ),
        (
            pts([(10.0, 10.0), (100.0, 20.0), (80.0, 90.0), (15.0, 70.0)]),
            pts([(-40.0, 12.0), (300.0, -8.0), (250.0, 410.0), (-30.0, 333.0)]),
        ),
        (
            pts([(1.0, 1.0), (512.0, 1.0), (512.0, 512.0), (1.0, 512.0)]),
            pts([(512.0, 1.0), (512.0, 512.0), (1.0, 512.0), (1.0, 1.0)]),
        ),
    ];
    for (a, b) in cases {
        assert_round_trip(a, b);
    }
}

#[test]
fn same_quad_solves_to_identity() {
    let q = pts([(156.0, 100.0), (356.0, 100.0), (356.0, 430.0), (156.0, 430.0)]);
    let h = Homography::solve(q, q);
    let expected = Homography::identity().coefficients();
    for (got, want) in h.coefficients().iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "{:?}", h.coefficients());
    }
    assert_eq!(h.apply(40.0, -3.0).0.round(), 40.0);
}

#[test]
fn zero_coordinates_are_substituted() {
    let src = pts([(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]);
    let dest = pts([(10.0, 10.0), (100.0, 0.0), (120.0, 90.0), (0.0, 100.0)]);
    let h = Homography::solve(src, dest);
    assert_eq!(h.source()[0], Point::new(0.5, 0.5));
    assert_eq!(h.destination()[1], Point::new(100.0, 0.5));
    assert_round_trip(src, dest);
}

#[test]
fn last_coefficient_is_one() {
    let h = Homography::solve(
        pts([(1.0, 1.0), (5.0, 1.0), (5.0, 5.0), (1.0, 5.0)]),
        pts([(2.0, 2.0), (9.0, 1.0), (7.0, 8.0), (1.0, 6.0)]),
    );
    assert_eq!(h.coefficients()[8], 1.0);
}

#[test]
fn degenerate_quads_stay_finite() {
    let collinear = pts([(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);
    let square = pts([(1.0, 1.0), (5.0, 1.0), (5.0, 5.0), (1.0, 5.0)]);
    for h in [
        Homography::solve(collinear, square),
        Homography::solve(square, collinear),
        Homography::solve(collinear, collinear),
    ] {
        assert!(h.coefficients().iter().all(|c| c.is_finite()));
    }
}

#[test]
fn collinear_source_basis_falls_back_to_epsilon() {
    // First three corners share y = 1: two rows of the source basis are identical and its
    // determinant is exactly zero.
    let src = pts([(1.0, 1.0), (2.0, 1.0), (3.0, 1.0), (1.0, 3.0)]);
    let dest = pts([(10.0, 10.0), (30.0, 12.0), (28.0, 40.0), (8.0, 35.0)]);
    let h = Homography::solve(src, dest);

    let c = h.coefficients();
    assert_eq!(c[8], 1.0);
    assert!(c.iter().all(|v| v.is_finite()), "{c:?}");

    // The epsilon reciprocal leaves a rank-one map: every point lands on one image point.
    for (x, y) in [(100.0, 50.0), (5.0, 5.0), (17.0, 300.0), (0.5, 0.5)] {
        let got = h.apply_point(Point::new(x, y));
        assert!((got - dest[3]).hypot() < 1e-6, "({x}, {y}) -> {got:?}");
    }
}

#[test]
fn apply_is_projective_divide() {
    let h = Homography {
        coeffs: [2.0, 0.0, 1.0, 0.0, 3.0, -1.0, 0.5, 0.0, 1.0],
        src: Homography::identity().source(),
        dest: Homography::identity().destination(),
    };
    // w = 0.5 * 2 + 1 = 2
    assert_eq!(h.apply(2.0, 4.0), (2.5, 5.5));
}

#[test]
fn apply_to_shape_maps_points_but_not_frame() {
    let shape = FireShape::new(
        Rect::new(10.0, 10.0, 20.0, 20.0),
        Point::new(15.0, 20.0),
        vec![BezierSegment::new(
            Point::new(20.0, 20.0),
            Point::new(20.0, 10.0),
            Point::new(15.0, 10.0),
        )],
        Point::new(15.0, 18.0),
    );
    let src = pts([(10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (10.0, 20.0)]);
    let dest = pts([(30.0, 10.0), (40.0, 10.0), (40.0, 20.0), (30.0, 20.0)]);
    let moved = Homography::solve(src, dest).apply_to_shape(&shape);

    assert_eq!(moved.frame, shape.frame);
    let close = |p: Point, q: Point| (p - q).hypot() < 1e-9;
    assert!(close(moved.start, Point::new(35.0, 20.0)));
    assert!(close(moved.base, Point::new(35.0, 18.0)));
    assert!(close(moved.segments[0].cp2, Point::new(40.0, 10.0)));
}
