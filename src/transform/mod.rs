//! Projective transforms that bend seed shapes into new flame tongues.

/// Four-point homography solver.
pub mod homography;
/// Random bar placements and the transforms they induce.
pub mod placement;
