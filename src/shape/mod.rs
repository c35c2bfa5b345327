//! Flame silhouettes built from cubic Bézier segments.

/// The [`FireShape`](fire::FireShape) type and its geometric operations.
pub mod fire;
/// Hand-authored seed shapes on a 512x512 canvas.
pub mod library;
