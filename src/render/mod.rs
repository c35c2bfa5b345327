//! Drawing: surfaces, composition, rasterization and PNG output.

/// Composition planning and layered painting.
pub mod compose;
/// `vello_cpu` raster surface.
pub mod cpu;
/// Placement diagnostics.
pub mod debug;
/// PNG encoding.
pub mod encode;
/// One-shot render entry points.
pub mod pipeline;
/// JSON render settings.
pub mod settings;
/// The drawing surface abstraction and a recording surface.
pub mod surface;
