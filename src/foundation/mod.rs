/// Shared geometry and color types.
pub mod core;
/// Crate error type.
pub mod error;
pub(crate) mod math;
