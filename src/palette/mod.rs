//! Counter tiers and their flame palettes.

/// Tier lookup and palette table.
pub mod tier;
