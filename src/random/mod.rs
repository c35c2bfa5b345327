//! Deterministic randomness derived from identifiers.

/// xorshift128 generator seeded from a hex identifier.
pub mod xorshift;
