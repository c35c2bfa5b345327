//! Seeded xorshift128 generator.
//!
//! The output sequence is a compatibility contract: the same identifier must produce the same
//! integers on every platform and in every reimplementation, so shifts, wraparound and the
//! range reduction below are fixed bit-for-bit.

use crate::foundation::error::{FireError, FireResult};

/// Number of hex characters consumed from the identifier (four 32-bit words).
pub const SEED_HEX_LEN: usize = 32;

/// Four-word xorshift128 register.
///
/// Owned by a single render call and advanced in place. Not `Copy`: fork a sequence with
/// `clone()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift128 {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl Xorshift128 {
    /// Build a generator from raw state words `[x, y, z, w]`.
    pub fn from_words(words: [u32; 4]) -> Self {
        let [x, y, z, w] = words;
        Self { x, y, z, w }
    }

    /// Seed from an account identifier.
    ///
    /// Only the trailing run of ASCII hex digits is read, so any leading prefix (`0x`,
    /// `acct:`, ...) is ignored. The last 32 of those digits are split into four 8-character
    /// chunks, least-significant chunk first (`x`), then `y`, `z`, `w`. A run shorter than 32
    /// digits is zero-padded on the left.
    ///
    /// Fails with [`FireError::InvalidSeed`] when the identifier does not end in a hex digit.
    pub fn from_identifier(identifier: &str) -> FireResult<Self> {
        let trimmed = identifier.trim();
        let digits = trimmed
            .bytes()
            .rev()
            .take_while(u8::is_ascii_hexdigit)
            .count();
        // Hex digits are ASCII, so this is a char boundary.
        let hex = &trimmed[trimmed.len() - digits..];

        if hex.is_empty() {
            return Err(FireError::invalid_seed(format!(
                "identifier '{identifier}' has no trailing hex digits"
            )));
        }

        let tail = &hex[hex.len().saturating_sub(SEED_HEX_LEN)..];
        if tail.len() < SEED_HEX_LEN {
            tracing::debug!(
                digits = tail.len(),
                "identifier shorter than {SEED_HEX_LEN} hex digits, zero-padding"
            );
        }
        let padded = format!("{tail:0>SEED_HEX_LEN$}");

        let mut words = [0u32; 4];
        for (i, word) in words.iter_mut().enumerate() {
            let end = SEED_HEX_LEN - i * 8;
            let chunk = &padded[end - 8..end];
            *word = u32::from_str_radix(chunk, 16)
                .map_err(|e| FireError::invalid_seed(format!("chunk '{chunk}': {e}")))?;
        }
        Ok(Self::from_words(words))
    }

    /// Current state words `[x, y, z, w]`.
    pub fn words(&self) -> [u32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Advance the register and return the new `w` word as a signed integer.
    pub fn next_i32(&mut self) -> i32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = self.w ^ (self.w >> 19) ^ (t ^ (t >> 8));
        self.w as i32
    }

    /// `lo + |next| mod (hi - lo)`, or `0` for an empty range.
    ///
    /// Modulo-biased toward small values; kept as-is because every rendered image depends on
    /// this exact reduction.
    pub fn next_in_range(&mut self, lo: i64, hi: i64) -> i64 {
        let span = i128::from(hi) - i128::from(lo);
        if span <= 0 {
            return 0;
        }
        let offset = i128::from(self.next_i32()).abs() % span;
        // offset < span, so the sum lands in [lo, hi).
        (i128::from(lo) + offset) as i64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/random/xorshift.rs"]
mod tests;
