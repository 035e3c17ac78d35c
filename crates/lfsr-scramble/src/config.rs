//! Scrambling parameters.

use lfsr_core::{period, LfsrError, MAX_WIDTH, MIN_WIDTH};

/// Register width and starting state used to derive a permutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrambleConfig {
    /// Register width in bits, between 2 and 64.
    pub width: u32,
    /// Nonzero starting state that fits in `width` bits.
    pub start: u64,
}

impl ScrambleConfig {
    /// Narrowest configuration whose period covers `len` byte positions.
    pub fn fitting(len: usize) -> Self {
        let len = len as u64;
        let width = (MIN_WIDTH..=MAX_WIDTH)
            .find(|w| period(*w).is_ok_and(|states| states >= len))
            .unwrap_or(MAX_WIDTH);
        Self { width, start: 1 }
    }

    /// Number of byte positions the permutation can address.
    pub fn capacity(&self) -> Result<u64, LfsrError> {
        period(self.width)
    }
}

impl Default for ScrambleConfig {
    /// Four-bit register starting at 1, covering up to 15 bytes.
    fn default() -> Self {
        Self { width: 4, start: 1 }
    }
}
