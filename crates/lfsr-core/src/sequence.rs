//! Lazy, single-pass LFSR sequences.

use core::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::{ArgumentError, LfsrError};
use crate::register::{step, Register};
use crate::taps::{check_width, maximal_taps, state_count};

/// One full cycle of an LFSR, produced one term at a time.
///
/// The first term is the starting state. The sequence ends once the register
/// steps back to that state, so every state on the cycle is yielded exactly
/// once. An exhausted sequence cannot be rewound.
#[derive(Clone, Debug)]
pub struct Lfsr<R: Register> {
    taps: R,
    start: R,
    current: R,
    done: bool,
    remaining: Option<u64>,
}

impl<R: Register> Lfsr<R> {
    /// Builds a sequence from an explicit tap mask.
    ///
    /// The register is as wide as `taps`; `start` must be nonzero, no wider,
    /// and stored at the same width as `taps`.
    /// Nothing checks that `taps` is maximal, so the cycle through `start` may
    /// be shorter than `2^width - 1`.
    pub fn new(taps: R, start: R) -> Result<Self, LfsrError> {
        if taps.is_zero() {
            return Err(ArgumentError::ZeroTaps.into());
        }
        if start.storage_bits() != taps.storage_bits() {
            return Err(ArgumentError::StorageMismatch {
                taps_bits: taps.storage_bits(),
                start_bits: start.storage_bits(),
            }
            .into());
        }
        check_start(&start, taps.bit_len())?;
        debug!(width = taps.bit_len(), ?taps, ?start, "lfsr sequence created");
        Ok(Self::from_parts(taps, start, None))
    }

    fn from_parts(taps: R, start: R, remaining: Option<u64>) -> Self {
        Self {
            current: start.clone(),
            taps,
            start,
            done: false,
            remaining,
        }
    }

    /// Tap mask applied whenever a set bit is shifted out.
    pub fn taps(&self) -> &R {
        &self.taps
    }

    /// State the sequence started from and will stop before revisiting.
    pub fn start(&self) -> &R {
        &self.start
    }

    /// Returns true while the cycle has terms left to yield.
    pub fn has_next(&self) -> bool {
        !self.done
    }

    /// Terms left to yield, when the cycle length is known up front.
    pub fn remaining(&self) -> Option<u64> {
        self.remaining
    }

    /// Yields the next term, or [`LfsrError::Exhausted`] once the cycle has closed.
    pub fn next_term(&mut self) -> Result<R, LfsrError> {
        if self.done {
            return Err(LfsrError::Exhausted);
        }
        let term = step(&mut self.current, &self.taps);
        self.done = self.current == self.start;
        if let Some(left) = self.remaining.as_mut() {
            *left = left.saturating_sub(1);
        }
        if self.done {
            trace!(start = ?self.start, "lfsr cycle closed");
        }
        Ok(term)
    }
}

impl Lfsr<u64> {
    /// Builds a full-period sequence for `width` from the maximal tap table.
    ///
    /// `start` must be nonzero and fit in `width` bits. The sequence yields
    /// every value in `1..2^width` exactly once.
    pub fn maximal(width: u32, start: u64) -> Result<Self, LfsrError> {
        let taps = maximal_taps(width)?;
        check_start(&start, u64::from(width))?;
        debug!(width, taps, start, "maximal lfsr sequence created");
        Ok(Self::from_parts(taps, start, Some(state_count(width))))
    }

    /// Builds a `width`-bit sequence from a caller-supplied tap mask.
    pub fn with_width(width: u32, taps: u64, start: u64) -> Result<Self, LfsrError> {
        check_width(width)?;
        if taps == 0 {
            return Err(ArgumentError::ZeroTaps.into());
        }
        if taps.bit_len() > u64::from(width) {
            return Err(ArgumentError::TapsOutOfRange {
                bits: taps.bit_len(),
                width: u64::from(width),
            }
            .into());
        }
        check_start(&start, u64::from(width))?;
        debug!(width, taps, start, "custom lfsr sequence created");
        Ok(Self::from_parts(taps, start, None))
    }
}

fn check_start<R: Register>(start: &R, width: u64) -> Result<(), ArgumentError> {
    if start.is_zero() {
        return Err(ArgumentError::ZeroStart);
    }
    if start.bit_len() > width {
        return Err(ArgumentError::StartOutOfRange {
            bits: start.bit_len(),
            width,
        });
    }
    Ok(())
}

impl<R: Register> Iterator for Lfsr<R> {
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.next_term().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.remaining.and_then(|left| usize::try_from(left).ok()) {
            Some(left) => (left, Some(left)),
            None => (1, None),
        }
    }
}

impl<R: Register> FusedIterator for Lfsr<R> {}

/// Full-period sequence over a `width`-bit native register.
///
/// Shorthand for [`Lfsr::maximal`].
pub fn maximal_sequence(width: u32, start: u64) -> Result<Lfsr<u64>, LfsrError> {
    Lfsr::maximal(width, start)
}
