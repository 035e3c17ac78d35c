//! Arbitrary-width sequences over big-endian byte registers.

use core::iter::FusedIterator;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::bytes::ByteRegister;
use crate::error::{ArgumentError, LfsrError};
use crate::register::Register;
use crate::sequence::Lfsr;

/// LFSR sequence of any width, yielding [`BigUint`] terms.
///
/// The register is as wide as the tap mask. There is no maximal table for
/// this path; the caller is trusted to supply a useful mask.
#[derive(Clone, Debug)]
pub struct BigLfsr {
    inner: Lfsr<ByteRegister>,
}

impl BigLfsr {
    /// Builds a sequence from `taps` and `start`.
    ///
    /// Both must be nonzero and `start` must be no wider than `taps`.
    pub fn new(taps: &BigUint, start: &BigUint) -> Result<Self, LfsrError> {
        if taps.is_zero() {
            return Err(ArgumentError::ZeroTaps.into());
        }
        if start.is_zero() {
            return Err(ArgumentError::ZeroStart.into());
        }
        let mask = ByteRegister::from(taps);
        let start = ByteRegister::with_len(start, mask.len())
            .filter(|_| start.bits() <= taps.bits())
            .ok_or(ArgumentError::StartOutOfRange {
                bits: start.bits(),
                width: taps.bits(),
            })?;
        Ok(Self {
            inner: Lfsr::new(mask, start)?,
        })
    }

    /// Register width in bits.
    pub fn width(&self) -> u64 {
        self.inner.taps().bit_len()
    }

    /// Tap mask applied whenever a set bit is shifted out.
    pub fn taps(&self) -> BigUint {
        self.inner.taps().to_biguint()
    }

    /// State the sequence started from.
    pub fn start(&self) -> BigUint {
        self.inner.start().to_biguint()
    }

    /// Returns true while the cycle has terms left to yield.
    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    /// Yields the next term, or [`LfsrError::Exhausted`] once the cycle has closed.
    pub fn next_term(&mut self) -> Result<BigUint, LfsrError> {
        self.inner.next_term().map(|r| r.to_biguint())
    }
}

impl Iterator for BigLfsr {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        self.next_term().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for BigLfsr {}

/// Arbitrary-width sequence for a caller-supplied tap mask.
///
/// Shorthand for [`BigLfsr::new`].
pub fn custom_sequence(taps: &BigUint, start: &BigUint) -> Result<BigLfsr, LfsrError> {
    BigLfsr::new(taps, start)
}
