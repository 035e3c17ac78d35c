//! Maximum-length tap masks for native registers.

use crate::error::{ArgumentError, LfsrError};

/// Narrowest supported register width.
pub const MIN_WIDTH: u32 = 2;

/// Widest register that fits a native `u64`.
pub const MAX_WIDTH: u32 = 64;

/// Tap masks yielding a period of `2^width - 1`, indexed by width.
///
/// Entries 0 and 1 are placeholders. Values from Koopman's table of
/// maximal-length LFSR feedback terms:
/// <https://users.ece.cmu.edu/~koopman/lfsr/index.html>
#[rustfmt::skip]
pub const MAXIMAL_TAPS: [u64; 65] = [
    /*  0 */ 0x0,
    /*  1 */ 0x0,
    /*  2 */ 0x3,
    /*  3 */ 0x6,
    /*  4 */ 0x9,
    /*  5 */ 0x12,
    /*  6 */ 0x21,
    /*  7 */ 0x41,
    /*  8 */ 0x8E,
    /*  9 */ 0x108,
    /* 10 */ 0x204,
    /* 11 */ 0x402,
    /* 12 */ 0x829,
    /* 13 */ 0x100D,
    /* 14 */ 0x2015,
    /* 15 */ 0x4001,
    /* 16 */ 0x8016,
    /* 17 */ 0x10004,
    /* 18 */ 0x20013,
    /* 19 */ 0x40013,
    /* 20 */ 0x80004,
    /* 21 */ 0x100002,
    /* 22 */ 0x200001,
    /* 23 */ 0x400010,
    /* 24 */ 0x80000D,
    /* 25 */ 0x1000004,
    /* 26 */ 0x2000023,
    /* 27 */ 0x4000013,
    /* 28 */ 0x8000004,
    /* 29 */ 0x10000002,
    /* 30 */ 0x20000029,
    /* 31 */ 0x40000004,
    /* 32 */ 0x80000057,
    /* 33 */ 0x100000029,
    /* 34 */ 0x200000073,
    /* 35 */ 0x400000002,
    /* 36 */ 0x80000003B,
    /* 37 */ 0x100000001F,
    /* 38 */ 0x2000000031,
    /* 39 */ 0x4000000008,
    /* 40 */ 0x800000001C,
    /* 41 */ 0x10000000004,
    /* 42 */ 0x2000000001F,
    /* 43 */ 0x4000000002C,
    /* 44 */ 0x80000000032,
    /* 45 */ 0x10000000000D,
    /* 46 */ 0x200000000097,
    /* 47 */ 0x400000000010,
    /* 48 */ 0x80000000005B,
    /* 49 */ 0x1000000000038,
    /* 50 */ 0x200000000000E,
    /* 51 */ 0x4000000000025,
    /* 52 */ 0x8000000000004,
    /* 53 */ 0x10000000000023,
    /* 54 */ 0x2000000000003E,
    /* 55 */ 0x40000000000023,
    /* 56 */ 0x8000000000004A,
    /* 57 */ 0x100000000000016,
    /* 58 */ 0x200000000000031,
    /* 59 */ 0x40000000000003D,
    /* 60 */ 0x800000000000001,
    /* 61 */ 0x1000000000000013,
    /* 62 */ 0x2000000000000034,
    /* 63 */ 0x4000000000000001,
    /* 64 */ 0x800000000000000D,
];

/// Returns the maximal-length tap mask for `width`.
pub fn maximal_taps(width: u32) -> Result<u64, LfsrError> {
    check_width(width)?;
    Ok(MAXIMAL_TAPS[width as usize])
}

/// Number of distinct nonzero states of a `width`-bit register, `2^width - 1`.
pub fn period(width: u32) -> Result<u64, LfsrError> {
    check_width(width)?;
    Ok(state_count(width))
}

/// `2^width - 1` for a width already known to be in range.
pub(crate) const fn state_count(width: u32) -> u64 {
    u64::MAX >> (MAX_WIDTH - width)
}

pub(crate) fn check_width(width: u32) -> Result<(), ArgumentError> {
    if (MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        Ok(())
    } else {
        Err(ArgumentError::WidthOutOfRange {
            width,
            min: MIN_WIDTH,
            max: MAX_WIDTH,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::step;

    /// Transition matrix over GF(2), stored as the images of each basis bit.
    #[derive(Clone)]
    struct Transition {
        columns: Vec<u64>,
    }

    impl Transition {
        fn of(width: u32) -> Self {
            let taps = MAXIMAL_TAPS[width as usize];
            let columns = (0..width)
                .map(|bit| {
                    let mut state = 1u64 << bit;
                    step(&mut state, &taps);
                    state
                })
                .collect();
            Self { columns }
        }

        fn identity(width: u32) -> Self {
            Self {
                columns: (0..width).map(|bit| 1u64 << bit).collect(),
            }
        }

        fn apply(&self, mut value: u64) -> u64 {
            let mut out = 0u64;
            while value != 0 {
                let bit = value.trailing_zeros() as usize;
                out ^= self.columns[bit];
                value &= value - 1;
            }
            out
        }

        /// `self ∘ rhs`.
        fn compose(&self, rhs: &Self) -> Self {
            Self {
                columns: rhs.columns.iter().map(|c| self.apply(*c)).collect(),
            }
        }

        fn pow(&self, mut exp: u64) -> Self {
            let mut base = self.clone();
            let mut acc = Self::identity(self.columns.len() as u32);
            while exp != 0 {
                if exp & 1 == 1 {
                    acc = base.compose(&acc);
                }
                base = base.compose(&base);
                exp >>= 1;
            }
            acc
        }
    }

    #[test]
    fn table_entries_fit_their_width() {
        for width in MIN_WIDTH..=MAX_WIDTH {
            let taps = MAXIMAL_TAPS[width as usize];
            assert_eq!(64 - taps.leading_zeros(), width, "width {width}");
        }
    }

    #[test]
    fn maximal_taps_rejects_unsupported_widths() {
        for width in [0, 1, 65, 128] {
            assert!(maximal_taps(width).is_err(), "width {width}");
        }
        assert_eq!(maximal_taps(4), Ok(0x9));
        assert_eq!(maximal_taps(64), Ok(0x800000000000000D));
    }

    #[test]
    fn period_matches_state_count() {
        assert_eq!(period(2), Ok(3));
        assert_eq!(period(16), Ok(65_535));
        assert_eq!(period(63), Ok((1u64 << 63) - 1));
        assert_eq!(period(64), Ok(u64::MAX));
    }

    #[test]
    fn period_rejects_unsupported_widths() {
        for width in [0, 1, 65, 100] {
            assert_eq!(
                period(width),
                Err(LfsrError::from(ArgumentError::WidthOutOfRange {
                    width,
                    min: MIN_WIDTH,
                    max: MAX_WIDTH,
                }))
            );
        }
    }

    #[test]
    fn every_entry_returns_to_start_after_one_period() {
        for width in MIN_WIDTH..=MAX_WIDTH {
            let cycle = Transition::of(width).pow(state_count(width));
            for bit in 0..width {
                assert_eq!(cycle.apply(1 << bit), 1 << bit, "width {width}");
            }
        }
    }

    fn assert_primitive(width: u32, prime_factors: &[u64]) {
        let transition = Transition::of(width);
        let full = state_count(width);
        for p in prime_factors {
            assert_eq!(full % p, 0);
            assert_ne!(
                transition.pow(full / p).apply(1),
                1,
                "width {width} cycles early at factor {p}"
            );
        }
    }

    #[test]
    fn width_63_is_maximal() {
        assert_primitive(63, &[7, 73, 127, 337, 92_737, 649_657]);
    }

    #[test]
    fn width_64_is_maximal() {
        assert_primitive(64, &[3, 5, 17, 257, 641, 65_537, 6_700_417]);
    }

    #[test]
    fn width_32_is_maximal() {
        assert_primitive(32, &[3, 5, 17, 257, 65_537]);
    }
}
