//! Forward and inverse byte permutations.

use lfsr_core::{maximal_sequence, LfsrError};
use thiserror::Error;
use tracing::debug;

use crate::config::ScrambleConfig;

/// Errors raised while scrambling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrambleError {
    /// The register configuration was rejected.
    #[error(transparent)]
    Lfsr(#[from] LfsrError),

    /// The register period cannot address every input byte.
    #[error("input of {len} bytes exceeds the {capacity} positions of the register")]
    InputTooLong {
        /// Input length in bytes.
        len: usize,
        /// Positions addressable by the configured register.
        capacity: u64,
    },
}

/// Byte offsets in `0..len`, in the order the configured sequence visits them.
///
/// Terms past `len` are skipped, so the cost scales with the register period
/// (`2^width - 1`) rather than with `len`. Prefer [`ScrambleConfig::fitting`].
pub fn positions(
    len: usize,
    config: &ScrambleConfig,
) -> Result<impl Iterator<Item = usize>, ScrambleError> {
    let sequence = maximal_sequence(config.width, config.start)?;
    let capacity = config.capacity()?;
    if len as u64 > capacity {
        return Err(ScrambleError::InputTooLong { len, capacity });
    }
    debug!(len, width = config.width, start = config.start, "deriving byte positions");
    Ok(sequence
        .map(|term| term - 1)
        .filter(move |offset| *offset < len as u64)
        .map(|offset| offset as usize)
        .take(len))
}

/// Moves the `i`-th input byte to the `i`-th position of the sequence.
pub fn scramble(data: &[u8], config: &ScrambleConfig) -> Result<Vec<u8>, ScrambleError> {
    let mut out = vec![0u8; data.len()];
    for (byte, offset) in data.iter().zip(positions(data.len(), config)?) {
        out[offset] = *byte;
    }
    Ok(out)
}

/// Inverts [`scramble`] for the same configuration.
pub fn unscramble(data: &[u8], config: &ScrambleConfig) -> Result<Vec<u8>, ScrambleError> {
    Ok(positions(data.len(), config)?
        .map(|offset| data[offset])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lfsr_core::ArgumentError;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn demonstration_round_trip() {
        let config = ScrambleConfig::default();
        let scrambled = scramble(b"demonstration", &config).expect("fits");
        assert_eq!(scrambled, b"dntosaoientrm");
        let restored = unscramble(&scrambled, &config).expect("fits");
        assert_eq!(restored, b"demonstration");
    }

    #[test]
    fn positions_form_a_permutation() {
        let mut offsets: Vec<usize> = positions(13, &ScrambleConfig::default())
            .expect("fits")
            .collect();
        assert_eq!(offsets[..4], [0, 8, 12, 6]);
        offsets.sort_unstable();
        assert_eq!(offsets, (0..13).collect::<Vec<_>>());
    }

    #[test]
    fn random_payloads_round_trip() {
        let mut rng = ChaCha20Rng::from_seed([11u8; 32]);
        for len in [1usize, 2, 31, 100, 1000, 4095] {
            let mut data = vec![0u8; len];
            rng.fill_bytes(&mut data);
            let config = ScrambleConfig {
                start: 3,
                ..ScrambleConfig::fitting(len)
            };
            let scrambled = scramble(&data, &config).expect("fits");
            assert_eq!(unscramble(&scrambled, &config).expect("fits"), data);
        }
    }

    #[test]
    fn oversized_register_still_permutes_short_input() {
        let config = ScrambleConfig { width: 16, start: 1 };
        let mut offsets: Vec<usize> = positions(5, &config).expect("fits").collect();
        offsets.sort_unstable();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4]);
        let scrambled = scramble(b"hello", &config).expect("fits");
        assert_eq!(unscramble(&scrambled, &config).expect("fits"), b"hello");
    }

    #[test]
    fn empty_input_round_trips() {
        let config = ScrambleConfig::fitting(0);
        assert!(scramble(&[], &config).expect("fits").is_empty());
        assert!(unscramble(&[], &config).expect("fits").is_empty());
    }

    #[test]
    fn rejects_inputs_beyond_the_period() {
        let err = scramble(&[0u8; 16], &ScrambleConfig::default()).expect_err("too long");
        assert_eq!(
            err,
            ScrambleError::InputTooLong {
                len: 16,
                capacity: 15
            }
        );
    }

    #[test]
    fn rejects_invalid_register() {
        let config = ScrambleConfig { width: 4, start: 0 };
        assert_eq!(
            scramble(b"abc", &config).expect_err("zero start"),
            ScrambleError::Lfsr(ArgumentError::ZeroStart.into())
        );
    }
}
