//! Error taxonomy shared by every sequence constructor.

use thiserror::Error;

/// Errors raised by sequence construction and consumption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LfsrError {
    /// The sequence was configured with an unusable width, mask or start.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// A term was requested after the register returned to its start.
    #[error("sequence exhausted: the register has returned to its starting state")]
    Exhausted,
}

impl LfsrError {
    /// Returns true for configuration errors raised at construction time.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Reasons a sequence configuration is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// Register width outside the supported range.
    #[error("register width {width} must be between {min} and {max} bits")]
    WidthOutOfRange {
        /// Requested width.
        width: u32,
        /// Smallest accepted width.
        min: u32,
        /// Largest accepted width.
        max: u32,
    },

    /// The tap mask is zero.
    #[error("tap mask must be nonzero")]
    ZeroTaps,

    /// The starting state is zero.
    #[error("starting state must be nonzero")]
    ZeroStart,

    /// The starting state does not fit in the register.
    #[error("starting state needs {bits} bits but the register holds {width}")]
    StartOutOfRange {
        /// Bit length of the starting state.
        bits: u64,
        /// Register width in bits.
        width: u64,
    },

    /// The starting state and tap mask are stored at different widths.
    #[error("starting state is stored in {start_bits} bits but the tap mask in {taps_bits}")]
    StorageMismatch {
        /// Storage width of the tap mask.
        taps_bits: u64,
        /// Storage width of the starting state.
        start_bits: u64,
    },

    /// The tap mask does not fit in the register.
    #[error("tap mask needs {bits} bits but the register holds {width}")]
    TapsOutOfRange {
        /// Bit length of the tap mask.
        bits: u64,
        /// Register width in bits.
        width: u64,
    },
}
