//! Linear feedback shift register sequences.
//!
//! This crate produces the full cycle of states an LFSR visits before it
//! returns to its starting state, lazily and exactly once per state. It provides:
//! - A [`Register`] capability implemented for native unsigned words and for
//!   big-endian byte buffers of any length.
//! - The single shift-right / conditional-xor transition shared by both.
//! - A table of maximum-length tap masks for widths 2 through 64.
//! - [`Lfsr`] and [`BigLfsr`], the lazy sequences built on top of the above.
//!
//! LFSR output is linear and trivially predictable; nothing here is suitable
//! for cryptographic use.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod big;
mod bytes;
mod error;
mod register;
mod sequence;
mod taps;

pub use crate::big::{custom_sequence, BigLfsr};
pub use crate::bytes::ByteRegister;
pub use crate::error::{ArgumentError, LfsrError};
pub use crate::register::{step, Register};
pub use crate::sequence::{maximal_sequence, Lfsr};
pub use crate::taps::{maximal_taps, period, MAXIMAL_TAPS, MAX_WIDTH, MIN_WIDTH};
