//! Byte-position scrambling driven by maximum-length LFSR sequences.
//!
//! A maximal sequence over `width` bits is a permutation of `1..2^width`.
//! Subtracting one and dropping positions past the end of the input gives a
//! permutation of the input's byte offsets, which is all scrambling does.
//! It hides nothing from anyone who knows the width and start.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod scramble;

pub use crate::config::ScrambleConfig;
pub use crate::scramble::{positions, scramble, unscramble, ScrambleError};
