//! Demonstrates scrambling a string and restoring it with the same register.

use lfsr_core::maximal_sequence;
use lfsr_scramble::{scramble, unscramble, ScrambleConfig};

fn main() {
    // Four-bit register from state 1, the smallest that covers the input.
    let config = ScrambleConfig::fitting(b"demonstration".len());
    assert_eq!(config, ScrambleConfig::default());

    let terms: Vec<u64> = maximal_sequence(config.width, config.start)
        .expect("valid register")
        .collect();
    println!("terms: {terms:?}");

    let scrambled = scramble(b"demonstration", &config).expect("input fits");
    let restored = unscramble(&scrambled, &config).expect("input fits");
    assert_eq!(restored, b"demonstration");

    println!("scrambled: {}", String::from_utf8_lossy(&scrambled));
    println!("restored: {}", String::from_utf8_lossy(&restored));
}
