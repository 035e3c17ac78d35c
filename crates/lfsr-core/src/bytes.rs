//! Arbitrary-width register stored as a big-endian byte buffer.

use num_bigint::BigUint;

use crate::register::Register;

/// Register of any width, most significant byte first.
///
/// The buffer length is fixed at construction; shifts never grow or shrink it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ByteRegister {
    bytes: Box<[u8]>,
}

impl ByteRegister {
    /// Allocates a zeroed register of `len` bytes.
    pub fn zeroed(len: usize) -> Self {
        Self {
            bytes: vec![0u8; len].into_boxed_slice(),
        }
    }

    /// Encodes `value` into exactly `len` bytes, zero-padded on the left.
    ///
    /// Returns `None` if `value` does not fit.
    pub fn with_len(value: &BigUint, len: usize) -> Option<Self> {
        let raw = value.to_bytes_be();
        let significant = match raw.iter().position(|b| *b != 0) {
            Some(first) => &raw[first..],
            None => &[][..],
        };
        if significant.len() > len {
            return None;
        }
        let mut register = Self::zeroed(len);
        register.bytes[len - significant.len()..].copy_from_slice(significant);
        Some(register)
    }

    /// Number of bytes backing the register.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true for a zero-length register.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrows the big-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decodes the register as an unsigned integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }
}

impl From<&BigUint> for ByteRegister {
    /// Encodes `value` in the fewest bytes that hold its bit length.
    fn from(value: &BigUint) -> Self {
        let len = usize::try_from(value.bits().div_ceil(8)).unwrap_or(usize::MAX);
        Self::with_len(value, len).unwrap_or_else(|| Self::zeroed(0))
    }
}

impl From<&ByteRegister> for BigUint {
    fn from(register: &ByteRegister) -> Self {
        register.to_biguint()
    }
}

impl Register for ByteRegister {
    fn is_zero(&self) -> bool {
        self.bytes.iter().all(|b| *b == 0)
    }

    fn bit_len(&self) -> u64 {
        match self.bytes.iter().position(|b| *b != 0) {
            Some(first) => {
                let trailing_bytes = (self.bytes.len() - first - 1) as u64;
                trailing_bytes * 8 + u64::from(8 - self.bytes[first].leading_zeros())
            }
            None => 0,
        }
    }

    fn storage_bits(&self) -> u64 {
        self.bytes.len() as u64 * 8
    }

    fn shift_right(&mut self) -> bool {
        let mut carry = 0u8;
        for byte in self.bytes.iter_mut() {
            let next_carry = (*byte & 1) << 7;
            *byte = (*byte >> 1) | carry;
            carry = next_carry;
        }
        carry != 0
    }

    /// XORs `mask` aligned at the least significant byte.
    fn xor_assign(&mut self, mask: &Self) {
        for (dst, src) in self.bytes.iter_mut().rev().zip(mask.bytes.iter().rev()) {
            *dst ^= *src;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn with_len_pads_on_the_left() {
        let register = ByteRegister::with_len(&BigUint::from(0x1234u32), 4).expect("fits");
        assert_eq!(register.as_bytes(), &[0x00, 0x00, 0x12, 0x34]);
        assert_eq!(register.to_biguint(), BigUint::from(0x1234u32));
    }

    #[test]
    fn with_len_rejects_values_that_do_not_fit() {
        assert!(ByteRegister::with_len(&BigUint::from(0x1_0000u32), 2).is_none());
    }

    #[test]
    fn minimal_encoding_tracks_bit_length() {
        let value = BigUint::from(1u8) << 64u32;
        let register = ByteRegister::from(&value);
        assert_eq!(register.len(), 9);
        assert_eq!(register.bit_len(), 65);
        assert_eq!(register.storage_bits(), 72);
        assert!(ByteRegister::from(&BigUint::from(0u8)).is_empty());
    }

    #[test]
    fn shift_carries_across_bytes() {
        let mut register = ByteRegister::with_len(&BigUint::from(0x0103u32), 2).expect("fits");
        assert!(register.shift_right());
        assert_eq!(register.as_bytes(), &[0x00, 0x81]);
        assert!(register.shift_right());
        assert_eq!(register.as_bytes(), &[0x00, 0x40]);
        assert!(!register.shift_right());
    }

    #[test]
    fn matches_biguint_arithmetic() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..64 {
            let mut a = [0u8; 17];
            let mut b = [0u8; 17];
            rng.fill_bytes(&mut a);
            rng.fill_bytes(&mut b);
            let big_a = BigUint::from_bytes_be(&a);
            let big_b = BigUint::from_bytes_be(&b);

            let mut shifted = ByteRegister::with_len(&big_a, 17).expect("fits");
            let lsb = shifted.shift_right();
            assert_eq!(lsb, big_a.bit(0));
            assert_eq!(shifted.to_biguint(), &big_a >> 1u32);

            let mut mixed = ByteRegister::with_len(&big_a, 17).expect("fits");
            mixed.xor_assign(&ByteRegister::with_len(&big_b, 17).expect("fits"));
            assert_eq!(mixed.to_biguint(), &big_a ^ &big_b);
            assert_eq!(mixed.bit_len(), (&big_a ^ &big_b).bits());
        }
    }
}
