//! Register capability and the shared LFSR transition.

use core::fmt::Debug;

/// Unsigned register content that can be stepped as an LFSR.
///
/// Implementors behave like an unsigned integer of fixed width: shifts are
/// logical and the vacated high bit is always zero.
pub trait Register: Clone + PartialEq + Debug {
    /// Returns true if every bit is clear.
    fn is_zero(&self) -> bool;

    /// Position of the highest set bit plus one, or 0 for zero.
    fn bit_len(&self) -> u64;

    /// Number of bits the storage holds, set or not.
    fn storage_bits(&self) -> u64;

    /// Shifts right by one bit and returns the bit shifted out.
    fn shift_right(&mut self) -> bool;

    /// XORs `mask` into the register.
    fn xor_assign(&mut self, mask: &Self);
}

macro_rules! impl_native_register {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Register for $ty {
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                #[inline]
                fn bit_len(&self) -> u64 {
                    u64::from(<$ty>::BITS - self.leading_zeros())
                }

                #[inline]
                fn storage_bits(&self) -> u64 {
                    u64::from(<$ty>::BITS)
                }

                #[inline]
                fn shift_right(&mut self) -> bool {
                    let lsb = *self & 1 == 1;
                    *self >>= 1;
                    lsb
                }

                #[inline]
                fn xor_assign(&mut self, mask: &Self) {
                    *self ^= *mask;
                }
            }
        )*
    };
}

impl_native_register!(u8, u16, u32, u64, u128);

/// Advances `state` by one LFSR step and returns the value it held before.
///
/// The register shifts right by one; if the bit shifted out was set, `taps`
/// is XORed into the result.
#[inline]
pub fn step<R: Register>(state: &mut R, taps: &R) -> R {
    let term = state.clone();
    if state.shift_right() {
        state.xor_assign(taps);
    }
    term
}
