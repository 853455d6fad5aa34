//! Element types a stack may hold.

use alloc::vec::Vec;
use core::fmt::Debug;

mod private {
    pub trait Sealed {}
}

/// A fixed-width numeric element, stored unboxed.
///
/// Implemented for `i8`, `i16`, `u16` (a UTF-16 code unit), `i32`, `i64`,
/// `f32` and `f64`. Sealed: the wire format depends on every implementor
/// having a fixed big-endian encoding.
pub trait StackPrimitive: private::Sealed + Copy + PartialEq + Debug + 'static {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Appends the big-endian encoding of `self`.
    fn write_be(self, out: &mut Vec<u8>);

    /// Decodes one value; `None` unless `bytes.len() == Self::WIDTH`.
    fn read_be(bytes: &[u8]) -> Option<Self>;

    /// Bit-for-bit equality. Every NaN payload equals itself, and `0.0` is
    /// distinct from `-0.0`.
    fn same(self, other: Self) -> bool;
}

macro_rules! impl_stack_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl StackPrimitive for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();

                #[inline]
                fn write_be(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_be_bytes());
                }

                #[inline]
                fn read_be(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(<$ty>::from_be_bytes)
                }

                #[inline]
                fn same(self, other: Self) -> bool {
                    self.to_be_bytes() == other.to_be_bytes()
                }
            }
        )*
    };
}

impl_stack_primitive!(i8, i16, u16, i32, i64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(i8::WIDTH, 1);
        assert_eq!(i16::WIDTH, 2);
        assert_eq!(u16::WIDTH, 2);
        assert_eq!(i32::WIDTH, 4);
        assert_eq!(i64::WIDTH, 8);
        assert_eq!(f32::WIDTH, 4);
        assert_eq!(f64::WIDTH, 8);
    }

    #[test]
    fn test_big_endian() {
        let mut out = Vec::new();
        0x0102_0304_i32.write_be(&mut out);
        (-1_i16).write_be(&mut out);
        assert_eq!(out, [1, 2, 3, 4, 0xff, 0xff]);
        assert_eq!(i32::read_be(&out[..4]), Some(0x0102_0304));
        assert_eq!(i16::read_be(&out[4..]), Some(-1));
        assert_eq!(i32::read_be(&out[..3]), None);
    }

    #[test]
    fn test_float_bits_preserved() {
        let mut out = Vec::new();
        f64::NEG_INFINITY.write_be(&mut out);
        assert_eq!(f64::read_be(&out), Some(f64::NEG_INFINITY));
        assert_eq!(out, f64::NEG_INFINITY.to_bits().to_be_bytes());
    }

    #[test]
    fn test_same_is_bitwise() {
        assert!(f64::NAN.same(f64::NAN));
        assert!(f32::NAN.same(f32::NAN));
        assert!(!0.0_f64.same(-0.0));
        assert!(!f32::NAN.same(-f32::NAN));
        assert!(7_i32.same(7));
        assert!(!7_i64.same(8));
    }
}
