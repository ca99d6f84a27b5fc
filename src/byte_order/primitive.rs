use crate::error::{CodecError, CodecResult};
use half::f16;
use std::mem::size_of;

/// A fixed-width primitive with a well defined byte layout.
///
/// Implementations only describe the host-native layout; byte order is applied by the
/// conversion functions in this module.
pub trait EndianPrimitive: Copy + Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    fn to_native_bytes(self) -> Self::Bytes;

    fn from_native_bytes(bytes: Self::Bytes) -> CodecResult<Self>;
}

macro_rules! impl_endian_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl EndianPrimitive for $t {
                const SIZE: usize = size_of::<$t>();
                type Bytes = [u8; size_of::<$t>()];

                #[inline]
                fn to_native_bytes(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                #[inline]
                fn from_native_bytes(bytes: Self::Bytes) -> CodecResult<Self> {
                    Ok(<$t>::from_ne_bytes(bytes))
                }
            }
        )*
    };
}

// Floats travel as their same-width integer bit patterns, so byte swapping never touches
// the value itself and NaN payloads survive unchanged.
macro_rules! impl_endian_float {
    ($($t:ty => $bits:ty),* $(,)?) => {
        $(
            impl EndianPrimitive for $t {
                const SIZE: usize = size_of::<$bits>();
                type Bytes = [u8; size_of::<$bits>()];

                #[inline]
                fn to_native_bytes(self) -> Self::Bytes {
                    self.to_bits().to_ne_bytes()
                }

                #[inline]
                fn from_native_bytes(bytes: Self::Bytes) -> CodecResult<Self> {
                    Ok(<$t>::from_bits(<$bits>::from_ne_bytes(bytes)))
                }
            }
        )*
    };
}

impl_endian_int!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128);
impl_endian_float!(f16 => u16, f32 => u32, f64 => u64);

impl EndianPrimitive for bool {
    const SIZE: usize = 1;
    type Bytes = [u8; 1];

    #[inline]
    fn to_native_bytes(self) -> Self::Bytes {
        [self as u8]
    }

    /// Any non-zero byte reads as `true`.
    #[inline]
    fn from_native_bytes(bytes: Self::Bytes) -> CodecResult<Self> {
        Ok(bytes[0] != 0)
    }
}

/// A `char` is a Unicode scalar value and travels as its 4-byte `u32` code point, not as
/// a 2-byte UTF-16 code unit. Decoding rejects surrogates and values above `0x10FFFF`.
impl EndianPrimitive for char {
    const SIZE: usize = size_of::<u32>();
    type Bytes = [u8; size_of::<u32>()];

    #[inline]
    fn to_native_bytes(self) -> Self::Bytes {
        u32::from(self).to_ne_bytes()
    }

    fn from_native_bytes(bytes: Self::Bytes) -> CodecResult<Self> {
        let code = u32::from_ne_bytes(bytes);
        char::from_u32(code).ok_or(CodecError::InvalidChar(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(bool::SIZE, 1);
        assert_eq!(char::SIZE, 4);
        assert_eq!(i16::SIZE, 2);
        assert_eq!(u128::SIZE, 16);
        assert_eq!(f16::SIZE, 2);
        assert_eq!(f32::SIZE, 4);
        assert_eq!(f64::SIZE, 8);
    }

    #[test]
    fn test_bool_reads_any_non_zero_as_true() {
        assert!(!bool::from_native_bytes([0]).unwrap());
        assert!(bool::from_native_bytes([1]).unwrap());
        assert!(bool::from_native_bytes([0xFE]).unwrap());
    }

    #[test]
    fn test_char_rejects_surrogates() {
        let surrogate = 0xD800u32.to_ne_bytes();
        assert_eq!(
            char::from_native_bytes(surrogate),
            Err(CodecError::InvalidChar(0xD800))
        );

        let beyond = 0x0011_0000u32.to_ne_bytes();
        assert!(char::from_native_bytes(beyond).is_err());
    }

    #[test]
    fn test_float_uses_bit_pattern() {
        assert_eq!(1.0f32.to_native_bytes(), 0x3F80_0000u32.to_ne_bytes());
        assert_eq!(f16::ONE.to_native_bytes(), 0x3C00u16.to_ne_bytes());
    }
}
