use super::bits::VarIntUnsigned;
use num_traits::{PrimInt, Signed};

/// Maps a signed integer onto the unsigned integer of the same width so that values of
/// small magnitude, positive or negative, map to small unsigned values.
///
/// 0 → 0, -1 → 1, 1 → 2, -2 → 3, ... The mapping is a bijection over the whole domain,
/// `MIN` included.
pub trait ZigZag: PrimInt + Signed {
    type Unsigned: VarIntUnsigned;

    fn zigzag_encode(self) -> Self::Unsigned;

    fn zigzag_decode(value: Self::Unsigned) -> Self;
}

// see: http://stackoverflow.com/a/2211086/56332
// `>>` on the signed value is arithmetic, `>>` on the unsigned value is logical.
macro_rules! impl_zigzag {
    ($($s:ty => $u:ty),* $(,)?) => {
        $(
            impl ZigZag for $s {
                type Unsigned = $u;

                #[inline]
                fn zigzag_encode(self) -> $u {
                    ((self << 1) ^ (self >> (<$s>::BITS - 1))) as $u
                }

                #[inline]
                fn zigzag_decode(value: $u) -> $s {
                    ((value >> 1) as $s) ^ (-((value & 1) as $s))
                }
            }
        )*
    };
}

impl_zigzag!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

#[inline]
pub fn zigzag_encode<T: ZigZag>(value: T) -> T::Unsigned {
    value.zigzag_encode()
}

#[inline]
pub fn zigzag_decode<T: ZigZag>(value: T::Unsigned) -> T {
    T::zigzag_decode(value)
}
