use crate::config::VALUE_MASK;
use num_traits::{AsPrimitive, PrimInt, Unsigned};

/// Number of bytes needed to hold `bits` value bits at 7 bits per byte.
#[inline]
pub const fn max_varint_len(bits: u32) -> usize {
    bits.div_ceil(7) as usize
}

/// An unsigned integer that can be written as a base-128 varint.
pub trait VarIntUnsigned: PrimInt + Unsigned + AsPrimitive<u8> + From<u8> {
    const BITS: u32;
    /// Longest encoding a value of this width can produce.
    const MAX_ENCODED_LEN: usize;

    /// The low 7 bits as a byte with the continuation bit clear.
    #[inline]
    fn low_group(self) -> u8 {
        let byte: u8 = self.as_();
        byte & VALUE_MASK
    }

    /// Number of significant bits (0 for zero).
    #[inline]
    fn used_bits(self) -> u32 {
        Self::BITS - self.leading_zeros()
    }
}

macro_rules! impl_varint_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl VarIntUnsigned for $t {
                const BITS: u32 = <$t>::BITS;
                const MAX_ENCODED_LEN: usize = max_varint_len(<$t>::BITS);
            }
        )*
    };
}

impl_varint_unsigned!(u8, u16, u32, u64, u128, usize);

/// Size in bytes of the varint encoding of `value`.
#[inline]
pub fn encoded_len<T: VarIntUnsigned>(value: T) -> usize {
    max_varint_len(value.used_bits()).max(1)
}
