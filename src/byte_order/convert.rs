use super::{ByteOrder, EndianPrimitive};
use crate::error::{CodecError, CodecResult};
use half::f16;

/// Returns the layout of `value` in the requested byte order.
#[inline]
pub fn to_ordered_bytes<T: EndianPrimitive>(value: T, order: ByteOrder) -> T::Bytes {
    let mut bytes = value.to_native_bytes();
    if !order.is_native() {
        bytes.as_mut().reverse();
    }
    bytes
}

/// Converts `value` to a newly allocated buffer of exactly `T::SIZE` bytes.
pub fn get_bytes<T: EndianPrimitive>(value: T, order: ByteOrder) -> Vec<u8> {
    to_ordered_bytes(value, order).as_ref().to_vec()
}

/// Reads a `T` from the `T::SIZE` bytes starting at `start`.
pub fn read_value<T: EndianPrimitive>(
    bytes: &[u8],
    start: usize,
    order: ByteOrder,
) -> CodecResult<T> {
    let src = checked_slice(bytes, start, T::SIZE)?;
    let mut raw = T::Bytes::default();
    raw.as_mut().copy_from_slice(src);
    if !order.is_native() {
        raw.as_mut().reverse();
    }
    T::from_native_bytes(raw)
}

/// Writes `value` into the front of `dest`.
///
/// Returns `Ok(T::SIZE)` on success. When `dest` is shorter than `T::SIZE` nothing is
/// written and `Err(0)` is returned.
pub fn try_write_bytes<T: EndianPrimitive>(
    dest: &mut [u8],
    value: T,
    order: ByteOrder,
) -> Result<usize, usize> {
    if dest.len() < T::SIZE {
        return Err(0);
    }
    let bytes = to_ordered_bytes(value, order);
    dest[..T::SIZE].copy_from_slice(bytes.as_ref());
    Ok(T::SIZE)
}

/// Borrows `len` bytes at `start`, failing if the buffer cannot supply them.
pub(crate) fn checked_slice(bytes: &[u8], start: usize, len: usize) -> CodecResult<&[u8]> {
    if start > bytes.len() {
        return Err(CodecError::IndexOutOfRange {
            index: start,
            len: bytes.len(),
        });
    }
    let available = bytes.len() - start;
    if available < len {
        return Err(CodecError::BufferTooSmall {
            needed: len,
            available,
        });
    }
    Ok(&bytes[start..start + len])
}

macro_rules! typed_readers {
    ($($name:ident => $t:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(bytes: &[u8], start: usize, order: ByteOrder) -> CodecResult<$t> {
                read_value::<$t>(bytes, start, order)
            }
        )*
    };
}

typed_readers! {
    to_bool => bool,
    to_char => char,
    to_u8 => u8,
    to_i8 => i8,
    to_u16 => u16,
    to_i16 => i16,
    to_u32 => u32,
    to_i32 => i32,
    to_u64 => u64,
    to_i64 => i64,
    to_u128 => u128,
    to_i128 => i128,
    to_f16 => f16,
    to_f32 => f32,
    to_f64 => f64,
}
