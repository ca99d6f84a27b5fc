use crate::common::{VarIntUnsigned, ZigZag};
use crate::config::{CONTINUATION_BIT, VALUE_MASK};
use crate::error::{CodecError, CodecResult};

/// Decodes an unsigned varint starting at `start`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
///
/// * `IndexOutOfRange` if `start` is past the end of `bytes`.
/// * `IncompleteVarInt` if the input ends before a byte with bit 7 clear.
/// * `VarIntTooLarge` if the encoding does not fit in `T`: either it continues past
///   `T::MAX_ENCODED_LEN` bytes, or its last byte carries bits above `T::BITS`.
pub fn decode_unsigned<T: VarIntUnsigned>(bytes: &[u8], start: usize) -> CodecResult<(T, usize)> {
    decode_unsigned_limited(bytes, start, T::MAX_ENCODED_LEN)
}

/// Decodes a zigzag encoded signed varint starting at `start`.
pub fn decode_signed<T: ZigZag>(bytes: &[u8], start: usize) -> CodecResult<(T, usize)> {
    decode_unsigned::<T::Unsigned>(bytes, start).map(|(value, len)| (T::zigzag_decode(value), len))
}

/// Same as `decode_unsigned`, additionally capping the encoding at `max_len` bytes.
pub(crate) fn decode_unsigned_limited<T: VarIntUnsigned>(
    bytes: &[u8],
    start: usize,
    max_len: usize,
) -> CodecResult<(T, usize)> {
    if start > bytes.len() {
        return Err(CodecError::IndexOutOfRange {
            index: start,
            len: bytes.len(),
        });
    }

    let max_len = max_len.min(T::MAX_ENCODED_LEN);
    let mut result = T::zero();
    let mut shift = 0u32;

    for (i, &byte) in bytes[start..].iter().enumerate() {
        let group = byte & VALUE_MASK;
        if shift + 7 > T::BITS && (group >> (T::BITS - shift)) != 0 {
            return Err(CodecError::VarIntTooLarge);
        }
        result = result | <T as From<u8>>::from(group).unsigned_shl(shift);

        if byte & CONTINUATION_BIT == 0 {
            return Ok((result, i + 1));
        }
        if i + 1 >= max_len {
            return Err(CodecError::VarIntTooLarge);
        }
        shift += 7;
    }

    Err(CodecError::IncompleteVarInt)
}

pub(crate) fn decode_signed_limited<T: ZigZag>(
    bytes: &[u8],
    start: usize,
    max_len: usize,
) -> CodecResult<(T, usize)> {
    decode_unsigned_limited::<T::Unsigned>(bytes, start, max_len)
        .map(|(value, len)| (T::zigzag_decode(value), len))
}
