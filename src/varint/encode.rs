use crate::common::{encoded_len, VarIntUnsigned, ZigZag};
use crate::config::{CONTINUATION_BIT, MAX_VARINT_LEN_U128};

pub(crate) type Scratch = [u8; MAX_VARINT_LEN_U128];

/// Encodes `value` into `scratch`, returning the number of bytes used.
#[inline]
pub(crate) fn encode_to_scratch<T: VarIntUnsigned>(mut value: T, scratch: &mut Scratch) -> usize {
    let mut len = 0;
    loop {
        let byte = value.low_group();
        value = value.unsigned_shr(7);
        if value.is_zero() {
            scratch[len] = byte;
            return len + 1;
        }
        scratch[len] = byte | CONTINUATION_BIT;
        len += 1;
    }
}

/// Encodes an unsigned integer as a base-128 varint, least significant group first.
pub fn encode_unsigned<T: VarIntUnsigned>(value: T) -> Vec<u8> {
    let mut scratch: Scratch = [0; MAX_VARINT_LEN_U128];
    let len = encode_to_scratch(value, &mut scratch);
    scratch[..len].to_vec()
}

/// Zigzag-maps a signed integer and encodes it as a varint.
pub fn encode_signed<T: ZigZag>(value: T) -> Vec<u8> {
    encode_unsigned(value.zigzag_encode())
}

/// Appends the varint encoding of `value` to `buf`, returning the number of bytes added.
pub fn write_unsigned<T: VarIntUnsigned>(buf: &mut Vec<u8>, value: T) -> usize {
    let mut scratch: Scratch = [0; MAX_VARINT_LEN_U128];
    let len = encode_to_scratch(value, &mut scratch);
    buf.extend_from_slice(&scratch[..len]);
    len
}

/// Writes a signed varint using zigzag encoding
pub fn write_signed<T: ZigZag>(buf: &mut Vec<u8>, value: T) -> usize {
    write_unsigned(buf, value.zigzag_encode())
}

/// Encodes `value` directly into `dest`.
///
/// Returns `Ok(n)` with the encoded length, or `Err(n)` if `dest` filled up first. On
/// failure the first `n` bytes of `dest` hold a partial encoding and must be discarded.
pub fn try_write_unsigned<T: VarIntUnsigned>(
    dest: &mut [u8],
    mut value: T,
) -> Result<usize, usize> {
    let mut written = 0;
    loop {
        if written == dest.len() {
            return Err(written);
        }
        let byte = value.low_group();
        value = value.unsigned_shr(7);
        if value.is_zero() {
            dest[written] = byte;
            return Ok(written + 1);
        }
        dest[written] = byte | CONTINUATION_BIT;
        written += 1;
    }
}

pub fn try_write_signed<T: ZigZag>(dest: &mut [u8], value: T) -> Result<usize, usize> {
    try_write_unsigned(dest, value.zigzag_encode())
}

#[inline]
pub fn encoded_len_unsigned<T: VarIntUnsigned>(value: T) -> usize {
    encoded_len(value)
}

#[inline]
pub fn encoded_len_signed<T: ZigZag>(value: T) -> usize {
    encoded_len(value.zigzag_encode())
}
