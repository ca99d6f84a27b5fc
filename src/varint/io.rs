use super::encode::{encode_to_scratch, Scratch};
use crate::common::{VarIntUnsigned, ZigZag};
use crate::config::{CONTINUATION_BIT, MAX_VARINT_LEN_U128, VALUE_MASK};
use crate::error::CodecError;
use logger_rust::log_debug;
use std::io::{self, Read, Write};

/// Varint reads over any `std::io::Read`.
///
/// Bytes are pulled one at a time, so wrap unbuffered sources in a `BufReader`.
pub trait ReadVarIntExt: Read {
    fn read_varint_unsigned<T: VarIntUnsigned>(&mut self) -> io::Result<T> {
        let mut result = T::zero();
        let mut shift = 0u32;
        let mut byte = [0u8; 1];

        for i in 0..T::MAX_ENCODED_LEN {
            if let Err(e) = self.read_exact(&mut byte) {
                if e.kind() == io::ErrorKind::UnexpectedEof {
                    log_debug!("varint stream ended after {i} bytes");
                    return Err(CodecError::IncompleteVarInt.into());
                }
                return Err(e);
            }
            let group = byte[0] & VALUE_MASK;
            if shift + 7 > T::BITS && (group >> (T::BITS - shift)) != 0 {
                return Err(CodecError::VarIntTooLarge.into());
            }
            result = result | <T as From<u8>>::from(group).unsigned_shl(shift);
            if byte[0] & CONTINUATION_BIT == 0 {
                return Ok(result);
            }
            shift += 7;
        }

        log_debug!("varint stream exceeded {} bytes", T::MAX_ENCODED_LEN);
        Err(CodecError::VarIntTooLarge.into())
    }

    fn read_varint_signed<T: ZigZag>(&mut self) -> io::Result<T> {
        self.read_varint_unsigned::<T::Unsigned>()
            .map(T::zigzag_decode)
    }
}

impl<R: Read + ?Sized> ReadVarIntExt for R {}

/// Varint writes over any `std::io::Write`.
pub trait WriteVarIntExt: Write {
    /// Returns the number of bytes written.
    fn write_varint_unsigned<T: VarIntUnsigned>(&mut self, value: T) -> io::Result<usize> {
        let mut scratch: Scratch = [0; MAX_VARINT_LEN_U128];
        let len = encode_to_scratch(value, &mut scratch);
        self.write_all(&scratch[..len])?;
        Ok(len)
    }

    fn write_varint_signed<T: ZigZag>(&mut self, value: T) -> io::Result<usize> {
        self.write_varint_unsigned(value.zigzag_encode())
    }
}

impl<W: Write + ?Sized> WriteVarIntExt for W {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_stream_round_trip() {
        let mut buf = Vec::new();
        assert_eq!(buf.write_varint_unsigned(300u64).unwrap(), 2);
        assert_eq!(buf.write_varint_signed(-1i32).unwrap(), 1);
        assert_eq!(buf.write_varint_signed(i128::MIN).unwrap(), 19);
        assert_eq!(buf.write_varint_unsigned(0u8).unwrap(), 1);

        let mut cursor = Cursor::new(buf);
        assert_eq!(cursor.read_varint_unsigned::<u64>().unwrap(), 300);
        assert_eq!(cursor.read_varint_signed::<i32>().unwrap(), -1);
        assert_eq!(cursor.read_varint_signed::<i128>().unwrap(), i128::MIN);
        assert_eq!(cursor.read_varint_unsigned::<u8>().unwrap(), 0);
    }

    #[test]
    fn test_truncated_stream() {
        let mut cursor = Cursor::new(vec![0x80, 0x80]);
        let err = cursor.read_varint_unsigned::<u32>().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_oversized_stream() {
        let mut cursor = Cursor::new(vec![0xFF; 11]);
        let err = cursor.read_varint_unsigned::<u64>().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        // 256 does not fit in a u8
        let mut cursor = Cursor::new(vec![0x80, 0x02]);
        let err = cursor.read_varint_unsigned::<u8>().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
