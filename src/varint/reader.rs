use super::decode::{decode_signed_limited, decode_unsigned_limited};
use crate::byte_order::{checked_slice, read_value, ByteOrder, EndianPrimitive};
use crate::common::{VarIntUnsigned, ZigZag};
use crate::config::CodecConfig;
use crate::error::{CodecError, CodecResult};
use logger_rust::log_debug;

/// VarIntReader
///
/// A cursor over a borrowed buffer holding a mix of varints and fixed-width values.
/// A failed read leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct VarIntReader<'a> {
    bytes: &'a [u8], // buffer being read
    index: usize,    // offset of the next unread byte
    config: CodecConfig,
}

impl<'a> VarIntReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        VarIntReader {
            bytes,
            index: 0,
            config: CodecConfig::default(),
        }
    }

    /// Fails with `InvalidConfiguration` if `config` does not pass `CodecConfig::validate`.
    pub fn with_config(bytes: &'a [u8], config: CodecConfig) -> CodecResult<Self> {
        config.validate()?;
        Ok(VarIntReader {
            bytes,
            index: 0,
            config,
        })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.index
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The unread part of the buffer.
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.bytes[self.index..]
    }

    pub fn read_unsigned<T: VarIntUnsigned>(&mut self) -> CodecResult<T> {
        let (value, len) =
            decode_unsigned_limited(self.bytes, self.index, self.config.max_varint_len)
                .inspect_err(|e| self.log_failure("unsigned varint", e))?;
        self.index += len;
        Ok(value)
    }

    pub fn read_signed<T: ZigZag>(&mut self) -> CodecResult<T> {
        let (value, len) =
            decode_signed_limited(self.bytes, self.index, self.config.max_varint_len)
                .inspect_err(|e| self.log_failure("signed varint", e))?;
        self.index += len;
        Ok(value)
    }

    /// Reads a fixed-width value in the configured byte order.
    pub fn read<T: EndianPrimitive>(&mut self) -> CodecResult<T> {
        self.read_with_order(self.config.byte_order)
    }

    pub fn read_with_order<T: EndianPrimitive>(&mut self, order: ByteOrder) -> CodecResult<T> {
        let value = read_value::<T>(self.bytes, self.index, order)
            .inspect_err(|e| self.log_failure("fixed-width value", e))?;
        self.index += T::SIZE;
        Ok(value)
    }

    pub fn read_byte(&mut self) -> CodecResult<u8> {
        let byte = self
            .bytes
            .get(self.index)
            .copied()
            .ok_or(CodecError::BufferTooSmall {
                needed: 1,
                available: 0,
            })?;
        self.index += 1;
        Ok(byte)
    }

    pub fn read_bytes(&mut self, len: usize) -> CodecResult<&'a [u8]> {
        let bytes = checked_slice(self.bytes, self.index, len)?;
        self.index += len;
        Ok(bytes)
    }

    /// Reads a varint length followed by that many bytes.
    pub fn read_length_prefixed(&mut self) -> CodecResult<&'a [u8]> {
        let start = self.index;
        let len = self.read_unsigned::<usize>()?;
        self.read_bytes(len).inspect_err(|_| self.index = start)
    }

    fn log_failure(&self, what: &str, e: &CodecError) {
        log_debug!(
            "failed to read {what} at offset {} of {}: {e}",
            self.index,
            self.bytes.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use half::f16;

    #[test]
    fn read_mixed() {
        let bytes = vec![
            0xAC, 0x02, // 300
            0x03, // -2
            0x12, 0x34, // u16 big endian
            0x00, 0x3C, // f16 1.0 little endian
            0x02, b'h', b'i', // length prefixed
        ];
        let config = CodecConfig::new(ByteOrder::BigEndian);
        let mut r = VarIntReader::with_config(&bytes, config).unwrap();

        assert_eq!(r.read_unsigned::<u32>().unwrap(), 300);
        assert_eq!(r.read_signed::<i64>().unwrap(), -2);
        assert_eq!(r.read::<u16>().unwrap(), 0x1234);
        assert_eq!(
            r.read_with_order::<f16>(ByteOrder::LittleEndian).unwrap(),
            f16::ONE
        );
        assert_eq!(r.read_length_prefixed().unwrap(), b"hi");
        assert!(r.is_empty());
        assert_eq!(r.position(), bytes.len());
    }

    #[test]
    fn read_byte() {
        let bytes = vec![100, 25];
        let mut r = VarIntReader::new(&bytes);

        assert_eq!(r.read_byte().unwrap(), 100);
        assert_eq!(r.read_byte().unwrap(), 25);
        assert!(r.read_byte().unwrap_err().is_eof());
    }

    #[test]
    fn failed_read_does_not_advance() {
        let bytes = vec![0x01, 0x80, 0x80];
        let mut r = VarIntReader::new(&bytes);

        assert_eq!(r.read_unsigned::<u8>().unwrap(), 1);
        assert_eq!(r.read_unsigned::<u64>(), Err(CodecError::IncompleteVarInt));
        assert_eq!(r.position(), 1);
        assert_eq!(r.remaining(), 2);
        assert_eq!(r.remaining_slice(), &[0x80, 0x80]);

        assert!(r.read::<u32>().is_err());
        assert_eq!(r.position(), 1);
    }

    #[test]
    fn length_prefixed_restores_position_on_short_payload() {
        let bytes = vec![0x05, b'a', b'b'];
        let mut r = VarIntReader::new(&bytes);

        assert_eq!(
            r.read_length_prefixed(),
            Err(CodecError::BufferTooSmall {
                needed: 5,
                available: 2
            })
        );
        assert_eq!(r.position(), 0);
    }

    #[test]
    fn max_varint_len_is_enforced() {
        // 16384 needs 3 bytes
        let bytes = vec![0x80, 0x80, 0x01];
        let config = CodecConfig::default().with_max_varint_len(2).unwrap();
        let mut r = VarIntReader::with_config(&bytes, config).unwrap();
        assert_eq!(r.read_unsigned::<u64>(), Err(CodecError::VarIntTooLarge));

        let mut r = VarIntReader::new(&bytes);
        assert_eq!(r.read_unsigned::<u64>().unwrap(), 16384);
    }

    #[test]
    fn with_config_rejects_invalid_config() {
        let config = CodecConfig {
            byte_order: ByteOrder::LittleEndian,
            max_varint_len: 0,
        };
        assert!(config.validate().is_err());

        let bytes = vec![0x05];
        let err = VarIntReader::with_config(&bytes, config).unwrap_err();
        assert!(matches!(err, CodecError::InvalidConfiguration(_)));
    }
}
