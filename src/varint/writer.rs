use super::encode::{write_signed, write_unsigned};
use crate::byte_order::{to_ordered_bytes, ByteOrder, EndianPrimitive};
use crate::common::{VarIntUnsigned, ZigZag};
use crate::config::CodecConfig;
use crate::error::CodecResult;

/// VarIntWriter
///
/// Builds a buffer of varints and fixed-width values, the counterpart of `VarIntReader`.
#[derive(Debug, Clone, Default)]
pub struct VarIntWriter {
    buf: Vec<u8>,
    config: CodecConfig,
}

impl VarIntWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with `InvalidConfiguration` if `config` does not pass `CodecConfig::validate`.
    pub fn with_config(config: CodecConfig) -> CodecResult<Self> {
        config.validate()?;
        Ok(VarIntWriter {
            buf: Vec::new(),
            config,
        })
    }

    pub fn with_capacity(capacity: usize) -> Self {
        VarIntWriter {
            buf: Vec::with_capacity(capacity),
            config: CodecConfig::default(),
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Returns the number of bytes written.
    pub fn write_unsigned<T: VarIntUnsigned>(&mut self, value: T) -> usize {
        write_unsigned(&mut self.buf, value)
    }

    pub fn write_signed<T: ZigZag>(&mut self, value: T) -> usize {
        write_signed(&mut self.buf, value)
    }

    /// Writes a fixed-width value in the configured byte order.
    pub fn write<T: EndianPrimitive>(&mut self, value: T) -> usize {
        self.write_with_order(value, self.config.byte_order)
    }

    pub fn write_with_order<T: EndianPrimitive>(&mut self, value: T, order: ByteOrder) -> usize {
        self.buf.extend_from_slice(to_ordered_bytes(value, order).as_ref());
        T::SIZE
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes the length of `bytes` as a varint followed by the bytes themselves.
    pub fn write_length_prefixed(&mut self, bytes: &[u8]) -> usize {
        let len = self.write_unsigned(bytes.len());
        self.write_bytes(bytes);
        len + bytes.len()
    }
}

impl AsRef<[u8]> for VarIntWriter {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

impl From<VarIntWriter> for Vec<u8> {
    fn from(writer: VarIntWriter) -> Self {
        writer.buf
    }
}
