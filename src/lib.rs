//! Binary serialization primitives: a base-128 varint/zigzag codec and byte-order aware
//! conversion of fixed-width primitives.
pub mod byte_order;
pub mod common;
pub mod config;
mod error;
pub mod error_consts;
pub mod varint;

pub use byte_order::{get_bytes, read_value, try_write_bytes, ByteOrder, EndianPrimitive};
pub use common::{zigzag_decode, zigzag_encode, VarIntUnsigned, ZigZag};
pub use config::CodecConfig;
pub use error::{CodecError, CodecResult};
pub use varint::{
    decode_signed, decode_unsigned, encode_signed, encode_unsigned, try_write_signed,
    try_write_unsigned, ReadVarIntExt, VarIntReader, VarIntWriter, WriteVarIntExt,
};

pub use half::f16;
