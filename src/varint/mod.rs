//! Base-128 variable length integers.
//!
//! Each byte carries 7 value bits, least significant group first, with bit 7 set on every
//! byte except the last. Signed values are zigzag mapped before encoding so that small
//! negative numbers stay short. The format is bit-compatible with protobuf varints.
mod decode;
mod encode;
mod io;
mod reader;
mod writer;

pub use decode::{decode_signed, decode_unsigned};
pub use encode::*;
pub use io::*;
pub use reader::*;
pub use writer::*;
