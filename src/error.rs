use crate::error_consts;
use std::io;
use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
/// Errors raised by the varint codec and the byte-order conversion layer.
pub enum CodecError {
    #[error("{}", error_consts::VARINT_TOO_LARGE)]
    VarIntTooLarge,

    #[error("{}", error_consts::INCOMPLETE_VARINT)]
    IncompleteVarInt,

    #[error("{}: need {needed} bytes, {available} available", error_consts::BUFFER_TOO_SMALL)]
    BufferTooSmall { needed: usize, available: usize },

    #[error("{}: index {index}, length {len}", error_consts::INDEX_OUT_OF_RANGE)]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{}: {code:#x}", error_consts::INVALID_CHAR, code = .0)]
    InvalidChar(u32),

    #[error("Invalid configuration. {0}")]
    InvalidConfiguration(String),
}

pub type CodecResult<T = ()> = Result<T, CodecError>;

impl CodecError {
    /// True for failures caused by running out of input, as opposed to malformed input.
    pub fn is_eof(&self) -> bool {
        matches!(
            self,
            CodecError::IncompleteVarInt | CodecError::BufferTooSmall { .. }
        )
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        CodecError::InvalidConfiguration(format!("{}: {e}", error_consts::INVALID_CONFIG_JSON))
    }
}

impl From<CodecError> for io::Error {
    fn from(e: CodecError) -> Self {
        let kind = if e.is_eof() {
            io::ErrorKind::UnexpectedEof
        } else {
            io::ErrorKind::InvalidData
        };
        io::Error::new(kind, e)
    }
}
