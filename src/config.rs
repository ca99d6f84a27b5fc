use crate::byte_order::ByteOrder;
use crate::error::{CodecError, CodecResult};
use crate::error_consts;
use logger_rust::log_debug;
use serde::{Deserialize, Deserializer, Serialize};

pub const MAX_VARINT_LEN_U8: usize = 2;
pub const MAX_VARINT_LEN_U16: usize = 3;
pub const MAX_VARINT_LEN_U32: usize = 5;
pub const MAX_VARINT_LEN_U64: usize = 10;
pub const MAX_VARINT_LEN_U128: usize = 19;

/// Continuation flag carried in bit 7 of every varint byte but the last.
pub const CONTINUATION_BIT: u8 = 0x80;
/// Value bits carried by a single varint byte.
pub const VALUE_MASK: u8 = 0x7F;

pub const DEFAULT_BYTE_ORDER: ByteOrder = ByteOrder::LittleEndian;
pub const DEFAULT_MAX_VARINT_LEN: usize = MAX_VARINT_LEN_U128;
pub const MIN_MAX_VARINT_LEN: usize = 1;

/// Settings for the cursor types (`VarIntReader`, `VarIntWriter`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Byte order used for fixed-width values.
    #[serde(deserialize_with = "deserialize_byte_order")]
    pub byte_order: ByteOrder,
    /// Upper bound on the number of bytes a single varint may occupy. Acts in addition to
    /// the limit implied by the width of the target integer.
    pub max_varint_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            byte_order: DEFAULT_BYTE_ORDER,
            max_varint_len: DEFAULT_MAX_VARINT_LEN,
        }
    }
}

impl CodecConfig {
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            ..Default::default()
        }
    }

    pub fn with_max_varint_len(mut self, max_varint_len: usize) -> CodecResult<Self> {
        self.max_varint_len = max_varint_len;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> CodecResult {
        if !(MIN_MAX_VARINT_LEN..=MAX_VARINT_LEN_U128).contains(&self.max_varint_len) {
            let msg = format!(
                "{}: {} (expected {MIN_MAX_VARINT_LEN}..={MAX_VARINT_LEN_U128})",
                error_consts::INVALID_MAX_VARINT_LEN,
                self.max_varint_len
            );
            return Err(CodecError::InvalidConfiguration(msg));
        }
        Ok(())
    }

    /// Parses and validates a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CodecResult<Self> {
        let config: CodecConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a byte order name (`little`, `le`, `big`, `be`, `network`, `native`).
    pub fn parse_byte_order(name: &str) -> CodecResult<ByteOrder> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("native") {
            log_debug!("byte order 'native' resolved to {}", ByteOrder::NATIVE);
            return Ok(ByteOrder::NATIVE);
        }
        trimmed.parse::<ByteOrder>().map_err(|_| {
            CodecError::InvalidConfiguration(format!(
                "{}: {name}",
                error_consts::INVALID_BYTE_ORDER
            ))
        })
    }
}

fn deserialize_byte_order<'de, D>(deserializer: D) -> Result<ByteOrder, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    CodecConfig::parse_byte_order(&name).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_config_is_valid() {
        let config = CodecConfig::default();
        assert_eq!(config.byte_order, ByteOrder::LittleEndian);
        assert_eq!(config.max_varint_len, MAX_VARINT_LEN_U128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let config = CodecConfig::from_json(r#"{"byte_order": "big", "max_varint_len": 10}"#)
            .unwrap();
        assert_eq!(config.byte_order, ByteOrder::BigEndian);
        assert_eq!(config.max_varint_len, 10);
    }

    #[test]
    fn test_from_json_uses_defaults_for_missing_fields() {
        let config = CodecConfig::from_json(r#"{"byte_order": "be"}"#).unwrap();
        assert_eq!(config.byte_order, ByteOrder::BigEndian);
        assert_eq!(config.max_varint_len, DEFAULT_MAX_VARINT_LEN);
    }

    #[test_case(0; "zero")]
    #[test_case(20; "beyond widest integer")]
    fn test_invalid_max_varint_len(len: usize) {
        let err = CodecConfig::default().with_max_varint_len(len).unwrap_err();
        assert!(matches!(err, CodecError::InvalidConfiguration(_)));

        let json = format!(r#"{{"max_varint_len": {len}}}"#);
        assert!(CodecConfig::from_json(&json).is_err());
    }

    #[test]
    fn test_from_json_rejects_unknown_byte_order() {
        let err = CodecConfig::from_json(r#"{"byte_order": "middle"}"#).unwrap_err();
        assert!(matches!(err, CodecError::InvalidConfiguration(_)));
    }

    #[test_case("little", ByteOrder::LittleEndian)]
    #[test_case("LE", ByteOrder::LittleEndian)]
    #[test_case("big", ByteOrder::BigEndian)]
    #[test_case(" network ", ByteOrder::BigEndian)]
    #[test_case("native", ByteOrder::NATIVE)]
    fn test_parse_byte_order(name: &str, expected: ByteOrder) {
        assert_eq!(CodecConfig::parse_byte_order(name).unwrap(), expected);
    }

    #[test_case("native", ByteOrder::NATIVE)]
    #[test_case("Network", ByteOrder::BigEndian)]
    #[test_case("little-endian", ByteOrder::LittleEndian)]
    fn test_from_json_accepts_byte_order_names(name: &str, expected: ByteOrder) {
        let json = format!(r#"{{"byte_order": "{name}"}}"#);
        let config = CodecConfig::from_json(&json).unwrap();
        assert_eq!(config.byte_order, expected);
        assert_eq!(CodecConfig::parse_byte_order(name).unwrap(), expected);
    }

    #[test]
    fn test_json_round_trip() {
        let config = CodecConfig::new(ByteOrder::BigEndian);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(CodecConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_parse_byte_order_invalid() {
        assert!(CodecConfig::parse_byte_order("sideways").is_err());
    }
}
