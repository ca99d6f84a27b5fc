pub const VARINT_TOO_LARGE: &str = "ERR varint encoding is too large for the target integer type";
pub const INCOMPLETE_VARINT: &str = "ERR incomplete varint: input ended before a terminating byte";
pub const BUFFER_TOO_SMALL: &str = "ERR buffer too small";
pub const INDEX_OUT_OF_RANGE: &str = "ERR start index out of range";
pub const INVALID_CHAR: &str = "ERR invalid unicode scalar value";
pub const INVALID_BYTE_ORDER: &str = "ERR invalid byte order";
pub const INVALID_MAX_VARINT_LEN: &str = "ERR invalid max varint length";
pub const INVALID_CONFIG_JSON: &str = "ERR invalid codec configuration";
