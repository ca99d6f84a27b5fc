//! Fixed-width conversion of primitives to and from bytes in an explicit byte order.
//!
//! Conversions produce the value's native byte layout first and reverse it when the
//! requested order differs from the host's, so results never depend on the machine
//! the code runs on.
mod convert;
mod primitive;

pub use convert::*;
pub use primitive::*;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

cfg_if::cfg_if! {
    if #[cfg(target_endian = "big")] {
        const HOST_BYTE_ORDER: ByteOrder = ByteOrder::BigEndian;
    } else {
        const HOST_BYTE_ORDER: ByteOrder = ByteOrder::LittleEndian;
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    #[strum(to_string = "little", serialize = "le", serialize = "little-endian")]
    #[serde(rename = "little", alias = "le", alias = "little-endian")]
    LittleEndian,
    /// Most significant byte first (network order).
    #[strum(
        to_string = "big",
        serialize = "be",
        serialize = "big-endian",
        serialize = "network"
    )]
    #[serde(rename = "big", alias = "be", alias = "big-endian", alias = "network")]
    BigEndian,
}

impl ByteOrder {
    /// Byte order of the host.
    pub const NATIVE: ByteOrder = HOST_BYTE_ORDER;

    /// Network byte order.
    pub const NETWORK: ByteOrder = ByteOrder::BigEndian;

    #[inline]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (ByteOrder::LittleEndian, ByteOrder::LittleEndian)
                | (ByteOrder::BigEndian, ByteOrder::BigEndian)
        )
    }

    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            ByteOrder::LittleEndian => ByteOrder::BigEndian,
            ByteOrder::BigEndian => ByteOrder::LittleEndian,
        }
    }
}
