//! Byte encoding of network magic values

use crate::{NetworksError, NetworksResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Encode a 32-bit integer as 4 bytes, most significant byte first
pub fn integer_as_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Decode 4 big-endian bytes back into the integer
pub fn bytes_as_integer(bytes: [u8; 4]) -> u32 {
    u32::from_be_bytes(bytes)
}

/// Peer-protocol handshake magic (4 bytes, big-endian order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkMagic([u8; 4]);

impl NetworkMagic {
    /// Create a magic from its raw bytes
    pub fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Create a magic from the integer form used in network tables
    pub fn from_u32(value: u32) -> Self {
        Self(integer_as_bytes(value))
    }

    /// Create from a slice, `None` unless it is exactly 4 bytes long
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        <[u8; 4]>::try_from(slice).ok().map(Self)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Integer form of the magic
    pub fn to_u32(&self) -> u32 {
        bytes_as_integer(self.0)
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from hex string, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> NetworksResult<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(digits)?;
        Self::from_slice(&bytes).ok_or_else(|| {
            NetworksError::InvalidMagic(format!("expected 4 bytes, got {}", bytes.len()))
        })
    }
}

impl fmt::Display for NetworkMagic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl FromStr for NetworkMagic {
    type Err = NetworksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<u32> for NetworkMagic {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<[u8; 4]> for NetworkMagic {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for NetworkMagic {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Serialized as the hex string so that tables stay readable.
impl Serialize for NetworkMagic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NetworkMagic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
