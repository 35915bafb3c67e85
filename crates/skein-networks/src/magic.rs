//! Network magic numbers.
//!
//! A magic number is a fixed 4-byte tag embedded in peer-protocol messages so
//! a node can reject traffic from the wrong network. On the wire (and in this
//! crate) it is the big-endian encoding of a 32-bit constant, not a plain
//! integer.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::NetworkError;

/// 4-byte big-endian network magic.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkMagic([u8; 4]);

impl NetworkMagic {
    /// Big-endian encoding of a 32-bit magic constant.
    pub const fn from_u32(value: u32) -> Self {
        NetworkMagic(value.to_be_bytes())
    }

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        NetworkMagic(bytes)
    }

    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for NetworkMagic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for NetworkMagic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NetworkMagic({})", hex::encode(self.0))
    }
}

impl FromStr for NetworkMagic {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = hex::decode(s)
            .map_err(|e| NetworkError::InvalidFormat(format!("Invalid magic hex: {}", e)))?;
        let bytes: [u8; 4] = raw.as_slice().try_into().map_err(|_| {
            NetworkError::InvalidFormat(format!("Magic must be 4 bytes, got {}", raw.len()))
        })?;
        Ok(NetworkMagic(bytes))
    }
}

impl Serialize for NetworkMagic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for NetworkMagic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|e: NetworkError| D::Error::custom(e.to_string()))
    }
}
