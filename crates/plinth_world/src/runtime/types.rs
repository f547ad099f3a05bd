//! Core type definitions: aliases, constants, and identities.

use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::PlinthError;

// ============================================================================
// Type Aliases
// ============================================================================

pub type WorldTime = u64;
pub type Level = u8;
pub type DimensionId = String;

// ============================================================================
// Constants
// ============================================================================

/// Highest structural level a fully intact pyramid can reach.
pub const MAX_LEVEL: Level = 4;

// ============================================================================
// Observer Identity
// ============================================================================

/// Opaque 128-bit observer identity.
///
/// Rendered as 32 lowercase hex characters wherever it crosses a
/// persistence or sync boundary. The plinth never holds a live reference to
/// an observer, only this identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(pub u128);

impl ObserverId {
    pub fn to_hex(self) -> String {
        hex::encode(self.0.to_be_bytes())
    }

    pub fn from_hex(text: &str) -> Result<Self, PlinthError> {
        let malformed = || PlinthError::IdentityMalformed {
            text: text.to_string(),
        };
        let bytes = hex::decode(text).map_err(|_| malformed())?;
        let bytes: [u8; 16] = bytes.try_into().map_err(|_| malformed())?;
        Ok(ObserverId(u128::from_be_bytes(bytes)))
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for ObserverId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObserverId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        ObserverId::from_hex(&text)
            .map_err(|_| DeError::custom(format!("malformed observer identity: {text}")))
    }
}
