//! Error types for the plinth runtime.

use std::io;

use super::types::Level;

/// Errors that can occur in plinth operations.
///
/// Unresolvable observer identities and absent-member unbinds are not
/// errors; both are expected no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlinthError {
    UnknownItem { item_id: String },
    LevelOutOfRange { level: Level },
    IdentityMalformed { text: String },
    Io(String),
    Serde(String),
    Config(String),
}

impl From<serde_json::Error> for PlinthError {
    fn from(error: serde_json::Error) -> Self {
        PlinthError::Serde(error.to_string())
    }
}

impl From<serde_cbor::Error> for PlinthError {
    fn from(error: serde_cbor::Error) -> Self {
        PlinthError::Serde(error.to_string())
    }
}

impl From<io::Error> for PlinthError {
    fn from(error: io::Error) -> Self {
        PlinthError::Io(error.to_string())
    }
}

impl From<toml::de::Error> for PlinthError {
    fn from(error: toml::de::Error) -> Self {
        PlinthError::Config(error.to_string())
    }
}
