//! Persistence codec: durable record, sync payload, and file helpers.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::items::{ItemId, ItemRegistry};

use super::error::PlinthError;
use super::state::PlinthState;
use super::types::{Level, ObserverId, MAX_LEVEL};

// ============================================================================
// Record
// ============================================================================

/// Persisted record for one plinth: exactly the level, the podium item, and
/// the bound identities. The same shape crosses the save boundary (pretty
/// JSON files) and the network boundary (CBOR payloads); there is no
/// separate wire schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlinthRecord {
    #[serde(default)]
    pub level: Level,
    #[serde(rename = "podiumItem", default, skip_serializing_if = "Option::is_none")]
    pub podium_item: Option<ItemId>,
    #[serde(rename = "boundPlayers", default)]
    pub bound_players: Vec<ObserverId>,
}

impl PlinthRecord {
    pub fn to_json(&self) -> Result<String, PlinthError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> Result<Self, PlinthError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), PlinthError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path.as_ref(), data)?;
        Ok(())
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, PlinthError> {
        let data = fs::read(path.as_ref())?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Point-in-time sync payload, CBOR encoded.
    pub fn to_sync_payload(&self) -> Result<Vec<u8>, PlinthError> {
        Ok(serde_cbor::to_vec(self)?)
    }

    pub fn from_sync_payload(payload: &[u8]) -> Result<Self, PlinthError> {
        Ok(serde_cbor::from_slice(payload)?)
    }
}

/// Result of decoding a record against an item registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedState {
    pub level: Level,
    pub selected_item: ItemId,
    pub bound_observers: BTreeSet<ObserverId>,
}

// ============================================================================
// Encode / Decode
// ============================================================================

/// Build the persisted record for `state`. Bound identities keep their set
/// order, which is stable for the duration of a process run.
pub fn encode(state: &PlinthState) -> PlinthRecord {
    PlinthRecord {
        level: state.level,
        podium_item: Some(state.selected_item.clone()),
        bound_players: state.bindings.iter().collect(),
    }
}

/// Decode `record`, resolving the podium item against `registry`.
///
/// A missing level defaults to 0, a missing bound list to empty, and a
/// missing podium item to the registry default. An unrecognized podium item
/// fails with `UnknownItem`; the caller recovers by substituting the
/// default. A level above `MAX_LEVEL` means a corrupt record and fails.
pub fn decode(record: &PlinthRecord, registry: &ItemRegistry) -> Result<DecodedState, PlinthError> {
    if record.level > MAX_LEVEL {
        return Err(PlinthError::LevelOutOfRange {
            level: record.level,
        });
    }
    let selected_item = match &record.podium_item {
        None => registry.default_item().to_string(),
        Some(item_id) => registry.resolve(item_id)?,
    };
    Ok(DecodedState {
        level: record.level,
        selected_item,
        bound_observers: record.bound_players.iter().copied().collect(),
    })
}

/// Stable content hash of `record`: SHA256 over its canonical JSON, as hex.
/// Hosts compare hashes to skip redundant sync sends.
pub fn record_hash(record: &PlinthRecord) -> Result<String, PlinthError> {
    let bytes = serde_json::to_vec(record)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
