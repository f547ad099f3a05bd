//! Output events consumed by the host adapter.

use serde::{Deserialize, Serialize};

use crate::items::ItemId;

use super::types::{Level, ObserverId};

/// Externally visible state change produced by a plinth operation.
///
/// The host applies these to its own surfaces (visible enabled marker,
/// dropped item stacks); the core never touches those directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload")]
pub enum PlinthEvent {
    LevelChanged { previous: Level, current: Level },
    EnabledChanged { enabled: bool },
    ItemPlaced { item: ItemId },
    ItemTaken { item: ItemId },
    ObserverBound { observer: ObserverId },
    ObserverUnbound { observer: ObserverId },
    Destroyed { stops_delivered: usize },
}
