//! Item and block identifiers and the item registry.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::runtime::PlinthError;

// ============================================================================
// Identifiers
// ============================================================================

pub type ItemId = String;
pub type BlockId = String;

/// Canonical item placed on the podium.
pub const DEFAULT_PODIUM_ITEM: &str = "plinth_world:seer_eye";

/// Block type counted by the structural scan.
pub const MARKER_BLOCK: &str = "plinth_world:marker_stone";

// ============================================================================
// Registry
// ============================================================================

/// Known item identifiers plus the subset accepted on the podium.
///
/// The default podium item is owned by the registry; there is no
/// process-wide mutable item state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRegistry {
    items: BTreeSet<ItemId>,
    podium_items: BTreeSet<ItemId>,
    default_podium_item: ItemId,
}

impl ItemRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            items: BTreeSet::new(),
            podium_items: BTreeSet::new(),
            default_podium_item: DEFAULT_PODIUM_ITEM.to_string(),
        };
        registry.register(MARKER_BLOCK);
        registry.register_podium_item(DEFAULT_PODIUM_ITEM);
        registry
    }

    /// Make `id` resolvable.
    pub fn register(&mut self, id: impl Into<ItemId>) {
        self.items.insert(id.into());
    }

    /// Make `id` resolvable and accepted on the podium.
    pub fn register_podium_item(&mut self, id: impl Into<ItemId>) {
        let id = id.into();
        self.items.insert(id.clone());
        self.podium_items.insert(id);
    }

    /// Resolve `id` to a registered item identifier.
    pub fn resolve(&self, id: &str) -> Result<ItemId, PlinthError> {
        if self.items.contains(id) {
            Ok(id.to_string())
        } else {
            Err(PlinthError::UnknownItem {
                item_id: id.to_string(),
            })
        }
    }

    pub fn is_podium_item(&self, id: &str) -> bool {
        self.podium_items.contains(id)
    }

    pub fn default_item(&self) -> &str {
        &self.default_podium_item
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}
