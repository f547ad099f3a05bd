//! Interaction policy: decides what one use-interaction does.

use serde::{Deserialize, Serialize};

use crate::items::{ItemId, ItemRegistry};

use super::state::PlinthState;
use super::types::ObserverId;

/// Action selected for one use-interaction. The policy only decides; the
/// plinth executes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload")]
pub enum InteractAction {
    PlaceItem { item: ItemId },
    TakeItem,
    Bind,
    Unbind,
    Ignore,
}

/// Decide what interacting with the plinth does for `actor`.
///
/// Sneaking takes the podium item back, forcibly releasing every binding.
/// A held accepted podium item that differs from the current one replaces
/// it. Otherwise the interaction toggles the actor's own binding.
pub fn decide_interaction(
    state: &PlinthState,
    actor: ObserverId,
    held_item: Option<&str>,
    sneaking: bool,
    registry: &ItemRegistry,
) -> InteractAction {
    if sneaking {
        return InteractAction::TakeItem;
    }
    if let Some(held) = held_item {
        if registry.is_podium_item(held) && held != state.selected_item {
            return InteractAction::PlaceItem {
                item: held.to_string(),
            };
        }
    }
    if state.bindings.contains(actor) {
        InteractAction::Unbind
    } else {
        InteractAction::Bind
    }
}
