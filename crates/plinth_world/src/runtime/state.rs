//! Plinth state and level transitions.

use serde::{Deserialize, Serialize};

use crate::geometry::BlockPos;
use crate::items::ItemId;

use super::binding::BindingRegistry;
use super::error::PlinthError;
use super::types::{DimensionId, Level, MAX_LEVEL};

/// A level transition produced by applying a scan result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub previous: Level,
    pub current: Level,
}

/// State owned by exactly one plinth instance.
///
/// `level` moves only through [`PlinthState::apply_scan`]; `selected_item`
/// and `bindings` move only through the interaction and binding operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlinthState {
    pub dimension: DimensionId,
    pub pos: BlockPos,
    pub level: Level,
    pub selected_item: ItemId,
    pub bindings: BindingRegistry,
}

impl PlinthState {
    pub fn new(
        dimension: impl Into<DimensionId>,
        pos: BlockPos,
        selected_item: impl Into<ItemId>,
    ) -> Self {
        Self {
            dimension: dimension.into(),
            pos,
            level: 0,
            selected_item: selected_item.into(),
            bindings: BindingRegistry::new(),
        }
    }

    /// Whether the plinth is powered at all. Derived, never stored.
    pub fn enabled(&self) -> bool {
        self.level > 0
    }

    /// Apply a scan result. Returns the transition when the level changed,
    /// `None` on an unchanged level; repeated identical results stay silent.
    ///
    /// A result above [`MAX_LEVEL`] indicates a scanner bug and fails rather
    /// than clamping.
    pub fn apply_scan(&mut self, new_level: Level) -> Result<Option<LevelChange>, PlinthError> {
        if new_level > MAX_LEVEL {
            return Err(PlinthError::LevelOutOfRange { level: new_level });
        }
        if new_level == self.level {
            return Ok(None);
        }
        let change = LevelChange {
            previous: self.level,
            current: new_level,
        };
        self.level = new_level;
        Ok(Some(change))
    }
}
