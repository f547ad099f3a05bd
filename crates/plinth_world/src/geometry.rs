use serde::{Deserialize, Serialize};

/// A position on the integer block grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct BlockPos {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl BlockPos {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// The position `n` cells straight down.
    pub fn down(self, n: i64) -> Self {
        BlockPos {
            y: self.y - n,
            ..self
        }
    }
}
