//! # Interaction Events
//!
//! What the host delivers when a player is about to interact with a block.
//! Everything is captured by value so the handler never holds a live host
//! handle.

use serde::{Deserialize, Serialize};

use crate::item::HeldItem;
use crate::math::BlockPos;
use crate::state::BlockState;

/// Stable player identifier for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

/// The block being interacted with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSnapshot {
    /// Block location.
    pub pos: BlockPos,
    /// Host block type identifier.
    pub type_id: String,
    /// Current state properties.
    pub state: BlockState,
}

impl BlockSnapshot {
    /// Creates a snapshot.
    #[must_use]
    pub fn new(pos: BlockPos, type_id: &str, state: BlockState) -> Self {
        Self {
            pos,
            type_id: type_id.to_string(),
            state,
        }
    }
}

/// A "player is about to interact with a block" notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// Acting player.
    pub player: PlayerId,
    /// Target block.
    pub block: BlockSnapshot,
    /// Item in hand, if any.
    pub item: Option<HeldItem>,
}
