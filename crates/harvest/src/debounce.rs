//! # Interaction Debouncer
//!
//! The host can deliver the same "about to interact" notification more
//! than once for a single click. We remember the last block each player
//! touched and drop a repeat at the exact same coordinate.
//!
//! Entries are short-lived: the runtime schedules an [`expire`] for every
//! present entry on each sweep tick, so a genuine second click on the same
//! block a couple of ticks later goes through.
//!
//! [`expire`]: InteractionDebouncer::expire

use std::collections::HashMap;

use harvest_shared::{BlockPos, PlayerId};

/// Last interacted coordinate per player.
#[derive(Clone, Debug, Default)]
pub struct InteractionDebouncer {
    last: HashMap<PlayerId, BlockPos>,
}

impl InteractionDebouncer {
    /// Creates an empty debouncer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false for a repeat of the player's recorded coordinate.
    /// Otherwise records `pos` (replacing any previous entry) and returns
    /// true.
    pub fn should_process(&mut self, player: PlayerId, pos: BlockPos) -> bool {
        if self.last.get(&player) == Some(&pos) {
            return false;
        }
        self.last.insert(player, pos);
        true
    }

    /// Removes the player's entry, returning the coordinate it held.
    pub fn expire(&mut self, player: PlayerId) -> Option<BlockPos> {
        self.last.remove(&player)
    }

    /// Recorded coordinate for a player.
    #[must_use]
    pub fn last_position(&self, player: PlayerId) -> Option<BlockPos> {
        self.last.get(&player).copied()
    }

    /// Players with a live entry.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.last.keys().copied()
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.last.len()
    }

    /// True when no entries are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}
