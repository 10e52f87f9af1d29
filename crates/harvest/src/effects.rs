//! # World Effects
//!
//! The planner never touches the world. It describes what should happen as
//! [`WorldEffect`] values; the runtime applies them on the next tick through
//! the host's [`WorldMutation`] implementation.

use harvest_shared::{BlockPos, BlockState, ItemStack};

/// Interface to the host's world mutation API.
///
/// Only called from the deferred (mutation-safe) context.
pub trait WorldMutation {
    /// Drops an item stack into the world at a block's location.
    fn spawn_item(&mut self, stack: &ItemStack, at: BlockPos);

    /// Replaces a block's state properties.
    fn set_block_state(&mut self, at: BlockPos, block_id: &str, state: &BlockState);
}

/// One deferred change to the world.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldEffect {
    /// Spawn an item stack at a block.
    SpawnItem {
        /// Items to spawn.
        stack: ItemStack,
        /// Where to spawn them.
        at: BlockPos,
    },
    /// Replace a block's state.
    SetBlockState {
        /// Block location.
        at: BlockPos,
        /// Block type, unchanged by the update.
        block_id: String,
        /// New state properties.
        state: BlockState,
    },
}

impl WorldEffect {
    /// Applies this effect to the world.
    pub fn apply_to<W: WorldMutation + ?Sized>(&self, world: &mut W) {
        match self {
            Self::SpawnItem { stack, at } => world.spawn_item(stack, *at),
            Self::SetBlockState { at, block_id, state } => {
                world.set_block_state(*at, block_id, state);
            }
        }
    }
}

/// Applies effects in order. Returns how many were applied.
pub fn apply_effects<W: WorldMutation + ?Sized>(world: &mut W, effects: &[WorldEffect]) -> usize {
    for effect in effects {
        effect.apply_to(world);
    }
    effects.len()
}

/// A [`WorldMutation`] that only records what it was asked to do.
///
/// Useful for hosts that forward effects elsewhere, and for tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectLog {
    /// Effects received, in order.
    pub effects: Vec<WorldEffect>,
}

impl EffectLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Item stacks spawned so far.
    pub fn spawned(&self) -> impl Iterator<Item = &ItemStack> {
        self.effects.iter().filter_map(|effect| match effect {
            WorldEffect::SpawnItem { stack, .. } => Some(stack),
            WorldEffect::SetBlockState { .. } => None,
        })
    }

    /// Drains the recorded effects.
    pub fn take(&mut self) -> Vec<WorldEffect> {
        std::mem::take(&mut self.effects)
    }
}

impl WorldMutation for EffectLog {
    fn spawn_item(&mut self, stack: &ItemStack, at: BlockPos) {
        self.effects.push(WorldEffect::SpawnItem {
            stack: stack.clone(),
            at,
        });
    }

    fn set_block_state(&mut self, at: BlockPos, block_id: &str, state: &BlockState) {
        self.effects.push(WorldEffect::SetBlockState {
            at,
            block_id: block_id.to_string(),
            state: state.clone(),
        });
    }
}
