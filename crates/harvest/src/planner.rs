//! # Harvest Planner
//!
//! Turns an accepted interaction into a [`HarvestPlan`]:
//!
//! ```text
//! InteractionEvent ──> crop kind? ──> ripe? ──> bonus level ──> estimate
//!                          │            │                           │
//!                        Skip         Skip                          ▼
//!                                               [seeds] [produce] [reset state]
//! ```
//!
//! Read-only: the plan is a value, applied later by the runtime.

use rand::Rng;

use harvest_economy::{DropEstimator, DropResult, HarvestConfig, HarvestPolicy};
use harvest_shared::{BlockPos, BonusLevel, CropKind, InteractionEvent, ItemStack, PlayerId};

use crate::effects::WorldEffect;

/// Why an interaction produced no harvest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skip {
    /// The block is not a known crop.
    NotACrop,
    /// The crop is not fully grown.
    NotMature,
}

/// Everything one harvest will do to the world.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarvestPlan {
    /// Player who harvested.
    pub player: PlayerId,
    /// Crop harvested.
    pub crop: CropKind,
    /// Block location.
    pub pos: BlockPos,
    /// Bonus level read from the held item.
    pub bonus: BonusLevel,
    /// Rolled quantities.
    pub drops: DropResult,
    /// Effects to apply, in order.
    pub effects: Vec<WorldEffect>,
}

/// Builds harvest plans from interactions.
#[derive(Clone, Debug)]
pub struct HarvestPlanner {
    estimator: DropEstimator,
    bonus_enchantment: String,
}

impl HarvestPlanner {
    /// Creates a planner.
    #[must_use]
    pub fn new(estimator: DropEstimator, bonus_enchantment: &str) -> Self {
        Self {
            estimator,
            bonus_enchantment: bonus_enchantment.to_string(),
        }
    }

    /// Creates a planner from configuration.
    #[must_use]
    pub fn from_config(config: &HarvestConfig) -> Self {
        Self::new(DropEstimator::from_config(config), &config.bonus_enchantment)
    }

    /// Plans the harvest for an interaction.
    ///
    /// # Errors
    ///
    /// Returns a [`Skip`] when the block is not a crop or not ripe. Neither
    /// is a failure; the interaction simply does nothing.
    pub fn plan<R: Rng + ?Sized>(
        &self,
        event: &InteractionEvent,
        rng: &mut R,
    ) -> Result<HarvestPlan, Skip> {
        let block = &event.block;
        let crop = CropKind::from_block_id(&block.type_id).ok_or(Skip::NotACrop)?;
        let policy = HarvestPolicy::for_kind(crop);
        if !policy.is_mature(&block.state) {
            return Err(Skip::NotMature);
        }

        let bonus = BonusLevel::from_held(event.item.as_ref(), &self.bonus_enchantment);
        let drops = self.estimator.estimate(crop, bonus, rng);

        let mut effects = Vec::with_capacity(3);
        if let Some(seed_item) = policy.seed_item.filter(|_| drops.secondary > 0) {
            effects.push(WorldEffect::SpawnItem {
                stack: ItemStack::new(seed_item, drops.secondary),
                at: block.pos,
            });
        }
        if drops.primary > 0 {
            effects.push(WorldEffect::SpawnItem {
                stack: ItemStack::new(policy.produce_item, drops.primary),
                at: block.pos,
            });
        }
        effects.push(WorldEffect::SetBlockState {
            at: block.pos,
            block_id: block.type_id.clone(),
            state: policy.reset_state(&block.state),
        });

        Ok(HarvestPlan {
            player: event.player,
            crop,
            pos: block.pos,
            bonus,
            drops,
            effects,
        })
    }
}

impl Default for HarvestPlanner {
    fn default() -> Self {
        Self::from_config(&HarvestConfig::default())
    }
}
