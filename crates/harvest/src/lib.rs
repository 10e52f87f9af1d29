//! # Fortune Harvest
//!
//! Right-click harvesting for mature crops, with fortune-aware drops.
//!
//! ## The Golden Path: Right-Click a Ripe Crop
//!
//! ```text
//! Host ──> on_interaction(&event)
//!             │
//!             ├─ debounce: same player, same block, again? ──> Suppressed
//!             ├─ plan: crop? ripe? fortune level? roll drops
//!             └─ queue effects for the next tick ──────────> Scheduled
//!
//! Host ──> tick(&mut world)
//!             ├─ spawn seeds / produce at the block
//!             ├─ reset growth (keep facing)
//!             └─ expire stale debounce entries
//! ```
//!
//! ## Usage (by the host)
//!
//! ```rust,ignore
//! let config = HarvestConfig::load("data/harvest.toml")?;
//! let mut harvest = HarvestRuntime::seeded(config, world_seed)?;
//!
//! // In the "before interact" callback
//! harvest.on_interaction(&event);
//!
//! // Once per engine tick
//! harvest.tick(&mut world);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod debounce;
pub mod effects;
pub mod planner;
pub mod runtime;
pub mod scheduler;

pub use debounce::InteractionDebouncer;
pub use effects::{apply_effects, EffectLog, WorldEffect, WorldMutation};
pub use planner::{HarvestPlan, HarvestPlanner, Skip};
pub use runtime::{HarvestRuntime, HarvestTask, InteractionOutcome, TickReport};
pub use scheduler::TickScheduler;

pub use harvest_economy::{DropEstimator, DropResult, HarvestConfig, HarvestError, HarvestResult};
pub use harvest_shared::{
    BlockPos, BlockSnapshot, BlockState, BonusLevel, CropKind, Enchantments, HeldItem,
    InteractionEvent, ItemStack, PlayerId,
};
