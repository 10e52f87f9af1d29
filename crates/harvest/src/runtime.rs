//! # Harvest Runtime
//!
//! The single object the host talks to.
//!
//! ## Two Contexts
//!
//! ```text
//! host "before interact" ──> on_interaction(&event)     read-only
//!                               │ debounce
//!                               │ plan
//!                               ▼
//!                         scheduler (next turn)
//!                               │
//! host tick ───────────────> tick(&mut world)            mutation-safe
//!                               1. apply planned effects
//!                               2. fire debounce expiries
//!                               3. sweep: schedule expiries
//! ```
//!
//! `on_interaction` never sees the world, so it cannot mutate it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use harvest_economy::{DropResult, HarvestConfig, HarvestResult};
use harvest_shared::{InteractionEvent, PlayerId};

use crate::debounce::InteractionDebouncer;
use crate::effects::{apply_effects, WorldMutation};
use crate::planner::{HarvestPlan, HarvestPlanner, Skip};
use crate::scheduler::TickScheduler;

/// Deferred work owned by the runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HarvestTask {
    /// Apply a planned harvest.
    Apply(HarvestPlan),
    /// Remove a player's debounce entry.
    Expire(PlayerId),
}

/// What happened to an interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Repeat of the player's last interaction; dropped.
    Suppressed,
    /// Accepted but nothing to harvest.
    Ignored(Skip),
    /// Harvest queued for the next tick.
    Scheduled(DropResult),
}

/// Counters for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Tick just executed.
    pub tick: u64,
    /// Harvests applied to the world.
    pub harvests_applied: usize,
    /// Individual world effects applied.
    pub effects_applied: usize,
    /// Debounce entries removed.
    pub expired: usize,
    /// Expiry timers scheduled by the sweep.
    pub expiries_scheduled: usize,
}

/// Debouncer, planner and scheduler behind one host-facing API.
pub struct HarvestRuntime<R = ChaCha8Rng> {
    config: HarvestConfig,
    planner: HarvestPlanner,
    debouncer: InteractionDebouncer,
    scheduler: TickScheduler<HarvestTask>,
    rng: R,
}

impl HarvestRuntime<ChaCha8Rng> {
    /// Creates a runtime with a ChaCha stream seeded by the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn seeded(config: HarvestConfig, seed: u64) -> HarvestResult<Self> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> HarvestRuntime<R> {
    /// Creates a runtime drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: HarvestConfig, rng: R) -> HarvestResult<Self> {
        config.validate()?;
        tracing::debug!(
            probability = config.success_probability,
            base_trials = config.base_trials,
            enchantment = %config.bonus_enchantment,
            "harvest runtime configured"
        );
        Ok(Self {
            planner: HarvestPlanner::from_config(&config),
            debouncer: InteractionDebouncer::new(),
            scheduler: TickScheduler::new(),
            config,
            rng,
        })
    }

    /// Handles a "player is about to interact with a block" notification.
    ///
    /// Read-only context: effects are queued, never applied here.
    pub fn on_interaction(&mut self, event: &InteractionEvent) -> InteractionOutcome {
        let pos = event.block.pos;
        if !self.debouncer.should_process(event.player, pos) {
            tracing::debug!(player = %event.player, %pos, "duplicate interaction suppressed");
            return InteractionOutcome::Suppressed;
        }

        match self.planner.plan(event, &mut self.rng) {
            Ok(plan) => {
                let drops = plan.drops;
                tracing::info!(
                    player = %plan.player,
                    crop = %plan.crop,
                    %pos,
                    bonus = plan.bonus.resolve(),
                    seeds = drops.secondary,
                    produce = drops.primary,
                    "harvest planned"
                );
                self.scheduler.run_next_turn(HarvestTask::Apply(plan));
                InteractionOutcome::Scheduled(drops)
            }
            Err(skip) => {
                tracing::debug!(
                    player = %event.player,
                    %pos,
                    block = %event.block.type_id,
                    ?skip,
                    "interaction ignored"
                );
                InteractionOutcome::Ignored(skip)
            }
        }
    }

    /// Runs one host tick: applies due harvests, fires expiries, and sweeps.
    pub fn tick<W: WorldMutation + ?Sized>(&mut self, world: &mut W) -> TickReport {
        let tasks = self.scheduler.advance();
        let mut report = TickReport {
            tick: self.scheduler.now(),
            ..TickReport::default()
        };

        for task in tasks {
            match task {
                HarvestTask::Apply(plan) => {
                    report.effects_applied += apply_effects(world, &plan.effects);
                    report.harvests_applied += 1;
                    tracing::trace!(player = %plan.player, pos = %plan.pos, "harvest applied");
                }
                HarvestTask::Expire(player) => {
                    if let Some(pos) = self.debouncer.expire(player) {
                        report.expired += 1;
                        tracing::trace!(%player, %pos, "debounce entry expired");
                    }
                }
            }
        }

        if report.tick % self.config.sweep_interval_ticks == 0 {
            for player in self.debouncer.players() {
                self.scheduler
                    .run_timeout(self.config.expiry_delay_ticks, HarvestTask::Expire(player));
                report.expiries_scheduled += 1;
            }
        }

        report
    }

    /// Current tick.
    #[must_use]
    pub fn current_tick(&self) -> u64 {
        self.scheduler.now()
    }

    /// Tasks waiting on the scheduler.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// The debouncer state.
    #[must_use]
    pub fn debouncer(&self) -> &InteractionDebouncer {
        &self.debouncer
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }
}
