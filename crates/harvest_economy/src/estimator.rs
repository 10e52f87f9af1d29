//! # Drop Estimator
//!
//! **Binomial seed drops with per-crop edge cases**
//!
//! The vanilla fortune mechanic rolls `3 + level` independent trials, each
//! succeeding with probability about 4/7, and drops one item per success.
//! Each crop then bends that count according to its [`HarvestPolicy`]:
//!
//! - Wheat / beetroot: seeds = successes, produce fixed at one.
//! - Carrots / potatoes: produce = successes + 1, so never empty-handed.
//! - Nether wart: produce uniform over `[1, 3 + level]`, no trials at all.
//! - Cocoa: two beans, always.
//!
//! ## Randomness
//!
//! The estimator never owns a generator. Callers pass any [`Rng`]; the
//! runtime uses a seeded ChaCha stream, tests use scripted draws. Each
//! trial consumes exactly one uniform `f64` in `[0, 1)`.

use rand::Rng;
use std::collections::BTreeMap;

use harvest_shared::{BonusLevel, CropKind};

use crate::config::{HarvestConfig, DEFAULT_BASE_TRIALS, DEFAULT_SUCCESS_PROBABILITY};
use crate::policy::{HarvestPolicy, PrimaryYield, SecondaryYield};

/// Highest bonus level honoured; anything above rolls as this.
///
/// Vanilla tops out at three; commands can raise the enchantment to 255.
/// Each level costs one draw per harvest, so the level must stay bounded.
pub const MAX_BONUS_LEVEL: u32 = 255;

/// Quantities rolled for one harvest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropResult {
    /// Seed count (zero for crops without seeds).
    pub secondary: u32,
    /// Produce count.
    pub primary: u32,
}

/// Counts successes over `trials` independent draws with probability `p`.
///
/// A trial succeeds when its uniform draw is strictly below `p`.
pub fn binomial_drop<R: Rng + ?Sized>(trials: u32, p: f64, rng: &mut R) -> u32 {
    let mut drops = 0;
    for _ in 0..trials {
        if rng.gen::<f64>() < p {
            drops += 1;
        }
    }
    drops
}

/// Rolls drop quantities for crops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropEstimator {
    success_probability: f64,
    base_trials: u32,
}

impl DropEstimator {
    /// Creates an estimator with explicit parameters.
    #[must_use]
    pub const fn new(success_probability: f64, base_trials: u32) -> Self {
        Self {
            success_probability,
            base_trials,
        }
    }

    /// Creates an estimator from validated configuration.
    #[must_use]
    pub fn from_config(config: &HarvestConfig) -> Self {
        Self::new(config.success_probability, config.base_trials)
    }

    /// Number of trials rolled at this bonus level.
    ///
    /// Levels above [`MAX_BONUS_LEVEL`] are clamped to it.
    #[inline]
    #[must_use]
    pub const fn trials(&self, bonus: BonusLevel) -> u32 {
        let level = bonus.resolve();
        let level = if level > MAX_BONUS_LEVEL { MAX_BONUS_LEVEL } else { level };
        self.base_trials.saturating_add(level)
    }

    /// Rolls one harvest of `kind` at `bonus`.
    ///
    /// Total over every crop kind and bonus level.
    pub fn estimate<R: Rng + ?Sized>(
        &self,
        kind: CropKind,
        bonus: BonusLevel,
        rng: &mut R,
    ) -> DropResult {
        let policy = HarvestPolicy::for_kind(kind);
        let trials = self.trials(bonus);

        let secondary = match policy.secondary {
            SecondaryYield::None => 0,
            SecondaryYield::Binomial => binomial_drop(trials, self.success_probability, rng),
        };

        let primary = match policy.primary {
            PrimaryYield::Fixed(amount) => amount,
            PrimaryYield::BinomialPlus(floor) => {
                binomial_drop(trials, self.success_probability, rng).saturating_add(floor)
            }
            PrimaryYield::UniformUpToTrials { min } => rng.gen_range(min..=trials.max(min)),
        };

        DropResult { secondary, primary }
    }

    /// Rolls `iterations` harvests and tallies the outcomes.
    pub fn sample_statistics<R: Rng + ?Sized>(
        &self,
        kind: CropKind,
        bonus: BonusLevel,
        iterations: u32,
        rng: &mut R,
    ) -> DropStatistics {
        let mut stats = DropStatistics::new();
        for _ in 0..iterations {
            stats.record(self.estimate(kind, bonus, rng));
        }
        stats
    }
}

impl Default for DropEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_SUCCESS_PROBABILITY, DEFAULT_BASE_TRIALS)
    }
}

/// Histogram of simulated harvests.
#[derive(Clone, Debug, Default)]
pub struct DropStatistics {
    /// Harvests recorded.
    pub iterations: u64,
    /// Occurrences of each produce count.
    pub primary_counts: BTreeMap<u32, u64>,
    /// Occurrences of each seed count.
    pub secondary_counts: BTreeMap<u32, u64>,
}

impl DropStatistics {
    /// Creates empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one harvest.
    pub fn record(&mut self, drop: DropResult) {
        self.iterations += 1;
        *self.primary_counts.entry(drop.primary).or_insert(0) += 1;
        *self.secondary_counts.entry(drop.secondary).or_insert(0) += 1;
    }

    /// Mean produce count.
    #[must_use]
    pub fn mean_primary(&self) -> f64 {
        Self::mean(&self.primary_counts, self.iterations)
    }

    /// Mean seed count.
    #[must_use]
    pub fn mean_secondary(&self) -> f64 {
        Self::mean(&self.secondary_counts, self.iterations)
    }

    /// Smallest and largest produce count seen.
    #[must_use]
    pub fn primary_range(&self) -> Option<(u32, u32)> {
        Self::range(&self.primary_counts)
    }

    /// Smallest and largest seed count seen.
    #[must_use]
    pub fn secondary_range(&self) -> Option<(u32, u32)> {
        Self::range(&self.secondary_counts)
    }

    fn mean(counts: &BTreeMap<u32, u64>, iterations: u64) -> f64 {
        if iterations == 0 {
            return 0.0;
        }
        let total: u64 = counts.iter().map(|(value, n)| u64::from(*value) * n).sum();
        total as f64 / iterations as f64
    }

    fn range(counts: &BTreeMap<u32, u64>) -> Option<(u32, u32)> {
        let min = counts.keys().next()?;
        let max = counts.keys().next_back()?;
        Some((*min, *max))
    }
}
