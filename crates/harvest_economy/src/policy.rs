//! # Crop Policy Table
//!
//! One [`HarvestPolicy`] per [`CropKind`], indexed by the kind's
//! discriminant. The estimator and the planner read everything they need
//! from here: which items drop, how the counts are rolled, when the crop is
//! ripe, and which state survives the reset.
//!
//! | kind       | secondary | primary             | ripe when    |
//! |------------|-----------|---------------------|--------------|
//! | Wheat      | binomial  | 1                   | `growth = 7` |
//! | Carrots    | -         | binomial + 1        | `growth = 7` |
//! | Potatoes   | -         | binomial + 1        | `growth = 7` |
//! | Beetroot   | binomial  | 1                   | `growth = 7` |
//! | NetherWart | -         | uniform `[1, trials]` | `age = 3`  |
//! | Cocoa      | -         | 2                   | `age = 2`    |

use harvest_shared::constants::{
    ITEM_BEETROOT, ITEM_BEETROOT_SEEDS, ITEM_CARROT, ITEM_COCOA_BEANS, ITEM_NETHER_WART,
    ITEM_POTATO, ITEM_WHEAT, ITEM_WHEAT_SEEDS,
};
use harvest_shared::{BlockState, CropKind, STATE_AGE, STATE_DIRECTION, STATE_GROWTH};

/// How the secondary (seed) count is rolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecondaryYield {
    /// The crop drops no seeds.
    None,
    /// Seeds equal the binomial success count (may be zero).
    Binomial,
}

/// How the primary (produce) count is rolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryYield {
    /// Always exactly this many, bonus ignored.
    Fixed(u32),
    /// Binomial success count plus this floor.
    BinomialPlus(u32),
    /// Uniform over `[min, trials]`, both ends inclusive.
    UniformUpToTrials {
        /// Lower bound of the range.
        min: u32,
    },
}

/// When a crop counts as ripe, and what its growth resets to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaturityRule {
    /// State key holding the growth stage.
    pub state_key: &'static str,
    /// Value of that key on a ripe crop.
    pub mature_value: i32,
    /// Value written back after harvest.
    pub reset_value: i32,
}

impl MaturityRule {
    const fn stage(state_key: &'static str, mature_value: i32) -> Self {
        Self {
            state_key,
            mature_value,
            reset_value: 0,
        }
    }
}

/// Harvest behaviour of one crop kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HarvestPolicy {
    /// Crop this row describes.
    pub kind: CropKind,
    /// Seed item, for crops with a secondary yield.
    pub seed_item: Option<&'static str>,
    /// Produce item.
    pub produce_item: &'static str,
    /// Seed count rule.
    pub secondary: SecondaryYield,
    /// Produce count rule.
    pub primary: PrimaryYield,
    /// Ripeness rule.
    pub maturity: MaturityRule,
    /// State keys copied unchanged into the reset state.
    pub preserved_state: &'static [&'static str],
}

/// The policy table, in [`CropKind::ALL`] order.
pub static POLICY_TABLE: [HarvestPolicy; CropKind::COUNT] = [
    HarvestPolicy {
        kind: CropKind::Wheat,
        seed_item: Some(ITEM_WHEAT_SEEDS),
        produce_item: ITEM_WHEAT,
        secondary: SecondaryYield::Binomial,
        primary: PrimaryYield::Fixed(1),
        maturity: MaturityRule::stage(STATE_GROWTH, 7),
        preserved_state: &[],
    },
    HarvestPolicy {
        kind: CropKind::Carrots,
        seed_item: None,
        produce_item: ITEM_CARROT,
        secondary: SecondaryYield::None,
        primary: PrimaryYield::BinomialPlus(1),
        maturity: MaturityRule::stage(STATE_GROWTH, 7),
        preserved_state: &[],
    },
    HarvestPolicy {
        kind: CropKind::Potatoes,
        seed_item: None,
        produce_item: ITEM_POTATO,
        secondary: SecondaryYield::None,
        primary: PrimaryYield::BinomialPlus(1),
        maturity: MaturityRule::stage(STATE_GROWTH, 7),
        preserved_state: &[],
    },
    HarvestPolicy {
        kind: CropKind::Beetroot,
        seed_item: Some(ITEM_BEETROOT_SEEDS),
        produce_item: ITEM_BEETROOT,
        secondary: SecondaryYield::Binomial,
        primary: PrimaryYield::Fixed(1),
        maturity: MaturityRule::stage(STATE_GROWTH, 7),
        preserved_state: &[],
    },
    HarvestPolicy {
        kind: CropKind::NetherWart,
        seed_item: None,
        produce_item: ITEM_NETHER_WART,
        secondary: SecondaryYield::None,
        primary: PrimaryYield::UniformUpToTrials { min: 1 },
        maturity: MaturityRule::stage(STATE_AGE, 3),
        preserved_state: &[],
    },
    HarvestPolicy {
        kind: CropKind::Cocoa,
        seed_item: None,
        produce_item: ITEM_COCOA_BEANS,
        secondary: SecondaryYield::None,
        primary: PrimaryYield::Fixed(2),
        maturity: MaturityRule::stage(STATE_AGE, 2),
        preserved_state: &[STATE_DIRECTION],
    },
];

impl HarvestPolicy {
    /// Looks up the policy for a crop kind (O(1)).
    #[inline]
    #[must_use]
    pub fn for_kind(kind: CropKind) -> &'static Self {
        &POLICY_TABLE[kind.index()]
    }

    /// True when the block's growth key holds the ripe value.
    ///
    /// A missing or non-integer key is never ripe.
    #[must_use]
    pub fn is_mature(&self, state: &BlockState) -> bool {
        state.get_int(self.maturity.state_key) == Some(self.maturity.mature_value)
    }

    /// State to write back after harvest: growth reset, preserved keys
    /// copied from `current`.
    ///
    /// The planner passes the state captured in the interaction snapshot,
    /// so preserved keys reflect the block as it was when the plan was
    /// built, not as it is when the effect is applied a tick later.
    #[must_use]
    pub fn reset_state(&self, current: &BlockState) -> BlockState {
        let mut next = BlockState::new().with(self.maturity.state_key, self.maturity.reset_value);
        for key in self.preserved_state {
            if let Some(value) = current.get(key) {
                next.set(key, value.clone());
            }
        }
        next
    }
}
