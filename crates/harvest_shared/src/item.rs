//! Item stacks, held items and enchantment levels.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A stack of items to hand to the host for spawning.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    /// Host item identifier.
    pub item_id: String,
    /// Number of items in the stack.
    pub amount: u32,
}

impl ItemStack {
    /// Creates a new stack.
    #[must_use]
    pub fn new(item_id: &str, amount: u32) -> Self {
        Self {
            item_id: item_id.to_string(),
            amount,
        }
    }
}

/// Enchantments present on an item, by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Enchantments {
    levels: BTreeMap<String, u32>,
}

impl Enchantments {
    /// Creates an empty enchantment set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: &str, level: u32) -> Self {
        self.levels.insert(name.to_string(), level);
        self
    }

    /// Level of a named enchantment, if present.
    #[must_use]
    pub fn level_of(&self, name: &str) -> Option<u32> {
        self.levels.get(name).copied()
    }
}

/// The item a player interacted with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldItem {
    /// Host item identifier.
    pub item_id: String,
    /// Enchantment capability, absent on items that cannot be enchanted.
    pub enchantments: Option<Enchantments>,
}

impl HeldItem {
    /// An item without enchantment capability.
    #[must_use]
    pub fn plain(item_id: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
            enchantments: None,
        }
    }

    /// An item carrying the given enchantments.
    #[must_use]
    pub fn enchanted(item_id: &str, enchantments: Enchantments) -> Self {
        Self {
            item_id: item_id.to_string(),
            enchantments: Some(enchantments),
        }
    }

    /// Bonus level granted by the named enchantment.
    #[must_use]
    pub fn bonus_level(&self, enchantment: &str) -> BonusLevel {
        self.enchantments
            .as_ref()
            .and_then(|e| e.level_of(enchantment))
            .into()
    }
}

/// Enchantment-derived bonus on the trial count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusLevel {
    /// No enchantment present.
    #[default]
    None,
    /// Enchantment present at this level.
    Level(u32),
}

impl BonusLevel {
    /// Resolves to the number of extra trials.
    #[inline]
    #[must_use]
    pub const fn resolve(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Level(level) => level,
        }
    }

    /// Bonus level of whatever is in hand (nothing in hand means none).
    #[must_use]
    pub fn from_held(item: Option<&HeldItem>, enchantment: &str) -> Self {
        item.map_or(Self::None, |held| held.bonus_level(enchantment))
    }
}

impl From<Option<u32>> for BonusLevel {
    fn from(level: Option<u32>) -> Self {
        level.map_or(Self::None, Self::Level)
    }
}

impl From<u32> for BonusLevel {
    fn from(level: u32) -> Self {
        Self::Level(level)
    }
}
