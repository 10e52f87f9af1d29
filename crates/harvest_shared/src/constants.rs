//! # Host Identifiers
//!
//! Namespaced block, item, state and enchantment identifiers as the host
//! engine spells them.
//!
//! **CRITICAL:** These strings must match the host's registries exactly.
//! A typo here silently turns a crop into "not a crop".

// =============================================================================
// BLOCK STATE KEYS
// =============================================================================

/// Growth stage of the seven-stage field crops (0..=7).
pub const STATE_GROWTH: &str = "growth";

/// Age of nether wart (0..=3) and cocoa (0..=2).
pub const STATE_AGE: &str = "age";

/// Attachment direction of a cocoa pod.
pub const STATE_DIRECTION: &str = "direction";

// =============================================================================
// ENCHANTMENTS
// =============================================================================

/// Enchantment whose level feeds the bonus trial count.
pub const FORTUNE_ENCHANTMENT: &str = "fortune";

// =============================================================================
// BLOCKS
// =============================================================================

/// Wheat crop block.
pub const BLOCK_WHEAT: &str = "minecraft:wheat";
/// Carrot crop block.
pub const BLOCK_CARROTS: &str = "minecraft:carrots";
/// Potato crop block.
pub const BLOCK_POTATOES: &str = "minecraft:potatoes";
/// Beetroot crop block.
pub const BLOCK_BEETROOT: &str = "minecraft:beetroot";
/// Nether wart block.
pub const BLOCK_NETHER_WART: &str = "minecraft:nether_wart";
/// Cocoa pod block.
pub const BLOCK_COCOA: &str = "minecraft:cocoa";

// =============================================================================
// ITEMS
// =============================================================================

/// Wheat seeds.
pub const ITEM_WHEAT_SEEDS: &str = "minecraft:wheat_seeds";
/// Wheat.
pub const ITEM_WHEAT: &str = "minecraft:wheat";
/// Carrot.
pub const ITEM_CARROT: &str = "minecraft:carrot";
/// Potato.
pub const ITEM_POTATO: &str = "minecraft:potato";
/// Beetroot seeds.
pub const ITEM_BEETROOT_SEEDS: &str = "minecraft:beetroot_seeds";
/// Beetroot.
pub const ITEM_BEETROOT: &str = "minecraft:beetroot";
/// Nether wart (block and item share the id).
pub const ITEM_NETHER_WART: &str = "minecraft:nether_wart";
/// Cocoa beans.
pub const ITEM_COCOA_BEANS: &str = "minecraft:cocoa_beans";
