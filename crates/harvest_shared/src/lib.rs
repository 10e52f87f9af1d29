//! # Harvest Shared
//!
//! Data types exchanged between the host engine and the harvest logic.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - `rand` or any random source
//! - the scheduler or the world mutation API
//!
//! Everything here is a plain value the host can build from its own
//! block, player and item handles.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod crop;
pub mod events;
pub mod item;
pub mod math;
pub mod state;

pub use constants::{FORTUNE_ENCHANTMENT, STATE_AGE, STATE_DIRECTION, STATE_GROWTH};
pub use crop::{CropKind, ParseCropError};
pub use events::{BlockSnapshot, InteractionEvent, PlayerId};
pub use item::{BonusLevel, Enchantments, HeldItem, ItemStack};
pub use math::BlockPos;
pub use state::{BlockState, StateValue};
