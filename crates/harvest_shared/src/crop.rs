//! # Crop Kinds
//!
//! The closed set of harvestable block types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{
    BLOCK_BEETROOT, BLOCK_CARROTS, BLOCK_COCOA, BLOCK_NETHER_WART, BLOCK_POTATOES, BLOCK_WHEAT,
};

/// Harvestable block category.
///
/// The discriminant doubles as the index into per-kind lookup tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CropKind {
    /// Grain: seeds plus a single wheat.
    Wheat = 0,
    /// Root vegetable: carrots only, never fewer than one.
    Carrots = 1,
    /// Root vegetable: potatoes only, never fewer than one.
    Potatoes = 2,
    /// Cluster fruit: seeds plus a single beetroot.
    Beetroot = 3,
    /// Spice pod: uniform count, no seeds.
    NetherWart = 4,
    /// Cluster pod: always two beans.
    Cocoa = 5,
}

/// Error returned when a block type id names no crop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("block type is not a harvestable crop: {0}")]
pub struct ParseCropError(pub String);

impl CropKind {
    /// Number of crop kinds.
    pub const COUNT: usize = 6;

    /// Every crop kind, in discriminant order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Wheat,
        Self::Carrots,
        Self::Potatoes,
        Self::Beetroot,
        Self::NetherWart,
        Self::Cocoa,
    ];

    /// Index into per-kind lookup tables.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Host block identifier for this crop.
    #[must_use]
    pub const fn block_id(self) -> &'static str {
        match self {
            Self::Wheat => BLOCK_WHEAT,
            Self::Carrots => BLOCK_CARROTS,
            Self::Potatoes => BLOCK_POTATOES,
            Self::Beetroot => BLOCK_BEETROOT,
            Self::NetherWart => BLOCK_NETHER_WART,
            Self::Cocoa => BLOCK_COCOA,
        }
    }

    /// Resolves a host block identifier.
    ///
    /// Returns `None` for anything that is not a crop.
    #[must_use]
    pub fn from_block_id(block_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.block_id() == block_id)
    }

    /// True for the crops whose produce count is never below one.
    #[must_use]
    pub const fn is_root_vegetable(self) -> bool {
        matches!(self, Self::Carrots | Self::Potatoes)
    }
}

impl FromStr for CropKind {
    type Err = ParseCropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_block_id(s).ok_or_else(|| ParseCropError(s.to_string()))
    }
}

impl std::fmt::Display for CropKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.block_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, kind) in CropKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_block_id_round_trip() {
        for kind in CropKind::ALL {
            assert_eq!(kind.block_id().parse::<CropKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_block_is_error() {
        let err = "minecraft:pumpkin".parse::<CropKind>().unwrap_err();
        assert_eq!(err, ParseCropError("minecraft:pumpkin".to_string()));
        assert!(CropKind::from_block_id("wheat").is_none());
    }

    #[test]
    fn test_root_vegetables() {
        let roots: Vec<_> = CropKind::ALL.into_iter().filter(|k| k.is_root_vegetable()).collect();
        assert_eq!(roots, vec![CropKind::Carrots, CropKind::Potatoes]);
    }
}
