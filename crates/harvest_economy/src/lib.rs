//! # Harvest Economy
//!
//! The drop model behind fortune-aware crop harvesting.
//!
//! ## Design Principles
//!
//! 1. **Data, not branches** - every crop's behaviour is a row in the
//!    policy table
//! 2. **Injected randomness** - the estimator borrows the caller's `Rng`
//! 3. **Total** - every crop kind and every bonus level yields a result
//! 4. **External configuration** - balance values live in a TOML file
//!
//! ## Example
//!
//! ```rust,ignore
//! use harvest_economy::{DropEstimator, HarvestConfig};
//! use harvest_shared::{BonusLevel, CropKind};
//!
//! let config = HarvestConfig::load("data/harvest.toml")?;
//! let estimator = DropEstimator::from_config(&config);
//!
//! let drop = estimator.estimate(CropKind::Wheat, BonusLevel::Level(3), &mut rng);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod estimator;
pub mod policy;
pub mod scripted;

pub use config::HarvestConfig;
pub use error::{HarvestError, HarvestResult};
pub use estimator::{
    binomial_drop, DropEstimator, DropResult, DropStatistics, MAX_BONUS_LEVEL,
};
pub use policy::{HarvestPolicy, MaturityRule, PrimaryYield, SecondaryYield, POLICY_TABLE};
pub use scripted::ScriptedRng;
