//! Fetched profile data and stat extraction
//!
//! Reads progression stats out of a Hypixel SkyBlock profile payload.

pub mod access;
pub mod keys;
pub mod slayer;
pub mod stats;

#[cfg(test)]
pub(crate) mod fixtures;

pub use access::{Accessor, Lookup, StatValue};
pub use keys::{DungeonClass, Skill, Slayer};
pub use slayer::SlayerStats;
pub use stats::{ProfileData, ProfileSummary};
