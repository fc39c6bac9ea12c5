//! Skyblock Stats - Hypixel SkyBlock progression statistics
//!
//! Skill, dungeon, slayer, collection and global levels computed from a
//! fetched SkyBlock profile.

pub mod progression;
pub mod profile;
pub mod client;
pub mod config;

// Re-export commonly used types
pub use client::{ApiError, HypixelClient};
pub use config::Config;
pub use profile::{DungeonClass, ProfileData, ProfileSummary, Skill, Slayer, SlayerStats};
pub use progression::{LevelTable, Progression};
