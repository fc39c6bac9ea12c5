//! Progression systems
//!
//! Static experience tables and the level arithmetic derived from them.

pub mod tables;
pub mod calculator;
pub mod global;

pub use tables::{LevelTable, TableError, CATACOMBS_TABLE, SKILL_TABLE, SKILL_LEVEL_OFFSET};
pub use calculator::{level, within_level_xp, progress, xp_to_next_level, Progression};
pub use global::{global_level, global_remainder, global_progress, GLOBAL_XP_PER_LEVEL};
