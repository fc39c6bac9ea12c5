//! Account-wide SkyBlock level
//!
//! Linear: every level costs the same amount, no table involved.

use super::calculator::Progression;

/// Experience per global level
pub const GLOBAL_XP_PER_LEVEL: u64 = 100;

pub fn global_level(xp: u64) -> u64 {
    xp / GLOBAL_XP_PER_LEVEL
}

pub fn global_remainder(xp: u64) -> u64 {
    xp % GLOBAL_XP_PER_LEVEL
}

/// Global level as a [`Progression`], saturating the level at `u32::MAX`
pub fn global_progress(xp: u64) -> Progression {
    Progression {
        level: u32::try_from(global_level(xp)).unwrap_or(u32::MAX),
        within_level_xp: global_remainder(xp),
    }
}
