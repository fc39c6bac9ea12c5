//! Level arithmetic over cumulative tables
//!
//! Pure functions mapping total experience to a level and the experience
//! earned inside that level.

use serde::Serialize;

use super::tables::LevelTable;

/// Level reached and progress inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Progression {
    pub level: u32,
    pub within_level_xp: u64,
}

/// Number of thresholds met or exceeded by `xp`.
///
/// Landing exactly on a threshold completes that level.
pub fn level(xp: u64, table: &LevelTable<'_>) -> u32 {
    // First index whose threshold is above xp; the table is sorted.
    table.as_slice().partition_point(|&threshold| threshold <= xp) as u32
}

/// Experience earned since the last completed threshold
pub fn within_level_xp(xp: u64, table: &LevelTable<'_>) -> u64 {
    progress(xp, table).within_level_xp
}

/// Level and within-level experience in one pass
pub fn progress(xp: u64, table: &LevelTable<'_>) -> Progression {
    let level = level(xp, table);
    let within_level_xp = match level {
        0 => xp,
        n => xp - table.as_slice()[n as usize - 1],
    };
    Progression { level, within_level_xp }
}

/// Experience still missing for the next level, `None` at the table cap
pub fn xp_to_next_level(xp: u64, table: &LevelTable<'_>) -> Option<u64> {
    let next = table.threshold(level(xp, table) as usize)?;
    Some(next - xp)
}
