//! Cumulative experience tables
//!
//! Each table entry `i` is the total experience at which level `i + 1` is
//! completed. Tables are immutable and shared read-only for the whole process.

use thiserror::Error;

/// Catacombs thresholds. Dungeon classes level on the same curve.
const CATACOMBS_XP: [u64; 50] = [
    50, 125, 235, 395, 625,
    955, 1_425, 2_095, 3_045, 4_385,
    6_275, 8_940, 12_700, 17_960, 25_340,
    35_640, 50_040, 70_040, 97_640, 135_640,
    188_140, 259_640, 356_640, 488_640, 668_640,
    911_640, 1_239_640, 1_684_640, 2_284_640, 3_084_640,
    4_149_640, 5_559_640, 7_459_640, 9_959_640, 13_259_640,
    17_559_640, 23_159_640, 30_359_640, 39_559_640, 51_559_640,
    66_559_640, 85_559_640, 109_559_640, 139_559_640, 177_559_640,
    225_559_640, 285_559_640, 360_559_640, 453_559_640, 569_809_640,
];

/// Skill thresholds, with a leading zero entry (see [`SKILL_LEVEL_OFFSET`]).
const SKILL_XP: [u64; 61] = [
    0, 50, 175, 375, 675,
    1_175, 1_925, 2_925, 4_425, 6_425,
    9_925, 14_925, 22_425, 32_425, 47_425,
    67_425, 97_425, 147_425, 222_425, 322_425,
    522_425, 822_425, 1_222_425, 1_722_425, 2_322_425,
    3_022_425, 3_822_425, 4_722_425, 5_722_425, 6_822_425,
    8_022_425, 9_322_425, 10_722_425, 12_222_425, 13_822_425,
    15_522_425, 17_322_425, 19_222_425, 21_222_425, 23_322_425,
    25_522_425, 27_822_425, 30_222_425, 32_722_425, 35_322_425,
    38_072_425, 40_972_425, 44_072_425, 47_472_425, 51_172_425,
    55_172_425, 59_472_425, 64_072_425, 68_972_425, 74_172_425,
    79_672_425, 85_472_425, 91_572_425, 97_972_425, 104_672_425,
    111_672_425,
];

/// Table for the catacombs axis and every dungeon class.
pub static CATACOMBS_TABLE: LevelTable<'static> = LevelTable::from_static(&CATACOMBS_XP);

/// Table for every skill axis.
pub static SKILL_TABLE: LevelTable<'static> = LevelTable::from_static(&SKILL_XP);

/// Subtracted from the raw calculator level on the skill axis only.
///
/// [`SKILL_TABLE`] starts with a zero threshold that every player has met,
/// so the raw level is always one higher than the displayed skill level.
pub const SKILL_LEVEL_OFFSET: u32 = 1;

/// Reasons a threshold sequence is not a usable table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("level table is empty")]
    Empty,
    #[error("level table decreases at index {index}")]
    Decreasing { index: usize },
}

/// A non-empty, non-decreasing sequence of cumulative thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelTable<'a> {
    thresholds: &'a [u64],
}

impl<'a> LevelTable<'a> {
    /// Validate and wrap a threshold slice.
    pub fn new(thresholds: &'a [u64]) -> Result<Self, TableError> {
        if thresholds.is_empty() {
            return Err(TableError::Empty);
        }
        if let Some(index) = thresholds.windows(2).position(|w| w[0] > w[1]) {
            return Err(TableError::Decreasing { index: index + 1 });
        }
        Ok(Self { thresholds })
    }

    /// Build a table in a const context. Invalid input fails compilation.
    pub const fn from_static(thresholds: &'a [u64]) -> Self {
        assert!(!thresholds.is_empty(), "level table is empty");
        let mut i = 1;
        while i < thresholds.len() {
            assert!(thresholds[i - 1] <= thresholds[i], "level table decreases");
            i += 1;
        }
        Self { thresholds }
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Never true for a constructed table
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Highest level the calculator can return for this table
    pub fn max_level(&self) -> u32 {
        self.thresholds.len() as u32
    }

    /// Cumulative threshold at `index`
    pub fn threshold(&self, index: usize) -> Option<u64> {
        self.thresholds.get(index).copied()
    }

    /// Experience needed between the previous threshold and the one at `index`
    pub fn increment(&self, index: usize) -> Option<u64> {
        let current = self.threshold(index)?;
        let previous = if index == 0 { 0 } else { self.thresholds[index - 1] };
        Some(current - previous)
    }

    pub fn as_slice(&self) -> &'a [u64] {
        self.thresholds
    }

    /// Re-check the table invariant
    pub fn is_valid(&self) -> bool {
        !self.thresholds.is_empty() && self.thresholds.windows(2).all(|w| w[0] <= w[1])
    }
}
