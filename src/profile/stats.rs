//! Per-axis stat queries over a fetched profile
//!
//! None of these getters fail: missing or malformed data yields the stat's
//! default (0 or an empty list) and a logged warning.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::progression::{
    self, global_progress, Progression, CATACOMBS_TABLE, SKILL_LEVEL_OFFSET, SKILL_TABLE,
};
use super::access::Accessor;
use super::keys::{DungeonClass, Skill, Slayer};
use super::slayer::{self, SlayerStats};

/// A fetched SkyBlock profile, viewed from one member
#[derive(Debug, Clone)]
pub struct ProfileData {
    raw: Value,
    member_id: String,
}

/// Snapshot of every known axis, for reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub member_id: String,
    pub global: Progression,
    pub skill_average: f64,
    pub skills: BTreeMap<&'static str, Progression>,
    pub catacombs: Progression,
    pub classes: BTreeMap<&'static str, Progression>,
    pub slayers: BTreeMap<&'static str, SlayerStats>,
}

impl ProfileData {
    /// Wrap a raw profile response for the member with `member_id`
    pub fn new(raw: Value, member_id: impl Into<String>) -> Self {
        Self { raw, member_id: member_id.into() }
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    fn access(&self) -> Accessor<'_> {
        Accessor::new(&self.raw, &self.member_id)
    }

    // =========================================================================
    // Collections
    // =========================================================================

    /// Amount collected for a collection key such as `LOG` or `WHEAT`
    pub fn collection(&self, key: impl AsRef<str>) -> u64 {
        self.access().stat_or(&["collection", key.as_ref()], "Collection", 0)
    }

    // =========================================================================
    // Skills
    // =========================================================================

    fn skill_xp(&self, skill: &str) -> Option<u64> {
        match self.access().stat(&["player_data", "experience", skill]) {
            Ok(xp) => Some(xp),
            Err(miss) => {
                log::warn!("Skill '{}' not found: {}", skill, miss);
                None
            }
        }
    }

    /// Skill level, with the skill table's leading zero entry taken off
    pub fn skill_progress(&self, skill: impl AsRef<str>) -> Progression {
        let Some(xp) = self.skill_xp(skill.as_ref()) else {
            return Progression::default();
        };
        let raw = progression::progress(xp, &SKILL_TABLE);
        Progression {
            level: raw.level.saturating_sub(SKILL_LEVEL_OFFSET),
            within_level_xp: raw.within_level_xp,
        }
    }

    pub fn skill_level(&self, skill: impl AsRef<str>) -> u32 {
        self.skill_progress(skill).level
    }

    /// Experience earned inside the current skill level
    pub fn skill_current_xp(&self, skill: impl AsRef<str>) -> u64 {
        self.skill_progress(skill).within_level_xp
    }

    /// Mean level over `skills`, 0.0 for an empty set
    pub fn skill_average(&self, skills: &[Skill]) -> f64 {
        if skills.is_empty() {
            return 0.0;
        }
        let total: u32 = skills.iter().map(|s| self.skill_level(s)).sum();
        total as f64 / skills.len() as f64
    }

    // =========================================================================
    // Dungeons
    // =========================================================================

    pub fn catacombs_progress(&self) -> Progression {
        let xp = self.access().stat_or(
            &["dungeons", "dungeon_types", "catacombs", "experience"],
            "Catacombs",
            0,
        );
        progression::progress(xp, &CATACOMBS_TABLE)
    }

    pub fn catacombs_level(&self) -> u32 {
        self.catacombs_progress().level
    }

    pub fn catacombs_xp(&self) -> u64 {
        self.catacombs_progress().within_level_xp
    }

    /// Dungeon classes level on the catacombs table
    pub fn class_progress(&self, class: impl AsRef<str>) -> Progression {
        let xp = self.access().stat_or(
            &["dungeons", "player_classes", class.as_ref(), "experience"],
            "Dungeon class",
            0,
        );
        progression::progress(xp, &CATACOMBS_TABLE)
    }

    pub fn class_level(&self, class: impl AsRef<str>) -> u32 {
        self.class_progress(class).level
    }

    pub fn class_xp(&self, class: impl AsRef<str>) -> u64 {
        self.class_progress(class).within_level_xp
    }

    // =========================================================================
    // Slayers
    // =========================================================================

    pub fn slayer(&self, slayer_id: impl AsRef<str>) -> SlayerStats {
        slayer::slayer_stats(&self.access(), slayer_id.as_ref())
    }

    pub fn slayer_tier_kills(&self, slayer_id: impl AsRef<str>) -> Vec<u64> {
        slayer::tier_kill_counts(&self.access(), slayer_id.as_ref())
    }

    /// Kills for a 1-indexed tier
    pub fn slayer_tier_kill(&self, slayer_id: impl AsRef<str>, tier: usize) -> u64 {
        slayer::tier_kill_count(&self.access(), slayer_id.as_ref(), tier)
    }

    pub fn slayer_level(&self, slayer_id: impl AsRef<str>) -> u32 {
        slayer::claimed_level(&self.access(), slayer_id.as_ref())
    }

    pub fn slayer_xp(&self, slayer_id: impl AsRef<str>) -> u64 {
        slayer::total_xp(&self.access(), slayer_id.as_ref())
    }

    // =========================================================================
    // Global level
    // =========================================================================

    fn global_experience(&self) -> u64 {
        self.access().stat_or(&["leveling", "experience"], "Global level", 0)
    }

    pub fn global_level(&self) -> u64 {
        progression::global_level(self.global_experience())
    }

    /// Experience inside the current global level
    pub fn global_xp(&self) -> u64 {
        progression::global_remainder(self.global_experience())
    }

    pub fn global_progress(&self) -> Progression {
        global_progress(self.global_experience())
    }

    /// Every axis at once
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            member_id: self.member_id.clone(),
            global: self.global_progress(),
            skill_average: self.skill_average(&Skill::AVERAGED),
            skills: Skill::ALL.iter().map(|s| (s.name(), self.skill_progress(s))).collect(),
            catacombs: self.catacombs_progress(),
            classes: DungeonClass::ALL.iter().map(|c| (c.name(), self.class_progress(c))).collect(),
            slayers: Slayer::ALL.iter().map(|s| (s.key(), self.slayer(s))).collect(),
        }
    }
}
