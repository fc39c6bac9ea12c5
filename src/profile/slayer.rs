//! Slayer statistics
//!
//! Slayers have no experience table. Level comes from the claimed-level
//! flags and kills are stored as one `boss_kills_tier_<N>` field per tier,
//! mixed in with unrelated fields.

use serde::Serialize;
use serde_json::{Map, Value};

use super::access::{Accessor, Lookup, StatValue};

const KILLS_PREFIX: &str = "boss_kills_tier_";
const CLAIMED_PREFIX: &str = "level_";

/// Everything known about one slayer boss
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SlayerStats {
    pub level: u32,
    pub xp: u64,
    /// Kill counts ordered by ascending tier
    pub tier_kills: Vec<u64>,
}

impl SlayerStats {
    /// Kills for a 1-indexed tier, 0 when out of range
    pub fn tier(&self, tier: usize) -> u64 {
        tier.checked_sub(1)
            .and_then(|i| self.tier_kills.get(i))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_kills(&self) -> u64 {
        self.tier_kills.iter().sum()
    }
}

fn boss<'a>(access: &Accessor<'a>, slayer_id: &str) -> Option<&'a Map<String, Value>> {
    access.object_or_warn(&["slayer", "slayer_bosses", slayer_id], "Slayer")
}

/// Per-tier kill counts, ordered by tier number.
///
/// Payload key order is ignored; tiers are sorted by their parsed suffix.
pub fn tier_kill_counts(access: &Accessor<'_>, slayer_id: &str) -> Vec<u64> {
    boss(access, slayer_id).map(|boss| tier_kills_in(boss)).unwrap_or_default()
}

/// Kill count for a 1-indexed tier position
pub fn tier_kill_count(access: &Accessor<'_>, slayer_id: &str, tier: usize) -> u64 {
    let kills = tier_kill_counts(access, slayer_id);
    match tier.checked_sub(1).and_then(|i| kills.get(i)) {
        Some(&count) => count,
        None => {
            log::warn!("Slayer '{}' with tier '{}' not found", slayer_id, tier);
            0
        }
    }
}

/// Highest level whose claimed flag is set, 0 when none are
pub fn claimed_level(access: &Accessor<'_>, slayer_id: &str) -> u32 {
    boss(access, slayer_id).map(claimed_level_in).unwrap_or(0)
}

pub fn total_xp(access: &Accessor<'_>, slayer_id: &str) -> u64 {
    access.stat_or(&["slayer", "slayer_bosses", slayer_id, "xp"], "Slayer xp", 0)
}

/// All slayer stats from a single lookup of the boss entry
pub fn slayer_stats(access: &Accessor<'_>, slayer_id: &str) -> SlayerStats {
    let Some(boss) = boss(access, slayer_id) else {
        return SlayerStats::default();
    };
    SlayerStats {
        level: claimed_level_in(boss),
        xp: xp_in(boss, slayer_id),
        tier_kills: tier_kills_in(boss),
    }
}

/// The boss entry's `xp`, or 0 with a warning
fn xp_in(boss: &Map<String, Value>, slayer_id: &str) -> u64 {
    let found = match boss.get("xp") {
        Some(value) => u64::from_value(value).ok_or_else(|| Lookup::Malformed { key: "xp".into() }),
        None => Err(Lookup::Missing { key: "xp".into() }),
    };
    found.unwrap_or_else(|miss| {
        log::warn!("Slayer xp not found (slayer.slayer_bosses.{}.xp): {}", slayer_id, miss);
        0
    })
}

/// Kill counts from any `(key, value)` sequence, in tier order
fn tier_kills_in<'a>(fields: impl IntoIterator<Item = (&'a String, &'a Value)>) -> Vec<u64> {
    let mut tiers: Vec<(u32, u64)> = fields
        .into_iter()
        .filter_map(|(key, value)| {
            let tier = tier_number(key)?;
            let kills = u64::from_value(value).unwrap_or_else(|| {
                log::warn!("Malformed slayer kill count at '{}'", key);
                0
            });
            Some((tier, kills))
        })
        .collect();
    tiers.sort_by_key(|&(tier, _)| tier);
    tiers.into_iter().map(|(_, kills)| kills).collect()
}

fn claimed_level_in(boss: &Map<String, Value>) -> u32 {
    let Some(claimed) = boss.get("claimed_levels").and_then(Value::as_object) else {
        return 0;
    };
    claimed
        .iter()
        .filter(|(_, flag)| flag.as_bool() == Some(true))
        .filter_map(|(key, _)| claimed_level_number(key))
        .max()
        .unwrap_or(0)
}

/// Tier of a `boss_kills_tier_<N>` key. `N` must be plain decimal without
/// leading zeros, so two keys never name the same tier.
fn tier_number(key: &str) -> Option<u32> {
    let suffix = key.strip_prefix(KILLS_PREFIX)?;
    let canonical = !suffix.is_empty()
        && suffix.bytes().all(|b| b.is_ascii_digit())
        && (suffix == "0" || !suffix.starts_with('0'));
    if canonical {
        suffix.parse().ok()
    } else {
        None
    }
}

/// `level_7` and `level_7_special` both name level 7
fn claimed_level_number(key: &str) -> Option<u32> {
    key.strip_prefix(CLAIMED_PREFIX)?.split('_').next()?.parse().ok()
}
