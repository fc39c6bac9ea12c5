//! Skyblock Stats - Entry Point
//!
//! Looks up a player and prints the progression report for one of their
//! SkyBlock profiles.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};

use skyblock_stats::profile::ProfileSummary;
use skyblock_stats::{Config, HypixelClient, ProfileData, Slayer, SlayerStats};

const USAGE: &str = "usage: skyblock-stats [--json] <player> [profile-name]";

fn main() -> Result<()> {
    // Logging first, so config loading can report problems
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Stderr)
        .init();
    if let Some(level) = max_level(rust_log_set, false) {
        log::set_max_level(level);
    }

    log::info!("Starting skyblock-stats v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load();
    if let Some(level) = max_level(rust_log_set, config.debug) {
        log::set_max_level(level);
    }

    let result = run(config);
    if let Err(ref e) = result {
        log::error!("Lookup failed: {:#}", e);
    }
    result
}

/// Level cap from the config's debug flag; RUST_LOG, when set, wins
fn max_level(rust_log_set: bool, debug: bool) -> Option<log::LevelFilter> {
    match (rust_log_set, debug) {
        (true, _) => None,
        (false, true) => Some(log::LevelFilter::Debug),
        (false, false) => Some(log::LevelFilter::Info),
    }
}

fn run(config: Config) -> Result<()> {
    let mut json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }
    let (player, profile_name) = match positional.as_slice() {
        [player] => (player.as_str(), None),
        [player, profile] => (player.as_str(), Some(profile.as_str())),
        _ => bail!(USAGE),
    };

    let client = HypixelClient::new(config);

    let uuid = client
        .resolve_uuid(player)
        .with_context(|| format!("resolving player '{}'", player))?
        .with_context(|| format!("no such player: {}", player))?;

    let profiles = client
        .profile_ids(&uuid)
        .with_context(|| format!("listing profiles for {}", player))?;
    let (name, profile_id) = match profile_name {
        Some(wanted) => profiles
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .with_context(|| format!("{} has no profile named '{}'", player, wanted))?,
        None => profiles
            .iter()
            .next()
            .with_context(|| format!("{} has no SkyBlock profiles", player))?,
    };
    log::info!("Using profile {} ({})", name, profile_id);

    let profile = client
        .fetch_profile(&uuid, profile_id)
        .with_context(|| format!("fetching profile {}", name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile.summary())?);
    } else {
        print_report(player, name, &profile);
    }
    Ok(())
}

fn print_report(player: &str, profile_name: &str, profile: &ProfileData) {
    let ProfileSummary { global, skill_average, skills, catacombs, classes, slayers, .. } =
        profile.summary();

    println!("{} on {}", player, profile_name);
    println!("  SkyBlock level {} ({}/100)", global.level, global.within_level_xp);
    println!();
    println!("Skills (average {:.2})", skill_average);
    for (name, p) in &skills {
        println!("  {:<14} {:>3}  +{}", name, p.level, p.within_level_xp);
    }
    println!();
    println!("Catacombs {}  +{}", catacombs.level, catacombs.within_level_xp);
    for (name, p) in &classes {
        println!("  {:<14} {:>3}  +{}", name, p.level, p.within_level_xp);
    }
    println!();
    println!("Slayers");
    for row in slayer_rows(&slayers) {
        println!("  {}", row);
    }
}

/// One line per slayer in game order, under the boss name
fn slayer_rows(slayers: &BTreeMap<&'static str, SlayerStats>) -> Vec<String> {
    Slayer::ALL
        .iter()
        .filter_map(|slayer| {
            let s = slayers.get(slayer.key())?;
            let tiers: Vec<String> = s.tier_kills.iter().map(u64::to_string).collect();
            Some(format!(
                "{:<22} {:>3}  {} xp  kills [{}]",
                slayer.name(),
                s.level,
                s.xp,
                tiers.join(", ")
            ))
        })
        .collect()
}
