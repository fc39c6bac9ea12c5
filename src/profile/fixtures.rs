//! Canned profile payloads for tests

use std::cell::Cell;
use std::sync::Once;

use serde_json::{json, Value};

pub const MEMBER_ID: &str = "eca19e2e713d49a98582320229f696ed";

/// A member with data on every axis
pub fn full_payload() -> Value {
    json!({
        "success": true,
        "profile": {
            "members": {
                MEMBER_ID: {
                    "collection": {
                        "LOG": 77760,
                        "COAL": 15000,
                        "IRON": 25000
                    },
                    "slayer": {
                        "slayer_bosses": {
                            "zombie": {
                                "claimed_levels": {
                                    "level_1": true,
                                    "level_2": true,
                                    "level_3": true,
                                    "level_4": true,
                                    "level_5": true,
                                    "level_6": true,
                                    "level_7": true
                                },
                                "boss_kills_tier_0": 15,
                                "boss_kills_tier_1": 10,
                                "boss_kills_tier_2": 8,
                                "boss_kills_tier_3": 5,
                                "xp": 148706
                            },
                            "spider": {
                                "claimed_levels": {
                                    "level_1": true,
                                    "level_2": true
                                },
                                "boss_kills_tier_0": 5,
                                "boss_kills_tier_1": 3,
                                "xp": 50000
                            }
                        }
                    },
                    "player_data": {
                        "experience": {
                            "SKILL_CARPENTRY": 5409716,
                            "SKILL_FARMING": 1500000,
                            "SKILL_MINING": 2000000
                        }
                    },
                    "dungeons": {
                        "dungeon_types": {
                            "catacombs": {
                                "experience": 567442
                            }
                        },
                        "player_classes": {
                            "berserk": { "experience": 378520 },
                            "healer": { "experience": 15000 },
                            "mage": { "experience": 30000 }
                        }
                    },
                    "leveling": {
                        "experience": 16915
                    }
                }
            }
        }
    })
}

/// A member whose every subtree is present but empty
pub fn empty_payload() -> Value {
    json!({
        "success": true,
        "profile": {
            "members": {
                MEMBER_ID: {
                    "collection": {},
                    "slayer": { "slayer_bosses": {} },
                    "player_data": { "experience": {} },
                    "dungeons": {
                        "dungeon_types": { "catacombs": {} },
                        "player_classes": {}
                    },
                    "leveling": {}
                }
            }
        }
    })
}

/// Profile list as returned for a player with three profiles
pub fn profiles_payload() -> Value {
    json!({
        "success": true,
        "profiles": [
            { "profile_id": "f5791b0c-caf1-4701-aea3-d727ea53a901", "cute_name": "Peach" },
            { "profile_id": "0b1362a7-43e8-454b-a2ed-6db43ae32f19", "cute_name": "Kiwi" },
            { "profile_id": "eca19e2e-713d-49a9-8582-320229f696ed", "cute_name": "Zucchini" }
        ]
    })
}

pub fn error_payload(cause: &str) -> Value {
    json!({ "success": false, "cause": cause })
}

thread_local! {
    static WARNINGS: Cell<usize> = const { Cell::new(0) };
}

/// Counts warn and error records per thread, so parallel tests don't mix
struct CountingLogger;

impl log::Log for CountingLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            WARNINGS.with(|w| w.set(w.get() + 1));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CountingLogger = CountingLogger;
static LOGGER_INIT: Once = Once::new();

/// Run `f` and report how many warnings it logged on this thread
pub fn warnings_during<R>(f: impl FnOnce() -> R) -> (R, usize) {
    LOGGER_INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Warn);
        }
    });
    let before = WARNINGS.with(Cell::get);
    let result = f();
    (result, WARNINGS.with(Cell::get) - before)
}
