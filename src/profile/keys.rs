//! Identifiers for the progression axes
//!
//! Payload keys for skills, dungeon classes and slayer bosses. Getters accept
//! anything that is `AsRef<str>`, so raw keys work as well as these enums.

use serde::{Deserialize, Serialize};

/// SkyBlock skills, keyed as in `player_data.experience`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Farming,
    Mining,
    Combat,
    Foraging,
    Fishing,
    Enchanting,
    Alchemy,
    Taming,
    Carpentry,
    Runecrafting,
    Social,
}

impl Skill {
    pub const ALL: [Skill; 11] = [
        Skill::Farming,
        Skill::Mining,
        Skill::Combat,
        Skill::Foraging,
        Skill::Fishing,
        Skill::Enchanting,
        Skill::Alchemy,
        Skill::Taming,
        Skill::Carpentry,
        Skill::Runecrafting,
        Skill::Social,
    ];

    /// Skills that count towards the skill average (cosmetic ones excluded)
    pub const AVERAGED: [Skill; 9] = [
        Skill::Farming,
        Skill::Mining,
        Skill::Combat,
        Skill::Foraging,
        Skill::Fishing,
        Skill::Enchanting,
        Skill::Alchemy,
        Skill::Taming,
        Skill::Carpentry,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Skill::Farming => "SKILL_FARMING",
            Skill::Mining => "SKILL_MINING",
            Skill::Combat => "SKILL_COMBAT",
            Skill::Foraging => "SKILL_FORAGING",
            Skill::Fishing => "SKILL_FISHING",
            Skill::Enchanting => "SKILL_ENCHANTING",
            Skill::Alchemy => "SKILL_ALCHEMY",
            Skill::Taming => "SKILL_TAMING",
            Skill::Carpentry => "SKILL_CARPENTRY",
            Skill::Runecrafting => "SKILL_RUNECRAFTING",
            Skill::Social => "SKILL_SOCIAL",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Skill::Farming => "Farming",
            Skill::Mining => "Mining",
            Skill::Combat => "Combat",
            Skill::Foraging => "Foraging",
            Skill::Fishing => "Fishing",
            Skill::Enchanting => "Enchanting",
            Skill::Alchemy => "Alchemy",
            Skill::Taming => "Taming",
            Skill::Carpentry => "Carpentry",
            Skill::Runecrafting => "Runecrafting",
            Skill::Social => "Social",
        }
    }
}

impl AsRef<str> for Skill {
    fn as_ref(&self) -> &str {
        self.key()
    }
}

/// Dungeon classes, keyed as in `dungeons.player_classes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DungeonClass {
    Healer,
    Mage,
    Berserk,
    Archer,
    Tank,
}

impl DungeonClass {
    pub const ALL: [DungeonClass; 5] = [
        DungeonClass::Healer,
        DungeonClass::Mage,
        DungeonClass::Berserk,
        DungeonClass::Archer,
        DungeonClass::Tank,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DungeonClass::Healer => "healer",
            DungeonClass::Mage => "mage",
            DungeonClass::Berserk => "berserk",
            DungeonClass::Archer => "archer",
            DungeonClass::Tank => "tank",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DungeonClass::Healer => "Healer",
            DungeonClass::Mage => "Mage",
            DungeonClass::Berserk => "Berserk",
            DungeonClass::Archer => "Archer",
            DungeonClass::Tank => "Tank",
        }
    }
}

impl AsRef<str> for DungeonClass {
    fn as_ref(&self) -> &str {
        self.key()
    }
}

/// Slayer bosses, keyed as in `slayer.slayer_bosses`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slayer {
    Zombie,
    Spider,
    Wolf,
    Enderman,
    Blaze,
    Vampire,
}

impl Slayer {
    pub const ALL: [Slayer; 6] = [
        Slayer::Zombie,
        Slayer::Spider,
        Slayer::Wolf,
        Slayer::Enderman,
        Slayer::Blaze,
        Slayer::Vampire,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Slayer::Zombie => "zombie",
            Slayer::Spider => "spider",
            Slayer::Wolf => "wolf",
            Slayer::Enderman => "enderman",
            Slayer::Blaze => "blaze",
            Slayer::Vampire => "vampire",
        }
    }

    /// Boss name as shown in game
    pub fn name(&self) -> &'static str {
        match self {
            Slayer::Zombie => "Revenant Horror",
            Slayer::Spider => "Tarantula Broodfather",
            Slayer::Wolf => "Sven Packmaster",
            Slayer::Enderman => "Voidgloom Seraph",
            Slayer::Blaze => "Inferno Demonlord",
            Slayer::Vampire => "Riftstalker Bloodfiend",
        }
    }
}

impl AsRef<str> for Slayer {
    fn as_ref(&self) -> &str {
        self.key()
    }
}
