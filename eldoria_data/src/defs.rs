use serde::{Deserialize, Serialize};

/// Top-level content loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub regions: Vec<RegionDef>,
    #[serde(default)]
    pub balance: BalanceDef,
    #[serde(default)]
    pub spinners: Vec<SpinnerDef>,
}

/// Game-level text shown around the adventure itself.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    /// Line shown above the numbered region list.
    #[serde(default)]
    pub overview: String,
    /// Shown once the boss falls.
    #[serde(default)]
    pub epilogue: String,
    #[serde(default)]
    pub farewell: String,
}

/// A single explorable region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionDef {
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub has_boss: bool,
}

/// Inclusive integer range used for dice rolls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeDef {
    pub min: u32,
    pub max: u32,
}
impl RangeDef {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// True if the range contains at least one value.
    pub fn is_well_formed(&self) -> bool {
        self.min <= self.max
    }
}

/// Number of regions on the world map.
pub const REGION_COUNT: usize = 3;

/// Lowest allowed health ceiling: the largest starting health of any class.
///
/// A lower ceiling would cut a class's starting health when it is created.
pub const MIN_MAX_HEALTH: u32 = 40;

/// Numbers that drive combat, resting and encounters.
///
/// Per-class numbers (base stats, mitigation, class rest bonuses) are not
/// content: they belong to the engine's character classes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceDef {
    #[serde(default = "default_max_health")]
    pub max_health: u32,
    #[serde(default = "default_boss_health")]
    pub boss_health: u32,
    #[serde(default = "default_potion_heal")]
    pub potion_heal: u32,
    #[serde(default = "default_rest_heal")]
    pub rest_heal: u32,
    #[serde(default = "default_attack_bonus")]
    pub attack_bonus: RangeDef,
    #[serde(default = "default_ambush_damage")]
    pub ambush_damage: RangeDef,
    #[serde(default = "default_boss_counter")]
    pub boss_counter: RangeDef,
    #[serde(default = "default_dialogue_backlash")]
    pub dialogue_backlash: RangeDef,
}

impl Default for BalanceDef {
    fn default() -> Self {
        Self {
            max_health: default_max_health(),
            boss_health: default_boss_health(),
            potion_heal: default_potion_heal(),
            rest_heal: default_rest_heal(),
            attack_bonus: default_attack_bonus(),
            ambush_damage: default_ambush_damage(),
            boss_counter: default_boss_counter(),
            dialogue_backlash: default_dialogue_backlash(),
        }
    }
}

fn default_max_health() -> u32 {
    40
}

fn default_boss_health() -> u32 {
    45
}

fn default_potion_heal() -> u32 {
    10
}

fn default_rest_heal() -> u32 {
    5
}

fn default_attack_bonus() -> RangeDef {
    RangeDef::new(0, 3)
}

fn default_ambush_damage() -> RangeDef {
    RangeDef::new(5, 10)
}

fn default_boss_counter() -> RangeDef {
    RangeDef::new(7, 11)
}

fn default_dialogue_backlash() -> RangeDef {
    RangeDef::new(8, 12)
}

/// Replacement lines for one of the engine's narration spinners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinnerDef {
    pub id: String,
    pub values: Vec<String>,
}
