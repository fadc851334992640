//! Data structures representing the game world.
//!
//! This module defines the [`WorldMap`], the loaded content bundle
//! ([`EldoriaWorld`]) and the [`GameState`] owned by the game loop for the
//! length of a run.

use std::collections::{BTreeSet, HashMap};

use eldoria_data::{BalanceDef, GameDef};
use gametools::Spinner;
use log::info;
use thiserror::Error;

use crate::character::Character;
use crate::inventory::{Inventory, Item};
use crate::region::Region;
use crate::spinners::SpinnerType;

/// Failures when looking up regions on the map.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("no region #{index} (the map has {count})")]
    RegionOutOfRange { index: usize, count: usize },
}

/// Ordered list of regions, fixed once the world is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldMap {
    regions: Vec<Region>,
}
impl WorldMap {
    pub fn new() -> WorldMap {
        WorldMap::default()
    }

    /// Append a region. Only used while building the world.
    pub fn add_region(&mut self, region: Region) {
        self.regions.push(region);
    }

    /// Look up a region by its 0-based index.
    ///
    /// # Errors
    /// - `MapError::RegionOutOfRange` if `index` is not below `region_count()`
    pub fn region(&self, index: usize) -> Result<&Region, MapError> {
        self.regions.get(index).ok_or(MapError::RegionOutOfRange {
            index,
            count: self.regions.len(),
        })
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Numbered list of region names, starting at 1.
    pub fn describe(&self) -> String {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, region)| format!("{}) {}", i + 1, region.name()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Loaded content: everything about the world that doesn't change during play.
#[derive(Debug, Clone)]
pub struct EldoriaWorld {
    pub game: GameDef,
    pub map: WorldMap,
    pub balance: BalanceDef,
    pub spinners: HashMap<SpinnerType, Spinner<String>>,
}
impl EldoriaWorld {
    /// Create a world with default balance, built-in spinners, and the given regions.
    pub fn with_regions(title: &str, regions: Vec<Region>) -> EldoriaWorld {
        let mut map = WorldMap::new();
        for region in regions {
            map.add_region(region);
        }
        EldoriaWorld {
            game: GameDef {
                title: title.to_string(),
                ..GameDef::default()
            },
            map,
            balance: BalanceDef::default(),
            spinners: crate::spinners::default_spinners(),
        }
    }

    /// Returns a random line from the selected spinner type, or a supplied default.
    pub fn spin(&self, spin_type: SpinnerType, default: &'static str) -> String {
        self.spinners
            .get(&spin_type)
            .and_then(gametools::Spinner::spin)
            .unwrap_or(default.to_string())
    }
}

/// Running tallies reported when the journey ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JourneyStats {
    pub turns: usize,
    pub explored: BTreeSet<usize>,
    pub encounters: usize,
    pub damage_taken: u32,
}

/// Outcome of pushing one hit through the mitigation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageReport {
    pub raw: u32,
    pub absorbed: u32,
    pub dealt: u32,
    pub health_after: u32,
}

/// Complete state of a run, owned by the game loop and passed to each handler.
#[derive(Debug, Clone)]
pub struct GameState {
    pub world: EldoriaWorld,
    pub player: Character,
    pub inventory: Inventory<Item>,
    pub alive: bool,
    pub boss_defeated: bool,
    pub stats: JourneyStats,
}
impl GameState {
    pub fn new(world: EldoriaWorld, player: Character) -> GameState {
        info!(
            "new game: {} the {} ({} hp, {} atk)",
            player.name(),
            player.class(),
            player.health(),
            player.base_attack()
        );
        GameState {
            world,
            player,
            inventory: Inventory::new(),
            alive: true,
            boss_defeated: false,
            stats: JourneyStats::default(),
        }
    }

    pub fn map(&self) -> &WorldMap {
        &self.world.map
    }

    pub fn balance(&self) -> &BalanceDef {
        &self.world.balance
    }

    /// Apply a raw hit to the player after class mitigation.
    ///
    /// Every source of damage goes through here.
    pub fn apply_damage(&mut self, raw: u32) -> DamageReport {
        let dealt = self.player.class().mitigate(raw);
        self.player.take_damage(dealt);
        self.stats.damage_taken = self.stats.damage_taken.saturating_add(dealt);
        if !self.player.is_alive() {
            self.alive = false;
        }
        info!(
            "{} hit for {raw} ({dealt} after mitigation), {} hp left",
            self.player.name(),
            self.player.health()
        );
        DamageReport {
            raw,
            absorbed: raw - dealt,
            dealt,
            health_after: self.player.health(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterClass;

    fn three_regions() -> Vec<Region> {
        vec![
            Region::new("Village", "Ash.", false),
            Region::new("Grove", "Whispers.", false),
            Region::new("Keep", "Lava glow.", true),
        ]
    }

    #[test]
    fn region_lookup_respects_bounds() {
        let world = EldoriaWorld::with_regions("T", three_regions());
        let map = &world.map;
        assert_eq!(map.region_count(), 3);
        for (i, expected) in three_regions().iter().enumerate() {
            assert_eq!(map.region(i), Ok(expected));
        }
        assert_eq!(map.region(3), Err(MapError::RegionOutOfRange { index: 3, count: 3 }));
        assert!(map.region(usize::MAX).is_err());
    }

    #[test]
    fn describe_numbers_from_one() {
        let world = EldoriaWorld::with_regions("T", three_regions());
        assert_eq!(world.map.describe(), "1) Village\n2) Grove\n3) Keep");
    }

    #[test]
    fn knight_absorbs_three_from_every_hit() {
        let world = EldoriaWorld::with_regions("T", three_regions());
        let mut state = GameState::new(world, Character::new("Bors", CharacterClass::Knight, 40));
        let report = state.apply_damage(10);
        assert_eq!(report.absorbed, 3);
        assert_eq!(state.player.health(), 33);
        state.apply_damage(10);
        assert_eq!(state.player.health(), 26);
        state.apply_damage(2);
        assert_eq!(state.player.health(), 26);
        assert_eq!(state.stats.damage_taken, 14);
    }

    #[test]
    fn damage_formula_holds_for_every_class() {
        for class in CharacterClass::ALL {
            for raw in 0..=45u32 {
                let world = EldoriaWorld::with_regions("T", three_regions());
                let mut state = GameState::new(world, Character::new("X", class, 40));
                let before = state.player.health();
                let mitigated = if class == CharacterClass::Knight {
                    raw.saturating_sub(3)
                } else {
                    raw
                };
                state.apply_damage(raw);
                assert_eq!(state.player.health(), before.saturating_sub(mitigated));
                assert_eq!(state.alive, state.player.health() > 0);
            }
        }
    }
}
