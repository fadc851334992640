//! Character -- the player's hero and the closed set of playable classes.
//!
//! Everything that differs between classes (starting stats, ability text,
//! damage mitigation, rest bonus) is a table lookup on [`CharacterClass`].
use std::fmt;

use crate::health::{HealthState, LifeState};

/// Hit points a Knight's shield absorbs from every incoming hit.
pub const KNIGHT_MITIGATION: u32 = 3;
/// Hit points an Elf recovers when resting.
pub const ELF_REST_HEAL: u32 = 8;

/// Starting numbers for a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    pub health: u32,
    pub attack: u32,
}

/// The playable classes, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Knight,
    Mage,
    Archer,
    Berserker,
    Viking,
    Elf,
}
impl CharacterClass {
    pub const ALL: [CharacterClass; 6] = [
        CharacterClass::Knight,
        CharacterClass::Mage,
        CharacterClass::Archer,
        CharacterClass::Berserker,
        CharacterClass::Viking,
        CharacterClass::Elf,
    ];

    /// Map a 1-based menu choice onto a class.
    pub fn from_choice(choice: u32) -> Option<CharacterClass> {
        let idx = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Knight => "Knight",
            CharacterClass::Mage => "Mage",
            CharacterClass::Archer => "Archer",
            CharacterClass::Berserker => "Berserker",
            CharacterClass::Viking => "Viking",
            CharacterClass::Elf => "Elf",
        }
    }

    pub fn base_stats(self) -> BaseStats {
        let (health, attack) = match self {
            CharacterClass::Knight => (40, 8),
            CharacterClass::Mage => (28, 10),
            CharacterClass::Archer => (32, 9),
            CharacterClass::Berserker => (38, 11),
            CharacterClass::Viking => (36, 9),
            CharacterClass::Elf => (30, 8),
        };
        BaseStats { health, attack }
    }

    /// Flavor text describing the class ability.
    pub fn ability_text(self) -> &'static str {
        match self {
            CharacterClass::Knight => "Shield of Faith: reduces the first damage taken in each fight.",
            CharacterClass::Mage => "Arcane Blast: can deal extra damage to fragile foes.",
            CharacterClass::Archer => "Precise Shot: better odds of striking first.",
            CharacterClass::Berserker => "Unbridled Fury: the lower your health, the harder you hit.",
            CharacterClass::Viking => "War Cry: intimidates enemies and blunts their attacks.",
            CharacterClass::Elf => "Sylvan Grace: recovers a little more whenever you pause to rest.",
        }
    }

    /// Reduce a raw hit according to the class ability.
    ///
    /// Only the Knight mitigates, and it does so on every hit.
    pub fn mitigate(self, raw: u32) -> u32 {
        match self {
            CharacterClass::Knight => raw.saturating_sub(KNIGHT_MITIGATION),
            _ => raw,
        }
    }

    /// Hit points restored by resting, given the standard amount.
    pub fn rest_heal(self, standard: u32) -> u32 {
        match self {
            CharacterClass::Elf => ELF_REST_HEAL,
            _ => standard,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The player's hero.
///
/// Health only changes through [`Character::take_damage`] and [`Character::heal`].
#[derive(Debug, Clone)]
pub struct Character {
    name: String,
    class: CharacterClass,
    health: HealthState,
    base_attack: u32,
}
impl Character {
    /// Create a character with the class's starting stats.
    ///
    /// `max_health` is the ceiling for healing, shared by every class.
    pub fn new(name: impl Into<String>, class: CharacterClass, max_health: u32) -> Character {
        let stats = class.base_stats();
        Character {
            name: name.into(),
            class,
            health: HealthState::new(stats.health, max_health),
            base_attack: stats.attack,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> CharacterClass {
        self.class
    }

    pub fn health(&self) -> u32 {
        self.health.current_hp()
    }

    pub fn max_health(&self) -> u32 {
        self.health.max_hp()
    }

    pub fn base_attack(&self) -> u32 {
        self.base_attack
    }

    pub fn life_state(&self) -> LifeState {
        self.health.life_state()
    }

    pub fn is_alive(&self) -> bool {
        self.life_state() == LifeState::Alive
    }

    /// Subtract hit points, stopping at zero. No mitigation is applied here.
    pub fn take_damage(&mut self, amount: u32) {
        self.health.damage(amount);
    }

    /// Restore hit points up to the maximum. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.health.heal(amount)
    }

    pub fn ability_text(&self) -> &'static str {
        self.class.ability_text()
    }

    /// One-line character sheet.
    pub fn describe(&self) -> String {
        format!(
            "{}, the {}. Health: {}, Attack: {}",
            self.name,
            self.class,
            self.health(),
            self.base_attack
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_start_with_table_stats() {
        let expected = [(40, 8), (28, 10), (32, 9), (38, 11), (36, 9), (30, 8)];
        for (class, (hp, atk)) in CharacterClass::ALL.into_iter().zip(expected) {
            assert!(class.base_stats().health <= eldoria_data::MIN_MAX_HEALTH, "{class}");
            let hero = Character::new("Tess", class, eldoria_data::MIN_MAX_HEALTH);
            assert_eq!(hero.health(), hp, "{class}");
            assert_eq!(hero.base_attack(), atk, "{class}");
        }
    }

    #[test]
    fn menu_choices_map_in_order() {
        assert_eq!(CharacterClass::from_choice(1), Some(CharacterClass::Knight));
        assert_eq!(CharacterClass::from_choice(6), Some(CharacterClass::Elf));
        assert_eq!(CharacterClass::from_choice(0), None);
        assert_eq!(CharacterClass::from_choice(7), None);
    }

    #[test]
    fn damage_never_goes_below_zero() {
        for start_damage in 0..=40 {
            for hit in [0, 1, 7, 39, 40, 41, 500] {
                let mut hero = Character::new("Tess", CharacterClass::Knight, 40);
                hero.take_damage(start_damage);
                let before = hero.health();
                hero.take_damage(hit);
                assert_eq!(hero.health(), before.saturating_sub(hit));
            }
        }
    }

    #[test]
    fn heal_caps_at_max_health() {
        for start in [0, 1, 20, 35, 40] {
            for amount in [0, 1, 5, 10, 100] {
                let mut hero = Character::new("Tess", CharacterClass::Knight, 40);
                hero.take_damage(40 - start);
                let restored = hero.heal(amount);
                assert_eq!(hero.health(), (start + amount).min(40));
                assert_eq!(restored, hero.health() - start);
            }
        }
    }

    #[test]
    fn only_knight_mitigates() {
        for raw in 0..=20 {
            assert_eq!(CharacterClass::Knight.mitigate(raw), raw.saturating_sub(3));
            for class in CharacterClass::ALL.into_iter().skip(1) {
                assert_eq!(class.mitigate(raw), raw);
            }
        }
    }

    #[test]
    fn elf_rests_better() {
        assert_eq!(CharacterClass::Elf.rest_heal(5), 8);
        assert_eq!(CharacterClass::Viking.rest_heal(5), 5);
    }

    #[test]
    fn describe_lists_name_class_and_stats() {
        let hero = Character::new("Ayla", CharacterClass::Mage, 40);
        assert_eq!(hero.describe(), "Ayla, the Mage. Health: 28, Attack: 10");
        assert!(hero.ability_text().starts_with("Arcane Blast"));
    }
}
