//! `repl::explore` module
//!
//! Picking a region to explore, and the random encounters found in regions
//! without a boss.

use anyhow::Result;
use log::{info, warn};

use crate::command::menu_len;
use crate::dice::Dice;
use crate::inventory::Item;
use crate::repl::ReplControl;
use crate::repl::combat::{CombatOutcome, boss_fight_handler};
use crate::repl::input::{InputSource, read_choice};
use crate::spinners::SpinnerType;
use crate::view::{View, ViewItem};
use crate::world::GameState;

/// A random event in a region without a boss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encounter {
    /// A traveler hands over a healing potion.
    Traveler,
    /// Raiders attack for the given raw damage.
    Ambush { damage: u32 },
    /// A scrap of map showing a shortcut.
    MapFragment,
}

/// Pick one of the three encounters with equal odds.
pub fn roll_encounter(state: &GameState, dice: &mut dyn Dice) -> Encounter {
    match dice.roll(0..=2) {
        0 => Encounter::Traveler,
        1 => Encounter::Ambush {
            damage: dice.roll_def(state.balance().ambush_damage),
        },
        _ => Encounter::MapFragment,
    }
}

/// Apply an encounter's effects to the game state.
pub fn resolve_encounter(state: &mut GameState, view: &mut View, encounter: Encounter) {
    info!("encounter: {encounter:?}");
    state.stats.encounters += 1;
    match encounter {
        Encounter::Traveler => {
            view.push(ViewItem::Narration(
                "You meet a mysterious traveler who offers you a potion.".to_string(),
            ));
            gain_item(state, view, Item::MinorHealingPotion);
        },
        Encounter::Ambush { damage } => {
            let opener = state
                .world
                .spin(SpinnerType::AmbushOpener, "A band of raiders ambushes you!");
            view.push(ViewItem::Narration(opener));
            let report = state.apply_damage(damage);
            view.push(ViewItem::CharacterHarmed {
                cause: "The ambush".to_string(),
                raw: report.raw,
                absorbed: report.absorbed,
                health: report.health_after,
                max: state.player.max_health(),
            });
        },
        Encounter::MapFragment => {
            let target = state
                .map()
                .regions()
                .iter()
                .find(|r| r.has_boss())
                .map_or("the cult's stronghold", |r| r.name())
                .to_string();
            view.push(ViewItem::Narration(format!(
                "You find a map fragment revealing a shortcut to {target}."
            )));
            gain_item(state, view, Item::MapFragment);
        },
    }
}

fn gain_item(state: &mut GameState, view: &mut View, item: Item) {
    state.inventory.add(item);
    info!("{} gained a {item}", state.player.name());
    view.push(ViewItem::ItemFound(item.to_string()));
}

/// Ask which region to explore, then run its encounter or boss fight.
///
/// # Errors
/// - `InputClosed` or I/O failures from the input source
pub fn explore_handler(
    state: &mut GameState,
    input: &mut dyn InputSource,
    dice: &mut dyn Dice,
    view: &mut View,
) -> Result<ReplControl> {
    view.push(ViewItem::WorldOverview {
        heading: "Choose a region to explore:".to_string(),
        regions: state.map().describe(),
    });
    let choice = read_choice(input, view, 1, menu_len(state.map().regions()))?;
    let index = usize::try_from(choice).unwrap_or(usize::MAX).saturating_sub(1);

    let region = match state.map().region(index) {
        Ok(region) => region.clone(),
        Err(err) => {
            warn!("region lookup failed after validated input: {err}");
            view.push(ViewItem::Error(format!("Unexpected error reaching that region: {err}")));
            return Ok(ReplControl::Continue);
        },
    };

    info!("{} explores {}", state.player.name(), region.name());
    state.stats.explored.insert(index);
    view.push(ViewItem::RegionEntered(region.describe()));

    if region.has_boss() {
        if boss_fight_handler(state, input, dice, view, &region)? == CombatOutcome::Victory {
            state.boss_defeated = true;
        }
    } else {
        let encounter = roll_encounter(state, dice);
        resolve_encounter(state, view, encounter);
    }
    Ok(ReplControl::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Character, CharacterClass};
    use crate::dice::ScriptedDice;
    use crate::region::Region;
    use crate::repl::input::ScriptedInput;
    use crate::world::EldoriaWorld;

    fn state(class: CharacterClass) -> GameState {
        let world = EldoriaWorld::with_regions(
            "T",
            vec![
                Region::new("Village", "Ash.", false),
                Region::new("Grove", "Whispers.", false),
                Region::new("Keep", "Lava.", true),
            ],
        );
        GameState::new(world, Character::new("Hero", class, 40))
    }

    #[test]
    fn encounter_rolls_map_to_events() {
        let s = state(CharacterClass::Mage);
        assert_eq!(roll_encounter(&s, &mut ScriptedDice::new([0])), Encounter::Traveler);
        assert_eq!(
            roll_encounter(&s, &mut ScriptedDice::new([1, 8])),
            Encounter::Ambush { damage: 8 }
        );
        assert_eq!(
            roll_encounter(&s, &mut ScriptedDice::new([1, 0])),
            Encounter::Ambush { damage: 5 }
        );
        assert_eq!(roll_encounter(&s, &mut ScriptedDice::new([2])), Encounter::MapFragment);
    }

    #[test]
    fn traveler_and_fragment_add_items() {
        let mut s = state(CharacterClass::Mage);
        let mut view = View::recording();
        resolve_encounter(&mut s, &mut view, Encounter::Traveler);
        resolve_encounter(&mut s, &mut view, Encounter::MapFragment);
        assert_eq!(s.inventory.items(), &[Item::MinorHealingPotion, Item::MapFragment]);
        assert_eq!(s.stats.encounters, 2);
        assert!(
            view.seen()
                .any(|i| matches!(i, ViewItem::Narration(text) if text.contains("shortcut to Keep")))
        );
    }

    #[test]
    fn ambush_goes_through_mitigation() {
        let mut knight = state(CharacterClass::Knight);
        let mut view = View::recording();
        resolve_encounter(&mut knight, &mut view, Encounter::Ambush { damage: 10 });
        assert_eq!(knight.player.health(), 33);

        let mut archer = state(CharacterClass::Archer);
        resolve_encounter(&mut archer, &mut view, Encounter::Ambush { damage: 10 });
        assert_eq!(archer.player.health(), 22);
    }

    #[test]
    fn exploring_plain_region_triggers_one_encounter() {
        let mut s = state(CharacterClass::Viking);
        let mut input = ScriptedInput::new(["2"]);
        let mut dice = ScriptedDice::new([0]);
        let mut view = View::recording();
        let control = explore_handler(&mut s, &mut input, &mut dice, &mut view).unwrap();
        assert_eq!(control, ReplControl::Continue);
        assert!(s.inventory.contains(&Item::MinorHealingPotion));
        assert!(s.stats.explored.contains(&1));
        assert!(!s.boss_defeated);
    }

    #[test]
    fn out_of_range_region_is_reprompted() {
        let mut s = state(CharacterClass::Viking);
        let mut input = ScriptedInput::new(["0", "4", "1"]);
        let mut dice = ScriptedDice::new([2]);
        let mut view = View::recording();
        explore_handler(&mut s, &mut input, &mut dice, &mut view).unwrap();
        assert_eq!(view.seen().filter(|i| i.is_error()).count(), 2);
        assert!(s.inventory.contains(&Item::MapFragment));
    }
}
