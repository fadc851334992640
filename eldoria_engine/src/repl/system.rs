//! `repl::system` module
//!
//! Resting, quitting, and the end-of-game screens.

use log::info;

use crate::repl::ReplControl;
use crate::spinners::SpinnerType;
use crate::view::{GameOutcome, View, ViewItem};
use crate::world::{EldoriaWorld, GameState};

const DEFAULT_FAREWELL: &str = "Thanks for playing! Until next time.";

/// Rest for a while, recovering the class's rest amount.
pub fn rest_handler(state: &mut GameState, view: &mut View) -> ReplControl {
    let scene = state
        .world
        .spin(SpinnerType::RestScene, "You find a relatively safe spot and rest for a while.");
    view.push(ViewItem::Narration(scene));
    let amount = state.player.class().rest_heal(state.balance().rest_heal);
    let restored = state.player.heal(amount);
    info!("{} rests (+{restored} hp)", state.player.name());
    view.push(ViewItem::CharacterHealed {
        cause: "Resting".to_string(),
        amount: restored,
        health: state.player.health(),
        max: state.player.max_health(),
    });
    ReplControl::Continue
}

/// Give up on the quest.
pub fn quit_handler(state: &mut GameState, view: &mut View) -> ReplControl {
    info!("{} quit the game", state.player.name());
    info!("final inventory: {:?}", state.inventory.items());
    let msg = state
        .world
        .spin(SpinnerType::QuitMsg, "You abandon the quest. The cult advances unopposed...");
    view.push(ViewItem::Narration(msg));
    ReplControl::Quit
}

/// Summary of the run shown before the farewell.
pub fn journey_summary(state: &GameState, view: &mut View, outcome: GameOutcome) {
    view.push(ViewItem::JourneySummary {
        outcome,
        turns: state.stats.turns,
        explored: state.stats.explored.len(),
        total_regions: state.map().region_count(),
        damage_taken: state.stats.damage_taken,
        inventory: state.inventory.items().iter().map(ToString::to_string).collect(),
    });
}

/// Closing line, from content if it has one.
pub fn farewell(world: &EldoriaWorld, view: &mut View) {
    let text = if world.game.farewell.trim().is_empty() {
        DEFAULT_FAREWELL.to_string()
    } else {
        world.game.farewell.trim().to_string()
    };
    view.push(ViewItem::Farewell(text));
}
