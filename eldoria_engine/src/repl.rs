//! REPL and command handling.
//!
//! The game runs as a menu-driven loop: character creation, then the main
//! menu until the hero dies, the boss falls, or the player gives up. This
//! module drives that loop; its submodules implement the handlers that
//! mutate the [`GameState`].

pub mod combat;
pub mod creation;
pub mod explore;
pub mod input;
pub mod inventory;
pub mod system;

pub use combat::*;
pub use creation::*;
pub use explore::*;
pub use inventory::*;
pub use system::*;

use anyhow::Result;
use log::info;

use crate::command::{Command, menu_labels, menu_len};
use crate::dice::Dice;
use crate::view::{GameOutcome, View, ViewItem};
use crate::world::{EldoriaWorld, GameState};

use input::{InputClosed, InputSource, read_choice};

const DEATH_LINE: &str = "You fall to your knees. Darkness takes Eldoria.";
const DEFAULT_EPILOGUE: &str = "The boss is defeated. Eldoria can finally rebuild.";

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// Play one full game and report how it ended.
///
/// Running out of input at any prompt counts as quitting: the journey summary
/// and farewell are still shown.
///
/// # Errors
/// - I/O failures from the input source
pub fn run_game(
    world: EldoriaWorld,
    input: &mut dyn InputSource,
    dice: &mut dyn Dice,
    view: &mut View,
) -> Result<GameOutcome> {
    view.push(ViewItem::Banner {
        title: world.game.title.clone(),
        intro: world.game.intro.clone(),
    });

    let player = match create_character(input, view, world.balance.max_health) {
        Ok(player) => player,
        Err(err) if err.is::<InputClosed>() => {
            info!("input closed during character creation");
            farewell(&world, view);
            view.flush();
            return Ok(GameOutcome::Quit);
        },
        Err(err) => return Err(err),
    };

    let mut state = GameState::new(world, player);
    view.push(ViewItem::CharacterSheet {
        sheet: state.player.describe(),
        ability: state.player.ability_text().to_string(),
    });
    view.push(ViewItem::WorldOverview {
        heading: state.world.game.overview.clone(),
        regions: state.map().describe(),
    });

    let outcome = match main_loop(&mut state, input, dice, view) {
        Ok(outcome) => outcome,
        Err(err) if err.is::<InputClosed>() => {
            info!("input closed; treating as quit");
            GameOutcome::Quit
        },
        Err(err) => return Err(err),
    };

    journey_summary(&state, view, outcome);
    farewell(&state.world, view);
    view.flush();
    Ok(outcome)
}

/// The main menu loop. Returns once a terminal state is reached.
///
/// # Errors
/// - `InputClosed` or I/O failures from the input source
pub fn main_loop(
    state: &mut GameState,
    input: &mut dyn InputSource,
    dice: &mut dyn Dice,
    view: &mut View,
) -> Result<GameOutcome> {
    loop {
        view.push(ViewItem::Menu {
            title: format!("What will you do, {}?", state.player.name()),
            options: menu_labels(&Command::MENU, Command::label),
        });
        let choice = read_choice(input, view, 1, menu_len(&Command::MENU))?;
        let Some(command) = Command::from_choice(choice) else {
            continue;
        };

        state.stats.turns += 1;
        info!("================> TURN {}: {command:?} <================", state.stats.turns);

        let control = match command {
            Command::Explore => explore_handler(state, input, dice, view)?,
            Command::Inventory => inventory_handler(state, view),
            Command::Rest => rest_handler(state, view),
            Command::Quit => quit_handler(state, view),
        };

        if let Some(outcome) = check_game_over(state, view, control) {
            info!("game over: {outcome:?} after {} turns", state.stats.turns);
            return Ok(outcome);
        }
    }
}

/// Decide whether the game has reached a terminal state after a handler ran.
pub fn check_game_over(state: &mut GameState, view: &mut View, control: ReplControl) -> Option<GameOutcome> {
    if !state.player.is_alive() {
        state.alive = false;
        view.push(ViewItem::Death(DEATH_LINE.to_string()));
        return Some(GameOutcome::Dead);
    }
    if state.boss_defeated {
        let epilogue = if state.world.game.epilogue.is_empty() {
            DEFAULT_EPILOGUE.to_string()
        } else {
            state.world.game.epilogue.clone()
        };
        view.push(ViewItem::Victory(epilogue));
        return Some(GameOutcome::BossDefeated);
    }
    match control {
        ReplControl::Quit => Some(GameOutcome::Quit),
        ReplControl::Continue => None,
    }
}
