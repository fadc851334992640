#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Eldoria **
//! Turn-based text adventure

use eldoria_engine::{ConsoleInput, Dice, RngDice, View, load_world, run_game};

use anyhow::{Context, Result};
use log::{info, warn};

/// Set to a number for reproducible dice rolls.
const SEED_VAR: &str = "ELDORIA_SEED";

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Eldoria world...");
    let world = load_world().context("while loading EldoriaWorld")?;
    info!("EldoriaWorld loaded successfully.");

    let mut dice = dice_from_env();
    let mut input = ConsoleInput::new();
    let mut view = View::new();

    info!("Starting the game!");
    let outcome = run_game(world, &mut input, dice.as_mut(), &mut view)?;
    info!("game finished: {outcome:?}");
    Ok(())
}

fn dice_from_env() -> Box<dyn Dice> {
    match std::env::var(SEED_VAR) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(seed) => {
                info!("using seeded dice ({seed})");
                Box::new(RngDice::seeded(seed))
            },
            Err(err) => {
                warn!("ignoring {SEED_VAR}='{raw}': {err}");
                Box::new(RngDice::thread())
            },
        },
        Err(_) => Box::new(RngDice::thread()),
    }
}
