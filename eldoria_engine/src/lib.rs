#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const ELDORIA_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod character;
pub mod command;
pub mod data_paths;
pub mod dice;
pub mod health;
pub mod inventory;
pub mod loader;
pub mod region;
pub mod repl;
pub mod spinners;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use character::{Character, CharacterClass};
pub use dice::{Dice, RngDice, ScriptedDice};
pub use inventory::{Inventory, Item};
pub use loader::load_world;
pub use region::Region;
pub use repl::input::{ConsoleInput, InputSource, ScriptedInput};
pub use repl::run_game;
pub use view::{GameOutcome, View, ViewItem};
pub use world::{EldoriaWorld, GameState, WorldMap};
