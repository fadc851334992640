//! `repl::creation` module
//!
//! Character creation: a name, then a class from the numbered list.

use anyhow::Result;
use log::info;

use crate::character::{Character, CharacterClass};
use crate::command::{menu_labels, menu_len};
use crate::repl::input::{InputSource, read_choice, read_name};
use crate::view::{View, ViewItem};

/// Prompt for a name and class and build the hero.
///
/// # Errors
/// - `InputClosed` or I/O failures from the input source
pub fn create_character(input: &mut dyn InputSource, view: &mut View, max_health: u32) -> Result<Character> {
    let name = read_name(input, view)?;

    view.push(ViewItem::Menu {
        title: "Choose a class:".to_string(),
        options: menu_labels(&CharacterClass::ALL, CharacterClass::label),
    });
    let choice = read_choice(input, view, 1, menu_len(&CharacterClass::ALL))?;
    // read_choice only returns valid menu numbers
    let class = CharacterClass::from_choice(choice).unwrap_or(CharacterClass::Knight);

    info!("{name} chose the {class} class");
    Ok(Character::new(name, class, max_health))
}
