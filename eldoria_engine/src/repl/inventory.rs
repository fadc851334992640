//! `repl::inventory` module
//!
//! Showing the pack and drinking potions.

use log::info;

use crate::inventory::Item;
use crate::repl::ReplControl;
use crate::view::{View, ViewItem};
use crate::world::GameState;

/// Show the items currently carried.
pub fn inventory_handler(state: &mut GameState, view: &mut View) -> ReplControl {
    let items = state.inventory.items().iter().map(ToString::to_string).collect();
    view.push(ViewItem::Inventory(items));
    ReplControl::Continue
}

/// Drink one healing potion if there is one.
///
/// The potion is used up even at full health. Returns whether a potion was consumed.
pub fn use_potion_handler(state: &mut GameState, view: &mut View) -> bool {
    if !state.inventory.remove(&Item::MinorHealingPotion) {
        view.push(ViewItem::Error("You don't have any potions!".to_string()));
        return false;
    }
    let restored = state.player.heal(state.balance().potion_heal);
    info!(
        "{} drank a {} (+{restored} hp)",
        state.player.name(),
        Item::MinorHealingPotion
    );
    view.push(ViewItem::CharacterHealed {
        cause: "The potion".to_string(),
        amount: restored,
        health: state.player.health(),
        max: state.player.max_health(),
    });
    true
}
