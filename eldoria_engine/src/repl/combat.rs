//! `repl::combat` module
//!
//! The fight against the cult's leader. Each round the player attacks,
//! drinks a potion, or tries to talk; the fight ends when either side hits
//! zero health.

use anyhow::Result;
use log::info;

use crate::command::{CombatCommand, menu_labels, menu_len};
use crate::dice::Dice;
use crate::region::Region;
use crate::repl::input::{InputSource, read_choice};
use crate::repl::inventory::use_potion_handler;
use crate::spinners::SpinnerType;
use crate::style::GameStyle;
use crate::view::{View, ViewItem};
use crate::world::GameState;

/// How a boss fight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory,
    Defeat,
}

/// The boss's side of the fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossFight {
    boss_health: u32,
}
impl BossFight {
    pub fn new(boss_health: u32) -> BossFight {
        BossFight { boss_health }
    }

    pub fn boss_health(&self) -> u32 {
        self.boss_health
    }

    pub fn is_boss_defeated(&self) -> bool {
        self.boss_health == 0
    }

    /// Damage the boss. Returns its remaining health.
    pub fn strike(&mut self, amount: u32) -> u32 {
        self.boss_health = self.boss_health.saturating_sub(amount);
        self.boss_health
    }
}

/// Player attacks for base attack plus a bonus roll; a surviving boss hits back.
pub fn attack_round(state: &mut GameState, fight: &mut BossFight, dice: &mut dyn Dice, view: &mut View) {
    let amount = state.player.base_attack() + dice.roll_def(state.balance().attack_bonus);
    let remaining = fight.strike(amount);
    info!("{} strikes the boss for {amount} ({remaining} left)", state.player.name());
    view.push(ViewItem::BossHit {
        amount,
        boss_health: remaining,
    });
    if fight.is_boss_defeated() {
        return;
    }

    let counter = dice.roll_def(state.balance().boss_counter);
    boss_hits_player(state, view, "The boss's counterattack", counter);
}

/// Talking never works: the boss answers with fire and takes no damage.
pub fn dialogue_round(state: &mut GameState, dice: &mut dyn Dice, view: &mut View) {
    let rebuff = state.world.spin(
        SpinnerType::DialogueRebuff,
        "You try to reason with him, but his fanaticism is unshakable.",
    );
    view.push(ViewItem::Narration(rebuff));
    let backlash = dice.roll_def(state.balance().dialogue_backlash);
    boss_hits_player(state, view, "A blast of black fire", backlash);
}

fn boss_hits_player(state: &mut GameState, view: &mut View, cause: &str, raw: u32) {
    let report = state.apply_damage(raw);
    view.push(ViewItem::CharacterHarmed {
        cause: cause.to_string(),
        raw: report.raw,
        absorbed: report.absorbed,
        health: report.health_after,
        max: state.player.max_health(),
    });
}

/// Run the boss fight to completion.
///
/// Victory requires the boss at zero while the player still stands.
///
/// # Errors
/// - `InputClosed` or I/O failures from the input source
pub fn boss_fight_handler(
    state: &mut GameState,
    input: &mut dyn InputSource,
    dice: &mut dyn Dice,
    view: &mut View,
    region: &Region,
) -> Result<CombatOutcome> {
    let mut fight = BossFight::new(state.balance().boss_health);
    info!("boss fight begins in {} ({} hp)", region.name(), fight.boss_health());
    view.push(ViewItem::Narration(format!(
        "You enter the great hall of {}. The leader of the Hollow Flame rises, wreathed in black fire.",
        region.name().region_style()
    )));
    view.push(ViewItem::Narration(
        state.world.spin(SpinnerType::BossTaunt, "\"The Hollow Flame consumes all.\""),
    ));

    while !fight.is_boss_defeated() && state.player.is_alive() {
        view.push(ViewItem::BossStatus {
            boss_health: fight.boss_health(),
            health: state.player.health(),
            max: state.player.max_health(),
        });
        view.push(ViewItem::Menu {
            title: "Your move:".to_string(),
            options: menu_labels(&CombatCommand::MENU, CombatCommand::label),
        });
        let choice = read_choice(input, view, 1, menu_len(&CombatCommand::MENU))?;
        match CombatCommand::from_choice(choice) {
            Some(CombatCommand::Attack) => attack_round(state, &mut fight, dice, view),
            Some(CombatCommand::UsePotion) => {
                use_potion_handler(state, view);
            },
            Some(CombatCommand::Dialogue) => dialogue_round(state, dice, view),
            None => {},
        }
    }

    let outcome = if fight.is_boss_defeated() && state.player.is_alive() {
        view.push(ViewItem::Narration(
            "The boss falls. The hollow flame begins to fade...".to_string(),
        ));
        CombatOutcome::Victory
    } else {
        CombatOutcome::Defeat
    };
    info!("boss fight ended: {outcome:?}");
    Ok(outcome)
}
