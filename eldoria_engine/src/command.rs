//! Command module
//!
//! The numbered menus offered during play, and the commands their choices map to.
use variantly::Variantly;

/// Actions offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum Command {
    Explore,
    Inventory,
    Rest,
    Quit,
}
impl Command {
    pub const MENU: [Command; 4] = [Command::Explore, Command::Inventory, Command::Rest, Command::Quit];

    /// Map a 1-based menu choice onto a command.
    pub fn from_choice(choice: u32) -> Option<Command> {
        menu_entry(&Self::MENU, choice)
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::Explore => "Explore a region",
            Command::Inventory => "View inventory",
            Command::Rest => "Rest",
            Command::Quit => "Give up the journey",
        }
    }
}

/// Actions offered during the boss fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum CombatCommand {
    Attack,
    UsePotion,
    Dialogue,
}
impl CombatCommand {
    pub const MENU: [CombatCommand; 3] = [CombatCommand::Attack, CombatCommand::UsePotion, CombatCommand::Dialogue];

    pub fn from_choice(choice: u32) -> Option<CombatCommand> {
        menu_entry(&Self::MENU, choice)
    }

    pub fn label(self) -> &'static str {
        match self {
            CombatCommand::Attack => "Attack",
            CombatCommand::UsePotion => "Use a potion (if you have one)",
            CombatCommand::Dialogue => "Try to reason with him",
        }
    }
}

/// Menu labels in display order.
pub fn menu_labels<T: Copy>(entries: &[T], label: fn(T) -> &'static str) -> Vec<String> {
    entries.iter().map(|e| label(*e).to_string()).collect()
}

/// Largest valid choice for a menu, for use as the `read_choice` upper bound.
pub fn menu_len<T>(entries: &[T]) -> u32 {
    u32::try_from(entries.len()).unwrap_or(u32::MAX)
}

fn menu_entry<T: Copy>(entries: &[T], choice: u32) -> Option<T> {
    let idx = usize::try_from(choice).ok()?.checked_sub(1)?;
    entries.get(idx).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_choices_map_in_order() {
        assert_eq!(Command::from_choice(1), Some(Command::Explore));
        assert_eq!(Command::from_choice(2), Some(Command::Inventory));
        assert_eq!(Command::from_choice(3), Some(Command::Rest));
        assert!(Command::from_choice(4).is_some_and(|c| c.is_quit()));
        assert_eq!(Command::from_choice(0), None);
        assert_eq!(Command::from_choice(5), None);
    }

    #[test]
    fn combat_menu_choices_map_in_order() {
        assert!(CombatCommand::from_choice(1).is_some_and(|c| c.is_attack()));
        assert_eq!(CombatCommand::from_choice(2), Some(CombatCommand::UsePotion));
        assert_eq!(CombatCommand::from_choice(3), Some(CombatCommand::Dialogue));
        assert_eq!(CombatCommand::from_choice(4), None);
    }

    #[test]
    fn labels_follow_menu_order() {
        let labels = menu_labels(&Command::MENU, Command::label);
        assert_eq!(labels.len(), menu_len(&Command::MENU) as usize);
        assert_eq!(labels[0], "Explore a region");
        assert_eq!(labels[3], "Give up the journey");
    }
}
