//! View module.
//!
//! Handlers never print directly. They push [`ViewItem`]s into the [`View`],
//! which renders them in order whenever the game loop flushes it (right before
//! each prompt).
mod icons;

use colored::Colorize;
use log::debug;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::style::{GameStyle, indented_block, normal_block};
use icons::{
    ICON_CELEBRATE, ICON_DEATH, ICON_ENGINE, ICON_ERROR, ICON_EVENT, ICON_HARMED, ICON_HEALED, ICON_ITEM, ICON_STRIKE,
};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Dead,
    BossDefeated,
    Quit,
}
impl GameOutcome {
    pub fn label(self) -> &'static str {
        match self {
            GameOutcome::Dead => "Fallen",
            GameOutcome::BossDefeated => "Victorious",
            GameOutcome::Quit => "Abandoned",
        }
    }
}

/// Everything the player can be shown.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    Banner { title: String, intro: String },
    CharacterSheet { sheet: String, ability: String },
    WorldOverview { heading: String, regions: String },
    Menu { title: String, options: Vec<String> },
    RegionEntered(String),
    Narration(String),
    ItemFound(String),
    CharacterHarmed { cause: String, raw: u32, absorbed: u32, health: u32, max: u32 },
    CharacterHealed { cause: String, amount: u32, health: u32, max: u32 },
    Inventory(Vec<String>),
    BossStatus { boss_health: u32, health: u32, max: u32 },
    BossHit { amount: u32, boss_health: u32 },
    Error(String),
    EngineMessage(String),
    Death(String),
    Victory(String),
    JourneySummary {
        outcome: GameOutcome,
        turns: usize,
        explored: usize,
        total_regions: usize,
        damage_taken: u32,
        inventory: Vec<String>,
    },
    Farewell(String),
}

/// Collects `ViewItem`s for the current frame and renders them on `flush`.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
    /// Everything flushed so far; only kept by a recording view.
    pub transcript: Vec<ViewItem>,
    recording: bool,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// A view that renders to the terminal.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            transcript: Vec::new(),
            recording: false,
        }
    }

    /// A silent view that keeps every flushed item in `transcript`.
    pub fn recording() -> Self {
        Self {
            width: 80,
            items: Vec::new(),
            transcript: Vec::new(),
            recording: true,
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Render and clear everything pushed since the last flush.
    pub fn flush(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.recording {
            debug!("recording {} view items", self.items.len());
            self.transcript.append(&mut self.items);
            return;
        }
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        for item in self.items.drain(..) {
            println!("{}", render(&item, self.width));
        }
    }

    /// All items seen so far, flushed or not.
    pub fn seen(&self) -> impl Iterator<Item = &ViewItem> {
        self.transcript.iter().chain(self.items.iter())
    }
}

/// Styled text for a single item.
fn render(item: &ViewItem, width: usize) -> String {
    match item {
        ViewItem::Banner { title, intro } => {
            let rule = "=".repeat(title.len() + 8);
            let mut out = format!("{rule}\n    {}\n{rule}\n", title.title_style());
            if !intro.is_empty() {
                out.push_str(&format!("\n{}\n", fill(intro, normal_block(width)).description_style()));
            }
            out
        },
        ViewItem::CharacterSheet { sheet, ability } => {
            format!("\nYour character:\n{}\nAbility: {}", sheet.hero_style(), ability.class_style())
        },
        ViewItem::WorldOverview { heading, regions } => {
            let mut out = String::from("\n");
            if !heading.is_empty() {
                out.push_str(&format!("{}\n\n", fill(heading, normal_block(width)).description_style()));
            }
            out.push_str(&regions.region_style().to_string());
            out
        },
        ViewItem::Menu { title, options } => {
            let mut out = format!("\n{}", title.menu_style());
            for (i, option) in options.iter().enumerate() {
                out.push_str(&format!("\n{}) {option}", i + 1));
            }
            out
        },
        ViewItem::RegionEntered(text) => format!("\n{}", fill(text, normal_block(width)).region_style()),
        ViewItem::Narration(text) => format!("{:<4}{}", ICON_EVENT.yellow(), text.narration_style()),
        ViewItem::ItemFound(name) => format!("{:<4}You gained: {}", ICON_ITEM.green(), name.item_style()),
        ViewItem::CharacterHarmed {
            cause,
            raw,
            absorbed,
            health,
            max,
        } => {
            let shield = if *absorbed > 0 {
                format!(" (your shield absorbs {absorbed})")
            } else {
                String::new()
            };
            fill(
                &format!(
                    "{:<4}{} deals {} damage{shield}. Health: {health}/{max}",
                    ICON_HARMED.bright_yellow(),
                    cause.underline(),
                    raw.to_string().damage_style()
                ),
                normal_block(width),
            )
        },
        ViewItem::CharacterHealed {
            cause,
            amount,
            health,
            max,
        } => format!(
            "{:<4}{} restores {} health. Health: {health}/{max}",
            ICON_HEALED.bright_blue(),
            cause.underline(),
            amount.to_string().heal_style()
        ),
        ViewItem::Inventory(items) => {
            let mut out = format!("\n{}", "Inventory".section_style());
            if items.is_empty() {
                out.push_str("\n(empty)");
            }
            for item in items {
                out.push_str(&format!("\n - {}", item.item_style()));
            }
            out
        },
        ViewItem::BossStatus {
            boss_health,
            health,
            max,
        } => format!(
            "\n{} {} | {} {health}/{max}",
            "Boss health:".enemy_style(),
            boss_health,
            "Your health:".hero_style()
        ),
        ViewItem::BossHit { amount, boss_health } => format!(
            "{:<4}You strike for {} damage! The boss has {boss_health} health left.",
            ICON_STRIKE.bright_white(),
            amount.to_string().damage_style()
        ),
        ViewItem::Error(msg) => format!("{:<4}{}", ICON_ERROR.red(), msg.error_style()),
        ViewItem::EngineMessage(msg) => format!("{:<4}{}", ICON_ENGINE.dimmed(), msg.italic()),
        ViewItem::Death(text) => format!("\n{:<4}{}", ICON_DEATH.red(), fill(text, normal_block(width)).damage_style()),
        ViewItem::Victory(text) => format!(
            "\n{:<4}{}",
            ICON_CELEBRATE,
            fill(text, normal_block(width)).narration_style()
        ),
        ViewItem::JourneySummary {
            outcome,
            turns,
            explored,
            total_regions,
            damage_taken,
            inventory,
        } => {
            let carried = if inventory.is_empty() {
                "nothing".to_string()
            } else {
                inventory.join(", ")
            };
            format!(
                "\n{:^banner$}\n{:10} {}\n{:10} {turns}\n{:10} {explored}/{total_regions}\n{:10} {damage_taken}\n{}",
                "JOURNEY'S END".black().on_yellow(),
                "Outcome:",
                outcome.label().bright_cyan(),
                "Turns:",
                "Explored:",
                "Wounds:",
                fill(&format!("Carried: {carried}"), indented_block(width)),
                banner = width.min(60)
            )
        },
        ViewItem::Farewell(text) => format!("\n{}", text.bold()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(item: &ViewItem) -> String {
        render(item, 80)
    }

    #[test]
    fn recording_view_keeps_flushed_items() {
        let mut view = View::recording();
        view.push(ViewItem::Narration("hello".into()));
        view.flush();
        view.push(ViewItem::Error("oops".into()));
        assert_eq!(view.transcript.len(), 1);
        assert_eq!(view.seen().count(), 2);
        view.flush();
        assert!(view.items.is_empty());
        assert!(view.transcript[1].is_error());
    }

    #[test]
    fn menu_renders_numbered_options() {
        colored::control::set_override(false);
        let text = rendered(&ViewItem::Menu {
            title: "Pick".into(),
            options: vec!["One".into(), "Two".into()],
        });
        assert!(text.contains("1) One"));
        assert!(text.contains("2) Two"));
    }

    #[test]
    fn harmed_message_mentions_shield_only_when_absorbed() {
        colored::control::set_override(false);
        let with_shield = rendered(&ViewItem::CharacterHarmed {
            cause: "Raiders".into(),
            raw: 10,
            absorbed: 3,
            health: 33,
            max: 40,
        });
        assert!(with_shield.contains("absorbs 3"));
        let without = rendered(&ViewItem::CharacterHarmed {
            cause: "Raiders".into(),
            raw: 10,
            absorbed: 0,
            health: 30,
            max: 40,
        });
        assert!(!without.contains("absorbs"));
        assert!(without.contains("30/40"));
    }

    #[test]
    fn empty_inventory_says_so() {
        colored::control::set_override(false);
        assert!(rendered(&ViewItem::Inventory(Vec::new())).contains("(empty)"));
    }

    #[test]
    fn paragraphs_wrap_to_view_width() {
        colored::control::set_override(false);
        let text = "Twisted trees that seem to murmur ancient secrets to the wind.";
        let out = render(&ViewItem::RegionEntered(text.into()), 20);
        assert!(out.lines().count() > 3);
        assert!(out.lines().all(|line| line.chars().count() <= 20));
    }
}
