//! Narration spinners.
//!
//! Random flavor lines keyed by [`SpinnerType`]. Every type has built-in
//! lines; the content file may replace them.
use std::collections::HashMap;

use gametools::spinners::{Spinner, Wedge};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpinnerType {
    AmbushOpener,
    BossTaunt,
    DialogueRebuff,
    QuitMsg,
    RestScene,
}
impl SpinnerType {
    pub const ALL: [SpinnerType; 5] = [
        SpinnerType::AmbushOpener,
        SpinnerType::BossTaunt,
        SpinnerType::DialogueRebuff,
        SpinnerType::QuitMsg,
        SpinnerType::RestScene,
    ];

    /// Key used for this spinner in content files.
    pub fn key(self) -> &'static str {
        match self {
            SpinnerType::AmbushOpener => "ambushOpener",
            SpinnerType::BossTaunt => "bossTaunt",
            SpinnerType::DialogueRebuff => "dialogueRebuff",
            SpinnerType::QuitMsg => "quitMsg",
            SpinnerType::RestScene => "restScene",
        }
    }

    pub fn from_key(key: &str) -> Option<SpinnerType> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    fn default_lines(self) -> &'static [&'static str] {
        match self {
            SpinnerType::AmbushOpener => &[
                "A band of raiders springs from the ruins!",
                "Cultists in ash-grey robes block the path!",
                "Arrows hiss out of the undergrowth!",
            ],
            SpinnerType::BossTaunt => &[
                "\"Your light gutters, little hero.\"",
                "\"The Hollow Flame consumes all.\"",
            ],
            SpinnerType::DialogueRebuff => &[
                "You try to reason with him, but his fanaticism is unshakable.",
                "He laughs at your words as if they were kindling.",
            ],
            SpinnerType::QuitMsg => &[
                "You abandon the quest. The cult advances unopposed...",
                "You turn your back on Eldoria. Somewhere, a bell tolls.",
            ],
            SpinnerType::RestScene => &[
                "You find a relatively safe spot and rest for a while.",
                "You rest beside a low fire, listening to the wind.",
            ],
        }
    }
}

/// Build a spinner from a list of lines. Returns `None` if no line is usable.
pub fn spinner_from_lines<S: AsRef<str>>(lines: &[S]) -> Option<Spinner<String>> {
    let wedges = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.trim().is_empty())
        .map(|line| Wedge::new(line.to_string()))
        .collect::<Vec<_>>();
    if wedges.is_empty() { None } else { Some(Spinner::new(wedges)) }
}

/// The built-in spinner for every `SpinnerType`.
pub fn default_spinners() -> HashMap<SpinnerType, Spinner<String>> {
    SpinnerType::ALL
        .into_iter()
        .filter_map(|t| spinner_from_lines(t.default_lines()).map(|s| (t, s)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for t in SpinnerType::ALL {
            assert_eq!(SpinnerType::from_key(t.key()), Some(t));
        }
        assert_eq!(SpinnerType::from_key("nope"), None);
    }

    #[test]
    fn every_type_has_a_default() {
        let spinners = default_spinners();
        assert_eq!(spinners.len(), SpinnerType::ALL.len());
        assert!(spinners[&SpinnerType::QuitMsg].spin().is_some());
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert!(spinner_from_lines(&["", "  "]).is_none());
        let spinner = spinner_from_lines(&["", "only"]).expect("one usable line");
        assert_eq!(spinner.spin().as_deref(), Some("only"));
    }
}
