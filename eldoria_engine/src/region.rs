//! Region definitions.
//!
//! A region is a discrete place on the world map. One of them hosts the final boss.
use eldoria_data::RegionDef;

/// Suffix appended to the description of the region holding the boss.
pub const BOSS_OMEN: &str = "(A menacing presence lingers...)";

/// An explorable location. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    name: String,
    description: String,
    has_boss: bool,
}
impl Region {
    pub fn new(name: impl Into<String>, description: impl Into<String>, has_boss: bool) -> Region {
        Region {
            name: name.into(),
            description: description.into(),
            has_boss,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn has_boss(&self) -> bool {
        self.has_boss
    }

    /// Bracketed name followed by the description, with an omen if the boss waits here.
    pub fn describe(&self) -> String {
        if self.has_boss {
            format!("[{}] {} {BOSS_OMEN}", self.name, self.description)
        } else {
            format!("[{}] {}", self.name, self.description)
        }
    }
}

impl From<&RegionDef> for Region {
    fn from(def: &RegionDef) -> Self {
        Region::new(def.name.trim(), def.desc.trim(), def.has_boss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boss_region_description_carries_omen() {
        let keep = Region::new("Keep", "Dark walls.", true);
        assert_eq!(keep.describe(), format!("[Keep] Dark walls. {BOSS_OMEN}"));
        let glade = Region::new("Glade", "Birdsong.", false);
        assert_eq!(glade.describe(), "[Glade] Birdsong.");
    }

    #[test]
    fn built_from_def_trims_text() {
        let def = RegionDef {
            name: " Glade ".into(),
            desc: "Birdsong.\n".into(),
            has_boss: false,
        };
        let region = Region::from(&def);
        assert_eq!(region.name(), "Glade");
        assert_eq!(region.description(), "Birdsong.");
        assert!(!region.has_boss());
    }
}
