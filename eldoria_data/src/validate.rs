use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed content in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} '{id}'")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate basic invariants in a `WorldDef`, collecting every problem found.
///
/// ```
/// use eldoria_data::{GameDef, RegionDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         ..GameDef::default()
///     },
///     regions: vec![
///         RegionDef {
///             name: "Village".into(),
///             desc: "Quiet.".into(),
///             has_boss: false,
///         },
///         RegionDef {
///             name: "Grove".into(),
///             desc: "Whispering.".into(),
///             has_boss: false,
///         },
///         RegionDef {
///             name: "Keep".into(),
///             desc: "Not quiet.".into(),
///             has_boss: true,
///         },
///     ],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if world.game.title.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game title missing".to_string(),
        });
    }

    validate_regions(&world.regions, &mut errors);
    validate_balance(&world.balance, &mut errors);

    let mut spinner_ids = HashSet::new();
    for spinner in &world.spinners {
        if !spinner_ids.insert(spinner.id.as_str()) {
            errors.push(ValidationError::DuplicateId {
                kind: "spinner",
                id: spinner.id.clone(),
            });
        }
        if spinner.values.iter().all(|v| v.trim().is_empty()) {
            errors.push(ValidationError::InvalidValue {
                context: format!("spinner '{}' has no lines", spinner.id),
            });
        }
    }

    errors
}

fn validate_regions(regions: &[RegionDef], errors: &mut Vec<ValidationError>) {
    if regions.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "world has no regions".to_string(),
        });
        return;
    }
    if regions.len() != REGION_COUNT {
        errors.push(ValidationError::InvalidValue {
            context: format!("expected {REGION_COUNT} regions, found {}", regions.len()),
        });
    }

    let mut names = HashSet::new();
    for (idx, region) in regions.iter().enumerate() {
        if region.name.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("region #{} has no name", idx + 1),
            });
        } else if !names.insert(region.name.as_str()) {
            errors.push(ValidationError::DuplicateId {
                kind: "region",
                id: region.name.clone(),
            });
        }
    }

    let bosses = regions.iter().filter(|r| r.has_boss).count();
    if bosses != 1 {
        errors.push(ValidationError::InvalidValue {
            context: format!("expected exactly one boss region, found {bosses}"),
        });
    }
}

fn validate_balance(balance: &BalanceDef, errors: &mut Vec<ValidationError>) {
    if balance.max_health < MIN_MAX_HEALTH {
        errors.push(ValidationError::InvalidValue {
            context: format!(
                "balance max_health must be at least {MIN_MAX_HEALTH}, found {}",
                balance.max_health
            ),
        });
    }
    if balance.boss_health == 0 {
        errors.push(ValidationError::InvalidValue {
            context: "balance boss_health must be positive".to_string(),
        });
    }

    let ranges = [
        ("attack_bonus", balance.attack_bonus),
        ("ambush_damage", balance.ambush_damage),
        ("boss_counter", balance.boss_counter),
        ("dialogue_backlash", balance.dialogue_backlash),
    ];
    for (name, range) in ranges {
        if !range.is_well_formed() {
            errors.push(ValidationError::InvalidValue {
                context: format!("balance {name} range is empty ({}..={})", range.min, range.max),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(name: &str, has_boss: bool) -> RegionDef {
        RegionDef {
            name: name.into(),
            desc: "somewhere".into(),
            has_boss,
        }
    }

    fn valid_world() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Test".into(),
                ..GameDef::default()
            },
            regions: vec![region("a", false), region("b", false), region("keep", true)],
            ..WorldDef::default()
        }
    }

    #[test]
    fn valid_world_has_no_errors() {
        assert!(validate_world(&valid_world()).is_empty());
    }

    #[test]
    fn missing_regions_reported() {
        let mut world = valid_world();
        world.regions.clear();
        let errors = validate_world(&world);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("no regions"));
    }

    #[test]
    fn duplicate_region_names_reported() {
        let mut world = valid_world();
        world.regions.push(region("a", false));
        let errors = validate_world(&world);
        assert!(errors.contains(&ValidationError::DuplicateId {
            kind: "region",
            id: "a".into()
        }));
    }

    #[test]
    fn boss_count_must_be_exactly_one() {
        let mut world = valid_world();
        world.regions.push(region("c", true));
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| e.to_string().contains("found 2")));

        world.regions.retain(|r| !r.has_boss);
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| e.to_string().contains("found 0")));
    }

    #[test]
    fn region_count_is_fixed() {
        let mut world = valid_world();
        world.regions.remove(0);
        let errors = validate_world(&world);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("expected 3 regions, found 2"));

        world.regions.push(region("c", false));
        world.regions.push(region("d", false));
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| e.to_string().contains("found 4")));
    }

    #[test]
    fn health_ceiling_below_class_health_reported() {
        let mut world = valid_world();
        world.balance.max_health = 30;
        let errors = validate_world(&world);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("at least 40, found 30"));

        world.balance.max_health = 60;
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn inverted_ranges_and_zero_health_reported() {
        let mut world = valid_world();
        world.balance.ambush_damage = RangeDef::new(10, 5);
        world.balance.max_health = 0;
        let errors = validate_world(&world);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.to_string().contains("ambush_damage")));
        assert!(errors.iter().any(|e| e.to_string().contains("max_health")));
    }

    #[test]
    fn blank_title_and_empty_spinner_reported() {
        let mut world = valid_world();
        world.game.title = "  ".into();
        world.spinners.push(SpinnerDef {
            id: "ambush".into(),
            values: vec![String::new()],
        });
        let errors = validate_world(&world);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn default_balance_matches_reference_numbers() {
        let balance = BalanceDef::default();
        assert_eq!(balance.max_health, 40);
        assert_eq!(balance.boss_health, 45);
        assert_eq!(balance.potion_heal, 10);
        assert_eq!(balance.rest_heal, 5);
        assert_eq!(balance.boss_counter, RangeDef::new(7, 11));
        assert_eq!(balance.dialogue_backlash, RangeDef::new(8, 12));
    }
}
