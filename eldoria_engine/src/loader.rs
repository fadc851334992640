//! Loader utilities for building an [`EldoriaWorld`] from content data.
//!
//! Content is a `WorldDef` serialized as RON. The copy in the data directory
//! wins; if there is none, the copy compiled into the binary is used.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use eldoria_data::WorldDef;
use log::{info, warn};

use crate::data_paths::data_path;
use crate::region::Region;
use crate::spinners::{SpinnerType, default_spinners, spinner_from_lines};
use crate::world::{EldoriaWorld, WorldMap};

/// Content shipped with the binary.
pub const BUILTIN_WORLD: &str = include_str!("../data/world.ron");

/// Load the `EldoriaWorld` from the data directory, or the built-in content.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or content validation.
pub fn load_world() -> Result<EldoriaWorld> {
    let world_ron_path = data_path("world.ron");
    let def = if world_ron_path.is_file() {
        load_worlddef(&world_ron_path).context("while loading worlddef from file")?
    } else {
        info!(
            "no world file at '{}', using built-in content",
            world_ron_path.display()
        );
        parse_worlddef(BUILTIN_WORLD).context("while parsing built-in worlddef")?
    };
    build_world_from_def(&def)
}

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - if the file can't be read or parsed
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    parse_worlddef(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))
}

/// Parse a `WorldDef` from RON text.
///
/// # Errors
/// - on malformed RON or a shape that doesn't match `WorldDef`
pub fn parse_worlddef(text: &str) -> Result<WorldDef> {
    Ok(ron::from_str(text)?)
}

/// Validate a `WorldDef` and convert it into a runtime `EldoriaWorld`.
///
/// # Errors
/// - if validation finds any problem (all problems are listed in one error)
pub fn build_world_from_def(def: &WorldDef) -> Result<EldoriaWorld> {
    validate_worlddef(def)?;

    let mut map = WorldMap::new();
    for region_def in &def.regions {
        map.add_region(Region::from(region_def));
    }
    info!("{} regions added to the world map", map.region_count());

    let mut spinners = default_spinners();
    for spinner_def in &def.spinners {
        let Some(spinner_type) = SpinnerType::from_key(&spinner_def.id) else {
            warn!("unknown spinner '{}' in content, skipping", spinner_def.id);
            continue;
        };
        if let Some(spinner) = spinner_from_lines(spinner_def.values.as_slice()) {
            info!(
                "overriding spinner '{}' with {} lines from content",
                spinner_def.id,
                spinner_def.values.len()
            );
            spinners.insert(spinner_type, spinner);
        }
    }

    Ok(EldoriaWorld {
        game: def.game.clone(),
        map,
        balance: def.balance.clone(),
        spinners,
    })
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = eldoria_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_world_loads_with_three_regions() {
        let def = parse_worlddef(BUILTIN_WORLD).expect("built-in content parses");
        let world = build_world_from_def(&def).expect("built-in content is valid");
        assert_eq!(world.map.region_count(), 3);
        assert_eq!(world.map.regions().iter().filter(|r| r.has_boss()).count(), 1);
        assert!(world.map.region(2).expect("third region").has_boss());
        assert_eq!(world.balance, eldoria_data::BalanceDef::default());
    }

    #[test]
    fn load_worlddef_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"(
                game: (title: "Tiny"),
                regions: [
                    (name: "Hut", desc: "Cozy."),
                    (name: "Well", desc: "Deep."),
                    (name: "Cave", desc: "Damp.", has_boss: true),
                ],
                balance: (boss_health: 20),
            )"#
        )
        .expect("write temp file");
        let def = load_worlddef(file.path()).expect("loads");
        let world = build_world_from_def(&def).expect("valid");
        assert_eq!(world.game.title, "Tiny");
        assert_eq!(world.balance.boss_health, 20);
        assert_eq!(world.balance.max_health, 40);
        assert_eq!(world.map.region_count(), 3);
    }

    #[test]
    fn invalid_content_lists_every_problem() {
        let def = parse_worlddef(r#"(game: (title: ""), regions: [])"#).expect("parses");
        let err = build_world_from_def(&def).unwrap_err().to_string();
        assert!(err.contains("title missing"));
        assert!(err.contains("no regions"));
    }

    #[test]
    fn low_health_ceiling_is_rejected() {
        let def = parse_worlddef(
            r#"(
                game: (title: "T"),
                regions: [
                    (name: "Hut", desc: "x"),
                    (name: "Well", desc: "x"),
                    (name: "Keep", desc: "x", has_boss: true),
                ],
                balance: (max_health: 30),
            )"#,
        )
        .expect("parses");
        let err = build_world_from_def(&def).unwrap_err().to_string();
        assert!(err.contains("max_health must be at least 40"));
    }

    #[test]
    fn content_spinners_override_defaults() {
        let def = parse_worlddef(
            r#"(
                game: (title: "T"),
                regions: [
                    (name: "Hut", desc: "x"),
                    (name: "Well", desc: "x"),
                    (name: "Keep", desc: "x", has_boss: true),
                ],
                spinners: [
                    (id: "quitMsg", values: ["Only this."]),
                    (id: "unknownThing", values: ["ignored"]),
                ],
            )"#,
        )
        .expect("parses");
        let world = build_world_from_def(&def).expect("valid");
        assert_eq!(world.spin(SpinnerType::QuitMsg, "default"), "Only this.");
    }
}
