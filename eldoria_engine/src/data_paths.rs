//! Where `world.ron` is looked for.
//!
//! The first existing directory wins, in this order:
//! 1. `$ELDORIA_DATA_DIR`
//! 2. `eldoria_engine/data`, then `data`, relative to the working directory
//! 3. the same two paths next to the executable, then one level above it
//!
//! If none exists the loader falls back to the world compiled into the binary.
use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_VAR: &str = "ELDORIA_DATA_DIR";

const LAYOUTS: [&str; 2] = ["eldoria_engine/data", "data"];

static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

fn detect_data_root() -> PathBuf {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    candidate_roots(env::var_os(DATA_DIR_VAR).map(PathBuf::from), exe_dir.as_deref())
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from(LAYOUTS[0]))
}

/// Candidate data directories, most specific first.
fn candidate_roots(override_dir: Option<PathBuf>, exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = override_dir.into_iter().collect();
    candidates.extend(LAYOUTS.iter().map(PathBuf::from));
    if let Some(dir) = exe_dir {
        candidates.extend(LAYOUTS.iter().map(|layout| dir.join(layout)));
        if let Some(parent) = dir.parent() {
            candidates.extend(LAYOUTS.iter().map(|layout| parent.join(layout)));
        }
    }
    candidates
}
