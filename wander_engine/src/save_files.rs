//! Save-game discovery and serialization helpers.
//!
//! Worlds are stored as pretty-printed JSON, one file per named slot inside the
//! configured save directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::{WANDER_VERSION, WanderWorld};

pub const SAVE_EXTENSION: &str = "json";
pub const DEFAULT_SLOT: &str = "savegame";

/// What a save slot holds, read without attaching it to a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    pub player_name: String,
    pub health: u32,
    pub gold: u32,
    pub move_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveFileStatus {
    Ready,
    VersionMismatch { save_version: String },
    Corrupted { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFileEntry {
    pub slot: String,
    pub path: PathBuf,
    pub summary: Option<SaveSummary>,
    pub status: SaveFileStatus,
}

/// Normalize a player-supplied slot name to lowercase alphanumerics separated by single dashes.
pub fn sanitize_slot(raw: &str) -> String {
    let slot = raw
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slot.is_empty() { DEFAULT_SLOT.to_string() } else { slot }
}

/// Path of the file for `slot` inside `dir`.
pub fn slot_path(dir: &Path, slot: &str) -> PathBuf {
    dir.join(format!("{}.{SAVE_EXTENSION}", sanitize_slot(slot)))
}

/// Write `world` to the file for `slot`, creating the save directory if needed.
///
/// # Errors
/// - if the world can't be serialized, the directory can't be created, or the file can't be written
pub fn save_world(world: &WanderWorld, dir: &Path, slot: &str) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(world).context("serializing world to JSON")?;
    fs::create_dir_all(dir).with_context(|| format!("creating save folder '{}'", dir.display()))?;
    let path = slot_path(dir, slot);
    fs::write(&path, json).with_context(|| format!("writing save file '{}'", path.display()))?;
    info!("saved world to '{}'", path.display());
    Ok(path)
}

/// Read a saved world. A missing file is `Ok(None)`.
///
/// The returned world has no grid attached yet; see [`WanderWorld::attach_grid`].
///
/// # Errors
/// - if the file exists but can't be read or parsed
pub fn load_world(path: &Path) -> Result<Option<WanderWorld>> {
    if !path.exists() {
        info!("no save file at '{}'", path.display());
        return Ok(None);
    }
    let raw = fs::read_to_string(path).with_context(|| format!("reading save file '{}'", path.display()))?;
    let world: WanderWorld =
        serde_json::from_str(&raw).with_context(|| format!("parsing save file '{}'", path.display()))?;
    if world.version != WANDER_VERSION {
        warn!(
            "save '{}' was written by v{}, current version is v{WANDER_VERSION}",
            path.display(),
            world.version
        );
    }
    info!("loaded world from '{}'", path.display());
    Ok(Some(world))
}

/// Describe every save slot in `dir`, sorted by slot name. Non-JSON files are ignored.
///
/// # Errors
/// - if the directory exists but can't be enumerated
pub fn collect_save_slots(dir: &Path) -> Result<Vec<SaveFileEntry>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let entry = entry.with_context(|| format!("enumerating {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some(SAVE_EXTENSION) {
            continue;
        }
        let Some(slot) = path.file_stem().and_then(|stem| stem.to_str()).map(str::to_string) else {
            continue;
        };
        entries.push(describe_slot(slot, path));
    }
    entries.sort_by(|a, b| a.slot.cmp(&b.slot));
    Ok(entries)
}

fn describe_slot(slot: String, path: PathBuf) -> SaveFileEntry {
    let parsed = fs::read_to_string(&path)
        .map_err(|err| format!("read error: {err}"))
        .and_then(|raw| serde_json::from_str::<WanderWorld>(&raw).map_err(|err| format!("parse error: {err}")));
    let (summary, status) = match parsed {
        Ok(world) => {
            let status = if world.version == WANDER_VERSION {
                SaveFileStatus::Ready
            } else {
                SaveFileStatus::VersionMismatch {
                    save_version: world.version.clone(),
                }
            };
            let summary = SaveSummary {
                player_name: world.player.name,
                health: world.player.health,
                gold: world.player.gold,
                move_count: world.player.move_count,
            };
            (Some(summary), status)
        },
        Err(message) => {
            warn!("save slot '{slot}' ({}) is unusable: {message}", path.display());
            (None, SaveFileStatus::Corrupted { message })
        },
    };
    SaveFileEntry {
        slot,
        path,
        summary,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::tempdir;

    fn sample_world() -> WanderWorld {
        let mut rng = StdRng::seed_from_u64(77);
        let mut world = WanderWorld::from_config(&GameConfig::default(), "Tester", &mut rng).unwrap();
        world.player.gold = 42;
        world.player.move_count = 9;
        world
    }

    #[test]
    fn sanitize_slot_normalizes_names() {
        assert_eq!(sanitize_slot("My Save!"), "my-save");
        assert_eq!(sanitize_slot("  ../etc/passwd "), "etc-passwd");
        assert_eq!(sanitize_slot("???"), DEFAULT_SLOT);
    }

    #[test]
    fn save_then_load_round_trips() -> Result<()> {
        let dir = tempdir()?;
        let world = sample_world();
        let path = save_world(&world, dir.path(), "Slot One")?;
        assert_eq!(path, dir.path().join("slot-one.json"));

        let loaded = load_world(&path)?.expect("save file should exist");
        assert_eq!(loaded.player, world.player);
        assert_eq!(loaded.inventory, world.inventory);
        assert_eq!(loaded.roster, world.roster);
        assert_eq!(loaded.mode, world.mode);
        Ok(())
    }

    #[test]
    fn load_missing_file_is_none() -> Result<()> {
        let dir = tempdir()?;
        assert!(load_world(&dir.path().join("nothing.json"))?.is_none());
        Ok(())
    }

    #[test]
    fn load_sparse_file_fills_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("old.json");
        fs::write(&path, r#"{"player": {"health": 12}}"#)?;
        let loaded = load_world(&path)?.expect("save file should exist");
        assert_eq!(loaded.player.health, 12);
        assert_eq!(loaded.player.gold, 15);
        assert_eq!(loaded.inventory.len(), 3);
        assert!(loaded.roster.is_empty());
        Ok(())
    }

    #[test]
    fn collect_save_slots_reports_status_variants() -> Result<()> {
        let dir = tempdir()?;
        let world = sample_world();
        save_world(&world, dir.path(), "alpha")?;

        let mut old = world.clone();
        old.version = "0.0.1".into();
        save_world(&old, dir.path(), "beta")?;

        fs::write(dir.path().join("gamma.json"), "not json at all")?;
        fs::write(dir.path().join("notes.txt"), "ignore me")?;

        let entries = collect_save_slots(dir.path())?;
        let slots: Vec<_> = entries.iter().map(|e| e.slot.as_str()).collect();
        assert_eq!(slots, vec!["alpha", "beta", "gamma"]);

        assert_eq!(entries[0].status, SaveFileStatus::Ready);
        assert_eq!(entries[0].summary.as_ref().map(|s| s.gold), Some(42));
        assert!(matches!(entries[1].status, SaveFileStatus::VersionMismatch { .. }));
        assert!(matches!(entries[2].status, SaveFileStatus::Corrupted { .. }));
        assert!(entries[2].summary.is_none());
        Ok(())
    }

    #[test]
    fn collect_save_slots_handles_missing_directory() -> Result<()> {
        let dir = tempdir()?;
        assert!(collect_save_slots(&dir.path().join("missing"))?.is_empty());
        Ok(())
    }
}
