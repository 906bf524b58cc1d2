//! `repl::system` module
//!
//! Handlers for status, saving, loading and quitting.

use std::path::Path;

use log::{error, info, warn};
use rand::Rng;

use crate::config::GameConfig;
use crate::repl::ReplControl;
use crate::save_files::{collect_save_slots, load_world, sanitize_slot, save_world, slot_path};
use crate::view::{View, ViewItem};
use crate::world::WanderWorld;

/// Show health, gold and progress.
pub fn status_handler(world: &WanderWorld, view: &mut View) {
    view.push(ViewItem::Status {
        health: world.player.health,
        max_health: world.player.max_health,
        gold: world.player.gold,
        moves: world.player.move_count,
        in_town: world.player_in_town(),
    });
}

/// Quit the game.
pub fn quit_handler(world: &WanderWorld, view: &mut View) -> ReplControl {
    info!(
        "{} quit with {} gold and {} hp after {} moves",
        world.player.name, world.player.gold, world.player.health, world.player.move_count
    );
    info!("ending inventory:");
    world
        .inventory
        .items
        .iter()
        .for_each(|item| info!("- {} ({})", item.name, item.kind));
    view.push(ViewItem::QuitSummary {
        name: world.player.name.clone(),
        gold: world.player.gold,
        moves: world.player.move_count,
    });
    ReplControl::Quit
}

/// Save the game to `slot`. Failures are reported to the player rather than ending the game.
pub fn save_handler(world: &WanderWorld, view: &mut View, save_dir: &Path, slot: &str) {
    match save_world(world, save_dir, slot) {
        Ok(path) => {
            info!("player saved game to '{}'", path.display());
            view.push(ViewItem::Saved(sanitize_slot(slot)));
        },
        Err(err) => {
            error!("saving to slot '{slot}' failed: {err:#}");
            view.push(ViewItem::Error(format!("Unable to save the game: {err}")));
        },
    }
}

/// Replace the running world with the one saved in `slot`, fitted to the configured grid.
pub fn load_handler<R: Rng + ?Sized>(
    world: &mut WanderWorld,
    view: &mut View,
    config: &GameConfig,
    rng: &mut R,
    slot: &str,
) {
    let grid = match config.grid() {
        Ok(grid) => grid,
        Err(err) => {
            error!("cannot load: configured grid is invalid: {err}");
            view.push(ViewItem::Error(format!("Unable to load: {err}")));
            return;
        },
    };
    let path = slot_path(&config.save_dir, slot);
    match load_world(&path) {
        Ok(Some(mut loaded)) => {
            loaded.attach_grid(grid, rng);
            *world = loaded;
            info!("player reloaded world from '{}'", path.display());
            view.push(ViewItem::Loaded(sanitize_slot(slot)));
        },
        Ok(None) => view.push(ViewItem::Error(format!(
            "Unable to find the {} save file. Load aborted.",
            sanitize_slot(slot)
        ))),
        Err(err) => {
            warn!("player attempted to load '{}': {err:#}", path.display());
            view.push(ViewItem::Error(format!(
                "Unable to load the {} save file. It may be damaged.",
                sanitize_slot(slot)
            )));
        },
    }
}

/// List saved games.
pub fn list_saves_handler(view: &mut View, save_dir: &Path) {
    match collect_save_slots(save_dir) {
        Ok(entries) => view.push(ViewItem::SaveList(entries)),
        Err(err) => {
            warn!("listing saves in '{}' failed: {err:#}", save_dir.display());
            view.push(ViewItem::Error("Unable to read the save folder.".into()));
        },
    }
}
