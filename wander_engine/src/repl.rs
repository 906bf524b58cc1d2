//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules implement the
//! command handlers that manipulate the [`WanderWorld`]. Handlers push their output into a
//! [`View`] and never print directly.

pub mod combat;
pub mod input;
pub mod inventory;
pub mod movement;
pub mod system;
pub mod town;

pub use combat::*;
pub use inventory::*;
pub use movement::*;
pub use system::*;
pub use town::*;

use anyhow::Result;
use colored::Colorize;
use log::info;
use rand::Rng;

use crate::command::{Command, parse_command};
use crate::config::GameConfig;
use crate::save_files::DEFAULT_SLOT;
use crate::style::GameStyle;
use crate::view::{View, ViewItem};
use crate::world::WanderWorld;

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read–eval–print loop until the player quits or is defeated.
///
/// # Errors
/// - if the line editor can't be started
pub fn run_repl<R: Rng + ?Sized>(world: &mut WanderWorld, config: &GameConfig, rng: &mut R) -> Result<()> {
    let mut view = View::new();
    let mut input = InputManager::new(&config.save_dir)?;

    map_handler(world, &mut view);
    view.flush();

    let mut current_move = world.player.move_count;
    info!("================> BEGIN MOVE {current_move} <================");
    loop {
        let prompt = format!(
            "\n[HP: {}/{}|Gold: {}|Moves: {}]>> ",
            world.player.health, world.player.max_health, world.player.gold, world.player.move_count
        )
        .prompt_style()
        .to_string();

        let line = match input.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => "quit".to_string(),
            Ok(InputEvent::Interrupted) => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
            Err(err) => {
                view.push(ViewItem::Error(format!("Failed to read input ({err}). Try again.")));
                view.flush();
                continue;
            },
        };

        let command = parse_command(&line);
        let control = handle_command(world, &mut view, config, rng, &command);
        view.flush();
        if control == ReplControl::Quit {
            break;
        }

        if world.player.move_count > current_move {
            current_move = world.player.move_count;
            info!("================> BEGIN MOVE {current_move} <================");
        }
    }
    input.save_history();
    Ok(())
}

/// Dispatch a single parsed command against the world.
pub fn handle_command<R: Rng + ?Sized>(
    world: &mut WanderWorld,
    view: &mut View,
    config: &GameConfig,
    rng: &mut R,
    command: &Command,
) -> ReplControl {
    #[allow(clippy::enum_glob_use)]
    use Command::*;
    match command {
        Move(direction) => move_handler(world, view, rng, *direction),
        Map => map_handler(world, view),
        Status => status_handler(world, view),
        Attack => return attack_handler(world, view, rng),
        Flee => flee_handler(world, view),
        Throw => throw_handler(world, view, rng),
        Inventory => inv_handler(world, view),
        Equip { kind, choice } => equip_handler(world, view, *kind, *choice),
        Shop => shop_handler(world, view),
        Buy { choice, quantity } => buy_handler(world, view, *choice, *quantity),
        Rest => rest_handler(world, view),
        Save(slot) => save_handler(world, view, &config.save_dir, slot.as_deref().unwrap_or(DEFAULT_SLOT)),
        Load(slot) => load_handler(world, view, config, rng, slot.as_deref().unwrap_or(DEFAULT_SLOT)),
        ListSaves => list_saves_handler(view, &config.save_dir),
        Help => view.push(ViewItem::Help),
        Quit => return quit_handler(world, view),
        Unknown => view.push(ViewItem::Error(format!(
            "Didn't quite catch that? Type {} for commands.",
            "help".bold()
        ))),
    }
    ReplControl::Continue
}
