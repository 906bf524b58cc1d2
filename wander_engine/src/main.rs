#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Wander **
//! A small grid adventure with wandering monsters

use wander_engine::config::CONFIG_FILE;
use wander_engine::data_paths::data_path;
use wander_engine::player::DEFAULT_NAME;
use wander_engine::{GameConfig, View, ViewItem, WanderWorld, run_repl};

use anyhow::{Context, Result};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use std::fs;
use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading configuration...");
    let config_path = data_path(CONFIG_FILE);
    let config = GameConfig::load(&config_path)
        .with_context(|| format!("while loading config from '{}'", config_path.display()))?;

    let mut rng = match config.seed {
        Some(seed) => {
            info!("using fixed seed {seed}");
            StdRng::seed_from_u64(seed)
        },
        None => StdRng::from_os_rng(),
    };

    let Some(name) = ask_name()? else {
        info!("name prompt abandoned, leaving before the game starts");
        return Ok(());
    };
    let mut world = WanderWorld::from_config(&config, &name, &mut rng).context("while building the world")?;
    info!("world ready: {}x{} grid, town at {}", world.grid.size(), world.grid.size(), world.grid.town());

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("flushing stdout")?;
    info!("Starting the game!");

    let mut view = View::new();
    view.push(ViewItem::Welcome {
        name: world.player.name.clone(),
    });
    match fs::read_to_string(data_path("intro.txt")) {
        Ok(intro) => view.push(ViewItem::Intro(intro)),
        Err(err) => warn!("no introduction text available: {err}"),
    }
    view.flush();

    run_repl(&mut world, &config, &mut rng)
}

/// Ask for the hero's name. `None` if the player cancels or closes input at the prompt.
fn ask_name() -> Result<Option<String>> {
    let mut editor = DefaultEditor::new().context("starting line editor")?;
    name_from_reply(editor.readline("What is your name, adventurer? "))
}

/// Turn the name prompt's reply into a name. A blank answer keeps the default.
fn name_from_reply(reply: Result<String, ReadlineError>) -> Result<Option<String>> {
    match reply {
        Ok(answer) => {
            let trimmed = answer.trim();
            if trimmed.is_empty() {
                Ok(Some(DEFAULT_NAME.to_string()))
            } else {
                Ok(Some(trimmed.to_string()))
            }
        },
        Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
        Err(err) => Err(err).context("reading player name"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_keeps_default() {
        assert_eq!(name_from_reply(Ok("  Vela \n".into())).unwrap(), Some("Vela".to_string()));
        assert_eq!(name_from_reply(Ok("   ".into())).unwrap(), Some(DEFAULT_NAME.to_string()));
    }

    #[test]
    fn cancelled_prompt_starts_no_game() {
        assert_eq!(name_from_reply(Err(ReadlineError::Interrupted)).unwrap(), None);
        assert_eq!(name_from_reply(Err(ReadlineError::Eof)).unwrap(), None);
    }
}
