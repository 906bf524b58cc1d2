#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const WANDER_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod combat;
pub mod command;
pub mod config;
pub mod data_paths;
pub mod grid;
pub mod inventory;
pub mod madlib;
pub mod monster;
pub mod player;
pub mod repl;
pub mod roster;
pub mod save_files;
pub mod shop;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use config::GameConfig;
pub use grid::{Grid, GridPos};
pub use monster::Monster;
pub use player::Player;
pub use repl::run_repl;
pub use roster::Roster;
pub use view::{View, ViewItem};
pub use world::WanderWorld;
