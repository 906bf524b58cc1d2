//! Data structures representing a running game.
//!
//! [`WanderWorld`] owns everything a session mutates: the player, their inventory, the
//! monster roster and the fight in progress. The board itself comes from configuration
//! and is not saved with the world.

use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use variantly::Variantly;

use crate::WANDER_VERSION;
use crate::combat::Fight;
use crate::config::GameConfig;
use crate::grid::Grid;
use crate::inventory::Inventory;
use crate::monster::Monster;
use crate::player::Player;
use crate::roster::Roster;

/// What the player is currently doing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Variantly)]
pub enum GameMode {
    #[default]
    Exploring,
    Fighting(Fight),
}

/// Complete state of the running game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WanderWorld {
    #[serde(default)]
    pub version: String,
    #[serde(skip)]
    pub grid: Grid,
    #[serde(default)]
    pub player: Player,
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default, rename = "monsters")]
    pub roster: Roster,
    #[serde(default)]
    pub mode: GameMode,
}
impl WanderWorld {
    /// A new game on `grid`: the player starts in town with the starting kit and no monsters yet.
    pub fn new(grid: Grid, player: Player) -> WanderWorld {
        info!("new world created on a {0}x{0} grid", grid.size());
        Self {
            version: WANDER_VERSION.to_string(),
            grid,
            player,
            inventory: Inventory::starting_kit(),
            roster: Roster::new(),
            mode: GameMode::Exploring,
        }
    }

    /// A new game built from configuration, with the roster already filled.
    ///
    /// # Errors
    /// - if the configured grid is invalid
    pub fn from_config<R: Rng + ?Sized>(
        config: &GameConfig,
        player_name: &str,
        rng: &mut R,
    ) -> Result<WanderWorld, crate::grid::GridError> {
        let grid = config.grid()?;
        let player = Player::new(player_name, &grid, config.starting_health, config.starting_gold);
        let mut world = WanderWorld::new(grid, player);
        world.replenish(rng);
        Ok(world)
    }

    /// Put a freshly loaded world onto `grid`: discard monsters that can't stand there, bring
    /// the player back on the board, drop a fight whose monster is gone, and refill the roster.
    pub fn attach_grid<R: Rng + ?Sized>(&mut self, grid: Grid, rng: &mut R) {
        self.grid = grid;
        if !grid.contains(self.player.pos) {
            warn!("saved player position {} is off the board, returning to town", self.player.pos);
            self.player.pos = grid.town();
        }
        self.roster.retain_valid(&grid);
        if let GameMode::Fighting(fight) = self.mode
            && self.fight_target(fight).is_none()
        {
            warn!("saved fight refers to a missing monster, ending it");
            self.mode = GameMode::Exploring;
        }
        self.replenish(rng);
    }

    /// Fill the roster if it has no living monsters.
    pub fn replenish<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.roster.respawn_if_cleared(rng, &self.grid, self.player.pos)
    }

    pub fn player_in_town(&self) -> bool {
        self.player.in_town(&self.grid)
    }

    /// The living monster targeted by `fight`, if it is still on the roster.
    pub fn fight_target(&self, fight: Fight) -> Option<&Monster> {
        self.roster.get(fight.roster_index).filter(|m| m.alive)
    }
}
