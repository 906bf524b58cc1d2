//! Player -- module for the adventurer walking the grid
use std::cmp;

use log::info;
use serde::{Deserialize, Serialize};

use crate::grid::{Direction, Grid, GridPos};

pub const DEFAULT_HEALTH: u32 = 30;
pub const DEFAULT_GOLD: u32 = 15;
pub const DEFAULT_NAME: &str = "Adventurer";

fn default_health() -> u32 {
    DEFAULT_HEALTH
}

fn default_gold() -> u32 {
    DEFAULT_GOLD
}

fn default_name() -> String {
    DEFAULT_NAME.into()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub pos: GridPos,
    #[serde(default = "default_health")]
    pub health: u32,
    #[serde(default = "default_health")]
    pub max_health: u32,
    #[serde(default = "default_gold")]
    pub gold: u32,
    /// Successful steps taken so far; monsters move on even counts.
    #[serde(default)]
    pub move_count: usize,
}
impl Default for Player {
    fn default() -> Player {
        Self {
            name: default_name(),
            pos: GridPos::default(),
            health: DEFAULT_HEALTH,
            max_health: DEFAULT_HEALTH,
            gold: DEFAULT_GOLD,
            move_count: 0,
        }
    }
}
impl Player {
    /// A fresh adventurer standing in town.
    pub fn new(name: &str, grid: &Grid, max_health: u32, gold: u32) -> Player {
        Self {
            name: name.to_string(),
            pos: grid.town(),
            health: max_health,
            max_health,
            gold,
            move_count: 0,
        }
    }

    /// Step one cell in `direction` if the target is on the board. Unlike monsters the
    /// player may walk into town. A successful step counts as a move.
    pub fn step(&mut self, direction: Direction, grid: &Grid) -> bool {
        let (dx, dy) = direction.delta();
        let target = self.pos.offset(dx, dy);
        if !grid.contains(target) {
            return false;
        }
        self.pos = target;
        self.move_count += 1;
        info!("{} moved {direction} to {target} (move {})", self.name, self.move_count);
        true
    }

    pub fn in_town(&self, grid: &Grid) -> bool {
        self.pos == grid.town()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Saturates at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Saturates at max health.
    pub fn heal(&mut self, amount: u32) {
        self.health = cmp::min(self.max_health, self.health.saturating_add(amount));
    }

    /// Restore full health.
    pub fn rest(&mut self) {
        self.health = self.max_health;
    }
}
