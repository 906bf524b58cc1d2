//! Grid Module
//!
//! The board the adventure is played on: a square grid with a single town cell.
//! Monsters may stand anywhere on the board except the town; the player may go anywhere.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest board that still leaves room for two monsters beside the town and the player.
pub const MIN_GRID_SIZE: i32 = 2;
pub const MAX_GRID_SIZE: i32 = 64;

/// A grid coordinate. Serializes as a two-element array `[x, y]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos(pub i32, pub i32);
impl GridPos {
    pub fn x(self) -> i32 {
        self.0
    }

    pub fn y(self) -> i32 {
        self.1
    }

    /// The coordinate reached by adding a delta to this one.
    pub fn offset(self, dx: i32, dy: i32) -> GridPos {
        GridPos(self.0.saturating_add(dx), self.1.saturating_add(dy))
    }
}
impl Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        GridPos(x, y)
    }
}

/// The four unit directions a walker can take in one step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
}
impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::West, Direction::East];

    /// Unit delta for this direction. North is toward row zero.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    /// Parse a direction word or its single-letter abbreviation.
    pub fn parse(word: &str) -> Option<Direction> {
        match word.to_lowercase().as_str() {
            "n" | "north" | "up" => Some(Direction::North),
            "s" | "south" | "down" => Some(Direction::South),
            "w" | "west" | "left" => Some(Direction::West),
            "e" | "east" | "right" => Some(Direction::East),
            _ => None,
        }
    }
}
impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
            Direction::East => write!(f, "east"),
        }
    }
}

/// Reasons a board cannot be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size {0} is too small (minimum is {MIN_GRID_SIZE})")]
    TooSmall(i32),
    #[error("grid size {0} is too large (maximum is {MAX_GRID_SIZE})")]
    TooLarge(i32),
    #[error("town position {town} lies outside a {size}x{size} grid")]
    TownOutOfBounds { town: GridPos, size: i32 },
}

/// A square board of `size` x `size` cells with one fixed town cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    town: GridPos,
}
impl Default for Grid {
    fn default() -> Self {
        Self {
            size: 10,
            town: GridPos(0, 0),
        }
    }
}
impl Grid {
    /// Build a board, validating size and town placement.
    ///
    /// # Errors
    /// - if `size` is below [`MIN_GRID_SIZE`] or above [`MAX_GRID_SIZE`]
    /// - if `town` is not on the board
    pub fn new(size: i32, town: GridPos) -> Result<Grid, GridError> {
        if size < MIN_GRID_SIZE {
            return Err(GridError::TooSmall(size));
        }
        if size > MAX_GRID_SIZE {
            return Err(GridError::TooLarge(size));
        }
        let grid = Grid { size, town };
        if !grid.contains(town) {
            return Err(GridError::TownOutOfBounds { town, size });
        }
        Ok(grid)
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn town(&self) -> GridPos {
        self.town
    }

    /// True if `pos` lies on the board.
    pub fn contains(&self, pos: GridPos) -> bool {
        (0..self.size).contains(&pos.0) && (0..self.size).contains(&pos.1)
    }

    /// True if a monster may occupy `pos`: on the board and not the town.
    pub fn is_open(&self, pos: GridPos) -> bool {
        self.contains(pos) && pos != self.town
    }

    /// All cells a monster may occupy, in row-major order.
    pub fn open_cells(&self) -> Vec<GridPos> {
        (0..self.size)
            .flat_map(|y| (0..self.size).map(move |x| GridPos(x, y)))
            .filter(|pos| *pos != self.town)
            .collect()
    }
}
