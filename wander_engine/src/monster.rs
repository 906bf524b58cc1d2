//! Monster Module
//!
//! Wandering monsters: their kinds, stat tables, randomized creation and movement rules.
//!
//! A [`Monster`] never stands outside the grid or on the town cell. Every randomized
//! operation takes the caller's random source so games can be replayed from a seed.

use std::collections::HashSet;
use std::fmt::Display;
use std::ops::RangeInclusive;

use log::{info, warn};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::grid::{Direction, Grid, GridPos};

/// The fixed set of monster kinds that roam the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Gnome,
    Imp,
    Troll,
}

/// Inclusive ranges a freshly spawned monster's stats are drawn from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatRanges {
    pub health: RangeInclusive<u32>,
    pub power: RangeInclusive<u32>,
    pub money: RangeInclusive<u32>,
}

impl MonsterKind {
    pub const ALL: [MonsterKind; 3] = [MonsterKind::Gnome, MonsterKind::Imp, MonsterKind::Troll];

    pub fn stat_ranges(self) -> StatRanges {
        match self {
            MonsterKind::Gnome => StatRanges {
                health: 20..=40,
                power: 5..=10,
                money: 10..=50,
            },
            MonsterKind::Imp => StatRanges {
                health: 10..=25,
                power: 8..=15,
                money: 20..=100,
            },
            MonsterKind::Troll => StatRanges {
                health: 30..=50,
                power: 10..=18,
                money: 30..=80,
            },
        }
    }

    /// Line shown when a fight with this kind begins.
    pub fn description(self) -> &'static str {
        match self {
            MonsterKind::Gnome => "A sly gnome dashes toward you!",
            MonsterKind::Imp => "A fiery imp laughs menacingly!",
            MonsterKind::Troll => "A hulking troll blocks your path, club raised!",
        }
    }

    /// Map glyph.
    pub fn glyph(self) -> char {
        match self {
            MonsterKind::Gnome => 'g',
            MonsterKind::Imp => 'i',
            MonsterKind::Troll => 't',
        }
    }

    /// RGB color used for the glyph and written into saved records.
    pub fn color(self) -> [u8; 3] {
        match self {
            MonsterKind::Gnome => [80, 200, 120],
            MonsterKind::Imp => [220, 60, 40],
            MonsterKind::Troll => [150, 110, 70],
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<MonsterKind> {
        MonsterKind::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(name.trim()))
    }
}
impl Display for MonsterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonsterKind::Gnome => write!(f, "Gnome"),
            MonsterKind::Imp => write!(f, "Imp"),
            MonsterKind::Troll => write!(f, "Troll"),
        }
    }
}

/// A monster wandering the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MonsterRecord", into = "MonsterRecord")]
pub struct Monster {
    pub name: String,
    pub kind: MonsterKind,
    pub pos: GridPos,
    pub health: u32,
    pub power: u32,
    pub money: u32,
    pub alive: bool,
}
impl Monster {
    /// Create a monster of a uniformly chosen kind with stats drawn from that kind's ranges,
    /// placed uniformly among the open cells not listed in `avoid`.
    ///
    /// Returns `None` only when every open cell is excluded.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: &Grid, avoid: &HashSet<GridPos>) -> Option<Monster> {
        let kind = *MonsterKind::ALL.choose(rng)?;
        let ranges = kind.stat_ranges();
        let health = rng.random_range(ranges.health);
        let power = rng.random_range(ranges.power);
        let money = rng.random_range(ranges.money);

        let free_cells: Vec<GridPos> = grid
            .open_cells()
            .into_iter()
            .filter(|pos| !avoid.contains(pos))
            .collect();
        let Some(pos) = free_cells.choose(rng).copied() else {
            warn!("no free cell left on a {0}x{0} grid for a new {kind}", grid.size());
            return None;
        };

        info!("spawned {kind} at {pos} (hp {health}, power {power}, money {money})");
        Some(Monster {
            name: kind.to_string(),
            kind,
            pos,
            health,
            power,
            money,
            alive: true,
        })
    }

    /// Try to move by `(dx, dy)`. The move happens only if the target cell is on the grid
    /// and is not the town; otherwise nothing changes and `false` is returned.
    pub fn step_by(&mut self, dx: i32, dy: i32, grid: &Grid) -> bool {
        if !self.alive {
            return false;
        }
        let target = self.pos.offset(dx, dy);
        if grid.is_open(target) {
            self.pos = target;
            true
        } else {
            false
        }
    }

    /// Try a single step in `direction`.
    pub fn step(&mut self, direction: Direction, grid: &Grid) -> bool {
        let (dx, dy) = direction.delta();
        self.step_by(dx, dy, grid)
    }

    /// Try the four directions in random order and take the first valid step.
    /// Stays put and returns `false` if every direction is blocked.
    pub fn wander<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: &Grid) -> bool {
        if !self.alive {
            return false;
        }
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        directions.into_iter().any(|dir| self.step(dir, grid))
    }

    /// Apply combat damage. Health saturates at zero, at which point the monster is defeated.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.alive = false;
        }
    }

    /// Mark the monster defeated outright.
    pub fn defeat(&mut self) {
        self.health = 0;
        self.alive = false;
    }
}

const DEFAULT_HEALTH: u32 = 20;
const DEFAULT_POWER: u32 = 5;
const DEFAULT_MONEY: u32 = 10;

fn default_mtype() -> String {
    MonsterKind::Gnome.to_string()
}
fn default_health() -> u32 {
    DEFAULT_HEALTH
}
fn default_power() -> u32 {
    DEFAULT_POWER
}
fn default_money() -> u32 {
    DEFAULT_MONEY
}
fn default_alive() -> bool {
    true
}

/// Plain field mapping of a [`Monster`] as written to save files.
///
/// Missing fields fall back to defaults when read back. `color` is derived from the
/// kind and only written for the benefit of outside renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_mtype")]
    pub mtype: String,
    #[serde(default)]
    pub pos: GridPos,
    #[serde(default = "default_health")]
    pub health: u32,
    #[serde(default = "default_power")]
    pub power: u32,
    #[serde(default = "default_money")]
    pub money: u32,
    #[serde(default = "default_alive")]
    pub alive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<[u8; 3]>,
}
impl From<Monster> for MonsterRecord {
    fn from(monster: Monster) -> Self {
        Self {
            name: Some(monster.name),
            mtype: monster.kind.to_string(),
            pos: monster.pos,
            health: monster.health,
            power: monster.power,
            money: monster.money,
            alive: monster.alive,
            color: Some(monster.kind.color()),
        }
    }
}
impl From<MonsterRecord> for Monster {
    fn from(record: MonsterRecord) -> Self {
        let kind = MonsterKind::from_name(&record.mtype).unwrap_or_else(|| {
            warn!("unknown monster type '{}' in saved data, using Gnome", record.mtype);
            MonsterKind::Gnome
        });
        Self {
            name: record.name.unwrap_or_else(|| record.mtype.clone()),
            kind,
            pos: record.pos,
            health: record.health,
            power: record.power,
            money: record.money,
            alive: record.alive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn imp_at(pos: GridPos) -> Monster {
        Monster {
            name: "Imp".into(),
            kind: MonsterKind::Imp,
            pos,
            health: 12,
            power: 9,
            money: 40,
            alive: true,
        }
    }

    #[test]
    fn spawn_respects_board_town_and_stat_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in 2..8 {
            for town in [GridPos(0, 0), GridPos(size - 1, size - 1), GridPos(size / 2, 0)] {
                let grid = Grid::new(size, town).unwrap();
                for _ in 0..25 {
                    let monster = Monster::spawn(&mut rng, &grid, &HashSet::new()).unwrap();
                    assert!(grid.contains(monster.pos));
                    assert_ne!(monster.pos, grid.town());
                    let ranges = monster.kind.stat_ranges();
                    assert!(ranges.health.contains(&monster.health));
                    assert!(ranges.power.contains(&monster.power));
                    assert!(ranges.money.contains(&monster.money));
                    assert!(monster.alive);
                }
            }
        }
    }

    #[test]
    fn spawn_avoids_listed_cells_and_gives_up_when_full() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = Grid::new(2, GridPos(0, 0)).unwrap();
        let avoid: HashSet<_> = [GridPos(1, 0), GridPos(0, 1)].into_iter().collect();
        for _ in 0..10 {
            let monster = Monster::spawn(&mut rng, &grid, &avoid).unwrap();
            assert_eq!(monster.pos, GridPos(1, 1));
        }

        let everything: HashSet<_> = grid.open_cells().into_iter().collect();
        assert!(Monster::spawn(&mut rng, &grid, &everything).is_none());
    }

    #[test]
    fn step_rejects_edges_and_town() {
        let grid = Grid::new(3, GridPos(1, 1)).unwrap();
        let mut monster = imp_at(GridPos(0, 1));

        assert!(!monster.step(Direction::West, &grid));
        assert_eq!(monster.pos, GridPos(0, 1));

        assert!(!monster.step(Direction::East, &grid));
        assert_eq!(monster.pos, GridPos(0, 1));

        assert!(monster.step(Direction::North, &grid));
        assert_eq!(monster.pos, GridPos(0, 0));
        assert!(!monster.step_by(0, -1, &grid));
        assert_eq!(monster.pos, GridPos(0, 0));
    }

    #[test]
    fn defeated_monsters_do_not_move() {
        let grid = Grid::new(4, GridPos(0, 0)).unwrap();
        let mut monster = imp_at(GridPos(2, 2));
        monster.take_damage(100);
        assert!(!monster.alive);
        assert_eq!(monster.health, 0);

        let mut rng = StdRng::seed_from_u64(3);
        assert!(!monster.wander(&mut rng, &grid));
        assert!(!monster.step(Direction::North, &grid));
        assert_eq!(monster.pos, GridPos(2, 2));
    }

    #[test]
    fn wander_takes_the_only_open_direction() {
        // town at (1,0); from (0,0) only south is open
        let grid = Grid::new(2, GridPos(1, 0)).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            let mut monster = imp_at(GridPos(0, 0));
            assert!(monster.wander(&mut rng, &grid));
            assert_eq!(monster.pos, GridPos(0, 1));
        }
    }

    #[test]
    fn wander_moves_exactly_one_cell() {
        let grid = Grid::new(6, GridPos(5, 5)).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let mut monster = imp_at(GridPos(3, 3));
        for _ in 0..50 {
            let before = monster.pos;
            assert!(monster.wander(&mut rng, &grid));
            let distance = (before.x() - monster.pos.x()).abs() + (before.y() - monster.pos.y()).abs();
            assert_eq!(distance, 1);
            assert!(grid.is_open(monster.pos));
        }
    }

    #[test]
    fn record_round_trip_is_lossless() {
        let monster = Monster {
            name: "Grumbles".into(),
            kind: MonsterKind::Troll,
            pos: GridPos(4, 1),
            health: 0,
            power: 17,
            money: 61,
            alive: false,
        };
        let json = serde_json::to_string(&monster).unwrap();
        let back: Monster = serde_json::from_str(&json).unwrap();
        assert_eq!(back, monster);
    }

    #[test]
    fn record_uses_plain_field_names() {
        let value = serde_json::to_value(imp_at(GridPos(2, 5))).unwrap();
        assert_eq!(value["mtype"], "Imp");
        assert_eq!(value["pos"], serde_json::json!([2, 5]));
        assert_eq!(value["color"], serde_json::json!([220, 60, 40]));
        assert_eq!(value["alive"], true);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let monster: Monster = serde_json::from_str("{}").unwrap();
        assert_eq!(monster.kind, MonsterKind::Gnome);
        assert_eq!(monster.name, "Gnome");
        assert_eq!(monster.pos, GridPos(0, 0));
        assert_eq!((monster.health, monster.power, monster.money), (20, 5, 10));
        assert!(monster.alive);

        let imp: Monster = serde_json::from_str(r#"{"mtype": "Imp", "health": 3}"#).unwrap();
        assert_eq!(imp.kind, MonsterKind::Imp);
        assert_eq!(imp.name, "Imp");
        assert_eq!(imp.health, 3);

        let lowercase: Monster = serde_json::from_str(r#"{"mtype": "imp"}"#).unwrap();
        assert_eq!(lowercase.kind, MonsterKind::Imp);
        assert_eq!(lowercase.name, "imp");
    }

    #[test]
    fn unknown_kind_falls_back_to_gnome_but_keeps_name() {
        let monster: Monster = serde_json::from_str(r#"{"mtype": "Dragon"}"#).unwrap();
        assert_eq!(monster.kind, MonsterKind::Gnome);
        assert_eq!(monster.name, "Dragon");
    }
}
