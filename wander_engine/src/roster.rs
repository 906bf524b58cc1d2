//! Roster Module
//!
//! The active wandering monsters and the turn-level utilities that act on them:
//! spawn-to-fill, throttled movement, collision detection and persistence.

use std::collections::HashSet;

use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

use crate::grid::{Grid, GridPos};
use crate::monster::{Monster, MonsterRecord};

/// Number of monsters kept on the board.
pub const ROSTER_SIZE: usize = 2;

/// Ordered collection of at most [`ROSTER_SIZE`] monsters.
///
/// Order is insertion order and decides which monster the player meets first
/// when several share a cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    monsters: Vec<Monster>,
}
impl Roster {
    pub fn new() -> Roster {
        Roster::default()
    }

    /// Build a roster from existing monsters, keeping at most [`ROSTER_SIZE`] of them.
    pub fn from_monsters(mut monsters: Vec<Monster>) -> Roster {
        if monsters.len() > ROSTER_SIZE {
            warn!("roster given {} monsters, keeping the first {ROSTER_SIZE}", monsters.len());
            monsters.truncate(ROSTER_SIZE);
        }
        Roster { monsters }
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn get(&self, index: usize) -> Option<&Monster> {
        self.monsters.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Monster> {
        self.monsters.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Iterate over the monsters still alive.
    pub fn living(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.iter().filter(|m| m.alive)
    }

    /// If the roster is empty, spawn exactly [`ROSTER_SIZE`] monsters, keeping them off the town,
    /// the player's cell and each other's cells. Returns `true` if anything was spawned.
    pub fn ensure_filled<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: &Grid, player_pos: GridPos) -> bool {
        if !self.monsters.is_empty() {
            return false;
        }
        let mut avoid: HashSet<GridPos> = [grid.town(), player_pos].into_iter().collect();
        for _ in 0..ROSTER_SIZE {
            if let Some(monster) = Monster::spawn(rng, grid, &avoid) {
                avoid.insert(monster.pos);
                self.monsters.push(monster);
            }
        }
        info!("roster filled with {} monsters", self.monsters.len());
        !self.monsters.is_empty()
    }

    /// Let every monster wander, but only on even player move counts, so monsters
    /// move at half the player's pace. Returns `true` if any monster changed cells.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: &Grid, player_move_count: usize) -> bool {
        if player_move_count % 2 != 0 {
            return false;
        }
        let mut moved = false;
        for monster in &mut self.monsters {
            moved |= monster.wander(rng, grid);
        }
        moved
    }

    /// Index of the first living monster standing on `player_pos`.
    pub fn collision_index(&self, player_pos: GridPos) -> Option<usize> {
        self.monsters.iter().position(|m| m.alive && m.pos == player_pos)
    }

    /// Drop defeated monsters, keeping the order of the rest. Returns how many were removed.
    pub fn remove_defeated(&mut self) -> usize {
        let before = self.monsters.len();
        self.monsters.retain(|m| m.alive);
        before - self.monsters.len()
    }

    /// If no living monster remains, clear the roster and fill it again.
    /// Returns `true` if a fresh set was spawned.
    pub fn respawn_if_cleared<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: &Grid, player_pos: GridPos) -> bool {
        if self.living().next().is_some() {
            return false;
        }
        self.monsters.clear();
        info!("all wandering monsters defeated, respawning");
        self.ensure_filled(rng, grid, player_pos)
    }

    /// Drop monsters that cannot legally stand on `grid` (off the board or on the town).
    /// Returns how many were removed.
    pub fn retain_valid(&mut self, grid: &Grid) -> usize {
        let before = self.monsters.len();
        self.monsters.retain(|m| {
            let ok = grid.is_open(m.pos);
            if !ok {
                warn!("discarding {} at {}: not a valid cell on this grid", m.name, m.pos);
            }
            ok
        });
        before - self.monsters.len()
    }

    /// Plain-data records for every monster, in roster order.
    pub fn to_records(&self) -> Vec<MonsterRecord> {
        self.monsters.iter().cloned().map(MonsterRecord::from).collect()
    }

    /// Rebuild a roster from saved records.
    pub fn from_records(records: Vec<MonsterRecord>) -> Roster {
        Roster::from_monsters(records.into_iter().map(Monster::from).collect())
    }
}

/// A saved roster entry that is either a readable record or something to skip.
#[derive(Deserialize)]
#[serde(untagged)]
enum SavedEntry {
    Record(MonsterRecord),
    Unreadable(serde::de::IgnoredAny),
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<SavedEntry>::deserialize(deserializer)?;
        let mut records = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.into_iter().enumerate() {
            match entry {
                SavedEntry::Record(record) => records.push(record),
                SavedEntry::Unreadable(_) => warn!("skipping unreadable monster entry #{idx} in saved data"),
            }
        }
        Ok(Roster::from_records(records))
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Monster;
    type IntoIter = std::slice::Iter<'a, Monster>;

    fn into_iter(self) -> Self::IntoIter {
        self.monsters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster::MonsterKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn gnome_at(pos: GridPos) -> Monster {
        Monster {
            name: "Gnome".into(),
            kind: MonsterKind::Gnome,
            pos,
            health: 25,
            power: 6,
            money: 20,
            alive: true,
        }
    }

    fn positions(roster: &Roster) -> Vec<GridPos> {
        roster.monsters().iter().map(|m| m.pos).collect()
    }

    #[test]
    fn ensure_filled_spawns_two_on_distinct_free_cells() {
        let mut rng = StdRng::seed_from_u64(5);
        for size in 2..7 {
            let grid = Grid::new(size, GridPos(0, 0)).unwrap();
            let player = GridPos(size - 1, 0);
            for _ in 0..20 {
                let mut roster = Roster::new();
                assert!(roster.ensure_filled(&mut rng, &grid, player));
                assert_eq!(roster.len(), ROSTER_SIZE);
                let a = roster.monsters()[0].pos;
                let b = roster.monsters()[1].pos;
                assert_ne!(a, b);
                for pos in [a, b] {
                    assert!(grid.is_open(pos));
                    assert_ne!(pos, player);
                }
            }
        }
    }

    #[test]
    fn ensure_filled_leaves_non_empty_roster_alone() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = Grid::new(5, GridPos(0, 0)).unwrap();
        let mut roster = Roster::from_monsters(vec![gnome_at(GridPos(2, 2))]);
        assert!(!roster.ensure_filled(&mut rng, &grid, GridPos(0, 0)));
        assert_eq!(positions(&roster), vec![GridPos(2, 2)]);
    }

    #[test]
    fn advance_moves_only_on_even_counts() {
        let mut rng = StdRng::seed_from_u64(21);
        let grid = Grid::new(8, GridPos(0, 0)).unwrap();
        let mut roster = Roster::from_monsters(vec![gnome_at(GridPos(3, 3)), gnome_at(GridPos(5, 5))]);

        for count in (1..40).step_by(2) {
            let before = positions(&roster);
            assert!(!roster.advance(&mut rng, &grid, count));
            assert_eq!(positions(&roster), before);
        }

        for count in (0..40).step_by(2) {
            let before = positions(&roster);
            assert!(roster.advance(&mut rng, &grid, count));
            assert_ne!(positions(&roster), before);
        }
    }

    #[test]
    fn collision_index_prefers_lowest_living_index() {
        let spot = GridPos(2, 2);
        let mut first = gnome_at(spot);
        first.alive = false;
        let roster = Roster::from_monsters(vec![first, gnome_at(spot)]);
        assert_eq!(roster.collision_index(spot), Some(1));

        let both = Roster::from_monsters(vec![gnome_at(spot), gnome_at(spot)]);
        assert_eq!(both.collision_index(spot), Some(0));
        assert_eq!(both.collision_index(GridPos(0, 1)), None);
    }

    #[test]
    fn respawn_if_cleared_refills_empty_or_defeated_roster() {
        let mut rng = StdRng::seed_from_u64(8);
        let grid = Grid::new(4, GridPos(0, 0)).unwrap();

        let mut empty = Roster::new();
        assert!(empty.respawn_if_cleared(&mut rng, &grid, GridPos(1, 1)));
        assert_eq!(empty.len(), ROSTER_SIZE);

        let mut a = gnome_at(GridPos(1, 0));
        let mut b = gnome_at(GridPos(2, 0));
        a.defeat();
        b.defeat();
        let mut defeated = Roster::from_monsters(vec![a, b]);
        assert!(defeated.respawn_if_cleared(&mut rng, &grid, GridPos(1, 1)));
        assert_eq!(defeated.len(), ROSTER_SIZE);
        assert!(defeated.monsters().iter().all(|m| m.alive));
    }

    #[test]
    fn respawn_if_cleared_keeps_survivors() {
        let mut rng = StdRng::seed_from_u64(8);
        let grid = Grid::new(4, GridPos(0, 0)).unwrap();
        let mut fallen = gnome_at(GridPos(1, 0));
        fallen.defeat();
        let mut roster = Roster::from_monsters(vec![fallen, gnome_at(GridPos(3, 3))]);
        assert!(!roster.respawn_if_cleared(&mut rng, &grid, GridPos(1, 1)));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn remove_defeated_preserves_order() {
        let mut middle = gnome_at(GridPos(2, 0));
        middle.defeat();
        let mut roster = Roster {
            monsters: vec![gnome_at(GridPos(1, 0)), middle, gnome_at(GridPos(3, 0))],
        };
        assert_eq!(roster.remove_defeated(), 1);
        assert_eq!(positions(&roster), vec![GridPos(1, 0), GridPos(3, 0)]);
    }

    #[test]
    fn retain_valid_drops_town_and_off_board_monsters() {
        let grid = Grid::new(3, GridPos(1, 1)).unwrap();
        let mut roster = Roster::from_monsters(vec![gnome_at(GridPos(1, 1)), gnome_at(GridPos(0, 2))]);
        assert_eq!(roster.retain_valid(&grid), 1);
        assert_eq!(positions(&roster), vec![GridPos(0, 2)]);
    }

    #[test]
    fn records_round_trip() {
        let roster = Roster::from_monsters(vec![gnome_at(GridPos(1, 2)), gnome_at(GridPos(2, 1))]);
        let back = Roster::from_records(roster.to_records());
        assert_eq!(back, roster);

        let json = serde_json::to_string(&roster).unwrap();
        let parsed: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, roster);
    }

    #[test]
    fn unreadable_entries_are_skipped() {
        let json = r#"[{"mtype": "Imp", "pos": [1, 1]}, "garbage", {"health": -4}]"#;
        let roster: Roster = serde_json::from_str(json).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.monsters()[0].kind, MonsterKind::Imp);
    }
}
