//! Combat Module
//!
//! Resolves fights between the player and a wandering monster, one round per command.

use std::ops::RangeInclusive;

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::monster::Monster;
use crate::player::Player;

/// Damage the player deals with each attack.
pub const PLAYER_DAMAGE: RangeInclusive<u32> = 5..=10;

/// An encounter in progress with the monster at `roster_index`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fight {
    pub roster_index: usize,
}

/// Blows exchanged in one round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub dealt: u32,
    pub taken: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FightOutcome {
    Ongoing,
    MonsterDefeated { reward: u32 },
    PlayerDefeated,
}

/// Trade one blow each. Both land in the same round, so a player can fall while felling the monster.
pub fn attack_round<R: Rng + ?Sized>(rng: &mut R, player: &mut Player, monster: &mut Monster) -> RoundReport {
    let dealt = rng.random_range(PLAYER_DAMAGE);
    let taken = rng.random_range(0..=monster.power);
    monster.take_damage(dealt);
    player.take_damage(taken);
    info!(
        "{} hits {} for {dealt}, takes {taken} (player hp {}, monster hp {})",
        player.name, monster.name, player.health, monster.health
    );
    RoundReport { dealt, taken }
}

/// Decide the state of the fight. A fallen player loses even if the monster fell too.
/// A defeated monster pays its bounty to the player.
pub fn settle(player: &mut Player, monster: &Monster) -> FightOutcome {
    if !player.is_alive() {
        info!("{} was defeated by {}", player.name, monster.name);
        FightOutcome::PlayerDefeated
    } else if !monster.alive {
        player.gold = player.gold.saturating_add(monster.money);
        info!("{} defeated {} and earned {} gold", player.name, monster.name, monster.money);
        FightOutcome::MonsterDefeated { reward: monster.money }
    } else {
        FightOutcome::Ongoing
    }
}
