//! `repl::combat` module
//!
//! Handlers for the commands available while a fight is under way.

use log::{info, warn};
use rand::Rng;

use crate::combat::{Fight, FightOutcome, attack_round, settle};
use crate::repl::ReplControl;
use crate::repl::system::quit_handler;
use crate::view::{View, ViewItem};
use crate::world::{GameMode, WanderWorld};

/// The fight in progress, if its monster is still standing. A stale fight is cleared.
fn active_fight(world: &mut WanderWorld, view: &mut View) -> Option<Fight> {
    let GameMode::Fighting(fight) = world.mode else {
        view.push(ViewItem::NotInFight);
        return None;
    };
    if world.fight_target(fight).is_none() {
        warn!("fight pointed at roster slot {} with no living monster", fight.roster_index);
        world.mode = GameMode::Exploring;
        view.push(ViewItem::NotInFight);
        return None;
    }
    Some(fight)
}

/// Trade blows with the monster. Ends the session if the player falls.
pub fn attack_handler<R: Rng + ?Sized>(world: &mut WanderWorld, view: &mut View, rng: &mut R) -> ReplControl {
    let Some(fight) = active_fight(world, view) else {
        return ReplControl::Continue;
    };
    let Some(monster) = world.roster.get_mut(fight.roster_index) else {
        return ReplControl::Continue;
    };
    let report = attack_round(rng, &mut world.player, monster);
    let outcome = settle(&mut world.player, monster);
    view.push(ViewItem::CombatRound {
        monster: monster.name.clone(),
        dealt: report.dealt,
        taken: report.taken,
        player_hp: world.player.health,
        monster_hp: monster.health,
    });
    let name = monster.name.clone();

    match outcome {
        FightOutcome::Ongoing => ReplControl::Continue,
        FightOutcome::MonsterDefeated { reward } => {
            view.push(ViewItem::MonsterDefeated { name, reward });
            finish_victory(world, view, rng);
            ReplControl::Continue
        },
        FightOutcome::PlayerDefeated => {
            view.push(ViewItem::PlayerDefeated);
            world.mode = GameMode::Exploring;
            quit_handler(world, view)
        },
    }
}

/// Run away. The monster stays where it is.
pub fn flee_handler(world: &mut WanderWorld, view: &mut View) {
    let Some(fight) = active_fight(world, view) else {
        return;
    };
    let name = world
        .fight_target(fight)
        .map(|m| m.name.clone())
        .unwrap_or_default();
    info!("{} fled from {name}", world.player.name);
    world.mode = GameMode::Exploring;
    view.push(ViewItem::Fled { name });
}

/// Throw the rock, if carried, to defeat the monster outright.
pub fn throw_handler<R: Rng + ?Sized>(world: &mut WanderWorld, view: &mut View, rng: &mut R) {
    let Some(fight) = active_fight(world, view) else {
        return;
    };
    if !world.inventory.use_special_item() {
        view.push(ViewItem::NoSpecialItem);
        return;
    }
    let Some(monster) = world.roster.get_mut(fight.roster_index) else {
        return;
    };
    monster.defeat();
    let name = monster.name.clone();
    view.push(ViewItem::SpecialItemUsed { monster: name.clone() });
    if let FightOutcome::MonsterDefeated { reward } = settle(&mut world.player, monster) {
        view.push(ViewItem::MonsterDefeated { name, reward });
    }
    finish_victory(world, view, rng);
}

/// Clear the fallen monster off the board and bring in fresh ones if none are left.
fn finish_victory<R: Rng + ?Sized>(world: &mut WanderWorld, view: &mut View, rng: &mut R) {
    world.mode = GameMode::Exploring;
    world.roster.remove_defeated();
    if world.replenish(rng) {
        view.push(ViewItem::MonstersRespawned);
    }
}
