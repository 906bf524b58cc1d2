//! `repl::movement` module
//!
//! Handlers for walking the grid. A step is where the turn advances: monsters get their
//! (throttled) move and any collision starts a fight.

use log::info;
use rand::Rng;

use crate::combat::Fight;
use crate::grid::Direction;
use crate::view::{View, ViewItem, render_map_colored};
use crate::world::{GameMode, WanderWorld};

/// Take one step. Collisions are checked right after the player moves and again after
/// the monsters have had their chance to wander.
pub fn move_handler<R: Rng + ?Sized>(world: &mut WanderWorld, view: &mut View, rng: &mut R, direction: Direction) {
    if world.mode.is_fighting() {
        view.push(ViewItem::InFight);
        return;
    }
    let grid = world.grid;
    if !world.player.step(direction, &grid) {
        view.push(ViewItem::Blocked(direction));
        return;
    }
    view.push(ViewItem::Moved {
        direction,
        pos: world.player.pos,
    });
    if world.player_in_town() {
        view.push(ViewItem::EnteredTown);
    }

    if !check_encounter(world, view) {
        if world.roster.advance(rng, &grid, world.player.move_count) {
            info!("monsters wandered on move {}", world.player.move_count);
        }
        check_encounter(world, view);
    }
    map_handler(world, view);
}

/// Start a fight if a living monster shares the player's cell. Returns `true` if one started.
pub fn check_encounter(world: &mut WanderWorld, view: &mut View) -> bool {
    let Some(roster_index) = world.roster.collision_index(world.player.pos) else {
        return false;
    };
    let Some(monster) = world.roster.get(roster_index) else {
        return false;
    };
    info!("{} encountered {} at {}", world.player.name, monster.name, monster.pos);
    view.push(ViewItem::EncounterStart {
        name: monster.name.clone(),
        description: monster.kind.description().to_string(),
    });
    world.mode = GameMode::Fighting(Fight { roster_index });
    true
}

/// Show the board.
pub fn map_handler(world: &WanderWorld, view: &mut View) {
    view.push(ViewItem::Map(render_map_colored(
        &world.grid,
        world.player.pos,
        &world.roster,
    )));
}
