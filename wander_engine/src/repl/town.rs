//! `repl::town` module
//!
//! Handlers for the shop and the inn. Both are only open while the player stands in town.

use crate::shop::{CATALOG, REST_COST, ShopOutcome, buy, rest_at_inn};
use crate::view::{View, ViewItem};
use crate::world::WanderWorld;

/// True if town services are available right now; pushes the reason to the view if not.
fn town_open(world: &WanderWorld, view: &mut View) -> bool {
    if world.mode.is_fighting() {
        view.push(ViewItem::InFight);
        false
    } else if !world.player_in_town() {
        view.push(ViewItem::NotInTown);
        false
    } else {
        true
    }
}

/// Show the shop's wares.
pub fn shop_handler(world: &WanderWorld, view: &mut View) {
    if town_open(world, view) {
        view.push(ViewItem::ShopMenu {
            gold: world.player.gold,
            items: CATALOG.to_vec(),
        });
    }
}

/// Buy `quantity` of the `choice`-th item on the shop list.
pub fn buy_handler(world: &mut WanderWorld, view: &mut View, choice: usize, quantity: u32) {
    if !town_open(world, view) {
        return;
    }
    match buy(&mut world.player, &mut world.inventory, choice, quantity) {
        ShopOutcome::Bought { item, purchase } => view.push(ViewItem::Purchased {
            name: item.name.to_string(),
            quantity: purchase.bought,
            gold_left: purchase.remaining,
        }),
        ShopOutcome::CannotAfford(item) => view.push(ViewItem::CannotAfford(item.name.to_string())),
        ShopOutcome::NoSuchItem(choice) => view.push(ViewItem::Error(format!(
            "The shop has no item #{choice}. Pick 1 to {}.",
            CATALOG.len()
        ))),
    }
}

/// Sleep at the inn to restore health.
pub fn rest_handler(world: &mut WanderWorld, view: &mut View) {
    if !town_open(world, view) {
        return;
    }
    if rest_at_inn(&mut world.player) {
        view.push(ViewItem::Rested {
            gold_left: world.player.gold,
        });
    } else {
        view.push(ViewItem::CannotRest { cost: REST_COST });
    }
}
