//! Shop Module
//!
//! Town commerce: the shop's price list, purchase arithmetic and the inn.

use log::info;

use crate::inventory::{Inventory, Item};
use crate::player::Player;

/// Price of a night at the inn.
pub const REST_COST: u32 = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShopItem {
    pub name: &'static str,
    pub price: u32,
}

pub const CATALOG: [ShopItem; 6] = [
    ShopItem { name: "Bread", price: 20 },
    ShopItem { name: "Cheese", price: 15 },
    ShopItem { name: "Juice", price: 5 },
    ShopItem { name: "Cake", price: 12 },
    ShopItem { name: "Potion", price: 25 },
    ShopItem { name: "Elixir", price: 40 },
];

/// How many units were bought and what money is left.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub bought: u32,
    pub remaining: u32,
}

/// Buy as many of `quantity` units as `money` allows. Free items are always affordable.
pub fn purchase(price: u32, money: u32, quantity: u32) -> Purchase {
    let affordable = money.checked_div(price).unwrap_or(u32::MAX);
    let bought = affordable.min(quantity);
    Purchase {
        bought,
        remaining: money - bought * price,
    }
}

/// Result of a shop transaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShopOutcome {
    Bought { item: ShopItem, purchase: Purchase },
    CannotAfford(ShopItem),
    NoSuchItem(usize),
}

/// Buy `quantity` of the `choice`-th catalog entry (1-based), charging the player and
/// adding one consumable per unit bought.
pub fn buy(player: &mut Player, inventory: &mut Inventory, choice: usize, quantity: u32) -> ShopOutcome {
    let Some(item) = choice.checked_sub(1).and_then(|idx| CATALOG.get(idx)).copied() else {
        return ShopOutcome::NoSuchItem(choice);
    };
    let result = purchase(item.price, player.gold, quantity);
    if result.bought == 0 {
        return ShopOutcome::CannotAfford(item);
    }
    player.gold = result.remaining;
    for _ in 0..result.bought {
        inventory.add(Item::consumable(item.name));
    }
    info!(
        "{} bought {} x {} ({} gold left)",
        player.name, result.bought, item.name, player.gold
    );
    ShopOutcome::Bought { item, purchase: result }
}

/// Pay for a night at the inn and wake at full health. Returns `false` if the player
/// can't pay, in which case nothing changes.
pub fn rest_at_inn(player: &mut Player) -> bool {
    if player.gold < REST_COST {
        return false;
    }
    player.gold -= REST_COST;
    player.rest();
    info!("{} rested at the inn ({} gold left)", player.name, player.gold);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_caps_at_what_money_allows() {
        assert_eq!(purchase(20, 50, 1), Purchase { bought: 1, remaining: 30 });
        assert_eq!(purchase(20, 50, 5), Purchase { bought: 2, remaining: 10 });
        assert_eq!(purchase(20, 10, 3), Purchase { bought: 0, remaining: 10 });
        assert_eq!(purchase(0, 7, 4), Purchase { bought: 4, remaining: 7 });
    }

    #[test]
    fn buy_charges_gold_and_fills_inventory() {
        let mut player = Player::default();
        player.gold = 40;
        let mut inventory = Inventory::empty();

        let outcome = buy(&mut player, &mut inventory, 4, 3);
        assert!(matches!(outcome, ShopOutcome::Bought { purchase: Purchase { bought: 3, .. }, .. }));
        assert_eq!(player.gold, 4);
        assert_eq!(inventory.len(), 3);
        assert!(inventory.items.iter().all(|item| item.name == "Cake"));

        assert_eq!(buy(&mut player, &mut inventory, 1, 1), ShopOutcome::CannotAfford(CATALOG[0]));
        assert_eq!(buy(&mut player, &mut inventory, 0, 1), ShopOutcome::NoSuchItem(0));
        assert_eq!(buy(&mut player, &mut inventory, 7, 1), ShopOutcome::NoSuchItem(7));
        assert_eq!(player.gold, 4);
    }

    #[test]
    fn inn_requires_payment() {
        let mut player = Player::default();
        player.health = 3;
        player.gold = 4;
        assert!(!rest_at_inn(&mut player));
        assert_eq!(player.health, 3);

        player.gold = 5;
        assert!(rest_at_inn(&mut player));
        assert_eq!(player.health, player.max_health);
        assert_eq!(player.gold, 0);
    }
}
