//! `repl::inventory` module
//!
//! Handlers for looking at and equipping the player's belongings.

use crate::inventory::{EquipOutcome, ItemKind};
use crate::view::{InventoryLine, View, ViewItem};
use crate::world::WanderWorld;

/// List everything the player carries.
pub fn inv_handler(world: &WanderWorld, view: &mut View) {
    let loadout = &world.inventory.loadout;
    let lines = world
        .inventory
        .items
        .iter()
        .map(|item| InventoryLine {
            name: item.name.clone(),
            kind: item.kind,
            detail: item.detail(),
            equipped: match item.kind {
                ItemKind::Weapon => loadout.weapon.as_deref() == Some(item.name.as_str()),
                ItemKind::Shield => loadout.shield.as_deref() == Some(item.name.as_str()),
                _ => false,
            },
        })
        .collect();
    view.push(ViewItem::InventoryList(lines));
}

/// Equip the `choice`-th item of `kind`.
pub fn equip_handler(world: &mut WanderWorld, view: &mut View, kind: ItemKind, choice: usize) {
    match world.inventory.equip(kind, choice) {
        EquipOutcome::Equipped(name) => view.push(ViewItem::Equipped(name)),
        EquipOutcome::Cancelled => view.push(ViewItem::EngineMessage("You equipped nothing.".into())),
        EquipOutcome::NoneAvailable(kind) => view.push(ViewItem::Error(format!("No {kind} available to equip."))),
        EquipOutcome::InvalidChoice { choice, available } => view.push(ViewItem::Error(format!(
            "There is no {kind} #{choice}; you have {available}."
        ))),
    }
}
