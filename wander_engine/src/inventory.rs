//! Inventory Module
//!
//! The adventurer's belongings and what is currently equipped. The inventory is owned by
//! the [`WanderWorld`](crate::WanderWorld) and handed to the functions that need it.

use std::fmt::Display;

use log::info;
use serde::{Deserialize, Serialize};

/// Name of the throwable that defeats a monster outright.
pub const SPECIAL_ITEM: &str = "rock";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Weapon,
    Shield,
    Misc,
    Consumable,
}
impl ItemKind {
    pub fn parse(word: &str) -> Option<ItemKind> {
        match word.to_lowercase().as_str() {
            "weapon" | "sword" => Some(ItemKind::Weapon),
            "shield" => Some(ItemKind::Shield),
            "misc" => Some(ItemKind::Misc),
            "consumable" | "food" => Some(ItemKind::Consumable),
            _ => None,
        }
    }

    /// Weapons and shields wear out; other items don't.
    pub fn has_durability(self) -> bool {
        matches!(self, ItemKind::Weapon | ItemKind::Shield)
    }
}
impl Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Weapon => write!(f, "weapon"),
            ItemKind::Shield => write!(f, "shield"),
            ItemKind::Misc => write!(f, "misc"),
            ItemKind::Consumable => write!(f, "consumable"),
        }
    }
}

/// Something the player carries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_durability: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_durability: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
impl Item {
    /// A weapon or shield in perfect condition.
    pub fn gear(name: &str, kind: ItemKind, durability: u32) -> Item {
        Item {
            name: name.to_string(),
            kind,
            max_durability: Some(durability),
            current_durability: Some(durability),
            note: None,
        }
    }

    pub fn misc(name: &str, note: &str) -> Item {
        Item {
            name: name.to_string(),
            kind: ItemKind::Misc,
            max_durability: None,
            current_durability: None,
            note: Some(note.to_string()),
        }
    }

    pub fn consumable(name: &str) -> Item {
        Item {
            name: name.to_string(),
            kind: ItemKind::Consumable,
            max_durability: None,
            current_durability: None,
            note: None,
        }
    }

    /// Short status shown in inventory listings.
    pub fn detail(&self) -> String {
        match (self.current_durability, self.max_durability) {
            (Some(current), Some(max)) => format!("Durability: {current}/{max}"),
            _ => self.note.clone().unwrap_or_default(),
        }
    }
}

/// Names of the currently equipped weapon and shield.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    pub weapon: Option<String>,
    pub shield: Option<String>,
}

/// Result of trying to equip an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EquipOutcome {
    Equipped(String),
    Cancelled,
    NoneAvailable(ItemKind),
    InvalidChoice { choice: usize, available: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub loadout: Loadout,
}
impl Default for Inventory {
    fn default() -> Self {
        Self::starting_kit()
    }
}
impl Inventory {
    pub fn empty() -> Inventory {
        Inventory {
            items: Vec::new(),
            loadout: Loadout::default(),
        }
    }

    /// What every new adventurer sets out with.
    pub fn starting_kit() -> Inventory {
        Inventory {
            items: vec![
                Item::gear("sword", ItemKind::Weapon, 10),
                Item::gear("buckler", ItemKind::Shield, 6),
                Item::misc(SPECIAL_ITEM, "defeats one monster instantly"),
            ],
            loadout: Loadout::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn add(&mut self, item: Item) {
        info!("'{}' added to inventory", item.name);
        self.items.push(item);
    }

    pub fn items_of_kind(&self, kind: ItemKind) -> Vec<&Item> {
        self.items.iter().filter(|item| item.kind == kind).collect()
    }

    /// Equip the `choice`-th item (1-based) among items of `kind`. A choice of zero cancels.
    /// Only weapons and shields can be equipped.
    pub fn equip(&mut self, kind: ItemKind, choice: usize) -> EquipOutcome {
        let candidates = self.items_of_kind(kind);
        if candidates.is_empty() || !kind.has_durability() {
            return EquipOutcome::NoneAvailable(kind);
        }
        if choice == 0 {
            return EquipOutcome::Cancelled;
        }
        let Some(item) = candidates.get(choice - 1) else {
            return EquipOutcome::InvalidChoice {
                choice,
                available: candidates.len(),
            };
        };
        let name = item.name.clone();
        match kind {
            ItemKind::Weapon => self.loadout.weapon = Some(name.clone()),
            _ => self.loadout.shield = Some(name.clone()),
        }
        info!("equipped {kind} '{name}'");
        EquipOutcome::Equipped(name)
    }

    /// Throw the special item if carried. It is used up either way it lands.
    pub fn use_special_item(&mut self) -> bool {
        if let Some(idx) = self
            .items
            .iter()
            .position(|item| item.name.eq_ignore_ascii_case(SPECIAL_ITEM))
        {
            let item = self.items.remove(idx);
            info!("special item '{}' used and discarded", item.name);
            true
        } else {
            false
        }
    }
}
