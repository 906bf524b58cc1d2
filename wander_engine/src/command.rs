//! Command module
//!
//! Describes possible commands used during gameplay.
use variantly::Variantly;

use crate::grid::Direction;
use crate::inventory::ItemKind;

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    Attack,
    Buy { choice: usize, quantity: u32 },
    Equip { kind: ItemKind, choice: usize },
    Flee,
    Help,
    Inventory,
    ListSaves,
    Load(Option<String>),
    Map,
    #[variantly(rename = "go")]
    Move(Direction),
    Quit,
    Rest,
    Save(Option<String>),
    Shop,
    Status,
    Throw,
    Unknown,
}

/// Parses an input line into a `Command`. Unrecognized input gives `Command::Unknown`.
pub fn parse_command(input: &str) -> Command {
    let lowered = input.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    match words.as_slice() {
        [dir] | ["go" | "walk" | "move", dir] if Direction::parse(dir).is_some() => {
            Direction::parse(dir).map_or(Command::Unknown, Command::Move)
        },
        ["map" | "look"] => Command::Map,
        ["status" | "stats"] => Command::Status,
        ["inventory" | "inv" | "i"] => Command::Inventory,
        ["equip", kind] => parse_equip(kind, "1"),
        ["equip", kind, choice] => parse_equip(kind, choice),
        ["shop"] => Command::Shop,
        ["buy", choice] => parse_buy(choice, "1"),
        ["buy", choice, quantity] => parse_buy(choice, quantity),
        ["rest" | "sleep"] => Command::Rest,
        ["attack" | "fight" | "hit"] => Command::Attack,
        ["flee" | "run"] | ["run", "away"] => Command::Flee,
        ["throw" | "rock"] | ["throw", "rock"] | ["use", "rock"] => Command::Throw,
        ["save"] => Command::Save(None),
        ["save", slot] => Command::Save(Some((*slot).to_string())),
        ["load"] => Command::Load(None),
        ["load", slot] => Command::Load(Some((*slot).to_string())),
        ["saves"] | ["list", "saves"] => Command::ListSaves,
        ["help" | "?"] => Command::Help,
        ["quit" | "exit"] => Command::Quit,
        _ => Command::Unknown,
    }
}

fn parse_equip(kind: &str, choice: &str) -> Command {
    match (ItemKind::parse(kind), choice.parse::<usize>()) {
        (Some(kind), Ok(choice)) => Command::Equip { kind, choice },
        _ => Command::Unknown,
    }
}

fn parse_buy(choice: &str, quantity: &str) -> Command {
    match (choice.parse::<usize>(), quantity.parse::<u32>()) {
        (Ok(choice), Ok(quantity)) => Command::Buy { choice, quantity },
        _ => Command::Unknown,
    }
}
