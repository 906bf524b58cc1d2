//! View module.
//!
//! Handlers don't print. They push [`ViewItem`]s into the [`View`], which formats and
//! displays the whole batch once per pass through the REPL.

use colored::Colorize;
use log::info;
use textwrap::{fill, termwidth};

use crate::grid::{Direction, Grid, GridPos};
use crate::inventory::ItemKind;
use crate::monster::MonsterKind;
use crate::roster::Roster;
use crate::save_files::{SaveFileEntry, SaveFileStatus};
use crate::shop::ShopItem;
use crate::style::{GameStyle, kind_glyph};

pub const PLAYER_GLYPH: char = '@';
pub const TOWN_GLYPH: char = 'T';
pub const EMPTY_GLYPH: char = '.';

/// One row of an inventory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLine {
    pub name: String,
    pub kind: ItemKind,
    pub detail: String,
    pub equipped: bool,
}

/// Everything a handler can ask the view to show.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewItem {
    Welcome { name: String },
    Intro(String),
    Map(String),
    Status { health: u32, max_health: u32, gold: u32, moves: usize, in_town: bool },
    Moved { direction: Direction, pos: GridPos },
    Blocked(Direction),
    EnteredTown,
    EncounterStart { name: String, description: String },
    CombatRound { monster: String, dealt: u32, taken: u32, player_hp: u32, monster_hp: u32 },
    MonsterDefeated { name: String, reward: u32 },
    PlayerDefeated,
    Fled { name: String },
    SpecialItemUsed { monster: String },
    NoSpecialItem,
    MonstersRespawned,
    InventoryList(Vec<InventoryLine>),
    Equipped(String),
    ShopMenu { gold: u32, items: Vec<ShopItem> },
    Purchased { name: String, quantity: u32, gold_left: u32 },
    CannotAfford(String),
    Rested { gold_left: u32 },
    CannotRest { cost: u32 },
    NotInTown,
    InFight,
    NotInFight,
    Saved(String),
    Loaded(String),
    SaveList(Vec<SaveFileEntry>),
    Help,
    EngineMessage(String),
    Error(String),
    QuitSummary { name: String, gold: u32, moves: usize },
}

/// Aggregates messages for the current frame and prints them on `flush`.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}
impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Print and clear everything queued in this frame.
    pub fn flush(&mut self) {
        self.width = termwidth();
        for item in std::mem::take(&mut self.items) {
            self.show(&item);
        }
    }

    fn show(&self, item: &ViewItem) {
        match item {
            ViewItem::Welcome { name } => println!("{}", welcome_banner(name, self.width.min(60)).player_style()),
            ViewItem::Intro(text) => println!("{}\n", fill(text, self.width).description_style()),
            ViewItem::Map(map) => {
                println!("{:.>width$}", "map".section_style(), width = self.width);
                println!("{map}");
            },
            ViewItem::Status {
                health,
                max_health,
                gold,
                moves,
                in_town,
            } => {
                let place = if *in_town { "In town".town_style() } else { "In the wilds".normal() };
                println!(
                    "{place} | HP: {health}/{max_health} | Gold: {} | Moves: {moves}",
                    gold.to_string().gold_style()
                );
            },
            ViewItem::Moved { direction, pos } => println!("You walk {direction} to {pos}."),
            ViewItem::Blocked(direction) => println!("{}", format!("You can't go {direction} from here.").error_style()),
            ViewItem::EnteredTown => println!(
                "{}",
                "You are back in town. The shop and the inn are open.".town_style()
            ),
            ViewItem::EncounterStart { name, description } => {
                println!("\nA wild {} appears!", name.monster_style());
                println!("{}", description.description_style());
                println!("{}", "attack | flee | throw".prompt_style());
            },
            ViewItem::CombatRound {
                monster,
                dealt,
                taken,
                player_hp,
                monster_hp,
            } => {
                println!("You strike for {} damage!", dealt.to_string().victory_style());
                println!(
                    "The {} hits you for {} damage!",
                    monster.monster_style(),
                    taken.to_string().damage_style()
                );
                println!("Your HP: {player_hp} | {monster} HP: {monster_hp}");
            },
            ViewItem::MonsterDefeated { name, reward } => println!(
                "{} You defeated the {} and earned {} gold!",
                "Victory!".victory_style(),
                name.monster_style(),
                reward.to_string().gold_style()
            ),
            ViewItem::PlayerDefeated => println!("\n{}", "You were defeated...".damage_style()),
            ViewItem::Fled { name } => println!("You escape from the {} safely!", name.monster_style()),
            ViewItem::SpecialItemUsed { monster } => {
                println!("You throw the rock! The {} is instantly defeated!", monster.monster_style());
                println!("{}", "The rock crumbles and is gone.".italic().dimmed());
            },
            ViewItem::NoSpecialItem => println!("{}", "You have no special item!".error_style()),
            ViewItem::MonstersRespawned => println!("{}", "New monsters prowl the fields...".italic()),
            ViewItem::InventoryList(lines) => show_inventory(lines),
            ViewItem::Equipped(name) => println!("You equipped: {}", name.item_style()),
            ViewItem::ShopMenu { gold, items } => {
                println!("\nWelcome to the shop! You have {}", format!("${gold}").gold_style());
                for line in shop_menu(items) {
                    println!("{line}");
                }
                println!("{}", "buy <number> [quantity]".prompt_style());
            },
            ViewItem::Purchased {
                name,
                quantity,
                gold_left,
            } => println!(
                "Purchased {quantity} x {}. You have {} left.",
                name.item_style(),
                format!("${gold_left}").gold_style()
            ),
            ViewItem::CannotAfford(name) => println!("You cannot afford {}.", name.item_style()),
            ViewItem::Rested { gold_left } => println!(
                "You rest at the inn and restore your health. ({} left)",
                format!("${gold_left}").gold_style()
            ),
            ViewItem::CannotRest { cost } => println!("{}", format!("Not enough gold to rest ({cost} needed).").error_style()),
            ViewItem::NotInTown => println!("{}", "You need to be in town for that.".error_style()),
            ViewItem::InFight => println!("{}", "You're in a fight! attack, flee, or throw.".error_style()),
            ViewItem::NotInFight => println!("{}", "There's nothing here to fight.".error_style()),
            ViewItem::Saved(slot) => println!("Game saved as {}.", slot.underline()),
            ViewItem::Loaded(slot) => println!("Saved game {} loaded. Sally forth.", slot.underline().green()),
            ViewItem::SaveList(entries) => show_saves(entries),
            ViewItem::Help => show_help(),
            ViewItem::EngineMessage(msg) => println!("{}", msg.italic()),
            ViewItem::Error(msg) => println!("{}", msg.error_style()),
            ViewItem::QuitSummary { name, gold, moves } => {
                info!("{name} finished with {gold} gold after {moves} moves");
                println!("\n{name} leaves the fields with {} after {moves} moves.", format!("${gold}").gold_style());
                println!("Goodbye!");
            },
        }
    }
}

/// What occupies a cell, as far as the map is concerned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Cell {
    Player,
    Town,
    Monster(MonsterKind),
    Empty,
}

/// The player covers anything on the same cell; the town is never shared with a monster.
fn cell_at(grid: &Grid, player_pos: GridPos, roster: &Roster, pos: GridPos) -> Cell {
    if pos == player_pos {
        Cell::Player
    } else if pos == grid.town() {
        Cell::Town
    } else if let Some(monster) = roster.living().find(|m| m.pos == pos) {
        Cell::Monster(monster.kind)
    } else {
        Cell::Empty
    }
}

fn render_rows(grid: &Grid, player_pos: GridPos, roster: &Roster, paint: impl Fn(Cell) -> String) -> String {
    (0..grid.size())
        .map(|y| {
            (0..grid.size())
                .map(|x| paint(cell_at(grid, player_pos, roster, GridPos(x, y))))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Draw the board as text: one row per line, `@` for the player, `T` for town, a glyph per
/// living monster and `.` for empty cells.
pub fn render_map(grid: &Grid, player_pos: GridPos, roster: &Roster) -> String {
    render_rows(grid, player_pos, roster, |cell| {
        match cell {
            Cell::Player => PLAYER_GLYPH,
            Cell::Town => TOWN_GLYPH,
            Cell::Monster(kind) => kind.glyph(),
            Cell::Empty => EMPTY_GLYPH,
        }
        .to_string()
    })
}

/// Same layout as [`render_map`] with colored glyphs.
pub fn render_map_colored(grid: &Grid, player_pos: GridPos, roster: &Roster) -> String {
    render_rows(grid, player_pos, roster, |cell| match cell {
        Cell::Player => PLAYER_GLYPH.to_string().player_style().to_string(),
        Cell::Town => TOWN_GLYPH.to_string().town_style().to_string(),
        Cell::Monster(kind) => kind_glyph(kind).to_string(),
        Cell::Empty => EMPTY_GLYPH.to_string().dimmed().to_string(),
    })
}

/// `"Hello, {name}!"` centered in `width` columns.
pub fn welcome_banner(name: &str, width: usize) -> String {
    let message = format!("Hello, {name}!");
    format!("{message:^width$}")
}

/// Numbered price list inside a box border.
pub fn shop_menu(items: &[ShopItem]) -> Vec<String> {
    let rows: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| format!("{}) {:<10} ${:>7.2}", idx + 1, item.name, f64::from(item.price)))
        .collect();
    let inner = rows.iter().map(String::len).max().unwrap_or(0) + 2;
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("/{}\\", "-".repeat(inner)));
    lines.extend(rows.into_iter().map(|row| format!("| {row:<width$} |", width = inner - 2)));
    lines.push(format!("\\{}/", "-".repeat(inner)));
    lines
}

fn show_inventory(lines: &[InventoryLine]) {
    if lines.is_empty() {
        println!("Your inventory is empty.");
        return;
    }
    println!("\n{}", "Your Inventory:".underline());
    for (idx, line) in lines.iter().enumerate() {
        let marker = if line.equipped { " [equipped]".victory_style() } else { "".normal() };
        println!(
            "{}) {} ({}) - {}{marker}",
            idx + 1,
            line.name.item_style(),
            line.kind,
            line.detail
        );
    }
}

fn show_saves(entries: &[SaveFileEntry]) {
    if entries.is_empty() {
        println!("No saved games found.");
        return;
    }
    println!("{}", "Saved games:".underline());
    for entry in entries {
        let detail = match (&entry.status, &entry.summary) {
            (SaveFileStatus::Ready, Some(summary)) => format!(
                "{} | HP {} | Gold {} | Moves {}",
                summary.player_name, summary.health, summary.gold, summary.move_count
            ),
            (SaveFileStatus::VersionMismatch { save_version }, _) => format!("older version v{save_version}"),
            (SaveFileStatus::Corrupted { message }, _) => message.error_style().to_string(),
            (SaveFileStatus::Ready, None) => String::new(),
        };
        println!("  {} - {detail}", entry.slot.item_style());
    }
}

const HELP_LINES: [(&str, &str); 13] = [
    ("n | s | e | w", "walk one cell (also: north, go east, ...)"),
    ("map | look", "show the board"),
    ("status", "health, gold and moves"),
    ("inventory | inv", "list what you carry"),
    ("equip weapon|shield <n>", "equip the n-th weapon or shield"),
    ("shop", "see the shop's wares (town only)"),
    ("buy <n> [qty]", "buy from the shop (town only)"),
    ("rest | sleep", "restore health at the inn (town only)"),
    ("attack", "strike the monster you're fighting"),
    ("flee | run", "escape the fight"),
    ("throw | rock", "throw your rock at the monster"),
    ("save [slot] | load [slot] | saves", "manage saved games"),
    ("help | quit", "this help, or leave the game"),
];

fn show_help() {
    println!("{}", "Commands".underline());
    for (command, meaning) in HELP_LINES {
        println!("  {:<36} {}", command.item_style(), meaning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster::Monster;
    use crate::shop::CATALOG;

    fn monster(kind: MonsterKind, pos: GridPos, alive: bool) -> Monster {
        Monster {
            name: kind.to_string(),
            kind,
            pos,
            health: 10,
            power: 5,
            money: 10,
            alive,
        }
    }

    #[test]
    fn map_shows_town_player_and_living_monsters() {
        let grid = Grid::new(3, GridPos(0, 0)).unwrap();
        let roster = Roster::from_monsters(vec![
            monster(MonsterKind::Imp, GridPos(2, 0), true),
            monster(MonsterKind::Troll, GridPos(1, 2), false),
        ]);
        let map = render_map(&grid, GridPos(1, 1), &roster);
        assert_eq!(map, "T . i\n. @ .\n. . .");
    }

    #[test]
    fn player_glyph_covers_town_and_monsters() {
        let grid = Grid::new(2, GridPos(0, 0)).unwrap();
        let roster = Roster::from_monsters(vec![monster(MonsterKind::Gnome, GridPos(1, 1), true)]);
        assert_eq!(render_map(&grid, GridPos(0, 0), &roster), "@ .\n. g");
        assert_eq!(render_map(&grid, GridPos(1, 1), &roster), "T .\n. @");
    }

    #[test]
    fn welcome_banner_is_centered() {
        assert_eq!(welcome_banner("Wade", 14), " Hello, Wade! ");
        assert_eq!(welcome_banner("Diego", 24).len(), 24);
    }

    #[test]
    fn shop_menu_lines_share_a_width() {
        let lines = shop_menu(&CATALOG);
        assert_eq!(lines.len(), CATALOG.len() + 2);
        let width = lines[0].len();
        assert!(lines.iter().all(|line| line.len() == width));
        assert!(lines[1].contains("1) Bread"));
        assert!(lines[1].contains("$  20.00"));
    }
}
