//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait applies ANSI styling via the `colored` crate. It is implemented
//! for `&str` and `String` so literals and formatted text can be styled directly.

use colored::{ColoredString, Colorize};

use crate::monster::MonsterKind;

pub trait GameStyle {
    fn player_style(&self) -> ColoredString;
    fn town_style(&self) -> ColoredString;
    fn monster_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn gold_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn damage_style(&self) -> ColoredString;
    fn victory_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn story_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn player_style(&self) -> ColoredString {
        self.bold().truecolor(102, 208, 250)
    }
    fn town_style(&self) -> ColoredString {
        self.bold().truecolor(223, 77, 10)
    }
    fn monster_style(&self) -> ColoredString {
        self.truecolor(230, 80, 80)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn gold_style(&self) -> ColoredString {
        self.bold().truecolor(240, 200, 30)
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn damage_style(&self) -> ColoredString {
        self.truecolor(200, 50, 50)
    }
    fn victory_style(&self) -> ColoredString {
        self.bold().truecolor(110, 220, 110)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(180, 180, 180)
    }
    fn section_style(&self) -> ColoredString {
        format!("[{self}]").truecolor(75, 80, 75)
    }
    fn story_style(&self) -> ColoredString {
        self.italic().truecolor(220, 40, 220)
    }
}

impl GameStyle for String {
    fn player_style(&self) -> ColoredString {
        self.as_str().player_style()
    }
    fn town_style(&self) -> ColoredString {
        self.as_str().town_style()
    }
    fn monster_style(&self) -> ColoredString {
        self.as_str().monster_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn gold_style(&self) -> ColoredString {
        self.as_str().gold_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn damage_style(&self) -> ColoredString {
        self.as_str().damage_style()
    }
    fn victory_style(&self) -> ColoredString {
        self.as_str().victory_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn story_style(&self) -> ColoredString {
        self.as_str().story_style()
    }
}

/// Paint a monster glyph in its kind's color.
pub fn kind_glyph(kind: MonsterKind) -> ColoredString {
    let [r, g, b] = kind.color();
    kind.glyph().to_string().bold().truecolor(r, g, b)
}
