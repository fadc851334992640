//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::Options;

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn hero_style(&self) -> ColoredString;
    fn class_style(&self) -> ColoredString;
    fn region_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn enemy_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn narration_style(&self) -> ColoredString;
    fn menu_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn damage_style(&self) -> ColoredString;
    fn heal_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().bold().underline()
    }
    fn hero_style(&self) -> ColoredString {
        self.bold().bright_blue()
    }
    fn class_style(&self) -> ColoredString {
        self.truecolor(13, 130, 60)
    }
    fn region_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn enemy_style(&self) -> ColoredString {
        self.truecolor(200, 50, 50).bold()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn narration_style(&self) -> ColoredString {
        self.italic().truecolor(230, 230, 30)
    }
    fn menu_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(75, 180, 255)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn damage_style(&self) -> ColoredString {
        self.bright_red()
    }
    fn heal_style(&self) -> ColoredString {
        self.bright_green()
    }
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn hero_style(&self) -> ColoredString {
        self.as_str().hero_style()
    }
    fn class_style(&self) -> ColoredString {
        self.as_str().class_style()
    }
    fn region_style(&self) -> ColoredString {
        self.as_str().region_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn enemy_style(&self) -> ColoredString {
        self.as_str().enemy_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn narration_style(&self) -> ColoredString {
        self.as_str().narration_style()
    }
    fn menu_style(&self) -> ColoredString {
        self.as_str().menu_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn damage_style(&self) -> ColoredString {
        self.as_str().damage_style()
    }
    fn heal_style(&self) -> ColoredString {
        self.as_str().heal_style()
    }
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
}

/// Wrapping options for ordinary paragraphs.
pub fn normal_block(width: usize) -> Options<'static> {
    Options::new(width)
}

/// Wrapping options for indented list text.
pub fn indented_block(width: usize) -> Options<'static> {
    Options::new(width).initial_indent("    ").subsequent_indent("    ")
}
