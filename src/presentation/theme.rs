//! Colors and color detection for terminal output

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

use super::cli::ColorWhen;

/// Semantic colors used by the reports
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

/// Decide whether stdout gets ANSI colors.
///
/// `auto` honors `NO_COLOR` and `TERM=dumb` and requires a terminal.
pub fn use_color(when: Option<ColorWhen>) -> bool {
    match when {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => auto_color(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        ),
    }
}

fn auto_color(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    let no_color = get_env("NO_COLOR").is_some();
    let dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
    is_tty && !no_color && !dumb
}

/// Paint `text` with `color` when `enabled`
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("{}", text.with(color))
    } else {
        text.to_string()
    }
}
