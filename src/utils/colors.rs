//! ANSI color helpers for terminal output.
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// Diff colour:
/// \>0 → green
/// \<0 → red
/// 0 → plain
pub fn paint_diff(value: i64, text: &str) -> String {
    if value > 0 {
        Colour::Green.paint(text).to_string()
    } else if value < 0 {
        Colour::Red.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Greyed-out text for rows that carry no value.
pub fn dim(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}
