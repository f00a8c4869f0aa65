//! Helpers for the texts written by players

use once_cell::sync::Lazy;
use regex::Regex;


/// `^` followed by a digit colors the rest of the text in the game
static COLOR_CODES_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\^[0-9]"#)
        .expect("COLOR_CODES_REGEX compilation failed")
});

/// Removes the color codes, as well as the surrounding whitespaces, from a player's name
pub fn strip_colors(text: &str) -> String {
    COLOR_CODES_REGEX.replace_all(text, "")
        .trim()
        .to_string()
}
