//! Keyboard symbol decks for JIS-layout typing practice.
//!
//! Each symbol is both the prompt and the expected answer; these decks are
//! meant for typing mode. The `us` deck covers the symbols that move between
//! US and JIS layouts; the `jis` deck adds the JIS-only ones.

use crate::domain::{Item, ItemBank};

const US_BASE: &str = "\"&'()=~^@`{}[];+:*";
const JIS_EXTRA: &str = "|\\_";

/// Requested base layout is not a supported starting point.
#[derive(Debug, PartialEq, Eq)]
pub struct UnsupportedLayout(pub String);

impl std::fmt::Display for UnsupportedLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported base keyboard layout: {}", self.0)
    }
}

impl std::error::Error for UnsupportedLayout {}

/// Build a symbol deck for the given base layout (`us` or `jis`).
pub fn build(base: &str) -> Result<ItemBank, UnsupportedLayout> {
    let symbols: Vec<char> = match base {
        "us" => US_BASE.chars().collect(),
        "jis" => US_BASE.chars().chain(JIS_EXTRA.chars()).collect(),
        other => return Err(UnsupportedLayout(other.to_string())),
    };

    let items = symbols
        .into_iter()
        .map(|c| {
            let s = c.to_string();
            Item::new(s.clone(), s.as_str())
        })
        .collect();
    Ok(ItemBank::new(items))
}
