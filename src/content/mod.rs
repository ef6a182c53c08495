//! Deck providers: built-in kana/hangul/keyboard tables and custom packs.

pub mod custom;
pub mod hangul;
pub mod jis;
pub mod kana;

use crate::config::DeckConfig;
use crate::domain::ItemBank;

use kana::{KanaGroups, KanaKind};

/// Deck resolution errors.
#[derive(Debug)]
pub enum DeckError {
    UnknownDeck(String),
    MissingPackPath,
    Pack(custom::PackLoadError),
    Layout(jis::UnsupportedLayout),
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::UnknownDeck(name) => write!(f, "Unknown deck: {}", name),
            DeckError::MissingPackPath => {
                write!(f, "Deck 'custom' needs a pack path in the configuration")
            }
            DeckError::Pack(e) => write!(f, "{}", e),
            DeckError::Layout(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DeckError {}

impl From<custom::PackLoadError> for DeckError {
    fn from(e: custom::PackLoadError) -> Self {
        DeckError::Pack(e)
    }
}

impl From<jis::UnsupportedLayout> for DeckError {
    fn from(e: jis::UnsupportedLayout) -> Self {
        DeckError::Layout(e)
    }
}

/// Build the item bank the configuration asks for.
pub fn load_bank(deck: &DeckConfig) -> Result<ItemBank, DeckError> {
    let groups = KanaGroups {
        dakuon: deck.dakuon,
        yoon: deck.yoon,
        yoon_dakuon: deck.yoon_dakuon,
    };

    match deck.name.as_str() {
        "hiragana" => Ok(kana::build(KanaKind::Hiragana, groups)),
        "katakana" => Ok(kana::build(KanaKind::Katakana, groups)),
        "hangul" => Ok(hangul::build(&deck.hangul_groups)),
        "us" | "jis" => Ok(jis::build(&deck.name)?),
        "custom" => {
            let path = deck.pack_path.as_deref().ok_or(DeckError::MissingPackPath)?;
            Ok(custom::load_pack(path)?)
        }
        other => Err(DeckError::UnknownDeck(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeckConfig;

    #[test]
    fn test_load_named_decks() {
        for name in ["hiragana", "katakana", "hangul", "us", "jis"] {
            let deck = DeckConfig {
                name: name.to_string(),
                ..DeckConfig::default()
            };
            let bank = load_bank(&deck).unwrap();
            assert!(bank.len() >= 2, "{} too small", name);
        }
    }

    #[test]
    fn test_unknown_deck_name() {
        let deck = DeckConfig {
            name: "klingon".to_string(),
            ..DeckConfig::default()
        };
        assert!(matches!(
            load_bank(&deck),
            Err(DeckError::UnknownDeck(_))
        ));
    }

    #[test]
    fn test_custom_without_pack_path() {
        let deck = DeckConfig {
            name: "custom".to_string(),
            ..DeckConfig::default()
        };
        assert!(matches!(
            load_bank(&deck),
            Err(DeckError::MissingPackPath)
        ));
    }
}
