//! Hangul vowel decks with a pronunciation cheatsheet.

use crate::domain::{Item, ItemBank};

const BASE: &[(&str, &str)] = &[
    ("ㅏ", "a"),
    ("ㅓ", "eo"),
    ("ㅗ", "o"),
    ("ㅜ", "u"),
    ("ㅡ", "eu"),
    ("ㅣ", "i"),
];

const Y_VOWELS: &[(&str, &str)] = &[
    ("ㅑ", "ya"),
    ("ㅕ", "yeo"),
    ("ㅛ", "yo"),
    ("ㅠ", "yu"),
];

const DIPHTHONGS: &[(&str, &str)] = &[
    ("ㅐ", "ae"),
    ("ㅔ", "e"),
    ("ㅚ", "oe"),
    ("ㅟ", "wi"),
];

const Y_DIPHTHONGS: &[(&str, &str)] = &[
    ("ㅒ", "yae"),
    ("ㅖ", "ye"),
    ("ㅘ", "wa"),
    ("ㅙ", "wae"),
    ("ㅝ", "wo"),
    ("ㅞ", "we"),
    ("ㅢ", "ui"),
];

const CHEATSHEET: &str = "\
ㅏ a   open, as in father
ㅓ eo  open o, tongue forward, lips relaxed
ㅗ o   rounded o, tongue back
ㅜ u   rounded u, lips pushed forward
ㅡ eu  unrounded u, lips spread flat
ㅣ i   as in machine";

/// Build a hangul deck from the requested vowel groups (`base`, `y`,
/// `diphthong`, `y_diphthong`). Unknown group names are skipped with a
/// warning.
pub fn build(groups: &[String]) -> ItemBank {
    let mut items = Vec::new();
    for group in groups {
        let table = match group.as_str() {
            "base" => BASE,
            "y" => Y_VOWELS,
            "diphthong" => DIPHTHONGS,
            "y_diphthong" => Y_DIPHTHONGS,
            other => {
                tracing::warn!("Skipping unknown hangul group: {}", other);
                continue;
            }
        };
        items.extend(table.iter().map(|(hangul, romaja)| Item::new(*hangul, *romaja)));
    }

    ItemBank::new(items)
        .with_voice_lang("ko_KR")
        .with_cheatsheet(CHEATSHEET)
}
