//! Kana decks: hiragana and katakana romanization tables.
//!
//! The gojūon grid is generated from row tables (consonant prefix × vowels
//! `aiueo`); irregular readings are overlaid afterwards, some with several
//! accepted romanizations (し -> shi or si). Optional groups add the voiced
//! rows (dakuon) and the digraphs (yōon).

use std::collections::BTreeMap;

use crate::domain::{Item, ItemBank};

const VOWELS: &str = "aiueo";

/// Row tables for one syllabary.
struct KanaTables {
    rows: &'static [(&'static str, &'static str)],
    specials: &'static [(&'static str, &'static [&'static str])],
    dakuon_rows: &'static [(&'static str, &'static str)],
    dakuon_specials: &'static [(&'static str, &'static [&'static str])],
    yoon_rows: &'static [(&'static str, &'static str)],
    yoon_dakuon_rows: &'static [(&'static str, &'static str)],
    /// Vowel letters paired with the small kana that carry them.
    yoon_vowels: (&'static str, &'static str),
}

static HIRAGANA: KanaTables = KanaTables {
    rows: &[
        ("", "あいうえお"),
        ("k", "かきくけこ"),
        ("s", "さしすせそ"),
        ("t", "たちつてと"),
        ("n", "なにぬねの"),
        ("h", "はひふへほ"),
        ("m", "まみむめも"),
        ("r", "らりるれろ"),
    ],
    specials: &[
        ("や", &["ya"]),
        ("ゆ", &["yu"]),
        ("よ", &["yo"]),
        ("わ", &["wa"]),
        ("を", &["wo"]),
        ("ん", &["nn", "n"]),
        ("し", &["shi", "si"]),
        ("ち", &["chi", "ti"]),
        ("つ", &["tsu", "tu"]),
        ("ふ", &["fu", "hu"]),
    ],
    dakuon_rows: &[
        ("g", "がぎぐげご"),
        ("z", "ざじずぜぞ"),
        ("d", "だぢづでど"),
        ("b", "ばびぶべぼ"),
        ("p", "ぱぴぷぺぽ"),
    ],
    dakuon_specials: &[("じ", &["ji"]), ("ぢ", &["ji", "dji"])],
    yoon_rows: &[
        ("ky", "き"),
        ("sy", "し"),
        ("ty", "ち"),
        ("ny", "に"),
        ("hy", "ひ"),
        ("my", "み"),
        ("ry", "り"),
    ],
    yoon_dakuon_rows: &[
        ("gy", "ぎ"),
        ("jy", "じ"),
        ("dy", "ぢ"),
        ("by", "び"),
        ("py", "ぴ"),
    ],
    yoon_vowels: ("auo", "ゃゅょ"),
};

static KATAKANA: KanaTables = KanaTables {
    rows: &[
        ("", "アイウエオ"),
        ("k", "カキクケコ"),
        ("s", "サシスセソ"),
        ("t", "タチツテト"),
        ("n", "ナニヌネノ"),
        ("h", "ハヒフヘホ"),
        ("m", "マミムメモ"),
        ("r", "ラリルレロ"),
    ],
    specials: &[
        ("ヤ", &["ya"]),
        ("ユ", &["yu"]),
        ("ヨ", &["yo"]),
        ("ワ", &["wa"]),
        ("ヲ", &["wo"]),
        ("ン", &["nn", "n"]),
        ("シ", &["shi", "si"]),
        ("チ", &["chi", "ti"]),
        ("ツ", &["tsu", "tu"]),
        ("フ", &["fu", "hu"]),
    ],
    dakuon_rows: &[
        ("g", "ガギグゲゴ"),
        ("z", "ザジズゼゾ"),
        ("d", "ダヂヅデド"),
        ("b", "バビブベボ"),
        ("p", "パピプペポ"),
    ],
    dakuon_specials: &[("ジ", &["ji"])],
    yoon_rows: &[
        ("ky", "キ"),
        ("sy", "シ"),
        ("ty", "チ"),
        ("ny", "ニ"),
        ("hy", "ヒ"),
        ("my", "ミ"),
        ("ry", "リ"),
    ],
    yoon_dakuon_rows: &[
        ("gy", "ギ"),
        ("jy", "ジ"),
        ("dy", "ヂ"),
        ("by", "ビ"),
        ("py", "ピ"),
    ],
    yoon_vowels: ("auo", "ャュョ"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KanaKind {
    Hiragana,
    Katakana,
}

/// Row groups to include beyond the plain gojūon.
#[derive(Debug, Clone, Copy, Default)]
pub struct KanaGroups {
    pub dakuon: bool,
    pub yoon: bool,
    pub yoon_dakuon: bool,
}

/// Build a kana deck. Later overlays replace earlier readings for the same
/// character, exactly like the special tables above expect.
pub fn build(kind: KanaKind, groups: KanaGroups) -> ItemBank {
    let tables = match kind {
        KanaKind::Hiragana => &HIRAGANA,
        KanaKind::Katakana => &KATAKANA,
    };

    let mut table: BTreeMap<String, Vec<String>> = BTreeMap::new();
    add_rows(&mut table, tables.rows);
    add_specials(&mut table, tables.specials);
    if groups.dakuon {
        add_rows(&mut table, tables.dakuon_rows);
        add_specials(&mut table, tables.dakuon_specials);
    }
    if groups.yoon {
        add_digraphs(&mut table, tables.yoon_rows, tables.yoon_vowels);
    }
    if groups.yoon_dakuon {
        add_digraphs(&mut table, tables.yoon_dakuon_rows, tables.yoon_vowels);
    }

    let items = table
        .into_iter()
        .map(|(key, answers)| Item::new(key, answers))
        .collect();
    ItemBank::new(items).with_voice_lang("ja_JP")
}

fn add_rows(table: &mut BTreeMap<String, Vec<String>>, rows: &[(&str, &str)]) {
    for (prefix, kana) in rows {
        for (ch, vowel) in kana.chars().zip(VOWELS.chars()) {
            table.insert(ch.to_string(), vec![format!("{}{}", prefix, vowel)]);
        }
    }
}

fn add_specials(table: &mut BTreeMap<String, Vec<String>>, specials: &[(&str, &[&str])]) {
    for (key, readings) in specials {
        let readings = readings.iter().map(|r| r.to_string()).collect();
        table.insert(key.to_string(), readings);
    }
}

fn add_digraphs(
    table: &mut BTreeMap<String, Vec<String>>,
    rows: &[(&str, &str)],
    (vowels, small_kana): (&str, &str),
) {
    for (prefix, base) in rows {
        for (vowel, small) in vowels.chars().zip(small_kana.chars()) {
            table.insert(
                format!("{}{}", base, small),
                vec![format!("{}{}", prefix, vowel)],
            );
        }
    }
}
