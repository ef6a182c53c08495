//! Item banks: the fixed universe a drill session draws from.

use std::collections::{HashMap, HashSet};

use super::item::Item;

/// An ordered-by-key collection of items plus the provider extras a deck may
/// carry: a voice language for speech, supplementary cheatsheet text, and the
/// set of keys that cannot be told apart by ear.
#[derive(Debug, Clone)]
pub struct ItemBank {
  items: Vec<Item>,
  voice_lang: Option<String>,
  cheatsheet: Option<String>,
  same_sound: HashSet<String>,
}

impl ItemBank {
  /// Build a bank from items. Keys are sorted; items whose accepted answers
  /// overlap another item's are collected into the same-sound set.
  pub fn new(mut items: Vec<Item>) -> Self {
    items.sort_by(|a, b| a.key.cmp(&b.key));
    let same_sound = shared_answer_keys(&items);
    Self {
      items,
      voice_lang: None,
      cheatsheet: None,
      same_sound,
    }
  }

  pub fn with_voice_lang(mut self, lang: impl Into<String>) -> Self {
    self.voice_lang = Some(lang.into());
    self
  }

  pub fn with_cheatsheet(mut self, text: impl Into<String>) -> Self {
    self.cheatsheet = Some(text.into());
    self
  }

  pub fn items(&self) -> &[Item] {
    &self.items
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.items.iter().map(|i| i.key.as_str())
  }

  pub fn voice_lang(&self) -> Option<&str> {
    self.voice_lang.as_deref()
  }

  pub fn cheatsheet(&self) -> Option<&str> {
    self.cheatsheet.as_deref()
  }

  /// Whether this key's spoken form collides with another key's.
  pub fn sounds_like_another(&self, key: &str) -> bool {
    self.same_sound.contains(key)
  }
}

/// Keys whose accepted answers overlap some other item's accepted answers
/// (e.g. じ and ぢ both read "ji"). Consulted read-only when presenting in
/// recitation mode.
fn shared_answer_keys(items: &[Item]) -> HashSet<String> {
  let mut by_answer: HashMap<&str, Vec<&str>> = HashMap::new();
  for item in items {
    for form in item.answer.accepted() {
      by_answer.entry(form).or_default().push(&item.key);
    }
  }

  let mut shared = HashSet::new();
  for keys in by_answer.values() {
    if keys.len() > 1 {
      for key in keys {
        shared.insert((*key).to_string());
      }
    }
  }
  shared
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Answer;

  fn bank() -> ItemBank {
    ItemBank::new(vec![
      Item::new("い", "i"),
      Item::new("あ", "a"),
      Item::new("う", "u"),
    ])
  }

  #[test]
  fn test_items_sorted_by_key() {
    let binding = bank();
    let keys: Vec<&str> = binding.keys().collect();
    assert_eq!(keys, vec!["あ", "い", "う"]);
  }

  #[test]
  fn test_no_same_sound_for_distinct_answers() {
    let bank = bank();
    assert!(!bank.sounds_like_another("あ"));
    assert!(!bank.sounds_like_another("い"));
  }

  #[test]
  fn test_same_sound_detects_shared_readings() {
    let bank = ItemBank::new(vec![
      Item::new("じ", "ji"),
      Item::new("ぢ", Answer::Any(vec!["ji".to_string(), "dji".to_string()])),
      Item::new("か", "ka"),
    ]);
    assert!(bank.sounds_like_another("じ"));
    assert!(bank.sounds_like_another("ぢ"));
    assert!(!bank.sounds_like_another("か"));
  }

  #[test]
  fn test_voice_and_cheatsheet_builders() {
    let bank = bank().with_voice_lang("ja_JP").with_cheatsheet("notes");
    assert_eq!(bank.voice_lang(), Some("ja_JP"));
    assert_eq!(bank.cheatsheet(), Some("notes"));
  }
}
