//! Custom deck packs - reads item definitions from JSON files.
//!
//! A pack file maps keys to accepted answers (a string or an array of
//! equally accepted strings) and may carry a voice language and a
//! cheatsheet:
//!
//! ```json
//! {
//!   "items": { "あ": "a", "し": ["shi", "si"] },
//!   "voice": "ja_JP",
//!   "cheatsheet": "..."
//! }
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::domain::{Item, ItemBank};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerSpec {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct PackFile {
    items: BTreeMap<String, AnswerSpec>,
    #[serde(default)]
    voice: Option<String>,
    #[serde(default)]
    cheatsheet: Option<String>,
}

/// Pack loading errors.
#[derive(Debug)]
pub enum PackLoadError {
    FileNotFound(String),
    IoError(String, String),
    ParseError(String, String),
    TooFewItems(String, usize),
}

impl std::fmt::Display for PackLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackLoadError::FileNotFound(path) => write!(f, "Pack file not found: {}", path),
            PackLoadError::IoError(path, err) => write!(f, "IO error reading {}: {}", path, err),
            PackLoadError::ParseError(path, err) => write!(f, "Parse error in {}: {}", path, err),
            PackLoadError::TooFewItems(path, n) => {
                write!(f, "Pack {} has {} item(s), need at least 2", path, n)
            }
        }
    }
}

impl std::error::Error for PackLoadError {}

/// Load a deck from a pack file.
pub fn load_pack(path: &Path) -> Result<ItemBank, PackLoadError> {
    if !path.exists() {
        return Err(PackLoadError::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| PackLoadError::IoError(path.display().to_string(), e.to_string()))?;

    let pack: PackFile = serde_json::from_str(&content)
        .map_err(|e| PackLoadError::ParseError(path.display().to_string(), e.to_string()))?;

    if pack.items.len() < 2 {
        return Err(PackLoadError::TooFewItems(
            path.display().to_string(),
            pack.items.len(),
        ));
    }
    tracing::debug!("Loaded {} items from {}", pack.items.len(), path.display());

    let items = pack
        .items
        .into_iter()
        .map(|(key, spec)| {
            let answers = match spec {
                AnswerSpec::One(s) => vec![s],
                AnswerSpec::Many(v) => v,
            };
            Item::new(key, answers)
        })
        .collect();

    let mut bank = ItemBank::new(items);
    if let Some(voice) = pack.voice {
        bank = bank.with_voice_lang(voice);
    }
    if let Some(sheet) = pack.cheatsheet {
        bank = bank.with_cheatsheet(sheet);
    }
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_pack(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("pack.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_pack_with_alternatives() {
        let dir = TempDir::new().unwrap();
        let path = write_pack(
            &dir,
            r#"{
              "items": { "あ": "a", "し": ["shi", "si"] },
              "voice": "ja_JP",
              "cheatsheet": "notes"
            }"#,
        );

        let bank = load_pack(&path).unwrap();
        assert_eq!(bank.len(), 2);
        let shi = bank.items().iter().find(|i| i.key == "し").unwrap();
        assert!(shi.answer.accepts("shi"));
        assert!(shi.answer.accepts("si"));
        assert_eq!(bank.voice_lang(), Some("ja_JP"));
        assert_eq!(bank.cheatsheet(), Some("notes"));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_pack(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PackLoadError::FileNotFound(_)));
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_pack(&dir, "{ not json");
        let err = load_pack(&path).unwrap_err();
        assert!(matches!(err, PackLoadError::ParseError(_, _)));
    }

    #[test]
    fn test_single_item_pack_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_pack(&dir, r#"{ "items": { "あ": "a" } }"#);
        let err = load_pack(&path).unwrap_err();
        assert!(matches!(err, PackLoadError::TooFewItems(_, 1)));
    }

    #[test]
    fn test_voice_and_cheatsheet_optional() {
        let dir = TempDir::new().unwrap();
        let path = write_pack(&dir, r#"{ "items": { "a": "1", "b": "2" } }"#);
        let bank = load_pack(&path).unwrap();
        assert!(bank.voice_lang().is_none());
        assert!(bank.cheatsheet().is_none());
    }
}
