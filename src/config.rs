//! Drill configuration.
//!
//! Values are resolved with the priority config file > environment >
//! default. The config file is `config.toml` in the working directory; the
//! `.env` file is honored for the environment fallbacks.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Deck selected when neither config.toml nor DRILL_DECK says otherwise.
pub const DEFAULT_DECK: &str = "katakana";

/// Which deck to build and which optional row groups to include.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    pub name: String,
    /// Kana decks: include the voiced (dakuon/handakuon) rows.
    pub dakuon: bool,
    /// Kana decks: include the yōon digraphs.
    pub yoon: bool,
    /// Kana decks: include the voiced yōon digraphs.
    pub yoon_dakuon: bool,
    /// Hangul deck: vowel groups to include (base, y, diphthong, y_diphthong).
    pub hangul_groups: Vec<String>,
    /// Custom deck: path to the pack file.
    pub pack_path: Option<PathBuf>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DECK.to_string(),
            dakuon: false,
            yoon: false,
            yoon_dakuon: false,
            hangul_groups: vec!["base".to_string()],
            pack_path: None,
        }
    }
}

/// Behavior switches for a drill session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Speak the item after each scored answer.
    pub say_enabled: bool,
    /// Speak the prompt when presenting it.
    pub say_before_prompt: bool,
    /// Ring the terminal bell on a wrong answer.
    pub notify_on_wrong: bool,
    /// The key is both prompt and expected answer (keyboard decks).
    pub typing_mode: bool,
    /// Swap prompt and answer roles.
    pub reverse_mode: bool,
    /// Hide the visual prompt and speak it instead; needs a voice.
    pub recitation_mode: bool,
    /// Use this voice instead of discovering one for the deck's language.
    pub voice_override: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            say_enabled: true,
            say_before_prompt: false,
            notify_on_wrong: false,
            typing_mode: false,
            reverse_mode: false,
            recitation_mode: false,
            voice_override: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrillConfig {
    pub deck: DeckConfig,
    pub session: SessionOptions,
}

// Config file structure, every field optional.

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    deck: Option<FileDeck>,
    session: Option<FileSession>,
}

#[derive(Debug, Default, Deserialize)]
struct FileDeck {
    name: Option<String>,
    dakuon: Option<bool>,
    yoon: Option<bool>,
    yoon_dakuon: Option<bool>,
    groups: Option<Vec<String>>,
    pack: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileSession {
    say: Option<bool>,
    say_before_prompt: Option<bool>,
    notify_on_wrong: Option<bool>,
    typing: Option<bool>,
    reverse: Option<bool>,
    recitation: Option<bool>,
    voice: Option<String>,
}

/// Load configuration from `config.toml` in the working directory.
pub fn load() -> DrillConfig {
    load_from(Path::new("config.toml"))
}

/// Load configuration from a specific file path.
pub fn load_from(path: &Path) -> DrillConfig {
    let _ = dotenvy::dotenv();

    let file = match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<FileConfig>(&contents) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Ignoring malformed {}: {}", path.display(), e);
                FileConfig::default()
            }
        },
        Err(_) => FileConfig::default(),
    };
    let file_deck = file.deck.unwrap_or_default();
    let file_session = file.session.unwrap_or_default();

    let defaults = DrillConfig::default();

    let name = if let Some(name) = file_deck.name {
        tracing::info!("Using deck from {}: {}", path.display(), name);
        name
    } else if let Ok(name) = std::env::var("DRILL_DECK") {
        tracing::info!("Using deck from DRILL_DECK env: {}", name);
        name
    } else {
        tracing::info!("Using default deck: {}", DEFAULT_DECK);
        DEFAULT_DECK.to_string()
    };

    let voice_override = file_session
        .voice
        .or_else(|| std::env::var("DRILL_VOICE").ok());

    DrillConfig {
        deck: DeckConfig {
            name,
            dakuon: file_deck.dakuon.unwrap_or(defaults.deck.dakuon),
            yoon: file_deck.yoon.unwrap_or(defaults.deck.yoon),
            yoon_dakuon: file_deck.yoon_dakuon.unwrap_or(defaults.deck.yoon_dakuon),
            hangul_groups: file_deck.groups.unwrap_or(defaults.deck.hangul_groups),
            pack_path: file_deck.pack.map(PathBuf::from),
        },
        session: SessionOptions {
            say_enabled: file_session.say.unwrap_or(defaults.session.say_enabled),
            say_before_prompt: file_session
                .say_before_prompt
                .unwrap_or(defaults.session.say_before_prompt),
            notify_on_wrong: file_session
                .notify_on_wrong
                .unwrap_or(defaults.session.notify_on_wrong),
            typing_mode: file_session.typing.unwrap_or(defaults.session.typing_mode),
            reverse_mode: file_session.reverse.unwrap_or(defaults.session.reverse_mode),
            recitation_mode: file_session
                .recitation
                .unwrap_or(defaults.session.recitation_mode),
            voice_override,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let temp = TempDir::new().unwrap();
        let config = load_from(&temp.path().join("config.toml"));
        assert_eq!(config.deck.name, DEFAULT_DECK);
        assert!(!config.deck.dakuon);
        assert!(config.session.say_enabled);
        assert!(!config.session.reverse_mode);
        assert!(config.session.voice_override.is_none());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[deck]
name = "hiragana"
dakuon = true
yoon = true

[session]
say = false
reverse = true
voice = "Kyoko"
"#,
        )
        .unwrap();

        let config = load_from(&path);
        assert_eq!(config.deck.name, "hiragana");
        assert!(config.deck.dakuon);
        assert!(config.deck.yoon);
        assert!(!config.deck.yoon_dakuon);
        assert!(!config.session.say_enabled);
        assert!(config.session.reverse_mode);
        assert_eq!(config.session.voice_override.as_deref(), Some("Kyoko"));
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "deck = not toml [").unwrap();

        let config = load_from(&path);
        assert_eq!(config.deck.name, DEFAULT_DECK);
    }

    #[test]
    fn test_custom_pack_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[deck]
name = "custom"
pack = "decks/radicals.json"
"#,
        )
        .unwrap();

        let config = load_from(&path);
        assert_eq!(config.deck.name, "custom");
        assert_eq!(
            config.deck.pack_path.as_deref(),
            Some(Path::new("decks/radicals.json"))
        );
    }
}
