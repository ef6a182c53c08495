//! Speech output via the platform `say` command.
//!
//! Speech is strictly fire-and-forget: utterances are spawned detached and
//! never waited on, so they cannot block the drill loop or affect timing.

use std::process::{Command, Stdio};

/// Find an installed voice for a language tag (e.g. `ja_JP`).
///
/// Parses `say -v ?` output, whose lines look like
/// `Kyoko               ja_JP    # こんにちは...`. Returns the first voice
/// listed for the language, or None when the lookup fails or no voice
/// matches.
pub fn find_voice(lang_tag: &str) -> Option<String> {
    let output = Command::new("say").args(["-v", "?"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let listing = String::from_utf8_lossy(&output.stdout);

    for line in listing.lines() {
        let spec = line.split('#').next().unwrap_or("").trim_end();
        // Last token is the language tag; everything before it is the voice
        // name (names may contain spaces).
        if let Some((name, lang)) = spec.rsplit_once(char::is_whitespace) {
            if lang == lang_tag {
                let name = name.trim_end();
                if !name.is_empty() {
                    return Some(name.to_string());
                }
            }
        }
    }
    None
}

/// Text-to-speech handle. Utterances go through the `say` command; when
/// spawning fails once, further attempts are skipped for the session.
#[derive(Debug)]
pub struct Speaker {
    voice: Option<String>,
    enabled: bool,
}

impl Speaker {
    /// Resolve a speaker for a deck: an explicit voice override wins,
    /// otherwise the first installed voice for the deck's language is used.
    pub fn resolve(lang_tag: Option<&str>, voice_override: Option<&str>) -> Self {
        let voice = match (voice_override, lang_tag) {
            (Some(v), _) => Some(v.to_string()),
            (None, Some(lang)) => {
                let found = find_voice(lang);
                match &found {
                    Some(v) => tracing::info!("Using voice '{}' for {}", v, lang),
                    None => tracing::info!("No installed voice for {}", lang),
                }
                found
            }
            (None, None) => None,
        };
        Self {
            voice,
            enabled: true,
        }
    }

    /// A speaker that never produces sound (decks without audio).
    pub fn silent() -> Self {
        Self {
            voice: None,
            enabled: false,
        }
    }

    /// Whether a concrete voice is available. Recitation decks require this.
    pub fn has_voice(&self) -> bool {
        self.enabled && self.voice.is_some()
    }

    /// Speak `text` without waiting for playback.
    pub fn say(&mut self, text: &str) {
        if !self.enabled || text.is_empty() {
            return;
        }
        let mut cmd = Command::new("say");
        if let Some(voice) = &self.voice {
            cmd.args(["-v", voice.as_str()]);
        }
        let spawned = cmd
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        if let Err(e) = spawned {
            tracing::debug!("Disabling speech, say failed to spawn: {}", e);
            self.enabled = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_speaker_has_no_voice() {
        assert!(!Speaker::silent().has_voice());
    }

    #[test]
    fn test_resolve_with_override_keeps_voice() {
        let speaker = Speaker::resolve(Some("ja_JP"), Some("Kyoko"));
        assert!(speaker.has_voice());
    }

    #[test]
    fn test_say_on_missing_binary_disables_quietly() {
        // Whatever the host has installed, an empty utterance is a no-op and
        // a disabled speaker never spawns.
        let mut speaker = Speaker::silent();
        speaker.say("あ");
        assert!(!speaker.enabled);
    }
}
