use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kana_drill::audio::Speaker;
use kana_drill::console::Console;
use kana_drill::session::DrillSession;
use kana_drill::{config, content};

fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kana_drill=info".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let config = config::load();
  let bank = content::load_bank(&config.deck).expect("Failed to load deck");
  tracing::info!("Deck '{}' with {} items", config.deck.name, bank.len());

  let speaker = if config.session.say_enabled
    || config.session.say_before_prompt
    || config.session.recitation_mode
  {
    Speaker::resolve(
      bank.voice_lang(),
      config.session.voice_override.as_deref(),
    )
  } else {
    Speaker::silent()
  };

  let mut console = Console::new(speaker);
  let mut session =
    DrillSession::new(&bank, &config.session).expect("Failed to start session");
  let report = session.run(&mut console).expect("Session failed");
  console.render_report(&report);
}
