//! Console I/O: prompting, timed line input, and report rendering.
//!
//! Everything the drill loop needs from the outside world goes through the
//! [`DrillIo`] trait so tests can script a session.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::audio::Speaker;
use crate::session::SessionReport;

/// One line of input with the wall-clock seconds it took to arrive.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedLine {
  pub text: String,
  pub seconds: f64,
}

/// The I/O surface a drill session drives.
///
/// `read_line` returning None is the termination signal (end of input or a
/// read failure); speech requests are fire-and-forget and may be ignored.
pub trait DrillIo {
  /// Print `prompt` without a trailing newline and block for one line.
  fn read_line(&mut self, prompt: &str) -> Option<TimedLine>;
  /// Print one line of feedback.
  fn show(&mut self, text: &str);
  /// Vocalize `text` if a voice is available.
  fn say(&mut self, text: &str);
  /// Whether spoken prompts are possible.
  fn can_say(&self) -> bool;
}

/// Interactive console backed by stdin/stdout and a [`Speaker`].
pub struct Console {
  speaker: Speaker,
}

impl Console {
  pub fn new(speaker: Speaker) -> Self {
    Self { speaker }
  }

  pub fn render_report(&mut self, report: &SessionReport) {
    let mut stdout = io::stdout();
    if let Err(e) = write_report(&mut stdout, report) {
      tracing::warn!("Failed to render session report: {}", e);
    }
  }
}

impl DrillIo for Console {
  fn read_line(&mut self, prompt: &str) -> Option<TimedLine> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt).ok()?;
    stdout.flush().ok()?;

    let mut line = String::new();
    let started = Instant::now();
    let read = io::stdin().lock().read_line(&mut line);
    let seconds = started.elapsed().as_secs_f64();

    match read {
      Ok(0) => None, // end of input
      Ok(_) => Some(TimedLine {
        text: line,
        seconds,
      }),
      Err(e) => {
        tracing::debug!("Input read failed, ending session: {}", e);
        None
      }
    }
  }

  fn show(&mut self, text: &str) {
    println!("{}", text);
  }

  fn say(&mut self, text: &str) {
    self.speaker.say(text);
  }

  fn can_say(&self) -> bool {
    self.speaker.has_voice()
  }
}

/// Write the end-of-session report: weakest items first, then the keys that
/// never came up.
pub fn write_report<W: Write>(out: &mut W, report: &SessionReport) -> io::Result<()> {
  writeln!(out)?;
  if !report.entries.is_empty() {
    writeln!(out, "Correct rate stats:")?;
    for entry in &report.entries {
      writeln!(
        out,
        "{}: {}/{}, {:.6}",
        entry.key, entry.correct, entry.total, entry.weight
      )?;
    }
  }
  if !report.unvisited.is_empty() {
    writeln!(out, "Unvisited:")?;
    writeln!(out, "{}", report.unvisited.join(" "))?;
  }
  Ok(())
}
