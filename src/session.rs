//! Drill session loop: draw, present, score, reweight, report.

use std::collections::BTreeMap;

use crate::config::SessionOptions;
use crate::console::DrillIo;
use crate::domain::{Answer, ItemBank};
use crate::scheduler::{self, DimensionMismatch, WeightedSampler};
use crate::validation;

const WAIT_TOKEN: &str = "wait";
const CHEAT_TOKEN: &str = "cheat";

/// Session-level failures. Interruption (end of input) is a normal
/// termination, not an error.
#[derive(Debug)]
pub enum SessionError {
  InvalidConfiguration(String),
  Scheduler(DimensionMismatch),
}

impl std::fmt::Display for SessionError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SessionError::InvalidConfiguration(reason) => {
        write!(f, "invalid session configuration: {}", reason)
      }
      SessionError::Scheduler(e) => write!(f, "scheduler invariant violated: {}", e),
    }
  }
}

impl std::error::Error for SessionError {}

impl From<DimensionMismatch> for SessionError {
  fn from(e: DimensionMismatch) -> Self {
    SessionError::Scheduler(e)
  }
}

/// Per-item tally for the final report. Never feeds back into sampling.
#[derive(Debug, Clone, Copy)]
struct HistEntry {
  index: usize,
  correct: u32,
  total: u32,
}

/// One line of the end-of-session report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
  pub key: String,
  pub correct: u32,
  pub total: u32,
  pub weight: f64,
}

/// End-of-session statistics: encountered items sorted worst-first, plus the
/// keys never drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
  pub entries: Vec<ReportEntry>,
  pub unvisited: Vec<String>,
}

/// A drawn item resolved against the session mode, retained across control
/// tokens so the same question is asked again instead of drawing anew.
struct Trial<'a> {
  index: usize,
  key: &'a str,
  prompt: String,
  spoken: &'a str,
  expected: Answer,
  answer_len: usize,
}

/// The quiz loop state machine. Owns the sampler and histogram; borrows the
/// item bank read-only.
pub struct DrillSession<'a> {
  bank: &'a ItemBank,
  opts: &'a SessionOptions,
  sampler: WeightedSampler,
  histogram: BTreeMap<String, HistEntry>,
}

impl<'a> DrillSession<'a> {
  /// Every item starts at neutral weight 1.0.
  pub fn new(bank: &'a ItemBank, opts: &'a SessionOptions) -> Result<Self, SessionError> {
    if bank.len() < 2 {
      return Err(SessionError::InvalidConfiguration(
        "deck needs at least 2 items".to_string(),
      ));
    }
    let keys = bank.keys().map(str::to_string).collect();
    let sampler = WeightedSampler::new(keys, vec![1.0; bank.len()])?;
    Ok(Self {
      bank,
      opts,
      sampler,
      histogram: BTreeMap::new(),
    })
  }

  /// Run trials until the input side signals termination, then return the
  /// session report.
  pub fn run(&mut self, io: &mut dyn DrillIo) -> Result<SessionReport, SessionError> {
    if self.opts.recitation_mode && !io.can_say() {
      return Err(SessionError::InvalidConfiguration(
        "recitation mode needs an installed voice".to_string(),
      ));
    }

    let mut pending: Option<Trial> = None;
    loop {
      let trial = match pending.take() {
        Some(redo) => redo,
        None => self.next_trial(),
      };

      if self.opts.recitation_mode || self.opts.say_before_prompt {
        io.say(trial.spoken);
      }

      let Some(line) = io.read_line(&trial.prompt) else {
        break;
      };
      let input = validation::normalize(&line.text);

      // Control tokens replay the same trial; weights and histogram stay
      // untouched.
      if input == WAIT_TOKEN {
        if !wait_for_resume(io) {
          break;
        }
        pending = Some(trial);
        continue;
      }
      if input == CHEAT_TOKEN {
        match self.bank.cheatsheet() {
          Some(sheet) => io.show(sheet),
          None => io.show("No cheatsheet for this deck."),
        }
        pending = Some(trial);
        continue;
      }
      if input.is_empty() && !trial.expected.accepts("") {
        pending = Some(trial);
        continue;
      }

      let correct = validation::matches_answer(&trial.expected, &input);
      if correct {
        io.show(&format!("Correct! Time elapsed {:.3}s.", line.seconds));
      } else {
        let bell = if self.opts.notify_on_wrong { "\u{7}" } else { "" };
        io.show(&format!(
          "{}Wrong! It should be '{}'.",
          bell,
          trial.expected.display()
        ));
      }
      if self.opts.say_enabled {
        io.say(trial.spoken);
      }

      let entry = self.histogram.entry(trial.key.to_string()).or_insert(HistEntry {
        index: trial.index,
        correct: 0,
        total: 0,
      });
      entry.total += 1;
      entry.correct += u32::from(correct);

      let (index, answer_len) = (trial.index, trial.answer_len);
      self
        .sampler
        .update_weights(|ws| scheduler::adjust(ws, index, line.seconds, answer_len, correct))?;
    }

    Ok(self.report())
  }

  fn next_trial(&mut self) -> Trial<'a> {
    let index = self.sampler.draw().0;
    let item = &self.bank.items()[index];

    let (shown, expected) = if self.opts.typing_mode {
      (item.key.clone(), Answer::Single(item.key.clone()))
    } else if self.opts.reverse_mode {
      (item.answer.display(), Answer::Single(item.key.clone()))
    } else {
      (item.key.clone(), item.answer.clone())
    };

    // Recitation hides the visual prompt, except for keys another item
    // shares a reading with; those cannot be identified by ear alone.
    let visible = !self.opts.recitation_mode || self.bank.sounds_like_another(&item.key);
    let prompt = if visible {
      format!("'{}' is: ", shown)
    } else {
      "(audio) is: ".to_string()
    };

    let answer_len = expected.primary().chars().count().max(1);
    Trial {
      index,
      key: &item.key,
      prompt,
      spoken: &item.key,
      expected,
      answer_len,
    }
  }

  /// Worst-performing items first: ascending by (correct ratio, attempts).
  fn report(&self) -> SessionReport {
    let weights = self.sampler.weights();
    let mut entries: Vec<ReportEntry> = self
      .histogram
      .iter()
      .map(|(key, h)| ReportEntry {
        key: key.clone(),
        correct: h.correct,
        total: h.total,
        weight: weights[h.index],
      })
      .collect();
    entries.sort_by(|a, b| {
      let ka = (f64::from(a.correct) / f64::from(a.total), a.total);
      let kb = (f64::from(b.correct) / f64::from(b.total), b.total);
      ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal)
    });

    let unvisited = self
      .bank
      .keys()
      .filter(|k| !self.histogram.contains_key(*k))
      .map(str::to_string)
      .collect();

    SessionReport { entries, unvisited }
  }
}

/// Nested pause loop entered by the `wait` token. Returns false when the
/// input side terminates instead of resuming.
fn wait_for_resume(io: &mut dyn DrillIo) -> bool {
  loop {
    match io.read_line("Type 'break' to continue... ") {
      None => return false,
      Some(line) if line.text.trim() == "break" => return true,
      Some(_) => {}
    }
  }
}
