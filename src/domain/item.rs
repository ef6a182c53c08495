//! Quiz items: a prompt key paired with its accepted answer(s).

/// Accepted answer for an item: a single string, or a set of equally
/// accepted alternatives (e.g. し -> "shi" or "si").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
  Single(String),
  Any(Vec<String>),
}

impl Answer {
  /// Iterate over every accepted form.
  pub fn accepted(&self) -> impl Iterator<Item = &str> {
    let forms: &[String] = match self {
      Answer::Single(s) => std::slice::from_ref(s),
      Answer::Any(v) => v.as_slice(),
    };
    forms.iter().map(String::as_str)
  }

  /// The primary form, used for display and for the expected answer length.
  pub fn primary(&self) -> &str {
    match self {
      Answer::Single(s) => s,
      Answer::Any(v) => v.first().map(String::as_str).unwrap_or(""),
    }
  }

  pub fn accepts(&self, input: &str) -> bool {
    self.accepted().any(|a| a == input)
  }

  /// Alternatives joined with `/` for feedback lines. Display only; the
  /// accepted set stays the equality contract.
  pub fn display(&self) -> String {
    match self {
      Answer::Single(s) => s.clone(),
      Answer::Any(v) => v.join("/"),
    }
  }
}

impl From<&str> for Answer {
  fn from(s: &str) -> Self {
    Answer::Single(s.to_string())
  }
}

impl From<Vec<String>> for Answer {
  fn from(v: Vec<String>) -> Self {
    match v.len() {
      1 => Answer::Single(v.into_iter().next().unwrap_or_default()),
      _ => Answer::Any(v),
    }
  }
}

/// A single quiz unit. Immutable for the session lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
  pub key: String,
  pub answer: Answer,
}

impl Item {
  pub fn new(key: impl Into<String>, answer: impl Into<Answer>) -> Self {
    Self {
      key: key.into(),
      answer: answer.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_single_answer_accepts_exact() {
    let answer = Answer::Single("ka".to_string());
    assert!(answer.accepts("ka"));
    assert!(!answer.accepts("ga"));
    assert!(!answer.accepts(""));
  }

  #[test]
  fn test_any_answer_accepts_each_alternative() {
    let answer = Answer::Any(vec!["shi".to_string(), "si".to_string()]);
    assert!(answer.accepts("shi"));
    assert!(answer.accepts("si"));
    assert!(!answer.accepts("sh"));
  }

  #[test]
  fn test_primary_is_first_alternative() {
    let answer = Answer::Any(vec!["shi".to_string(), "si".to_string()]);
    assert_eq!(answer.primary(), "shi");
    assert_eq!(Answer::Single("a".to_string()).primary(), "a");
  }

  #[test]
  fn test_display_joins_alternatives() {
    let answer = Answer::Any(vec!["nn".to_string(), "n".to_string()]);
    assert_eq!(answer.display(), "nn/n");
    assert_eq!(Answer::Single("wa".to_string()).display(), "wa");
  }

  #[test]
  fn test_from_vec_collapses_singleton() {
    let answer: Answer = vec!["a".to_string()].into();
    assert_eq!(answer, Answer::Single("a".to_string()));
    let answer: Answer = vec!["fu".to_string(), "hu".to_string()].into();
    assert!(matches!(answer, Answer::Any(_)));
  }
}
