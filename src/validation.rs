//! Input normalization for answer comparison.
//!
//! Typed input is trimmed and NFC-normalized before matching; kana and
//! hangul arrive precomposed or decomposed depending on the input method.
//! Matching itself is plain equality against the accepted set; there is no
//! fuzzy tolerance, a near miss is a wrong answer.

use unicode_normalization::UnicodeNormalization;

use crate::domain::Answer;

/// Trim surrounding whitespace and normalize to NFC.
pub fn normalize(input: &str) -> String {
  input.trim().nfc().collect()
}

/// Whether normalized input matches one of the accepted forms.
pub fn matches_answer(answer: &Answer, input: &str) -> bool {
  let normalized = normalize(input);
  answer.accepted().any(|a| normalize(a) == normalized)
}
