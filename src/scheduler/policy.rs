//! Adaptive weight updates driven by answer correctness and latency.
//!
//! Weights steer the sampler toward items the learner gets wrong or answers
//! slowly. 1.0 is neutral; suppressed items drift back up to neutral over
//! time so easy material eventually resurfaces.

/// Weights never fall below this; weight sums must stay positive.
pub const WEIGHT_FLOOR: f64 = 0.01;

/// Per-trial recovery step for weights suppressed below neutral.
const DECAY_STEP: f64 = 0.01;

/// Allowed seconds per expected answer character before latency starts
/// adding weight.
const SECONDS_PER_CHAR: f64 = 1.5;

/// Compute the next weight vector after one answered trial.
///
/// `index` is the answered item, `duration_secs` the measured answer time,
/// `answer_len` the expected answer length in characters (at least 1).
/// Deterministic; only `index` is adjusted beyond the global decay.
pub fn adjust(
  mut weights: Vec<f64>,
  index: usize,
  duration_secs: f64,
  answer_len: usize,
  correct: bool,
) -> Vec<f64> {
  // Pre-decay value of the answered item; the adjustments below start from
  // this, not from the decayed value.
  let w0 = weights[index];

  // Everything below neutral creeps back toward 1.0.
  for w in weights.iter_mut() {
    if *w < 1.0 {
      *w = (*w + DECAY_STEP).min(1.0);
    }
  }

  let mut new_weight = if correct {
    if w0 > 1.0 {
      // Relieve a hard item gradually, not instantly.
      0.9 * w0 + 0.1
    } else {
      // Already easy: suppress harder.
      0.66 * w0
    }
  } else {
    w0 + 10.0
  };

  // Slow answers add weight; fast ones may subtract.
  new_weight += 0.2 * (duration_secs - SECONDS_PER_CHAR * answer_len as f64);

  weights[index] = new_weight.max(WEIGHT_FLOOR);
  weights
}

#[cfg(test)]
mod tests {
  use super::*;

  const EPS: f64 = 1e-9;

  #[test]
  fn test_correct_hard_item_decays_toward_neutral() {
    // duration exactly on budget, so the latency term is zero
    let weights = adjust(vec![2.0, 1.0], 0, 1.5 * 2.0, 2, true);
    assert!((weights[0] - 1.9).abs() < EPS);
    assert!((weights[1] - 1.0).abs() < EPS);
  }

  #[test]
  fn test_correct_easy_item_suppressed() {
    let weights = adjust(vec![0.5, 1.0], 0, 1.5, 1, true);
    assert!((weights[0] - 0.33).abs() < EPS);
  }

  #[test]
  fn test_incorrect_adds_fixed_penalty() {
    let duration = 1.5 + 3.0; // 3s over budget
    let weights = adjust(vec![1.0, 1.0], 0, duration, 1, false);
    assert!((weights[0] - (1.0 + 10.0 + 0.2 * 3.0)).abs() < EPS);
  }

  #[test]
  fn test_fast_answer_subtracts_weight() {
    // 2s under the 3s budget for a 2-char answer
    let weights = adjust(vec![2.0, 1.0], 0, 1.0, 2, true);
    assert!((weights[0] - (1.9 - 0.2 * 2.0)).abs() < EPS);
  }

  #[test]
  fn test_floor_clamp() {
    // Instant correct answer on a suppressed item would go negative
    let weights = adjust(vec![0.02, 1.0], 0, 0.0, 3, true);
    assert!((weights[0] - WEIGHT_FLOOR).abs() < EPS);
  }

  #[test]
  fn test_untouched_items_decay_toward_neutral() {
    let weights = adjust(vec![1.0, 0.5, 0.995, 3.0], 0, 1.5, 1, true);
    assert!((weights[1] - 0.51).abs() < EPS);
    assert!((weights[2] - 1.0).abs() < EPS); // capped at neutral
    assert!((weights[3] - 3.0).abs() < EPS); // above neutral: untouched
  }

  #[test]
  fn test_adjustment_reads_pre_decay_value() {
    // The answered item sits below neutral; the correctness step must use
    // its value before the +0.01 decay.
    let weights = adjust(vec![0.5], 0, 1.5, 1, true);
    assert!((weights[0] - 0.66 * 0.5).abs() < EPS);
  }

  #[test]
  fn test_deterministic() {
    let a = adjust(vec![1.2, 0.4, 2.0], 1, 2.25, 2, false);
    let b = adjust(vec![1.2, 0.4, 2.0], 1, 2.25, 2, false);
    assert_eq!(a, b);
  }

  #[test]
  fn test_floor_invariant_over_many_updates() {
    let mut weights = vec![1.0; 5];
    for round in 0..200 {
      let index = round % 5;
      // Fast correct answers drive weights down hard.
      weights = adjust(weights, index, 0.0, 4, true);
      assert!(
        weights.iter().all(|w| *w >= WEIGHT_FLOOR),
        "round {}: {:?}",
        round,
        weights
      );
    }
  }
}
