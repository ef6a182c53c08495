//! Weighted random draw over a fixed key set, never repeating the
//! immediately previous draw.

use rand::Rng;

/// Weight vector length no longer matches the key count. Indicates an
/// internal invariant violation; there is no recovery.
#[derive(Debug, PartialEq, Eq)]
pub struct DimensionMismatch {
  pub expected: usize,
  pub actual: usize,
}

impl std::fmt::Display for DimensionMismatch {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "weight vector has {} entries, expected {}",
      self.actual, self.expected
    )
  }
}

impl std::error::Error for DimensionMismatch {}

/// Stateful weighted sampler. Higher weight means a higher draw
/// probability; the previous draw is never returned twice in a row.
#[derive(Debug)]
pub struct WeightedSampler {
  keys: Vec<String>,
  weights: Vec<f64>,
  last: Option<usize>,
}

impl WeightedSampler {
  /// Keys must already be in their fixed presentation order; one weight per
  /// key, all positive.
  pub fn new(keys: Vec<String>, weights: Vec<f64>) -> Result<Self, DimensionMismatch> {
    check_dimensions(keys.len(), weights.len())?;
    Ok(Self {
      keys,
      weights,
      last: None,
    })
  }

  /// Draw one `(index, key)` pair, weighted by the current weights.
  ///
  /// Re-draws until the pick differs from the previous one, so the caller
  /// must guarantee at least 2 keys with positive total weight.
  pub fn draw(&mut self) -> (usize, &str) {
    let mut rng = rand::rng();
    loop {
      let pick = self.weighted_pick(&mut rng);
      if self.last != Some(pick) {
        self.last = Some(pick);
        return (pick, &self.keys[pick]);
      }
    }
  }

  fn weighted_pick(&self, rng: &mut impl Rng) -> usize {
    let total: f64 = self.weights.iter().sum();
    let mut target = rng.random_range(0.0..total);
    for (i, w) in self.weights.iter().enumerate() {
      target -= w;
      if target <= 0.0 {
        return i;
      }
    }
    // Floating point slack on the final subtraction
    self.weights.len() - 1
  }

  /// Replace the weight vector with `update(current)`. The update must not
  /// change the vector length.
  pub fn update_weights<F>(&mut self, update: F) -> Result<(), DimensionMismatch>
  where
    F: FnOnce(Vec<f64>) -> Vec<f64>,
  {
    let updated = update(self.weights.clone());
    check_dimensions(self.keys.len(), updated.len())?;
    self.weights = updated;
    Ok(())
  }

  pub fn weights(&self) -> &[f64] {
    &self.weights
  }
}

fn check_dimensions(expected: usize, actual: usize) -> Result<(), DimensionMismatch> {
  if expected == actual {
    Ok(())
  } else {
    Err(DimensionMismatch { expected, actual })
  }
}
