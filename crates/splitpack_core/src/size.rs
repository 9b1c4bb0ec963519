use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// Dimension label for JavaScript byte sizes.
///
/// The enforcement pass measures every module on this dimension. Hosts that
/// track additional budgets (e.g. styles) add their own labels.
pub const SCRIPT_DIMENSION: &str = "script";

/// Additive, multi-dimensional size measurement.
///
/// One entry per tracked dimension label, each a non-negative byte count.
/// Module sizes, group sizes and the min/max thresholds all use this type, so
/// multi-dimensional constraints compose without special cases. Backed by a
/// `BTreeMap` for deterministic iteration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SizeVector(BTreeMap<String, u64>);

impl SizeVector {
  pub fn new() -> Self {
    Self::default()
  }

  /// Single-dimension vector, the common case.
  pub fn of(dimension: &str, bytes: u64) -> Self {
    let mut size = SizeVector::new();
    size.set(dimension, bytes);
    size
  }

  pub fn get(&self, dimension: &str) -> u64 {
    self.0.get(dimension).copied().unwrap_or(0)
  }

  pub fn set(&mut self, dimension: &str, bytes: u64) {
    self.0.insert(dimension.to_string(), bytes);
  }

  pub fn add_assign(&mut self, other: &SizeVector) {
    for (dimension, bytes) in &other.0 {
      *self.0.entry(dimension.clone()).or_insert(0) += bytes;
    }
  }

  pub fn sum<'a>(vectors: impl IntoIterator<Item = &'a SizeVector>) -> SizeVector {
    let mut total = SizeVector::new();
    for vector in vectors {
      total.add_assign(vector);
    }
    total
  }

  /// True when any dimension is strictly above the limit `max` defines for it.
  ///
  /// A dimension `max` does not define is unconstrained.
  pub fn exceeds(&self, max: &SizeVector) -> bool {
    self
      .0
      .iter()
      .any(|(dimension, bytes)| max.0.get(dimension).is_some_and(|limit| bytes > limit))
  }

  /// True when any dimension is strictly below the minimum `min` defines for
  /// it. A dimension `min` does not define is unconstrained.
  pub fn is_below(&self, min: &SizeVector) -> bool {
    self
      .0
      .iter()
      .any(|(dimension, bytes)| min.0.get(dimension).is_some_and(|limit| bytes < limit))
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn add_assign_sums_per_dimension() {
    let mut a = SizeVector::of(SCRIPT_DIMENSION, 10);
    let mut b = SizeVector::of(SCRIPT_DIMENSION, 32);
    b.set("style", 5);

    a.add_assign(&b);

    assert_eq!(a.get(SCRIPT_DIMENSION), 42);
    assert_eq!(a.get("style"), 5);
  }

  #[test]
  fn sum_equals_repeated_add_assign() {
    let vectors = vec![
      SizeVector::of(SCRIPT_DIMENSION, 1),
      SizeVector::of(SCRIPT_DIMENSION, 2),
      SizeVector::of(SCRIPT_DIMENSION, 3),
    ];

    let total = SizeVector::sum(vectors.iter());

    assert_eq!(total, SizeVector::of(SCRIPT_DIMENSION, 6));
  }

  #[test]
  fn exceeds_is_strict() {
    let size = SizeVector::of(SCRIPT_DIMENSION, 50);

    assert!(!size.exceeds(&SizeVector::of(SCRIPT_DIMENSION, 50)));
    assert!(size.exceeds(&SizeVector::of(SCRIPT_DIMENSION, 49)));
  }

  #[test]
  fn is_below_is_strict() {
    let size = SizeVector::of(SCRIPT_DIMENSION, 50);

    assert!(!size.is_below(&SizeVector::of(SCRIPT_DIMENSION, 50)));
    assert!(size.is_below(&SizeVector::of(SCRIPT_DIMENSION, 51)));
  }

  #[test]
  fn undefined_threshold_dimension_is_unconstrained() {
    let mut size = SizeVector::of(SCRIPT_DIMENSION, 10);
    size.set("style", 1000);

    let max = SizeVector::of(SCRIPT_DIMENSION, 100);
    let min = SizeVector::of(SCRIPT_DIMENSION, 5);

    assert!(!size.exceeds(&max));
    assert!(!size.is_below(&min));
  }

  #[test]
  fn zero_size_is_below_a_positive_minimum() {
    let size = SizeVector::of(SCRIPT_DIMENSION, 0);

    assert!(size.is_below(&SizeVector::of(SCRIPT_DIMENSION, 1)));
  }
}
