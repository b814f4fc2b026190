// This module contains strategies for:
//  * vectors with bounded integer coordinates
//  * pairs of vectors, with equal or with distinct dimensions
//  * scalars
// Coordinates are kept small enough that sums and products of two of them
// cannot overflow an i64.
use crate::data::Vector;

use core::ops::Range;
use proptest::collection::vec;
use proptest::prelude::*;

const COORDINATES: Range<i64> = -1_000_000..1_000_000;
const SCALARS: Range<i64> = -1_000..1_000;
const DIMENSIONS: Range<usize> = 0..17;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary Vector

// The parameter restricts the dimension. An empty range means 0..=16.
impl Arbitrary for Vector<i64> {
  type Strategy = BoxedStrategy<Vector<i64>>;
  type Parameters = Range<usize>;
  fn arbitrary_with(mut range: Self::Parameters) -> Self::Strategy {
    if range.is_empty() {
      range = DIMENSIONS;
    }
    vec(COORDINATES, range).prop_map(Vector::from).boxed()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Pairs

pub fn vector_pair() -> impl Strategy<Value = (Vector<i64>, Vector<i64>)> {
  DIMENSIONS
    .prop_flat_map(|dim| (vec(COORDINATES, dim), vec(COORDINATES, dim)))
    .prop_map(|(a, b)| (Vector::from(a), Vector::from(b)))
}

pub fn mismatched_pair() -> impl Strategy<Value = (Vector<i64>, Vector<i64>)> {
  (DIMENSIONS, DIMENSIONS)
    .prop_filter("Distinct dimensions", |(a, b)| a != b)
    .prop_flat_map(|(a, b)| (vec(COORDINATES, a), vec(COORDINATES, b)))
    .prop_map(|(a, b)| (Vector::from(a), Vector::from(b)))
}

///////////////////////////////////////////////////////////////////////////////
// Convenience functions

pub fn scalar() -> impl Strategy<Value = i64> {
  SCALARS
}

#[cfg(test)]
mod tests {
  use super::*;

  use test_strategy::proptest;

  #[proptest]
  fn pairs_agree(#[strategy(vector_pair())] pair: (Vector<i64>, Vector<i64>)) {
    prop_assert_eq!(pair.0.len(), pair.1.len());
  }

  #[proptest]
  fn mismatched_pairs_differ(#[strategy(mismatched_pair())] pair: (Vector<i64>, Vector<i64>)) {
    prop_assert_ne!(pair.0.len(), pair.1.len());
  }

  #[proptest]
  fn dimension_is_bounded(#[any(2..5)] v: Vector<i64>) {
    prop_assert!((2..5).contains(&v.len()));
  }
}
