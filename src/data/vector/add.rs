use std::ops::Add;

use super::expect_ok;
use crate::data::Vector;
use crate::Scalar;

// Every impl below panics when the operands' dimensions differ, see
// `Vector::try_add`.

impl<'a, 'b, T: Scalar> Add<&'b Vector<T>> for &'a Vector<T> {
  type Output = Vector<T>;

  fn add(self, other: &'b Vector<T>) -> Self::Output {
    expect_ok(self.try_add(other))
  }
}

impl<T: Scalar> Add<Vector<T>> for Vector<T> {
  type Output = Vector<T>;

  fn add(self, other: Vector<T>) -> Self::Output {
    &self + &other
  }
}

impl<'a, 'b, T: Scalar> Add<&'b [T]> for &'a Vector<T> {
  type Output = Vector<T>;

  fn add(self, other: &'b [T]) -> Self::Output {
    expect_ok(self.try_add(other))
  }
}

impl<'a, 'b, T: Scalar, const N: usize> Add<&'b [T; N]> for &'a Vector<T> {
  type Output = Vector<T>;

  fn add(self, other: &'b [T; N]) -> Self::Output {
    expect_ok(self.try_add(other))
  }
}

// A plain sequence on the left adds the same way as on the right.

impl<'a, 'b, T: Scalar> Add<&'b Vector<T>> for &'a [T] {
  type Output = Vector<T>;

  fn add(self, vector: &'b Vector<T>) -> Self::Output {
    vector + self
  }
}

impl<'a, 'b, T: Scalar, const N: usize> Add<&'b Vector<T>> for &'a [T; N] {
  type Output = Vector<T>;

  fn add(self, vector: &'b Vector<T>) -> Self::Output {
    vector + self
  }
}
