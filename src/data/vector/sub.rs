use std::ops::Sub;

use super::expect_ok;
use crate::data::Vector;
use crate::Scalar;

// Panics on differing dimensions, see `Vector::try_sub`. There is no
// `sequence - vector`.

impl<'a, 'b, T: Scalar> Sub<&'b Vector<T>> for &'a Vector<T> {
  type Output = Vector<T>;

  fn sub(self, other: &'b Vector<T>) -> Self::Output {
    expect_ok(self.try_sub(other))
  }
}

impl<T: Scalar> Sub<Vector<T>> for Vector<T> {
  type Output = Vector<T>;

  fn sub(self, other: Vector<T>) -> Self::Output {
    &self - &other
  }
}

impl<'a, 'b, T: Scalar> Sub<&'b [T]> for &'a Vector<T> {
  type Output = Vector<T>;

  fn sub(self, other: &'b [T]) -> Self::Output {
    expect_ok(self.try_sub(other))
  }
}

impl<'a, 'b, T: Scalar, const N: usize> Sub<&'b [T; N]> for &'a Vector<T> {
  type Output = Vector<T>;

  fn sub(self, other: &'b [T; N]) -> Self::Output {
    expect_ok(self.try_sub(other))
  }
}
