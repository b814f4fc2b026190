use log::trace;
use std::any::type_name;
use std::ops::Mul;

use super::{expect_ok, Vector};
use crate::array::zip_with;
use crate::{Error, Scalar};

/// Right-hand side of a multiplication, classified by kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a, T> {
  /// Elementwise product.
  Vector(&'a Vector<T>),
  /// Every coordinate scaled.
  Scalar(T),
  /// Anything else. Holds the operand's type name.
  Unsupported(&'static str),
}

/// Values that may appear on the right of `Vector::try_mul`.
pub trait Multiplicand<T> {
  fn operand(&self) -> Operand<'_, T>;
}

impl<T> Multiplicand<T> for Vector<T> {
  fn operand(&self) -> Operand<'_, T> {
    Operand::Vector(self)
  }
}

macro_rules! unsupported {
  ( $( $ty:ty ),* ) => {
    $(
      impl<T> Multiplicand<T> for $ty {
        fn operand(&self) -> Operand<'_, T> {
          Operand::Unsupported(type_name::<$ty>())
        }
      }
    )*
  };
}

unsupported!(str, String, char, bool);

// Plain sequences can be added to a vector but not multiplied with one.
impl<T, U> Multiplicand<T> for [U] {
  fn operand(&self) -> Operand<'_, T> {
    Operand::Unsupported(type_name::<[U]>())
  }
}

impl<T, U> Multiplicand<T> for Vec<U> {
  fn operand(&self) -> Operand<'_, T> {
    Operand::Unsupported(type_name::<Vec<U>>())
  }
}

impl<T: Scalar> Vector<T> {
  /// Multiplies by a vector (elementwise) or by a scalar.
  ///
  /// # Errors
  ///
  /// [`Error::DimensionMismatch`] if `rhs` is a vector of another dimension,
  /// [`Error::UnsupportedOperandType`] if it is neither a vector nor a
  /// scalar.
  pub fn try_mul<M>(&self, rhs: &M) -> Result<Vector<T>, Error>
  where
    M: Multiplicand<T> + ?Sized,
  {
    match rhs.operand() {
      Operand::Vector(other) => {
        zip_with("multiply", &self.0, &other.0, |a, b| a * b).map(Vector)
      }
      Operand::Scalar(factor) => Ok(self.scaled(&factor)),
      Operand::Unsupported(name) => {
        trace!("multiply: unsupported operand of type {}", name);
        Err(Error::UnsupportedOperandType(name))
      }
    }
  }
}

impl<'a, T: Scalar> Mul<T> for &'a Vector<T> {
  type Output = Vector<T>;

  fn mul(self, other: T) -> Self::Output {
    self.scaled(&other)
  }
}

impl<T: Scalar> Mul<T> for Vector<T> {
  type Output = Vector<T>;

  fn mul(self, other: T) -> Self::Output {
    self.scaled(&other)
  }
}

/// # Panics
///
/// Panics if the dimensions differ.
impl<'a, 'b, T: Scalar> Mul<&'b Vector<T>> for &'a Vector<T> {
  type Output = Vector<T>;

  fn mul(self, other: &'b Vector<T>) -> Self::Output {
    expect_ok(self.try_mul(other))
  }
}

impl<T: Scalar> Mul<Vector<T>> for Vector<T> {
  type Output = Vector<T>;

  fn mul(self, other: Vector<T>) -> Self::Output {
    &self * &other
  }
}
