use log::trace;
use num_traits::identities::Zero;
use num_traits::{NumCast, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;
use std::ops::IndexMut;
use std::ops::Neg;

use crate::array::*;
use crate::{Error, Scalar};

mod add;
mod mul;
mod sub;

pub use mul::{Multiplicand, Operand};

/// An ordered list of numeric coordinates with a dimension fixed at
/// construction.
///
/// Coordinates can be overwritten through [`Vector::set`] or `IndexMut` but
/// never added or removed. Arithmetic leaves its operands untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector<T>(Vec<T>);

impl<T> Vector<T> {
  /// The zero vector of the given dimension.
  pub fn new(dimension: usize) -> Vector<T>
  where
    T: Zero + Clone,
  {
    Vector(vec![T::zero(); dimension])
  }

  /// Copies numeric values into a new vector, converting each to `T`.
  ///
  /// Floating-point values are truncated when `T` is an integer type.
  ///
  /// # Errors
  ///
  /// Returns [`Error::TypeConstruction`] if a value has no representation
  /// as `T`, e.g. NaN for an integer vector or `300` for `Vector<u8>`.
  pub fn try_from_values<I>(values: I) -> Result<Vector<T>, Error>
  where
    I: IntoIterator,
    I::Item: ToPrimitive,
    T: NumCast,
  {
    values
      .into_iter()
      .enumerate()
      .map(|(i, value)| {
        <T as NumCast>::from(value).ok_or_else(|| {
          trace!("value at position {} has no coordinate representation", i);
          Error::TypeConstruction
        })
      })
      .collect::<Result<Vec<T>, Error>>()
      .map(Vector)
  }

  /// Dimension of the vector.
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Coordinate at `index`. Negative indices count from the end.
  pub fn get(&self, index: isize) -> Result<&T, Error> {
    let i = resolve_index(index, self.len())?;
    Ok(&self.0[i])
  }

  /// Overwrites the coordinate at `index`. Negative indices count from the
  /// end.
  pub fn set(&mut self, index: isize, value: T) -> Result<(), Error> {
    let i = resolve_index(index, self.len())?;
    self.0[i] = value;
    Ok(())
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.0.iter()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.0
  }

  pub fn into_vec(self) -> Vec<T> {
    self.0
  }

  pub fn is_zero(&self) -> bool
  where
    T: Zero,
  {
    self.0.iter().all(Zero::is_zero)
  }

  /// Lexicographic comparison of two vectors of the same dimension.
  ///
  /// `Ok(None)` means some coordinate pair is unordered (NaN).
  pub fn try_partial_cmp(&self, other: &Vector<T>) -> Result<Option<Ordering>, Error>
  where
    T: PartialOrd,
  {
    check_dimensions("compare", self.len(), other.len())?;
    Ok(self.0.as_slice().partial_cmp(other.0.as_slice()))
  }

  pub fn try_lt(&self, other: &Vector<T>) -> Result<bool, Error>
  where
    T: PartialOrd,
  {
    Ok(self.try_partial_cmp(other)? == Some(Ordering::Less))
  }

  pub fn try_le(&self, other: &Vector<T>) -> Result<bool, Error>
  where
    T: PartialOrd,
  {
    Ok(matches!(
      self.try_partial_cmp(other)?,
      Some(Ordering::Less | Ordering::Equal)
    ))
  }
}

impl<T: Scalar> Vector<T> {
  /// Elementwise sum with another vector or a plain sequence of the same
  /// dimension.
  pub fn try_add<R>(&self, rhs: &R) -> Result<Vector<T>, Error>
  where
    R: AsRef<[T]> + ?Sized,
  {
    zip_with("add", &self.0, rhs.as_ref(), |a, b| a + b).map(Vector)
  }

  /// Elementwise difference, `self - rhs`.
  pub fn try_sub<R>(&self, rhs: &R) -> Result<Vector<T>, Error>
  where
    R: AsRef<[T]> + ?Sized,
  {
    zip_with("subtract", &self.0, rhs.as_ref(), |a, b| a - b).map(Vector)
  }

  fn scaled(&self, factor: &T) -> Vector<T> {
    self.iter().map(|c| c.clone() * factor.clone()).collect()
  }
}

// Operators panic where the `try_*` methods return an error.
#[track_caller]
fn expect_ok<T>(result: Result<T, Error>) -> T {
  match result {
    Ok(value) => value,
    Err(err) => panic!("{}", err),
  }
}

impl<T> Index<usize> for Vector<T> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T> IndexMut<usize> for Vector<T> {
  fn index_mut(&mut self, index: usize) -> &mut T {
    self.0.index_mut(index)
  }
}

/// # Panics
///
/// Comparing vectors of different dimensions panics, like the arithmetic
/// operators. Use [`Vector::try_lt`] or [`Vector::try_le`] to get an error.
impl<T: PartialOrd> PartialOrd for Vector<T> {
  #[track_caller]
  fn partial_cmp(&self, other: &Vector<T>) -> Option<Ordering> {
    expect_ok(self.try_partial_cmp(other))
  }
}

// Coordinates use their `Debug` form so that floats keep a fractional part:
// `<1.0, 2.5>`, not `<1, 2.5>`.
impl<T: fmt::Debug> fmt::Display for Vector<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "<")?;
    for (i, coord) in self.0.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{:?}", coord)?;
    }
    write!(f, ">")
  }
}

impl<T> Neg for Vector<T>
where
  T: Scalar + Neg<Output = T>,
{
  type Output = Vector<T>;
  fn neg(self) -> Vector<T> {
    self.0.into_iter().map(Neg::neg).collect()
  }
}

impl<T> Neg for &Vector<T>
where
  T: Scalar + Neg<Output = T>,
{
  type Output = Vector<T>;
  fn neg(self) -> Vector<T> {
    self.iter().map(|c| -c.clone()).collect()
  }
}

impl<T> AsRef<[T]> for Vector<T> {
  fn as_ref(&self) -> &[T] {
    &self.0
  }
}

impl<T> From<Vec<T>> for Vector<T> {
  fn from(coords: Vec<T>) -> Vector<T> {
    Vector(coords)
  }
}

impl<T: Clone> From<&[T]> for Vector<T> {
  fn from(coords: &[T]) -> Vector<T> {
    Vector(coords.to_vec())
  }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
  fn from(coords: [T; N]) -> Vector<T> {
    Vector(Vec::from(coords))
  }
}

impl<T> From<Vector<T>> for Vec<T> {
  fn from(vector: Vector<T>) -> Vec<T> {
    vector.0
  }
}

impl<T> FromIterator<T> for Vector<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Vector<T> {
    Vector(iter.into_iter().collect())
  }
}

impl<T> IntoIterator for Vector<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
