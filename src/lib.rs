#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Fixed-dimension numeric vectors.
//!
//! A [`Vector`] owns an ordered list of coordinates whose length is fixed at
//! construction. Arithmetic is elementwise and always produces a new vector:
//!
//! ```
//! use numvec::*;
//!
//! let mut v: Vector<i64> = Vector::new(5);
//! v[1] = 23;
//! v.set(-1, 45)?;
//! assert_eq!(v.to_string(), "<0, 23, 0, 0, 45>");
//! assert_eq!((&v + &v).to_string(), "<0, 46, 0, 0, 90>");
//! assert_eq!(2_i64 * &v, &v * 2);
//! # Ok::<(), Error>(())
//! ```
//!
//! Every operator that can fail has a `try_*` counterpart returning
//! [`Error`]. The operators themselves panic with the same message.
use num_traits::{Num, NumCast};
use std::fmt::{Debug, Display};
use std::ops::Mul;

mod array;
pub mod data;

pub use data::{Multiplicand, Operand, Vector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// Constructor input that cannot be represented as coordinates.
  #[error("invalid parameter type")]
  TypeConstruction,
  #[error("dimensions must agree: {left} != {right}")]
  DimensionMismatch { left: usize, right: usize },
  /// Valid indices are `-len..len`.
  #[error("index {index} out of range for dimension {len}")]
  IndexOutOfRange { index: isize, len: usize },
  /// Right-hand side of a multiplication is neither a vector nor a scalar.
  #[error("can't multiply Vector and {0}")]
  UnsupportedOperandType(&'static str),
}

/// Numeric coordinate types. Implemented for every primitive integer and
/// floating-point type.
pub trait Scalar: Num + NumCast + Clone + PartialOrd + Debug + Display {}

// Scalars also get `scalar * vector`, which the orphan rules only allow for
// concrete types.
macro_rules! scalar {
  ( $( $ty:ty ),* ) => {
    $(
      impl Scalar for $ty {}

      impl Multiplicand<$ty> for $ty {
        fn operand(&self) -> Operand<'_, $ty> {
          Operand::Scalar(*self)
        }
      }

      impl Mul<Vector<$ty>> for $ty {
        type Output = Vector<$ty>;

        fn mul(self, vector: Vector<$ty>) -> Vector<$ty> {
          vector * self
        }
      }

      impl<'a> Mul<&'a Vector<$ty>> for $ty {
        type Output = Vector<$ty>;

        fn mul(self, vector: &'a Vector<$ty>) -> Vector<$ty> {
          vector * self
        }
      }
    )*
  };
}

scalar!(i8, i16, i32, i64, i128, isize);
scalar!(u8, u16, u32, u64, u128, usize);
scalar!(f32, f64);

#[cfg(test)]
pub mod testing;
