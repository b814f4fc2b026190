use log::trace;

use crate::Error;

pub fn check_dimensions(op: &str, left: usize, right: usize) -> Result<(), Error> {
  if left == right {
    Ok(())
  } else {
    trace!("{}: dimensions {} and {} differ", op, left, right);
    Err(Error::DimensionMismatch { left, right })
  }
}

// Elementwise combination of two coordinate lists of equal length.
pub fn zip_with<T, R>(op: &str, lhs: &[T], rhs: &[T], cb: R) -> Result<Vec<T>, Error>
where
  T: Clone,
  R: Fn(T, T) -> T,
{
  check_dimensions(op, lhs.len(), rhs.len())?;
  Ok(
    lhs
      .iter()
      .zip(rhs.iter())
      .map(|(a, b)| cb(a.clone(), b.clone()))
      .collect(),
  )
}

// Negative indices count from the end: -1 is the last coordinate.
pub fn resolve_index(index: isize, len: usize) -> Result<usize, Error> {
  let offset = if index < 0 {
    len.checked_sub(index.unsigned_abs())
  } else {
    usize::try_from(index).ok()
  };
  match offset {
    Some(i) if i < len => Ok(i),
    _ => {
      trace!("index {} out of range for dimension {}", index, len);
      Err(Error::IndexOutOfRange { index, len })
    }
  }
}
