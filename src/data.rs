mod vector;

pub use vector::{Multiplicand, Operand, Vector};
