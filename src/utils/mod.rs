//! Various unsorted geometrical operators.

pub use self::affine_ops::AffineOps;

mod affine_ops;
