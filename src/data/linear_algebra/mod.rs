//! # Linear algebra primitives
//!
//! Linear algebra primitives used to represent data in either a dense or a sparse format.

pub mod matrix;
pub mod vector;

/// An index together with the value at that index, used by the sparse data structures.
pub type SparseTuple<F> = (usize, F);

/// Values below this threshold (in the negative direction) may not be pivoted on.
///
/// Pivoting on values closer to zero amplifies the rounding error of the elimination.
pub const PIVOT_TOLERANCE: f64 = 1e-8;

/// Two values are considered equal by the tableau consistency checks when they are within this
/// distance.
pub const EPSILON: f64 = 1e-9;
