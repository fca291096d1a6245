//! # Vector types and kernels
//!
//! Dense vectors are plain slices, operated on by the kernels in the `dense` module. Sparse
//! vectors are written by hand, because the simplex elimination needs a specific set of operations
//! to be quick.
pub use sparse::Sparse as SparseVector;

pub mod dense;
mod sparse;
