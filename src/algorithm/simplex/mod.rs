//! # The Simplex tableau
//!
//! Data structures and elementary operations of a simplex tableau: loading a problem, pivoting,
//! fixing a basic variable at a value and deriving cuts from fractional rows.
//!
//! The pivoting strategy (which column enters, which row leaves) is left to the caller.
pub use options::{Options, Tolerances};
pub use tableau::{RawTableau, SimplexTableau, SparseTableau, Tableau, TransposedTableau};

pub mod cut;
pub mod error;
pub mod matrix_provider;
pub mod options;
pub mod tableau;

/// A cell of the tableau to pivot on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct IterationPoint {
    /// Constraint row.
    pub row: usize,
    /// Column of a variable that is not artificial.
    pub column: usize,
}

impl IterationPoint {
    /// Create a new instance.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}
