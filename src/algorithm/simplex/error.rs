//! # Error reporting for tableau construction
//!
//! Loading a problem into a tableau is the only operation that validates its input; the hot path
//! operations rely on debug assertions.
use thiserror::Error;

/// A problem doesn't fit the structure of the tableau it is loaded into.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum TableauError {
    /// A constraint coefficient is given for a row that doesn't exist.
    #[error("constraint row {row} is out of bounds, there are {nr_rows} constraints")]
    RowOutOfBounds {
        /// Row of the coefficient.
        row: usize,
        /// Number of constraints of the tableau.
        nr_rows: usize,
    },
    /// A constraint coefficient is given for a column that doesn't exist or is artificial.
    #[error("column {column} is out of bounds, there are {nr_columns} variables that are not artificial")]
    ColumnOutOfBounds {
        /// Column of the coefficient.
        column: usize,
        /// Number of variables that are not artificial.
        nr_columns: usize,
    },
    /// The right-hand side doesn't have a value for every constraint.
    #[error("right-hand side has length {actual}, expected {expected}")]
    RhsLength {
        /// Number of constraints.
        expected: usize,
        /// Length of the given right-hand side.
        actual: usize,
    },
    /// The objective function doesn't have a value for every model variable.
    #[error("objective has length {actual}, expected {expected}")]
    ObjectiveLength {
        /// Number of model variables.
        expected: usize,
        /// Length of the given objective.
        actual: usize,
    },
}
