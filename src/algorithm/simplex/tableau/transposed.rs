//! # Column-major dense layout
//!
//! The transpose of the tableau is stored column-major, so that every tableau row is a contiguous
//! slice. The pivot row is borrowed next to the other rows without copying it.
use std::fmt;

use log::{debug, trace};

use crate::algorithm::simplex::IterationPoint;
use crate::algorithm::simplex::options::Tolerances;
use crate::algorithm::simplex::tableau::{auxiliary_row_parameters, eliminate_dense, format_tableau, scale_dense, SimplexTableau};
use crate::algorithm::simplex::tableau::basis::Basis;
use crate::algorithm::simplex::tableau::ratio::nonzeros;
use crate::data::linear_algebra::matrix::ColumnMajor;
use crate::data::linear_algebra::vector::dense::scale;
use crate::data::linear_program::structure::LinearStructure;

/// Dense tableau stored as its transpose.
#[derive(Debug, Clone, PartialEq)]
pub struct TransposedTableau {
    /// Of dimension `(n + 1) x (m + 2)`: column `i` is tableau row `i`.
    transposed: ColumnMajor<f64>,
    structure: LinearStructure,
    basis: Basis,
    tolerances: Tolerances,
}

impl TransposedTableau {
    /// Create a tableau of zeros with all artificials basic.
    pub fn new(structure: LinearStructure) -> Self {
        Self::with_tolerances(structure, Tolerances::default())
    }

    /// Create a tableau of zeros with all artificials basic.
    pub fn with_tolerances(structure: LinearStructure, tolerances: Tolerances) -> Self {
        let m = structure.count_constraints();
        let n = structure.count_variables_totally();

        Self {
            transposed: ColumnMajor::zeros(n + 1, m + 2),
            structure,
            basis: Basis::new(m, structure.count_variables()),
            tolerances,
        }
    }

    /// Deep copy of any other tableau, basis included.
    pub fn from_tableau<T: SimplexTableau>(other: &T) -> Self {
        Self {
            transposed: ColumnMajor::transpose_of(other.nr_rows(), other.nr_columns(), |i, j| other.get(i, j)),
            structure: *other.structure(),
            basis: other.basis().clone(),
            tolerances: *other.tolerances(),
        }
    }
}

impl SimplexTableau for TransposedTableau {
    fn structure(&self) -> &LinearStructure {
        &self.structure
    }

    fn basis(&self) -> &Basis {
        &self.basis
    }

    fn basis_mut(&mut self) -> &mut Basis {
        &mut self.basis
    }

    fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    fn get(&self, row: usize, column: usize) -> f64 {
        self.transposed.get(column, row)
    }

    fn set(&mut self, row: usize, column: usize, value: f64) {
        self.transposed.set(column, row, value);
    }

    fn add(&mut self, row: usize, column: usize, value: f64) {
        self.transposed.add(column, row, value);
    }

    fn pivot(&mut self, point: IterationPoint) {
        let IterationPoint { row, column } = point;
        debug_assert!(row < self.m());
        debug_assert!(column < self.structure.count_variables());
        trace!("pivot on ({}, {}) with value {}", row, column, self.get(row, column));

        scale_dense(self.transposed.column_mut(row), column);
        let (pivot_row, other_rows) = self.transposed.split_column_mut(row);
        eliminate_dense(other_rows.map(|(_, values)| values), column, pivot_row);

        self.update(row, column);
    }

    fn fix_variable(&mut self, index: usize, value: f64) -> bool {
        let Some(row) = self.basis.row_index(index) else {
            debug!("can't fix variable {}, it is not basic", index);
            return false;
        };
        let (m, n) = (self.m(), self.n());
        let Some((multiple, rhs)) = auxiliary_row_parameters(self.get(row, n), value) else {
            return true;
        };

        let mut auxiliary = self.transposed.column(row).to_vec();
        scale(&mut auxiliary, multiple);
        auxiliary[index] = 0_f64;
        auxiliary[n] = rhs;

        let Some(column) = self.find_next_pivot_column(nonzeros(&auxiliary[..n])) else {
            debug!("can't fix variable {} at {}, no column to pivot on", index, value);
            return false;
        };

        scale_dense(&mut auxiliary, column);
        let (_, other_rows) = self.transposed.split_column_mut(row);
        eliminate_dense(other_rows.map(|(_, values)| values), column, &auxiliary);
        self.transposed.fill_column(row, &auxiliary);
        self.update(row, column);

        let is_feasible = (0..m).all(|i| self.get(i, n) >= 0_f64);
        debug!("fixed variable {} at {} by pivoting on ({}, {}), feasible: {}", index, value, row, column, is_feasible);
        is_feasible
    }

    fn objective_value(&self) -> f64 {
        self.get(self.m(), self.n())
    }

    fn infeasibility(&self) -> f64 {
        self.get(self.m() + 1, self.n())
    }

    fn copy_row(&self, row: usize, target: &mut [f64]) {
        target.copy_from_slice(self.transposed.column(row));
    }
}

impl fmt::Display for TransposedTableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_tableau(self, f)
    }
}
