//! # Row-major dense layout
//!
//! Every row of the tableau is its own dense `Vec`, which makes swapping the pivot row out during
//! elimination free.
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::algorithm::simplex::IterationPoint;
use crate::algorithm::simplex::options::Tolerances;
use crate::algorithm::simplex::tableau::{auxiliary_row_parameters, eliminate_dense, format_tableau, scale_dense, SimplexTableau};
use crate::algorithm::simplex::tableau::basis::Basis;
use crate::algorithm::simplex::tableau::ratio::nonzeros;
use crate::data::linear_algebra::vector::dense::scale;
use crate::data::linear_program::structure::LinearStructure;

/// Dense tableau stored row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTableau {
    /// `m + 2` rows of width `n + 1`.
    rows: Vec<Vec<f64>>,
    structure: LinearStructure,
    basis: Basis,
    tolerances: Tolerances,
}

impl RawTableau {
    /// Create a tableau of zeros with all artificials basic.
    pub fn new(structure: LinearStructure) -> Self {
        Self::with_tolerances(structure, Tolerances::default())
    }

    /// Create a tableau of zeros with all artificials basic.
    pub fn with_tolerances(structure: LinearStructure, tolerances: Tolerances) -> Self {
        let m = structure.count_constraints();
        let n = structure.count_variables_totally();

        Self {
            rows: vec![vec![0_f64; n + 1]; m + 2],
            structure,
            basis: Basis::new(m, structure.count_variables()),
            tolerances,
        }
    }

    /// Deep copy of any other tableau, basis included.
    pub fn from_tableau<T: SimplexTableau>(other: &T) -> Self {
        Self {
            rows: (0..other.nr_rows()).map(|i| other.tableau_row(i)).collect(),
            structure: *other.structure(),
            basis: other.basis().clone(),
            tolerances: *other.tolerances(),
        }
    }

    /// All rows other than `row`.
    fn other_rows(rows: &mut [Vec<f64>], row: usize) -> impl Iterator<Item=&mut [f64]> {
        rows.iter_mut()
            .enumerate()
            .filter(move |&(i, _)| i != row)
            .map(|(_, values)| values.as_mut_slice())
    }
}

impl SimplexTableau for RawTableau {
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
        self.rows[row][column]
    }

    fn set(&mut self, row: usize, column: usize, value: f64) {
        self.rows[row][column] = value;
    }

    fn add(&mut self, row: usize, column: usize, value: f64) {
        self.rows[row][column] += value;
    }

    fn pivot(&mut self, point: IterationPoint) {
        let IterationPoint { row, column } = point;
        debug_assert!(row < self.m());
        debug_assert!(column < self.structure.count_variables());
        trace!("pivot on ({}, {}) with value {}", row, column, self.rows[row][column]);

        let mut pivot_row = mem::take(&mut self.rows[row]);
        scale_dense(&mut pivot_row, column);
        eliminate_dense(Self::other_rows(&mut self.rows, row), column, &pivot_row);
        self.rows[row] = pivot_row;

        self.update(row, column);
    }

    fn fix_variable(&mut self, index: usize, value: f64) -> bool {
        let Some(row) = self.basis.row_index(index) else {
            debug!("can't fix variable {}, it is not basic", index);
            return false;
        };
        let n = self.n();
        let Some((multiple, rhs)) = auxiliary_row_parameters(self.rows[row][n], value) else {
            return true;
        };

        let mut auxiliary = self.rows[row].clone();
        scale(&mut auxiliary, multiple);
        auxiliary[index] = 0_f64;
        auxiliary[n] = rhs;

        let Some(column) = self.find_next_pivot_column(nonzeros(&auxiliary[..n])) else {
            debug!("can't fix variable {} at {}, no column to pivot on", index, value);
            return false;
        };

        scale_dense(&mut auxiliary, column);
        eliminate_dense(Self::other_rows(&mut self.rows, row), column, &auxiliary);
        self.rows[row] = auxiliary;
        self.update(row, column);

        let is_feasible = self.rows[..self.m()].iter().all(|values| values[n] >= 0_f64);
        debug!("fixed variable {} at {} by pivoting on ({}, {}), feasible: {}", index, value, row, column, is_feasible);
        is_feasible
    }

    fn objective_value(&self) -> f64 {
        let (m, n) = (self.m(), self.n());
        self.rows[m][n]
    }

    fn infeasibility(&self) -> f64 {
        let (m, n) = (self.m(), self.n());
        self.rows[m + 1][n]
    }

    fn copy_row(&self, row: usize, target: &mut [f64]) {
        target.copy_from_slice(&self.rows[row]);
    }
}

impl fmt::Display for RawTableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_tableau(self, f)
    }
}
