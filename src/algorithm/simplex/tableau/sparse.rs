//! # Sparse layout
//!
//! Constraint rows are sparse vectors; the two objective rows and the right-hand side are dense,
//! because they are touched by every pivot anyway.
use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::algorithm::simplex::IterationPoint;
use crate::algorithm::simplex::options::Tolerances;
use crate::algorithm::simplex::tableau::{auxiliary_row_parameters, format_tableau, SimplexTableau, TransposedTableau};
use crate::algorithm::simplex::tableau::basis::Basis;
use crate::data::linear_algebra::vector::SparseVector;
use crate::data::linear_program::structure::LinearStructure;

/// Tableau with sparse constraint rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseTableau {
    /// Constraint rows, of length `n`. The right-hand side is stored in `rhs`.
    rows: Vec<SparseVector<f64>>,
    /// Right-hand side of the constraint rows.
    rhs: Vec<f64>,
    /// Row `m` without its last value.
    objective: Vec<f64>,
    /// Row `m + 1` without its last value.
    phase_one: Vec<f64>,
    /// Last value of row `m`.
    value: f64,
    /// Last value of row `m + 1`.
    infeasibility: f64,

    structure: LinearStructure,
    basis: Basis,
    tolerances: Tolerances,
}

impl SparseTableau {
    /// Create a tableau of zeros with all artificials basic.
    pub fn new(structure: LinearStructure) -> Self {
        Self::with_tolerances(structure, Tolerances::default())
    }

    /// Create a tableau of zeros with all artificials basic.
    pub fn with_tolerances(structure: LinearStructure, tolerances: Tolerances) -> Self {
        let m = structure.count_constraints();
        let n = structure.count_variables_totally();

        Self {
            rows: vec![SparseVector::zeros(n); m],
            rhs: vec![0_f64; m],
            objective: vec![0_f64; n],
            phase_one: vec![0_f64; n],
            value: 0_f64,
            infeasibility: 0_f64,

            structure,
            basis: Basis::new(m, structure.count_variables()),
            tolerances,
        }
    }

    /// Deep copy of any other tableau, basis included.
    pub fn from_tableau<T: SimplexTableau>(other: &T) -> Self {
        let (m, n) = (other.m(), other.n());
        let mut values = vec![0_f64; n + 1];
        let mut rows: Vec<SparseVector<f64>> = Vec::with_capacity(m);
        let mut rhs = Vec::with_capacity(m);
        for i in 0..m {
            other.copy_row(i, &mut values);
            rows.push(values[..n].iter().copied().collect());
            rhs.push(values[n]);
        }
        let objective = other.tableau_row(m);
        let phase_one = other.tableau_row(m + 1);

        Self {
            rows,
            rhs,
            objective: objective[..n].to_vec(),
            phase_one: phase_one[..n].to_vec(),
            value: objective[n],
            infeasibility: phase_one[n],

            structure: *other.structure(),
            basis: other.basis().clone(),
            tolerances: *other.tolerances(),
        }
    }

    /// Dense copy of this tableau, in the transposed layout.
    pub fn to_dense(&self) -> TransposedTableau {
        debug!("converting a {} x {} sparse tableau to a dense one", self.nr_rows(), self.nr_columns());

        TransposedTableau::from_tableau(self)
    }

    /// Number of explicitly stored values in the constraint rows.
    pub fn nr_nonzeros(&self) -> usize {
        self.rows.iter().map(SparseVector::size).sum()
    }

    /// Divide a row and its right-hand side by the row's value in column `column`, unless that
    /// value is exactly one.
    ///
    /// # Return value
    ///
    /// The new right-hand side.
    fn scale(row: &mut SparseVector<f64>, rhs: f64, column: usize) -> f64 {
        let pivot_element = row.get(column);
        debug_assert_ne!(pivot_element, 0_f64);

        if pivot_element != 1_f64 {
            row.element_wise_divide(pivot_element);
            rhs / pivot_element
        } else {
            rhs
        }
    }

    /// Eliminate column `column` from all rows other than `skip`, both objective rows included.
    ///
    /// # Arguments
    ///
    /// * `skip`: Constraint row that is not touched.
    /// * `column`: Column to eliminate.
    /// * `pivot_row`: Scaled row, having a one in column `column`.
    /// * `pivot_rhs`: Right-hand side of the scaled row.
    fn eliminate(&mut self, skip: usize, column: usize, pivot_row: &SparseVector<f64>, pivot_rhs: f64) {
        for (i, (row, rhs)) in self.rows.iter_mut().zip(self.rhs.iter_mut()).enumerate() {
            if i == skip {
                continue;
            }

            let multiple = -row.get(column);
            if multiple != 0_f64 {
                row.add_multiple_of_row(multiple, pivot_row);
                *rhs += multiple * pivot_rhs;
            }
        }

        let multiple = -self.objective[column];
        if multiple != 0_f64 {
            pivot_row.add_multiple_into_dense(multiple, &mut self.objective);
            self.value += multiple * pivot_rhs;
        }

        let multiple = -self.phase_one[column];
        if multiple != 0_f64 {
            pivot_row.add_multiple_into_dense(multiple, &mut self.phase_one);
            self.infeasibility += multiple * pivot_rhs;
        }
    }
}

impl SimplexTableau for SparseTableau {
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
        debug_assert!(row < self.nr_rows() && column < self.nr_columns());

        match (row.cmp(&self.m()), column < self.n()) {
            (Ordering::Less, true) => self.rows[row].get(column),
            (Ordering::Less, false) => self.rhs[row],
            (Ordering::Equal, true) => self.objective[column],
            (Ordering::Equal, false) => self.value,
            (Ordering::Greater, true) => self.phase_one[column],
            (Ordering::Greater, false) => self.infeasibility,
        }
    }

    fn set(&mut self, row: usize, column: usize, value: f64) {
        debug_assert!(row < self.nr_rows() && column < self.nr_columns());

        match (row.cmp(&self.m()), column < self.n()) {
            (Ordering::Less, true) => self.rows[row].set(column, value),
            (Ordering::Less, false) => self.rhs[row] = value,
            (Ordering::Equal, true) => self.objective[column] = value,
            (Ordering::Equal, false) => self.value = value,
            (Ordering::Greater, true) => self.phase_one[column] = value,
            (Ordering::Greater, false) => self.infeasibility = value,
        }
    }

    fn add(&mut self, row: usize, column: usize, value: f64) {
        debug_assert!(row < self.nr_rows() && column < self.nr_columns());

        match (row.cmp(&self.m()), column < self.n()) {
            (Ordering::Less, true) => self.rows[row].shift_value(column, value),
            (Ordering::Less, false) => self.rhs[row] += value,
            (Ordering::Equal, true) => self.objective[column] += value,
            (Ordering::Equal, false) => self.value += value,
            (Ordering::Greater, true) => self.phase_one[column] += value,
            (Ordering::Greater, false) => self.infeasibility += value,
        }
    }

    fn pivot(&mut self, point: IterationPoint) {
        let IterationPoint { row, column } = point;
        debug_assert!(row < self.m());
        debug_assert!(column < self.structure.count_variables());
        trace!("pivot on ({}, {}) with value {}", row, column, self.rows[row].get(column));

        let n = self.n();
        let mut pivot_row = mem::replace(&mut self.rows[row], SparseVector::zeros(n));
        let pivot_rhs = Self::scale(&mut pivot_row, self.rhs[row], column);
        self.rhs[row] = pivot_rhs;
        self.eliminate(row, column, &pivot_row, pivot_rhs);
        self.rows[row] = pivot_row;

        self.update(row, column);
    }

    fn fix_variable(&mut self, index: usize, value: f64) -> bool {
        let Some(row) = self.basis.row_index(index) else {
            debug!("can't fix variable {}, it is not basic", index);
            return false;
        };
        let Some((multiple, rhs)) = auxiliary_row_parameters(self.rhs[row], value) else {
            return true;
        };

        let mut auxiliary = self.rows[row].clone();
        auxiliary.set(index, 0_f64);
        auxiliary.element_wise_multiply(multiple);

        let Some(column) = self.find_next_pivot_column(auxiliary.iter().copied()) else {
            debug!("can't fix variable {} at {}, no column to pivot on", index, value);
            return false;
        };

        let rhs = Self::scale(&mut auxiliary, rhs, column);
        self.eliminate(row, column, &auxiliary, rhs);
        self.rows[row] = auxiliary;
        self.rhs[row] = rhs;
        self.update(row, column);

        let is_feasible = self.rhs.iter().all(|&b| b >= 0_f64);
        debug!("fixed variable {} at {} by pivoting on ({}, {}), feasible: {}", index, value, row, column, is_feasible);
        is_feasible
    }

    fn objective_value(&self) -> f64 {
        self.value
    }

    fn infeasibility(&self) -> f64 {
        self.infeasibility
    }

    fn copy_row(&self, row: usize, target: &mut [f64]) {
        debug_assert_eq!(target.len(), self.nr_columns());

        let n = self.n();
        let m = self.m();
        match row.cmp(&m) {
            Ordering::Less => {
                self.rows[row].write_into(&mut target[..n]);
                target[n] = self.rhs[row];
            },
            Ordering::Equal => {
                target[..n].copy_from_slice(&self.objective);
                target[n] = self.value;
            },
            Ordering::Greater => {
                target[..n].copy_from_slice(&self.phase_one);
                target[n] = self.infeasibility;
            },
        }
    }
}

impl fmt::Display for SparseTableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_tableau(self, f)
    }
}
