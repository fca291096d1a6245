//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau is an `(m + 2) x (n + 1)` matrix:
//!
//! * rows `0..m` hold the constraints, with the right-hand side in column `n`,
//! * row `m` holds the (phase two) objective, with the negated objective value in column `n`,
//! * row `m + 1` holds the phase one objective, with the infeasibility in column `n`.
//!
//! Three storage layouts implement the `SimplexTableau` trait. They are numerically equivalent; the
//! choice between them is only a matter of speed.
use std::fmt;
use std::fmt::{Debug, Formatter};

use itertools::Itertools;
use log::debug;

use crate::algorithm::simplex::cut::{BasicRow, CutGenerator};
use crate::algorithm::simplex::error::TableauError;
use crate::algorithm::simplex::IterationPoint;
use crate::algorithm::simplex::matrix_provider::{copy_into, MatrixProvider};
use crate::algorithm::simplex::options::{Options, Tolerances};
use crate::algorithm::simplex::tableau::basis::Basis;
use crate::algorithm::simplex::tableau::ratio::find_next_pivot_column;
use crate::algorithm::simplex::tableau::view::{ConstraintsBody, ConstraintsRhs, Objective};
use crate::data::linear_algebra::vector::dense::{axpy, divide};
use crate::data::linear_program::equation::Equation;
use crate::data::linear_program::structure::LinearStructure;

pub use raw::RawTableau;
pub use sparse::SparseTableau;
pub use transposed::TransposedTableau;

pub mod basis;
pub mod ratio;
pub mod selector;
pub mod view;
mod raw;
mod sparse;
mod transposed;

/// Operations shared by all tableau layouts.
///
/// Implementors provide cell access, the pivot and the variable fixing; everything else is
/// derived from those and from the basis bookkeeping.
pub trait SimplexTableau: Clone + Debug {
    /// Shape of the problem.
    fn structure(&self) -> &LinearStructure;
    /// Current basis.
    fn basis(&self) -> &Basis;
    /// Current basis, mutable. Only to be changed through `update`.
    fn basis_mut(&mut self) -> &mut Basis;
    /// Numerical thresholds used by this tableau.
    fn tolerances(&self) -> &Tolerances;

    /// Value of a cell of the `(m + 2) x (n + 1)` tableau.
    fn get(&self, row: usize, column: usize) -> f64;
    /// Overwrite a cell of the `(m + 2) x (n + 1)` tableau.
    fn set(&mut self, row: usize, column: usize, value: f64);
    /// Add to the value of a cell.
    fn add(&mut self, row: usize, column: usize, value: f64) {
        let current = self.get(row, column);
        self.set(row, column, current + value);
    }

    /// Pivot on a cell with a nonzero value.
    ///
    /// The pivot row is scaled such that the pivot element becomes one, after which the pivot
    /// column is eliminated from all other rows, both objective rows included. The basis is
    /// updated accordingly.
    fn pivot(&mut self, point: IterationPoint);

    /// Clamp a basic variable to a value without solving from scratch.
    ///
    /// The row of the basic variable is replaced by an auxiliary row describing the move to the
    /// target value, on which a pivot is done.
    ///
    /// # Arguments
    ///
    /// * `index`: Column index of a variable, should be basic for this to succeed.
    /// * `value`: Value to fix the variable at.
    ///
    /// # Return value
    ///
    /// Whether the fix could be applied. When `false` is returned because no column could be
    /// pivoted on, the tableau is unchanged. When it is returned because a right-hand side became
    /// negative, the pivot was applied (so basic columns are still unit columns) but the tableau
    /// is not primal feasible anymore. Either way, the problem needs to be solved again.
    #[must_use]
    fn fix_variable(&mut self, index: usize, value: f64) -> bool;

    /// The (phase two) objective function value cell.
    ///
    /// This is the negation of the objective function value of the current basic solution.
    fn objective_value(&self) -> f64;
    /// The phase one objective function value cell.
    fn infeasibility(&self) -> f64;

    /// Copy a complete tableau row, right-hand side included.
    fn copy_row(&self, row: usize, target: &mut [f64]) {
        debug_assert_eq!(target.len(), self.nr_columns());

        for (j, value) in target.iter_mut().enumerate() {
            *value = self.get(row, j);
        }
    }

    /// Number of constraints.
    fn m(&self) -> usize {
        self.structure().count_constraints()
    }

    /// Number of variables, artificials included.
    fn n(&self) -> usize {
        self.structure().count_variables_totally()
    }

    /// Number of rows of the tableau, `m + 2`.
    fn nr_rows(&self) -> usize {
        self.m() + 2
    }

    /// Number of columns of the tableau, `n + 1`.
    fn nr_columns(&self) -> usize {
        self.n() + 1
    }

    /// Record a basis change.
    fn update(&mut self, row: usize, column: usize) {
        self.basis_mut().update(row, column);
    }

    /// Ratio test of a row against the objective row of this tableau.
    ///
    /// See `ratio::find_next_pivot_column`.
    fn find_next_pivot_column(&self, candidate_row: impl IntoIterator<Item=(usize, f64)>) -> Option<usize> {
        let m = self.m();
        find_next_pivot_column(
            candidate_row,
            |j| self.get(m, j),
            self.structure().count_variables(),
            self.tolerances().pivot,
        )
    }

    /// The area of the tableau corresponding to the constraints' body (excluding the artificial
    /// variables).
    fn constraints_body(&mut self) -> ConstraintsBody<'_, Self> {
        ConstraintsBody::new(self)
    }

    /// The area of the tableau corresponding to the constraints' right-hand side.
    fn constraints_rhs(&mut self) -> ConstraintsRhs<'_, Self> {
        ConstraintsRhs::new(self)
    }

    /// The area of the tableau corresponding to the objective function of the model variables.
    fn objective(&mut self) -> Objective<'_, Self> {
        Objective::new(self)
    }

    /// Objective function value cell of either phase.
    fn phase_value(&self, phase_one: bool) -> f64 {
        if phase_one {
            self.infeasibility()
        } else {
            self.objective_value()
        }
    }

    /// Right-hand side of a constraint row.
    fn rhs(&self, row: usize) -> f64 {
        debug_assert!(row < self.m());

        self.get(row, self.n())
    }

    /// Right-hand side of all constraint rows.
    fn rhs_values(&self) -> Vec<f64> {
        (0..self.m()).map(|i| self.rhs(i)).collect()
    }

    /// A complete tableau row, right-hand side included.
    fn tableau_row(&self, row: usize) -> Vec<f64> {
        let mut values = vec![0_f64; self.nr_columns()];
        self.copy_row(row, &mut values);
        values
    }

    /// A complete tableau column, both objective rows included.
    fn tableau_column(&self, column: usize) -> Vec<f64> {
        (0..self.nr_rows()).map(|i| self.get(i, column)).collect()
    }

    /// A constraint row, restricted to the variables that are not artificial.
    fn body_row(&self, row: usize) -> Vec<f64> {
        debug_assert!(row < self.m());

        let mut values = self.tableau_row(row);
        values.truncate(self.structure().count_variables());
        values
    }

    /// A column, restricted to the constraint rows.
    fn body_column(&self, column: usize) -> Vec<f64> {
        (0..self.m()).map(|i| self.get(i, column)).collect()
    }

    /// Dual variable values of the original problem, read from the objective row.
    ///
    /// Only meaningful when the structure `is_able_to_extract_dual`.
    fn dual_variables(&self) -> Vec<f64> {
        debug_assert!(self.structure().is_able_to_extract_dual());

        let (m, n) = (self.m(), self.n());
        (n - m..n).map(|j| self.get(m, j)).collect()
    }

    /// Copy of the basis entries, per row. Negative values are artificials.
    fn basis_indices(&self) -> Vec<isize> {
        self.basis().indices().to_vec()
    }

    /// Basis entry of a row, negative for an artificial.
    fn basis_column_index(&self, row: usize) -> isize {
        self.basis().column_index(row)
    }

    /// The row in which a column is basic.
    fn basis_row_of(&self, column: usize) -> Option<usize> {
        self.basis().row_index(column)
    }

    /// Variables (not artificial) that are basic.
    fn included(&self) -> &[usize] {
        self.basis().selector().included()
    }

    /// Variables (not artificial) that are not basic.
    fn excluded(&self) -> &[usize] {
        self.basis().selector().excluded()
    }

    /// Whether a variable is basic.
    fn is_included(&self, index: usize) -> bool {
        self.basis().selector().is_included(index)
    }

    /// Whether a variable is not basic.
    fn is_excluded(&self, index: usize) -> bool {
        self.basis().selector().is_excluded(index)
    }

    /// Number of artificial variables in the basis.
    ///
    /// `basis_deficit` should return the same number, and is a faster alternative.
    fn count_basic_artificials(&self) -> usize {
        self.basis().count_artificials()
    }

    /// Number of rows in which a variable (not artificial) can still be made basic.
    fn basis_deficit(&self) -> usize {
        self.basis().deficit()
    }

    /// Whether there are any artificial variables in the basis.
    fn has_basic_artificials(&self) -> bool {
        self.basis_deficit() > 0
    }

    /// Whether dual values can be read from this tableau.
    fn is_able_to_extract_dual(&self) -> bool {
        self.structure().is_able_to_extract_dual()
    }

    /// Whether every basic column is a unit column on the constraint rows.
    fn is_in_canonical_form(&self) -> bool {
        let epsilon = self.tolerances().epsilon;

        (0..self.m())
            .filter_map(|i| self.basis().basic_variable(i).map(|j| (i, j)))
            .all(|(i, j)| (0..self.m()).all(|k| {
                let expected = if k == i { 1_f64 } else { 0_f64 };
                (self.get(k, j) - expected).abs() <= epsilon
            }))
    }

    /// Derive cuts from the rows of basic integer variables with a fractional value.
    ///
    /// # Arguments
    ///
    /// * `integer`: Whether a model variable is integer, indexed by model variable.
    /// * `accuracy`: Values within this distance of an integer are considered integer.
    /// * `fractionality`: Minimal fractional part for a row to be used, handed to the generator.
    /// * `generator`: Creates a cut from a single row.
    ///
    /// # Return value
    ///
    /// All cuts the generator produced, in row order.
    fn generate_cut_candidates(
        &self,
        integer: &[bool],
        accuracy: f64,
        fractionality: f64,
        generator: &impl CutGenerator,
    ) -> Vec<Equation> {
        let n = self.n();
        let nr_model_variables = self.structure().count_model_variables();
        debug_assert!(integer.len() >= nr_model_variables);

        let mut values = vec![0_f64; self.nr_columns()];
        let mut cuts = Vec::new();
        for i in 0..self.m() {
            let Some(j) = self.basis().basic_variable(i) else { continue };
            let rhs = self.rhs(i);
            if j < nr_model_variables && integer[j] && !is_integer(rhs, accuracy) {
                self.copy_row(i, &mut values);
                let row = BasicRow {
                    coefficients: &values[..n],
                    basic: j,
                    rhs,
                    integer,
                    fractionality,
                    excluded: self.excluded(),
                };
                cuts.extend(generator.generate(&row));
            }
        }

        debug!("generated {} cut candidates", cuts.len());
        cuts
    }
}

/// Whether a value is integer, up to an absolute accuracy.
pub fn is_integer(value: f64, accuracy: f64) -> bool {
    (value - value.round()).abs() <= accuracy
}

/// Right-hand side of the auxiliary row used to fix a variable, and the multiple of the current
/// row that it is made of.
///
/// # Return value
///
/// `None` if the variable already has the target value.
pub(crate) fn auxiliary_row_parameters(current_rhs: f64, value: f64) -> Option<(f64, f64)> {
    if current_rhs > value {
        Some((-1_f64, value - current_rhs))
    } else if current_rhs < value {
        Some((1_f64, current_rhs - value))
    } else {
        None
    }
}

/// Divide a dense row by its value in column `column`, unless that value is exactly one.
pub(crate) fn scale_dense(row: &mut [f64], column: usize) {
    let pivot_element = row[column];
    debug_assert_ne!(pivot_element, 0_f64);

    if pivot_element != 1_f64 {
        divide(row, pivot_element);
    }
}

/// Eliminate column `column` from dense rows using a scaled pivot row.
pub(crate) fn eliminate_dense<'a>(
    rows: impl Iterator<Item=&'a mut [f64]>,
    column: usize,
    pivot_row: &[f64],
) {
    for row in rows {
        let value = row[column];
        if value != 0_f64 {
            axpy(row, -value, pivot_row);
        }
    }
}

/// Write a tableau in a human readable form.
pub(crate) fn format_tableau<T: SimplexTableau>(tableau: &T, f: &mut Formatter<'_>) -> fmt::Result {
    let m = tableau.m();
    let header = (0..tableau.n()).map(|j| format!("{:>8}", j)).join(" ");
    writeln!(f, "=== Tableau ===")?;
    writeln!(f, "{:>4} | {} | {:>8}", "", header, "b")?;
    writeln!(f, "{}", "-".repeat(header.len() + 20))?;
    for i in 0..tableau.nr_rows() {
        let label = match i {
            i if i < m => i.to_string(),
            i if i == m => "obj".to_string(),
            _ => "inf".to_string(),
        };
        let row = tableau.tableau_row(i);
        let (rhs, body) = row.split_last().map_or((0_f64, &row[..]), |(&rhs, body)| (rhs, body));
        let body = body.iter().map(|v| format!("{:>8.3}", v)).join(" ");
        writeln!(f, "{:>4} | {} | {:>8.3}", label, body, rhs)?;
    }
    writeln!(f, "=== Basis Columns ===")?;
    writeln!(f, "{:?}", tableau.basis().indices())
}

/// A tableau in any of the layouts.
///
/// Created by the factory methods, which pick the layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Tableau {
    /// Row-major dense storage.
    Raw(RawTableau),
    /// Dense storage of the transpose, column-major.
    Transposed(TransposedTableau),
    /// Sparse constraint rows with dense objective rows.
    Sparse(SparseTableau),
}

macro_rules! dispatch {
    ($tableau:expr, $inner:ident => $body:expr) => {
        match $tableau {
            Tableau::Raw($inner) => $body,
            Tableau::Transposed($inner) => $body,
            Tableau::Sparse($inner) => $body,
        }
    };
}

impl Tableau {
    /// Create an empty tableau, sparse or dense depending on the options.
    pub fn make(structure: LinearStructure, options: &Options) -> Self {
        if options.is_sparse() {
            Tableau::Sparse(SparseTableau::with_tolerances(structure, options.tolerances))
        } else {
            Tableau::Raw(RawTableau::with_tolerances(structure, options.tolerances))
        }
    }

    /// Create a tableau for the equality form problem of a provider, with an artificial variable
    /// for every constraint.
    pub fn from_provider<MP: MatrixProvider>(provider: &MP, options: &Options) -> Result<Self, TableauError> {
        let structure = LinearStructure::all_artificial(provider.nr_constraints(), provider.nr_variables());
        let mut tableau = Self::make(structure, options);
        copy_into(provider, &mut tableau)?;

        Ok(tableau)
    }

    /// Create an empty dense tableau in the transposed layout.
    pub fn new_dense(structure: LinearStructure) -> Self {
        Tableau::Transposed(TransposedTableau::new(structure))
    }

    /// Create an empty dense tableau in the row-major layout.
    pub fn new_raw(structure: LinearStructure) -> Self {
        Tableau::Raw(RawTableau::new(structure))
    }

    /// Create an empty sparse tableau.
    pub fn new_sparse(structure: LinearStructure) -> Self {
        Tableau::Sparse(SparseTableau::new(structure))
    }

    /// Convert to a dense layout, if not already dense.
    pub fn into_dense(self) -> Self {
        match self {
            Tableau::Sparse(sparse) => Tableau::Transposed(sparse.to_dense()),
            dense => dense,
        }
    }

    /// Whether the layout is dense.
    pub fn is_dense(&self) -> bool {
        !matches!(self, Tableau::Sparse(_))
    }
}

impl SimplexTableau for Tableau {
    fn structure(&self) -> &LinearStructure {
        dispatch!(self, tableau => tableau.structure())
    }

    fn basis(&self) -> &Basis {
        dispatch!(self, tableau => tableau.basis())
    }

    fn basis_mut(&mut self) -> &mut Basis {
        dispatch!(self, tableau => tableau.basis_mut())
    }

    fn tolerances(&self) -> &Tolerances {
        dispatch!(self, tableau => tableau.tolerances())
    }

    fn get(&self, row: usize, column: usize) -> f64 {
        dispatch!(self, tableau => tableau.get(row, column))
    }

    fn set(&mut self, row: usize, column: usize, value: f64) {
        dispatch!(self, tableau => tableau.set(row, column, value))
    }

    fn add(&mut self, row: usize, column: usize, value: f64) {
        dispatch!(self, tableau => tableau.add(row, column, value))
    }

    fn pivot(&mut self, point: IterationPoint) {
        dispatch!(self, tableau => tableau.pivot(point))
    }

    fn fix_variable(&mut self, index: usize, value: f64) -> bool {
        dispatch!(self, tableau => tableau.fix_variable(index, value))
    }

    fn objective_value(&self) -> f64 {
        dispatch!(self, tableau => tableau.objective_value())
    }

    fn infeasibility(&self) -> f64 {
        dispatch!(self, tableau => tableau.infeasibility())
    }

    fn copy_row(&self, row: usize, target: &mut [f64]) {
        dispatch!(self, tableau => tableau.copy_row(row, target))
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        format_tableau(self, f)
    }
}
