//! # Problem sources
//!
//! A `MatrixProvider` describes an equality form problem `Ax = b, x >= 0` with objective `c`.
//! Loading one into a tableau goes through the regional views, so the phase one objective and the
//! basis are set up as a side effect.
use log::debug;

use crate::algorithm::simplex::error::TableauError;
use crate::algorithm::simplex::tableau::SimplexTableau;

/// Abstract interface for a matrix and constraint values.
///
/// This is the data of the linear program, free of any simplex specific bookkeeping.
pub trait MatrixProvider {
    /// The number of constraints in the problem.
    fn nr_constraints(&self) -> usize;
    /// The number of variables in the problem.
    fn nr_variables(&self) -> usize;
    /// The nonzero constraint coefficients, as `(row, column, value)`.
    fn constraint_triples(&self) -> impl Iterator<Item=(usize, usize, f64)> + '_;
    /// Constraint values.
    fn rhs(&self) -> &[f64];
    /// Cost per variable.
    fn objective(&self) -> &[f64];
}

/// Owned problem data.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixData {
    nr_constraints: usize,
    nr_variables: usize,
    /// Nonzero coefficients as `(row, column, value)`, in any order.
    triples: Vec<(usize, usize, f64)>,
    b: Vec<f64>,
    c: Vec<f64>,
}

impl MatrixData {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `nr_variables`: Number of columns.
    /// * `triples`: Nonzero coefficients as `(row, column, value)`.
    /// * `b`: Constraint values, one per row.
    /// * `c`: Cost per variable.
    pub fn new(nr_variables: usize, triples: Vec<(usize, usize, f64)>, b: Vec<f64>, c: Vec<f64>) -> Self {
        Self {
            nr_constraints: b.len(),
            nr_variables,
            triples,
            b,
            c,
        }
    }

    /// Create a new instance from dense rows.
    pub fn from_dense(rows: &[Vec<f64>], b: Vec<f64>, c: Vec<f64>) -> Self {
        debug_assert_eq!(rows.len(), b.len());

        let triples = rows.iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate()
                .filter(|&(_, &value)| value != 0_f64)
                .map(move |(j, &value)| (i, j, value)))
            .collect();

        Self::new(c.len(), triples, b, c)
    }
}

impl MatrixProvider for MatrixData {
    fn nr_constraints(&self) -> usize {
        self.nr_constraints
    }

    fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    fn constraint_triples(&self) -> impl Iterator<Item=(usize, usize, f64)> + '_ {
        self.triples.iter().copied()
    }

    fn rhs(&self) -> &[f64] {
        &self.b
    }

    fn objective(&self) -> &[f64] {
        &self.c
    }
}

/// Load the data of a provider into a tableau.
///
/// The input is validated before anything is written, so the tableau is left untouched on error.
///
/// # Arguments
///
/// * `provider`: Problem to copy.
/// * `tableau`: Empty tableau with a structure matching the problem.
pub fn copy_into<MP: MatrixProvider, T: SimplexTableau>(provider: &MP, tableau: &mut T) -> Result<(), TableauError> {
    let nr_rows = tableau.m();
    let nr_columns = tableau.structure().count_variables();
    let nr_model_variables = tableau.structure().count_model_variables();

    if provider.rhs().len() != nr_rows {
        return Err(TableauError::RhsLength { expected: nr_rows, actual: provider.rhs().len() });
    }
    if provider.objective().len() != nr_model_variables {
        return Err(TableauError::ObjectiveLength { expected: nr_model_variables, actual: provider.objective().len() });
    }
    for (row, column, _) in provider.constraint_triples() {
        if row >= nr_rows {
            return Err(TableauError::RowOutOfBounds { row, nr_rows });
        }
        if column >= nr_columns {
            return Err(TableauError::ColumnOutOfBounds { column, nr_columns });
        }
    }

    let mut body = tableau.constraints_body();
    for (row, column, value) in provider.constraint_triples() {
        body.set(row, column, value);
    }
    let mut rhs = tableau.constraints_rhs();
    for (i, &value) in provider.rhs().iter().enumerate() {
        rhs.set(i, value);
    }
    let mut objective = tableau.objective();
    for (j, &value) in provider.objective().iter().enumerate() {
        objective.set(j, value);
    }

    debug!("loaded {} constraints and {} variables into a tableau", provider.nr_constraints(), provider.nr_variables());
    Ok(())
}
