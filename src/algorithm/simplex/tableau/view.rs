//! # Tableau areas
//!
//! Writable views on the parts of a tableau that a problem is loaded through. Writing through a
//! view keeps the phase one row and the basis consistent with the values written.
use crate::algorithm::simplex::tableau::SimplexTableau;

/// The constraint coefficients of the variables that are not artificial.
///
/// Of size `m x count_variables`.
#[derive(Debug)]
pub struct ConstraintsBody<'a, T> {
    tableau: &'a mut T,
}

impl<'a, T: SimplexTableau> ConstraintsBody<'a, T> {
    pub(crate) fn new(tableau: &'a mut T) -> Self {
        Self { tableau }
    }

    /// Coefficient of a variable in a constraint.
    pub fn get(&self, row: usize, column: usize) -> f64 {
        debug_assert!(row < self.nr_rows() && column < self.nr_columns());

        self.tableau.get(row, column)
    }

    /// Set the coefficient of a variable in a constraint.
    ///
    /// Rows below the number of identity slacks are expected to be made basic through their
    /// identity slack: writing a one in an identity slack column records that basis entry. All
    /// other rows contribute to the phase one objective.
    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        debug_assert!(row < self.nr_rows() && column < self.nr_columns());

        self.tableau.set(row, column, value);

        let structure = *self.tableau.structure();
        if row < structure.nb_idty {
            if column >= structure.dual_identity_base() && value == 1_f64 {
                self.tableau.update(row, column);
            }
        } else {
            let phase_one_row = self.tableau.m() + 1;
            self.tableau.add(phase_one_row, column, -value);
        }
    }

    /// Number of constraints.
    pub fn nr_rows(&self) -> usize {
        self.tableau.m()
    }

    /// Number of variables that are not artificial.
    pub fn nr_columns(&self) -> usize {
        self.tableau.structure().count_variables()
    }
}

/// The right-hand side of the constraints.
#[derive(Debug)]
pub struct ConstraintsRhs<'a, T> {
    tableau: &'a mut T,
}

impl<'a, T: SimplexTableau> ConstraintsRhs<'a, T> {
    pub(crate) fn new(tableau: &'a mut T) -> Self {
        Self { tableau }
    }

    /// Right-hand side of a constraint.
    pub fn get(&self, index: usize) -> f64 {
        self.tableau.rhs(index)
    }

    /// Set the right-hand side of a constraint.
    ///
    /// When the problem has artificial variables, the artificial of this row gets its unit
    /// coefficient. Rows without an identity slack contribute to the infeasibility.
    pub fn set(&mut self, index: usize, value: f64) {
        debug_assert!(index < self.len());

        let structure = *self.tableau.structure();
        let n = structure.count_variables_totally();
        if structure.nb_arti > 0 {
            self.tableau.set(index, structure.dual_identity_base() + index, 1_f64);
        }
        self.tableau.set(index, n, value);
        if index >= structure.nb_idty {
            let phase_one_row = self.tableau.m() + 1;
            self.tableau.add(phase_one_row, n, -value);
        }
    }

    /// Number of constraints.
    pub fn len(&self) -> usize {
        self.tableau.m()
    }

    /// Whether there are no constraints.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The cost coefficients of the model variables.
#[derive(Debug)]
pub struct Objective<'a, T> {
    tableau: &'a mut T,
}

impl<'a, T: SimplexTableau> Objective<'a, T> {
    pub(crate) fn new(tableau: &'a mut T) -> Self {
        Self { tableau }
    }

    /// Cost of a model variable.
    pub fn get(&self, index: usize) -> f64 {
        debug_assert!(index < self.len());

        self.tableau.get(self.tableau.m(), index)
    }

    /// Set the cost of a model variable.
    pub fn set(&mut self, index: usize, value: f64) {
        debug_assert!(index < self.len());

        let objective_row = self.tableau.m();
        self.tableau.set(objective_row, index, value);
    }

    /// Number of model variables.
    pub fn len(&self) -> usize {
        self.tableau.structure().count_model_variables()
    }

    /// Whether there are no model variables.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
