//! # Scenario tests that require a look inside the crate.
//!
//! The tableau doesn't pick its own pivots, so these tests drive it with a textbook largest
//! coefficient rule.
//!
//! Convention for function names:
//!
//! * `fn matrix_data()`
//! * `fn tableau_form()`
//! * `fn optimal_tableau_form()`
use crate::algorithm::simplex::IterationPoint;
use crate::algorithm::simplex::tableau::SimplexTableau;
use crate::data::linear_algebra::EPSILON;


/// How a problem was solved.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    Optimal,
    Infeasible,
    Unbounded,
}

/// Solve with two phases, returning the points that were pivoted on.
pub fn solve<T: SimplexTableau>(tableau: &mut T) -> (Outcome, Vec<IterationPoint>) {
    let mut pivots = Vec::new();

    if tableau.has_basic_artificials() {
        if let Err(outcome) = iterate(tableau, true, &mut pivots) {
            return (outcome, pivots);
        }
        if tableau.infeasibility() < -EPSILON {
            return (Outcome::Infeasible, pivots);
        }
    }

    match iterate(tableau, false, &mut pivots) {
        Ok(()) => (Outcome::Optimal, pivots),
        Err(outcome) => (outcome, pivots),
    }
}

/// Pivot until the objective row of a phase has no negative reduced costs.
///
/// The most negative reduced cost enters, the row with the smallest ratio leaves. Ties go to the
/// lowest index.
fn iterate<T: SimplexTableau>(tableau: &mut T, phase_one: bool, pivots: &mut Vec<IterationPoint>) -> Result<(), Outcome> {
    let m = tableau.m();
    let cost_row = if phase_one { m + 1 } else { m };

    loop {
        let entering = (0..tableau.structure().count_variables())
            .filter(|&j| tableau.is_excluded(j))
            .map(|j| (j, tableau.get(cost_row, j)))
            .filter(|&(_, cost)| cost < -EPSILON)
            .min_by(|(_, left), (_, right)| left.total_cmp(right));
        let Some((column, _)) = entering else {
            return Ok(());
        };

        let leaving = (0..m)
            .filter(|&i| tableau.get(i, column) > EPSILON)
            .map(|i| (i, tableau.rhs(i) / tableau.get(i, column)))
            .min_by(|(_, left), (_, right)| left.total_cmp(right));
        let Some((row, _)) = leaving else {
            return Err(Outcome::Unbounded);
        };

        let point = IterationPoint::new(row, column);
        tableau.pivot(point);
        pivots.push(point);
    }
}

/// Values of the variables that are not artificial in the current basic solution.
pub fn primal_solution<T: SimplexTableau>(tableau: &T) -> Vec<f64> {
    let mut solution = vec![0_f64; tableau.structure().count_variables()];
    for i in 0..tableau.m() {
        if let Some(j) = tableau.basis().basic_variable(i) {
            solution[j] = tableau.rhs(i);
        }
    }

    solution
}
