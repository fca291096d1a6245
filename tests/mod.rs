//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
//!
//! The problem used throughout is
//!
//! ```text
//! maximize 2 x0 + 3 x1 + x2
//!
//!     x0 + x1 +  x2       <= 10
//!     x0      -  x2       >=  2
//!          x1 + 2x2        =  6
//! ```
//!
//! with its optimum at `(4, 6, 0)`.
use relp_tableau::algorithm::simplex::{IterationPoint, SimplexTableau};
use relp_tableau::data::linear_program::structure::LinearStructure;

mod branching;
mod layout_equivalence;

/// Model variables, one surplus, one identity slack and two artificials.
fn structure() -> LinearStructure {
    LinearStructure::new(3, 3, 1, 1, 2)
}

fn load<T: SimplexTableau>(mut tableau: T) -> T {
    {
        let mut body = tableau.constraints_body();
        for (i, j, value) in [
            (0, 0, 1_f64), (0, 1, 1_f64), (0, 2, 1_f64), (0, 4, 1_f64),
            (1, 0, 1_f64), (1, 2, -1_f64), (1, 3, -1_f64),
            (2, 1, 1_f64), (2, 2, 2_f64),
        ] {
            body.set(i, j, value);
        }
    }
    {
        let mut rhs = tableau.constraints_rhs();
        for (i, value) in [10_f64, 2_f64, 6_f64].into_iter().enumerate() {
            rhs.set(i, value);
        }
    }
    {
        let mut objective = tableau.objective();
        for (j, value) in [-2_f64, -3_f64, -1_f64].into_iter().enumerate() {
            objective.set(j, value);
        }
    }

    tableau
}

/// The points a largest coefficient rule pivots on to reach the optimum.
fn optimal_pivots() -> [IterationPoint; 4] {
    [
        IterationPoint::new(1, 0),
        IterationPoint::new(2, 2),
        IterationPoint::new(0, 3),
        IterationPoint::new(2, 1),
    ]
}

/// Compare all cells and the basis of two tableaus.
fn assert_equivalent(left: &impl SimplexTableau, right: &impl SimplexTableau) {
    assert_eq!(left.nr_rows(), right.nr_rows());
    assert_eq!(left.nr_columns(), right.nr_columns());
    for i in 0..left.nr_rows() {
        for j in 0..left.nr_columns() {
            approx::assert_abs_diff_eq!(left.get(i, j), right.get(i, j), epsilon = 1e-12);
        }
    }
    assert_eq!(left.basis(), right.basis());
}
