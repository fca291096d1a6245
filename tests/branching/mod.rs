use approx::assert_abs_diff_eq;

use relp_tableau::algorithm::simplex::{IterationPoint, RawTableau, SimplexTableau, SparseTableau, Tableau, TransposedTableau};
use relp_tableau::data::linear_program::structure::LinearStructure;

use super::{assert_equivalent, load, optimal_pivots, structure};

fn optimal() -> Vec<Tableau> {
    let mut tableaus = vec![
        Tableau::Raw(load(RawTableau::new(structure()))),
        Tableau::Transposed(load(TransposedTableau::new(structure()))),
        Tableau::Sparse(load(SparseTableau::new(structure()))),
    ];
    for tableau in &mut tableaus {
        for point in optimal_pivots() {
            tableau.pivot(point);
        }
    }

    tableaus
}

#[test]
fn fix_down() {
    let mut tableaus = optimal();
    for tableau in &mut tableaus {
        assert!(tableau.fix_variable(0, 3_f64));

        // The identity slack replaced x0
        assert_eq!(tableau.basis_indices(), vec![3, 4, 1]);
        assert_eq!(tableau.rhs_values(), vec![1_f64, 1_f64, 6_f64]);
        assert_eq!(tableau.objective_value(), 24_f64);
        assert!(tableau.is_in_canonical_form());
        assert!(tableau.is_excluded(0));
        assert_eq!(tableau.basis_deficit(), 0);
    }
    assert_equivalent(&tableaus[0], &tableaus[1]);
    assert_equivalent(&tableaus[0], &tableaus[2]);
}

#[test]
fn fix_at_value_is_noop() {
    for mut tableau in optimal() {
        let before = tableau.clone();
        assert!(tableau.fix_variable(1, 6_f64));
        assert_eq!(tableau, before);
    }
}

#[test]
fn fix_nonbasic_fails() {
    for mut tableau in optimal() {
        let before = tableau.clone();
        assert!(!tableau.fix_variable(2, 1_f64));
        assert_eq!(tableau, before);
    }
}

#[test]
fn fix_twice() {
    for mut tableau in optimal() {
        assert!(tableau.fix_variable(0, 3_f64));
        // x0 is not basic anymore
        assert!(!tableau.fix_variable(0, 2_f64));
        assert_abs_diff_eq!(tableau.objective_value(), 24_f64);
    }
}

/// Minimize `-x` subject to `x + y + s1 = 4` and `y + s2 = 1`, solved by a single pivot.
fn small() -> Vec<Tableau> {
    let structure = LinearStructure::new(2, 2, 0, 2, 0);
    let mut tableaus = vec![Tableau::new_raw(structure), Tableau::new_dense(structure), Tableau::new_sparse(structure)];
    for tableau in &mut tableaus {
        {
            let mut body = tableau.constraints_body();
            for (i, j, value) in [(0, 0, 1_f64), (0, 1, 1_f64), (0, 2, 1_f64), (1, 1, 1_f64), (1, 3, 1_f64)] {
                body.set(i, j, value);
            }
        }
        tableau.constraints_rhs().set(0, 4_f64);
        tableau.constraints_rhs().set(1, 1_f64);
        tableau.objective().set(0, -1_f64);
        tableau.pivot(IterationPoint::new(0, 0));
    }

    tableaus
}

#[test]
fn fix_with_negative_rhs() {
    for mut tableau in small() {
        assert_eq!(tableau.objective_value(), 4_f64);

        // y enters in place of x and drives s2 negative
        assert!(!tableau.fix_variable(0, 2_f64));
        assert_eq!(tableau.basis_indices(), vec![1, 3]);
        assert_eq!(tableau.rhs_values(), vec![2_f64, -1_f64]);
        assert_eq!(tableau.objective_value(), 2_f64);
        assert!(tableau.is_in_canonical_form());
        assert_eq!(tableau.included().len(), 2);
    }
}

#[test]
fn fix_with_tiny_negative_rhs() {
    // One unit in the last place below 3, so that s2 ends up at -4.4e-16
    let value = 3_f64 - 2_f64 * f64::EPSILON;
    for mut tableau in small() {
        assert!(!tableau.fix_variable(0, value));
        assert_eq!(tableau.basis_indices(), vec![1, 3]);
        let rhs = tableau.rhs_values();
        assert!(rhs[0] > 0_f64);
        assert!(rhs[1] < 0_f64);
        assert_abs_diff_eq!(rhs[1], 0_f64, epsilon = 1e-15);
    }
}
