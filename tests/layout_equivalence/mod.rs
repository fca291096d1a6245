use approx::assert_abs_diff_eq;

use relp_tableau::algorithm::simplex::{Options, RawTableau, SimplexTableau, SparseTableau, Tableau, TransposedTableau};

use super::{assert_equivalent, load, optimal_pivots, structure};

#[test]
fn loading() {
    let raw = load(RawTableau::new(structure()));
    let transposed = load(TransposedTableau::new(structure()));
    let sparse = load(SparseTableau::new(structure()));

    assert_equivalent(&raw, &transposed);
    assert_equivalent(&raw, &sparse);
    assert_eq!(raw.basis_indices(), vec![4, -2, -1]);
    assert_eq!(raw.tableau_row(4), vec![-1_f64, -1_f64, -1_f64, 1_f64, 0_f64, 0_f64, 0_f64, -8_f64]);
    assert_eq!(raw.body_column(5), vec![0_f64, 1_f64, 0_f64]);
    assert_eq!(raw.body_column(6), vec![0_f64, 0_f64, 1_f64]);
}

#[test]
fn pivots() {
    let mut raw = load(RawTableau::new(structure()));
    let mut transposed = load(TransposedTableau::new(structure()));
    let mut sparse = load(SparseTableau::new(structure()));

    for point in optimal_pivots() {
        raw.pivot(point);
        transposed.pivot(point);
        sparse.pivot(point);

        assert_equivalent(&raw, &transposed);
        assert_equivalent(&raw, &sparse);
        assert!(raw.is_in_canonical_form());
    }

    assert_eq!(raw.basis_indices(), vec![3, 0, 1]);
    assert_eq!(raw.rhs_values(), vec![2_f64, 4_f64, 6_f64]);
    assert_eq!(raw.objective_value(), 26_f64);
    assert_eq!(raw.infeasibility(), 0_f64);
    assert!(raw.is_able_to_extract_dual());
    for (dual, expected) in raw.dual_variables().into_iter().zip([2_f64, 0_f64, 1_f64]) {
        assert_abs_diff_eq!(dual, expected);
    }
}

#[test]
fn ratio_test() {
    let mut tableau = load(SparseTableau::new(structure()));
    for point in optimal_pivots() {
        tableau.pivot(point);
    }
    // Objective row is [0, 0, 3, 0, 2, 0, 1]
    assert_eq!(tableau.find_next_pivot_column([(2, -1_f64), (4, -1_f64)]), Some(4));
    assert_eq!(tableau.find_next_pivot_column([(2, -3_f64), (4, -1_f64)]), Some(2));
    assert_eq!(tableau.find_next_pivot_column([(2, 1_f64), (6, -1_f64)]), None);
}

#[test]
fn to_dense() {
    let mut sparse = load(SparseTableau::new(structure()));
    let [first, second, third, fourth] = optimal_pivots();
    sparse.pivot(first);
    sparse.pivot(second);

    let mut dense = sparse.to_dense();
    assert_equivalent(&dense, &sparse);
    assert_eq!(dense.included(), sparse.included());

    for point in [third, fourth] {
        dense.pivot(point);
        sparse.pivot(point);
    }
    assert_equivalent(&dense, &sparse);
}

#[test]
fn enum_dispatch() {
    let mut tableaus = vec![
        Tableau::Raw(load(RawTableau::new(structure()))),
        Tableau::Sparse(load(SparseTableau::new(structure()))),
        load(Tableau::make(structure(), &Options::default())),
        load(Tableau::make(structure(), &Options::sparse())).into_dense(),
        load(Tableau::new_dense(structure())),
    ];
    for tableau in &mut tableaus {
        for point in optimal_pivots() {
            tableau.pivot(point);
        }
    }
    for tableau in &tableaus[1..] {
        assert_equivalent(&tableaus[0], tableau);
    }
}

#[test]
fn clones_are_independent() {
    fn assert_send<T: Send>() {}
    assert_send::<Tableau>();

    let original = load(Tableau::new_sparse(structure()));
    let mut copy = original.clone();
    copy.pivot(optimal_pivots()[0]);

    assert_eq!(original.basis_indices(), vec![4, -2, -1]);
    assert_eq!(copy.basis_indices(), vec![4, 0, -1]);
    assert_eq!(original.get(0, 0), 1_f64);
    assert_eq!(copy.get(0, 0), 0_f64);
    assert_eq!(original, load(Tableau::new_sparse(structure())));
}
