//! # Ratio test
//!
//! Selection of the column to pivot on in a row, given the objective row.

/// Find the column to pivot on in `candidate_row`.
///
/// Only entries strictly below `-tolerance` and in a column below `nr_variables` (that is, no
/// artificial) are eligible. Among those, the column minimizing
/// `|objective[column] / candidate[column]|` is chosen; the first one found wins ties.
///
/// # Arguments
///
/// * `candidate_row`: Nonzero `(column, value)` pairs of the row, in increasing column order.
/// * `objective_row`: Value of the objective row per column.
/// * `nr_variables`: Number of columns that are not artificial.
/// * `tolerance`: Pivot tolerance, positive.
///
/// # Return value
///
/// The column to pivot on, or `None` when no column is eligible.
pub fn find_next_pivot_column(
    candidate_row: impl IntoIterator<Item=(usize, f64)>,
    objective_row: impl Fn(usize) -> f64,
    nr_variables: usize,
    tolerance: f64,
) -> Option<usize> {
    debug_assert!(tolerance >= 0_f64);

    let mut selected = None;
    let mut min_quotient = f64::MAX;

    for (j, denominator) in candidate_row {
        if j >= nr_variables {
            break;
        }

        if denominator < -tolerance {
            let quotient = (objective_row(j) / denominator).abs();
            if quotient < min_quotient {
                min_quotient = quotient;
                selected = Some(j);
            }
        }
    }

    selected
}

/// Nonzero `(column, value)` pairs of a dense row.
pub(crate) fn nonzeros(row: &[f64]) -> impl Iterator<Item=(usize, f64)> + '_ {
    row.iter().copied().enumerate().filter(|&(_, value)| value != 0_f64)
}
