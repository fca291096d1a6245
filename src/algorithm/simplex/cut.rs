//! # Cutting planes
//!
//! Valid inequalities derived from a single tableau row of a basic integer variable with a
//! fractional value.
use log::trace;

use crate::data::linear_algebra::vector::SparseVector;
use crate::data::linear_program::equation::{Equation, Relation};

/// A constraint row of the tableau, with the context a cut generator needs.
#[derive(Debug, Copy, Clone)]
pub struct BasicRow<'a> {
    /// All coefficients of the row, artificial columns included, right-hand side excluded.
    pub coefficients: &'a [f64],
    /// Column of the basic variable of this row.
    pub basic: usize,
    /// Value of the basic variable.
    pub rhs: f64,
    /// Whether a model variable is integer, indexed by model variable.
    pub integer: &'a [bool],
    /// Rows whose fractional part is closer than this to an integer are not used.
    pub fractionality: f64,
    /// The variables (not artificial) that are not basic.
    pub excluded: &'a [usize],
}

/// Derives a cut from a row.
pub trait CutGenerator {
    /// Create a cut that is violated by the current basic solution, if possible.
    fn generate(&self, row: &BasicRow<'_>) -> Option<Equation>;
}

/// Gomory mixed-integer cuts.
///
/// With `f0` the fractional part of the right-hand side and `a` the coefficient of a nonbasic
/// column, that column gets coefficient
///
/// * `f / f0` if `f <= f0` and `(1 - f) / (1 - f0)` otherwise, for integer variables where `f` is
/// the fractional part of `a`,
/// * `a / f0` if `a > 0` and `-a / (1 - f0)` otherwise, for continuous variables.
///
/// The cut then reads `sum >= 1`.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct GomoryMixedInteger;

impl CutGenerator for GomoryMixedInteger {
    fn generate(&self, row: &BasicRow<'_>) -> Option<Equation> {
        let f0 = fractional_part(row.rhs);
        if f0 < row.fractionality || f0 > 1_f64 - row.fractionality {
            trace!("skipping row of variable {}, fractional part {} is too small", row.basic, f0);
            return None;
        }

        let mut coefficients = row.excluded.iter()
            .map(|&j| (j, row.coefficients[j]))
            .filter(|&(_, a)| a != 0_f64)
            .map(|(j, a)| {
                let is_integer = row.integer.get(j).copied().unwrap_or(false);
                let coefficient = if is_integer {
                    let f = fractional_part(a);
                    if f <= f0 { f / f0 } else { (1_f64 - f) / (1_f64 - f0) }
                } else if a > 0_f64 {
                    a / f0
                } else {
                    -a / (1_f64 - f0)
                };
                (j, coefficient)
            })
            .filter(|&(_, coefficient)| coefficient != 0_f64)
            .collect::<Vec<_>>();
        coefficients.sort_unstable_by_key(|&(j, _)| j);

        Some(Equation {
            coefficients: SparseVector::new(coefficients, row.coefficients.len()),
            relation: Relation::Greater,
            rhs: 1_f64,
            source: row.basic,
        })
    }
}

/// Distance to the largest integer not greater than the value, in `[0, 1)`.
fn fractional_part(value: f64) -> f64 {
    value - value.floor()
}
