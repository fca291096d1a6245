//! # Linear (in)equalities
//!
//! Produced by the cut generators: a sparse coefficient vector, a relation and a right-hand side.
use std::fmt;
use std::fmt::Display;

use crate::data::linear_algebra::vector::SparseVector;

/// Direction of a constraint.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Relation {
    /// `<a, x> <= b`
    Less,
    /// `<a, x> == b`
    Equal,
    /// `<a, x> >= b`
    Greater,
}

/// A single linear constraint over the columns of a tableau.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    /// Coefficient per tableau column.
    pub coefficients: SparseVector<f64>,
    /// How the left-hand side relates to `rhs`.
    pub relation: Relation,
    /// Right-hand side.
    pub rhs: f64,
    /// Index of the (basic) variable from whose row this equation was derived.
    pub source: usize,
}

impl Equation {
    /// Evaluate the left-hand side for a dense assignment of values to the columns.
    pub fn lhs(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.coefficients.len());

        self.coefficients.iter().map(|&(j, a)| a * x[j]).sum()
    }

    /// Whether the assignment satisfies this equation, with a tolerance.
    pub fn is_satisfied_by(&self, x: &[f64], tolerance: f64) -> bool {
        let lhs = self.lhs(x);
        match self.relation {
            Relation::Less => lhs <= self.rhs + tolerance,
            Relation::Equal => (lhs - self.rhs).abs() <= tolerance,
            Relation::Greater => lhs >= self.rhs - tolerance,
        }
    }
}

impl Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relation = match self.relation {
            Relation::Less => "<=",
            Relation::Equal => "==",
            Relation::Greater => ">=",
        };
        write!(f, "{} {} {}", self.coefficients, relation, self.rhs)
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::vector::SparseVector;
    use crate::data::linear_program::equation::{Equation, Relation};

    #[test]
    fn satisfied() {
        let equation = Equation {
            coefficients: SparseVector::from_test_data(vec![0.5, 0_f64, 2_f64]),
            relation: Relation::Greater,
            rhs: 1_f64,
            source: 1,
        };
        assert!(equation.is_satisfied_by(&[2_f64, 7_f64, 0_f64], 1e-9));
        assert!(!equation.is_satisfied_by(&[0_f64, 7_f64, 0.25], 1e-9));
        assert_eq!(equation.to_string(), "[(0 0.5), (2 2)] >= 1");
    }
}
