//! # Configuration
//!
//! Choice of storage layout and the numerical tolerances used by the tableau operations.
use crate::data::linear_algebra::{EPSILON, PIVOT_TOLERANCE};

/// Options for the construction of a tableau.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Options {
    /// Whether to use the sparse layout. When not set, a dense layout is used.
    pub sparse: Option<bool>,
    /// Tolerances handed to the tableau.
    pub tolerances: Tolerances,
}

impl Options {
    /// Options selecting the sparse layout, default tolerances otherwise.
    pub fn sparse() -> Self {
        Self { sparse: Some(true), ..Self::default() }
    }

    /// Whether the sparse layout was explicitly selected.
    pub fn is_sparse(&self) -> bool {
        self.sparse.unwrap_or(false)
    }
}

/// Numerical thresholds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    /// Ratio test eligibility: only entries strictly below `-pivot` may be pivoted on.
    pub pivot: f64,
    /// Used when checking that basic columns are unit vectors.
    pub epsilon: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            pivot: PIVOT_TOLERANCE,
            epsilon: EPSILON,
        }
    }
}
