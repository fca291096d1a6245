//! # Shape of a linear program in tableau form
//!
//! Counts of the different kinds of columns, used for sizing and indexing of all tableaus.
use cumsum::cumsum_array_owned;
use enum_map::{Enum, EnumMap, enum_map};

/// Kinds of columns in a tableau, in the order in which they appear.
///
/// /               || Model variables | Slack variables | Identity slacks | Artificials || b |
/// ================||=================|=================|=================|=============||===|
/// Identity rows   ||  coefficients   |  coefficients   |        I        |      0      ||   |
/// ----------------||-----------------|-----------------|-----------------|-------------||---|
/// Other rows      ||  coefficients   |  coefficients   |        0        |      I      ||   |
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColumnType {
    /// Variables of the model that is being solved.
    Model,
    /// Slacks for inequality constraints that don't form an identity block.
    Slack,
    /// Slacks that form an identity block in the first rows, and are basic initially.
    IdentitySlack,
    /// Variables only used to find an initial basic feasible solution.
    Artificial,
}

/// Immutable description of the problem shape.
///
/// The identity slacks and the artificial variables, when together as many as there are
/// constraints, form an identity matrix at the right of the tableau body. Only then can dual
/// values be read from the objective row.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LinearStructure {
    nr_constraints: usize,
    nr_model_variables: usize,
    /// Number of slack variables that are not identity slacks.
    pub nb_slck: usize,
    /// Number of identity slack variables.
    pub nb_idty: usize,
    /// Number of artificial variables.
    pub nb_arti: usize,

    /// Indices that separate the different column groups.
    column_group_end: EnumMap<ColumnType, usize>,
}

impl LinearStructure {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `nr_constraints`: Number of constraint rows, `m`.
    /// * `nr_model_variables`: Number of variables of the model.
    /// * `nb_slck`: Number of slack variables outside of the identity block.
    /// * `nb_idty`: Number of slacks forming an identity block. The corresponding constraints should
    /// be the first rows of the tableau.
    /// * `nb_arti`: Number of artificial variables.
    pub fn new(
        nr_constraints: usize,
        nr_model_variables: usize,
        nb_slck: usize,
        nb_idty: usize,
        nb_arti: usize,
    ) -> Self {
        debug_assert!(nb_idty + nb_arti <= nr_constraints);

        let cumulative = cumsum_array_owned([nr_model_variables, nb_slck, nb_idty, nb_arti]);
        let column_group_end = enum_map! {
            ColumnType::Model         => cumulative[0],
            ColumnType::Slack         => cumulative[1],
            ColumnType::IdentitySlack => cumulative[2],
            ColumnType::Artificial    => cumulative[3],
        };

        Self {
            nr_constraints,
            nr_model_variables,
            nb_slck,
            nb_idty,
            nb_arti,
            column_group_end,
        }
    }

    /// Structure for an equality form problem `Ax = b` where every row receives an artificial
    /// variable.
    pub fn all_artificial(nr_constraints: usize, nr_model_variables: usize) -> Self {
        Self::new(nr_constraints, nr_model_variables, 0, 0, nr_constraints)
    }

    /// The number of constraints, `m`.
    pub fn count_constraints(&self) -> usize {
        self.nr_constraints
    }

    /// The number of model variables.
    pub fn count_model_variables(&self) -> usize {
        self.nr_model_variables
    }

    /// All variables that are not artificial: model variables and both kinds of slacks.
    pub fn count_variables(&self) -> usize {
        self.column_group_end[ColumnType::IdentitySlack]
    }

    /// All variables, including the artificial ones, `n`.
    pub fn count_variables_totally(&self) -> usize {
        self.column_group_end[ColumnType::Artificial]
    }

    /// First column of the identity block towards the right of the tableau body, `n - m`.
    ///
    /// Only meaningful when `is_able_to_extract_dual` holds.
    pub fn dual_identity_base(&self) -> usize {
        debug_assert!(self.count_variables_totally() >= self.nr_constraints);

        self.count_variables_totally() - self.nr_constraints
    }

    /// Whether the identity slacks and artificials span all constraints.
    pub fn is_able_to_extract_dual(&self) -> bool {
        self.nb_idty + self.nb_arti == self.nr_constraints
    }

    /// Classify a column by type using the column index.
    ///
    /// See the `ColumnType` documentation for a visualization.
    pub fn column_type(&self, j: usize) -> ColumnType {
        debug_assert!(j < self.count_variables_totally());

        [ColumnType::Model, ColumnType::Slack, ColumnType::IdentitySlack, ColumnType::Artificial]
            .into_iter()
            .find(|&column_type| j < self.column_group_end[column_type])
            .unwrap_or(ColumnType::Artificial)
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::structure::{ColumnType, LinearStructure};

    #[test]
    fn counts() {
        let structure = LinearStructure::new(4, 3, 1, 2, 2);
        assert_eq!(structure.count_constraints(), 4);
        assert_eq!(structure.count_variables(), 6);
        assert_eq!(structure.count_variables_totally(), 8);
        assert_eq!(structure.dual_identity_base(), 4);
        assert!(structure.is_able_to_extract_dual());

        let structure = LinearStructure::new(3, 2, 1, 1, 0);
        assert!(!structure.is_able_to_extract_dual());
    }

    #[test]
    fn column_type() {
        let structure = LinearStructure::new(4, 3, 1, 2, 2);
        assert_eq!(structure.column_type(0), ColumnType::Model);
        assert_eq!(structure.column_type(2), ColumnType::Model);
        assert_eq!(structure.column_type(3), ColumnType::Slack);
        assert_eq!(structure.column_type(4), ColumnType::IdentitySlack);
        assert_eq!(structure.column_type(5), ColumnType::IdentitySlack);
        assert_eq!(structure.column_type(6), ColumnType::Artificial);
        assert_eq!(structure.column_type(7), ColumnType::Artificial);
    }

    #[test]
    fn all_artificial() {
        let structure = LinearStructure::all_artificial(2, 3);
        assert_eq!(structure.count_variables(), 3);
        assert_eq!(structure.count_variables_totally(), 5);
        assert_eq!(structure.nb_arti, 2);
        assert_eq!(structure.column_type(3), ColumnType::Artificial);
    }
}
