//! # Basis bookkeeping
//!
//! Which column is basic in which row, kept in lock-step with the included set of an
//! `IndexSelector`.
use crate::algorithm::simplex::tableau::selector::IndexSelector;

/// Row to column mapping of the current basis.
///
/// A negative entry `-k` means that an artificial variable is basic in that row; it is the
/// artificial with column index `n - k`. Initially, all rows hold their artificial.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Basis {
    indices: Vec<isize>,
    selector: IndexSelector,
}

impl Basis {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of constraints, `m`.
    /// * `nr_variables`: Number of variables that are not artificial, the size of the selector
    /// universe.
    pub fn new(nr_rows: usize, nr_variables: usize) -> Self {
        let m = nr_rows as isize;

        Self {
            indices: (-m..0).collect(),
            selector: IndexSelector::new(nr_variables),
        }
    }

    /// Record that column `column` became basic in row `row`.
    ///
    /// The variable that was basic in that row, if not artificial, is excluded.
    pub fn update(&mut self, row: usize, column: usize) {
        debug_assert!(row < self.indices.len());
        debug_assert!(column < self.selector.len(), "artificial column {} can't become basic", column);

        let old = self.indices[row];
        if old >= 0 {
            self.selector.exclude(old as usize);
        }
        self.selector.include(column);
        self.indices[row] = column as isize;
    }

    /// The basis entry of a row, negative for artificials.
    pub fn column_index(&self, row: usize) -> isize {
        self.indices[row]
    }

    /// The (non artificial) variable basic in a row.
    pub fn basic_variable(&self, row: usize) -> Option<usize> {
        usize::try_from(self.indices[row]).ok()
    }

    /// Row in which a column is basic, if it is basic.
    pub fn row_index(&self, column: usize) -> Option<usize> {
        self.indices.iter().position(|&j| j == column as isize)
    }

    /// All basis entries, per row.
    pub fn indices(&self) -> &[isize] {
        &self.indices
    }

    /// Number of rows with an artificial in the basis.
    ///
    /// `basis_deficit` returns the same number, and is a faster alternative.
    pub fn count_artificials(&self) -> usize {
        self.indices.iter().filter(|&&j| j < 0).count()
    }

    /// Number of rows that don't have a (non artificial) variable in the basis.
    pub fn deficit(&self) -> usize {
        self.indices.len() - self.selector.count_included()
    }

    /// The included and excluded variables.
    pub fn selector(&self) -> &IndexSelector {
        &self.selector
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::simplex::tableau::basis::Basis;

    #[test]
    fn update() {
        let mut basis = Basis::new(3, 5);
        assert_eq!(basis.indices(), &[-3, -2, -1]);
        assert_eq!(basis.count_artificials(), 3);
        assert_eq!(basis.deficit(), 3);
        assert_eq!(basis.basic_variable(0), None);

        basis.update(1, 4);
        assert_eq!(basis.indices(), &[-3, 4, -1]);
        assert_eq!(basis.row_index(4), Some(1));
        assert_eq!(basis.basic_variable(1), Some(4));
        assert!(basis.selector().is_included(4));
        assert_eq!(basis.deficit(), 2);

        basis.update(1, 0);
        assert_eq!(basis.row_index(4), None);
        assert!(basis.selector().is_excluded(4));
        assert!(basis.selector().is_included(0));
        assert_eq!(basis.count_artificials(), basis.deficit());
    }
}
