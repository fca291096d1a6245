//! # Matrix implementations
//!
//! A dense matrix stored in a single buffer, one column after the other.
use num_traits::Float;

/// Uses a single `Vec<F>` as underlying data structure, column after column. Dimensions are fixed
/// at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnMajor<F> {
    data: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Float> ColumnMajor<F> {
    /// Create a dense matrix of zero's of dimension `rows` x `columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![F::zero(); nr_rows * nr_columns],
            nr_rows,
            nr_columns,
        }
    }

    /// Build the transpose of a matrix given by an element accessor.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows of the matrix to transpose (columns of the result).
    /// * `nr_columns`: Number of columns of the matrix to transpose (rows of the result).
    /// * `value`: Element accessor of the matrix to transpose, by (row, column).
    pub fn transpose_of(nr_rows: usize, nr_columns: usize, value: impl Fn(usize, usize) -> F) -> Self {
        let mut transposed = Self::zeros(nr_columns, nr_rows);
        for i in 0..nr_rows {
            let column = transposed.column_mut(i);
            for (j, target) in column.iter_mut().enumerate() {
                *target = value(i, j);
            }
        }

        transposed
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[j * self.nr_rows + i]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[j * self.nr_rows + i] = value;
    }

    /// Add `value` to the value at coordinate (`i`, `j`).
    pub fn add(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        let index = j * self.nr_rows + i;
        self.data[index] = self.data[index] + value;
    }

    /// All values in column `j`, contiguous.
    pub fn column(&self, j: usize) -> &[F] {
        debug_assert!(j < self.nr_columns);

        &self.data[j * self.nr_rows..(j + 1) * self.nr_rows]
    }

    /// All values in column `j`, contiguous and mutable.
    pub fn column_mut(&mut self, j: usize) -> &mut [F] {
        debug_assert!(j < self.nr_columns);

        &mut self.data[j * self.nr_rows..(j + 1) * self.nr_rows]
    }

    /// Overwrite column `j` with the given values.
    pub fn fill_column(&mut self, j: usize, values: &[F]) {
        self.column_mut(j).copy_from_slice(values);
    }

    /// Borrow column `j` while mutably iterating over all other columns.
    ///
    /// # Return value
    ///
    /// The column `j`, and an iterator over `(index, column)` of the other columns.
    pub fn split_column_mut(&mut self, j: usize) -> (&[F], impl Iterator<Item=(usize, &mut [F])>) {
        debug_assert!(j < self.nr_columns);

        let nr_rows = self.nr_rows;
        let (before, rest) = self.data.split_at_mut(j * nr_rows);
        let (column, after) = rest.split_at_mut(nr_rows);

        let others = before.chunks_exact_mut(nr_rows)
            .enumerate()
            .chain(after.chunks_exact_mut(nr_rows).enumerate().map(move |(k, c)| (j + 1 + k, c)));

        (column, others)
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::ColumnMajor;

    #[test]
    fn get_set() {
        let mut m = ColumnMajor::<f64>::zeros(2, 3);
        m.set(1, 2, 5_f64);
        m.add(1, 2, 1_f64);
        assert_eq!(m.get(1, 2), 6_f64);
        assert_eq!(m.column(2), &[0_f64, 6_f64]);
    }

    #[test]
    fn transpose_of() {
        let original = [[1_f64, 2_f64, 3_f64], [4_f64, 5_f64, 6_f64]];
        let m = ColumnMajor::transpose_of(2, 3, |i, j| original[i][j]);
        assert_eq!(m.nr_rows(), 3);
        assert_eq!(m.nr_columns(), 2);
        assert_eq!(m.column(1), &[4_f64, 5_f64, 6_f64]);
        assert_eq!(m.get(2, 0), 3_f64);
    }

    #[test]
    fn split_column_mut() {
        let mut m = ColumnMajor::transpose_of(3, 2, |i, j| (i * 2 + j) as f64);
        let (pivot, others) = m.split_column_mut(1);
        assert_eq!(pivot, &[2_f64, 3_f64]);
        let indices = others.map(|(k, column)| {
            column[0] += 10_f64;
            k
        }).collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(m.column(0), &[10_f64, 1_f64]);
        assert_eq!(m.column(2), &[14_f64, 5_f64]);
    }
}
