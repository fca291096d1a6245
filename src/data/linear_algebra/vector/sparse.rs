//! # Sparse vector
//!
//! Wrapping a `Vec<(usize, _)>`, fixed size.
use std::fmt;
use std::fmt::Display;
use std::iter::FromIterator;
use std::mem;
use std::slice::Iter;

use itertools::{EitherOrBoth, Itertools};
use num_traits::Float;

use crate::data::linear_algebra::SparseTuple;

/// A sparse vector using a `Vec` with (index, value) combinations as back-end. Indices start at
/// `0`.
///
/// The tuples are kept sorted by index and no explicit zeros are stored.
#[derive(PartialEq, Clone, Debug)]
pub struct Sparse<F> {
    data: Vec<SparseTuple<F>>,
    len: usize,
}

impl<F> Sparse<F> {
    fn get_data_index(&self, i: usize) -> Result<usize, usize> {
        self.data.binary_search_by_key(&i, |&(index, _)| index)
    }

    /// Iterate over the nonzero values, in increasing index order.
    pub fn iter(&self) -> Iter<'_, SparseTuple<F>> {
        self.data.iter()
    }

    /// The length of this vector.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this vector has zero length.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of explicitly stored values.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

impl<F: Float> Sparse<F> {
    /// Create a vector of length `len` from `data`.
    ///
    /// Requires that the data is sorted and that the zeros are already filtered.
    pub fn new(data: Vec<SparseTuple<F>>, len: usize) -> Self {
        debug_assert!(data.iter().all(|&(i, _)| i < len));
        debug_assert!(data.windows(2).all(|w| w[0].0 < w[1].0));
        debug_assert!(data.iter().all(|&(_, v)| !v.is_zero()));

        Self { data, len }
    }

    /// A vector of length `len` containing only zeros.
    pub fn zeros(len: usize) -> Self {
        Self::new(Vec::new(), len)
    }

    /// Value at index `i`, zero if it is not stored.
    pub fn get(&self, i: usize) -> F {
        debug_assert!(i < self.len);

        match self.get_data_index(i) {
            Ok(index) => self.data[index].1,
            Err(_) => F::zero(),
        }
    }

    /// Set the value at index `i` to `value`.
    ///
    /// # Arguments
    ///
    /// * `i`: Index of the value. New tuple will be inserted, potentially causing many values to
    /// be shifted.
    /// * `value`: Value to be taken at index `i`. When it is zero, the tuple is removed instead.
    pub fn set(&mut self, i: usize, value: F) {
        debug_assert!(i < self.len);

        match (self.get_data_index(i), value.is_zero()) {
            (Ok(index), false) => self.data[index].1 = value,
            (Ok(index), true) => {
                self.data.remove(index);
            },
            (Err(index), false) => self.data.insert(index, (i, value)),
            (Err(_), true) => {},
        }
    }

    /// Add `value` to the value at index `i`.
    pub fn shift_value(&mut self, i: usize, value: F) {
        let current = self.get(i);
        self.set(i, current + value);
    }

    /// Divide each element of the vector by a value.
    pub fn element_wise_divide(&mut self, value: F) {
        debug_assert!(!value.is_zero());

        for (_, v) in &mut self.data {
            *v = *v / value;
        }
        self.data.retain(|&(_, v)| !v.is_zero());
    }

    /// Multiply each element of the vector by a value.
    pub fn element_wise_multiply(&mut self, value: F) {
        for (_, v) in &mut self.data {
            *v = *v * value;
        }
        self.data.retain(|&(_, v)| !v.is_zero());
    }

    /// Add the multiple of another row to this row.
    ///
    /// The two index lists are merged, so the cost is linear in the number of nonzeros of both
    /// vectors. Values that become exactly zero are dropped.
    ///
    /// # Arguments
    ///
    /// * `multiple`: Constant that all elements of the `other` vector are multiplied with.
    /// * `other`: Vector to add a multiple of to this vector.
    pub fn add_multiple_of_row(&mut self, multiple: F, other: &Sparse<F>) {
        debug_assert_eq!(other.len(), self.len());

        let old_data = mem::take(&mut self.data);
        self.data = old_data.into_iter()
            .merge_join_by(
                other.data.iter(),
                |left: &SparseTuple<F>, right: &&SparseTuple<F>| left.0.cmp(&right.0),
            )
            .map(|pair| match pair {
                EitherOrBoth::Left(tuple) => tuple,
                EitherOrBoth::Right(&(j, value)) => (j, multiple * value),
                EitherOrBoth::Both((i, value), &(_, other_value)) => (i, value + multiple * other_value),
            })
            .filter(|(_, value)| !value.is_zero())
            .collect();
    }

    /// Add a multiple of this vector to a dense target: `target[i] += multiple * self[i]`.
    pub fn add_multiple_into_dense(&self, multiple: F, target: &mut [F]) {
        debug_assert_eq!(target.len(), self.len());

        for &(i, value) in &self.data {
            target[i] = target[i] + multiple * value;
        }
    }

    /// Materialize into a dense `Vec`.
    pub fn to_dense(&self) -> Vec<F> {
        let mut dense = vec![F::zero(); self.len];
        self.write_into(&mut dense);
        dense
    }

    /// Write the values into a dense target of the same length, overwriting all its values.
    pub fn write_into(&self, target: &mut [F]) {
        debug_assert_eq!(target.len(), self.len());

        target.iter_mut().for_each(|v| *v = F::zero());
        for &(i, value) in &self.data {
            target[i] = value;
        }
    }
}

impl<F: Float> FromIterator<F> for Sparse<F> {
    fn from_iter<I: IntoIterator<Item=F>>(iter: I) -> Self {
        let mut data = Vec::new();
        let mut counter = 0;

        for item in iter.into_iter() {
            if !item.is_zero() {
                data.push((counter, item));
            }
            counter += 1;
        }

        Self::new(data, counter)
    }
}

impl<F: Display> Display for Sparse<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        write!(f, "{}", self.data.iter().map(|(i, v)| format!("({} {})", i, v)).join(", "))?;
        write!(f, "]")
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::vector::SparseVector;

    #[test]
    fn set_and_get() {
        let mut v = SparseVector::from_test_data(vec![0_f64, 5_f64, 6_f64]);
        assert_eq!(v.size(), 2);
        assert_eq!(v.get(0), 0_f64);

        v.set(0, 3_f64);
        assert_eq!(v.get(0), 3_f64);
        assert_eq!(v.size(), 3);

        v.set(1, 0_f64);
        assert_eq!(v.get(1), 0_f64);
        assert_eq!(v.size(), 2);
        assert_eq!(v, SparseVector::from_test_data(vec![3_f64, 0_f64, 6_f64]));
    }

    #[test]
    fn add_multiple_of_row() {
        let mut v = SparseVector::from_test_data(vec![1_f64, 0_f64, 2_f64, 0_f64, 4_f64]);
        let w = SparseVector::from_test_data(vec![0_f64, 3_f64, 1_f64, 0_f64, 2_f64]);
        v.add_multiple_of_row(-2_f64, &w);
        assert_eq!(v, SparseVector::from_test_data(vec![1_f64, -6_f64, 0_f64, 0_f64, 0_f64]));
        assert_eq!(v.size(), 2);
    }

    #[test]
    fn add_multiple_into_dense() {
        let v = SparseVector::from_test_data(vec![0_f64, 1_f64, 0_f64, -1_f64]);
        let mut target = vec![1_f64; 4];
        v.add_multiple_into_dense(2_f64, &mut target);
        assert_eq!(target, vec![1_f64, 3_f64, 1_f64, -1_f64]);
    }

    #[test]
    fn element_wise_divide() {
        let mut v = SparseVector::from_test_data(vec![2_f64, 0_f64, -4_f64]);
        v.element_wise_divide(2_f64);
        assert_eq!(v.to_dense(), vec![1_f64, 0_f64, -2_f64]);
    }

    #[test]
    fn display() {
        let v = SparseVector::from_test_data(vec![0_f64, 1.5, 0_f64, 2_f64]);
        assert_eq!(v.to_string(), "[(1 1.5), (3 2)]");
    }
}
