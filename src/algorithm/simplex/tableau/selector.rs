//! # Included and excluded indices
//!
//! Splits a fixed range of indices in two sets, with constant time moves between them.

/// Tracks which of the indices `0..len` are included (basic) and which are excluded.
///
/// Both sets can be enumerated. Their order depends on the history of moves: removal swaps the
/// last element into the freed position.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct IndexSelector {
    included: Vec<usize>,
    excluded: Vec<usize>,
    /// Per index, whether it is included and its position in the corresponding list.
    position: Vec<(bool, usize)>,
}

impl IndexSelector {
    /// Create a new instance with all indices excluded, in increasing order.
    pub fn new(len: usize) -> Self {
        Self {
            included: Vec::new(),
            excluded: (0..len).collect(),
            position: (0..len).map(|i| (false, i)).collect(),
        }
    }

    /// Move an excluded index to the included set.
    pub fn include(&mut self, index: usize) {
        debug_assert!(index < self.len());
        debug_assert!(self.is_excluded(index), "index {} is already included", index);

        let (_, position) = self.position[index];
        self.excluded.swap_remove(position);
        if let Some(&moved) = self.excluded.get(position) {
            self.position[moved].1 = position;
        }
        self.position[index] = (true, self.included.len());
        self.included.push(index);
    }

    /// Move an included index to the excluded set.
    pub fn exclude(&mut self, index: usize) {
        debug_assert!(index < self.len());
        debug_assert!(self.is_included(index), "index {} is already excluded", index);

        let (_, position) = self.position[index];
        self.included.swap_remove(position);
        if let Some(&moved) = self.included.get(position) {
            self.position[moved].1 = position;
        }
        self.position[index] = (false, self.excluded.len());
        self.excluded.push(index);
    }

    /// Whether the index is in the included set.
    pub fn is_included(&self, index: usize) -> bool {
        self.position[index].0
    }

    /// Whether the index is in the excluded set.
    pub fn is_excluded(&self, index: usize) -> bool {
        !self.position[index].0
    }

    /// Size of the included set.
    pub fn count_included(&self) -> usize {
        self.included.len()
    }

    /// Size of the excluded set.
    pub fn count_excluded(&self) -> usize {
        self.excluded.len()
    }

    /// Included indices.
    pub fn included(&self) -> &[usize] {
        &self.included
    }

    /// Excluded indices.
    pub fn excluded(&self) -> &[usize] {
        &self.excluded
    }

    /// Size of the universe of indices.
    pub fn len(&self) -> usize {
        self.position.len()
    }

    /// Whether the universe of indices is empty.
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }
}
