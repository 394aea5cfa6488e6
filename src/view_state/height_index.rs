//! HeightIndex - O(log n) prefix sums and offset lookup via Fenwick tree
//!
//! # Complexity
//!
//! - `from_heights`: O(n log n)
//! - `set`: O(log n)
//! - `prefix_sum`: O(log n)
//! - `lower_bound`: O(log² n)
//! - `total`: O(log n)

/// Cumulative row heights of a fixed sequence of records.
///
/// Record `i` covers rows `[start_of(i), prefix_sum(i))`.
#[derive(Debug, Clone, Default)]
pub struct HeightIndex {
    /// Fenwick tree, exactly `len` slots.
    tree: Vec<isize>,
}

impl HeightIndex {
    /// Build an index over `heights`.
    ///
    /// ```
    /// # use contentscroll::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::from_heights([3, 4, 5]);
    /// assert_eq!(index.prefix_sum(1), 7);
    /// assert_eq!(index.total(), 12);
    /// ```
    pub fn from_heights(heights: impl IntoIterator<Item = usize>) -> Self {
        let heights: Vec<usize> = heights.into_iter().collect();
        let mut tree = vec![0isize; heights.len()];
        for (index, height) in heights.into_iter().enumerate() {
            if height != 0 {
                fenwick::array::update(&mut tree, index, height as isize);
            }
        }
        Self { tree }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// True if there are no records.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Height of record `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn height(&self, index: usize) -> usize {
        self.prefix_sum(index) - self.start_of(index)
    }

    /// Change the height of record `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, height: usize) {
        let delta = height as isize - self.height(index) as isize;
        if delta != 0 {
            fenwick::array::update(&mut self.tree, index, delta);
        }
    }

    /// Cumulative height up to and including record `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn prefix_sum(&self, index: usize) -> usize {
        assert!(
            index < self.len(),
            "index {} out of bounds (len: {})",
            index,
            self.len()
        );
        fenwick::array::prefix_sum(&self.tree, index).max(0) as usize
    }

    /// First row of record `index`.
    pub fn start_of(&self, index: usize) -> usize {
        if index == 0 {
            0
        } else {
            self.prefix_sum(index - 1)
        }
    }

    /// Record covering row `offset`, or `None` past the end.
    ///
    /// ```
    /// # use contentscroll::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::from_heights([10, 20, 15]);
    /// assert_eq!(index.lower_bound(0), Some(0));
    /// assert_eq!(index.lower_bound(10), Some(1));
    /// assert_eq!(index.lower_bound(44), Some(2));
    /// assert_eq!(index.lower_bound(45), None);
    /// ```
    pub fn lower_bound(&self, offset: usize) -> Option<usize> {
        let mut left = 0;
        let mut right = self.len();

        while left < right {
            let mid = left + (right - left) / 2;
            if self.prefix_sum(mid) > offset {
                right = mid;
            } else {
                left = mid + 1;
            }
        }

        (left < self.len()).then_some(left)
    }

    /// Total height of all records.
    pub fn total(&self) -> usize {
        match self.len() {
            0 => 0,
            len => self.prefix_sum(len - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_index() {
        let index = HeightIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.total(), 0);
        assert_eq!(index.lower_bound(0), None);
    }

    #[test]
    fn prefix_sums_accumulate() {
        let index = HeightIndex::from_heights([3, 4, 5]);
        assert_eq!(index.prefix_sum(0), 3);
        assert_eq!(index.prefix_sum(1), 7);
        assert_eq!(index.prefix_sum(2), 12);
        assert_eq!(index.start_of(2), 7);
        assert_eq!(index.height(1), 4);
    }

    #[test]
    fn set_updates_following_sums() {
        let mut index = HeightIndex::from_heights([3, 4, 5]);
        index.set(1, 10);
        assert_eq!(index.prefix_sum(0), 3);
        assert_eq!(index.prefix_sum(1), 13);
        assert_eq!(index.total(), 18);
    }

    #[test]
    fn zero_height_records_are_skipped_by_lookup() {
        let index = HeightIndex::from_heights([2, 0, 3]);
        assert_eq!(index.lower_bound(1), Some(0));
        assert_eq!(index.lower_bound(2), Some(2));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn prefix_sum_out_of_bounds_panics() {
        HeightIndex::from_heights([1]).prefix_sum(1);
    }

    proptest! {
        #[test]
        fn lower_bound_matches_linear_scan(
            heights in prop::collection::vec(0usize..8, 1..60),
            offset in 0usize..400,
        ) {
            let index = HeightIndex::from_heights(heights.iter().copied());

            let mut acc = 0;
            let mut expected = None;
            for (i, h) in heights.iter().enumerate() {
                acc += h;
                if acc > offset {
                    expected = Some(i);
                    break;
                }
            }

            prop_assert_eq!(index.lower_bound(offset), expected);
            prop_assert_eq!(index.total(), heights.iter().sum::<usize>());
        }
    }
}
