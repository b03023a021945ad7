//! The snapshot trait.

/// An immutable, indexed view over an ordered sequence at a point in time.
///
/// Implementations must never observe mutation for the lifetime of a diff:
/// `len` is constant and `get` returns the same item for the same index
/// throughout. Index access is expected to be cheap (`O(1)` for the provided
/// shapes); `index_of` may be linear.
pub trait Snapshot<T> {
    /// Number of items in the snapshot.
    fn len(&self) -> usize;

    /// The item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn get(&self, index: usize) -> &T;

    /// Returns `true` if the snapshot holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the first item at or after `from` that matches `item` under
    /// `eq`, or `None`.
    ///
    /// The leftmost match wins; this is what makes duplicate-identity
    /// resolution deterministic.
    fn index_of(&self, item: &T, from: usize, eq: &dyn Fn(&T, &T) -> bool) -> Option<usize> {
        (from..self.len()).find(|&i| eq(self.get(i), item))
    }

    /// Copies the snapshot into an owned vector.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        (0..self.len()).map(|i| self.get(i).clone()).collect()
    }
}
