//! Snapshot implementations for the common backing shapes.
//!
//! Slices (and through them arrays and `Vec<T>`) get an iterator-based
//! `index_of`; `Arc<[T]>` shares the slice path without copying. `VecDeque`
//! stands in for ad-hoc indexable sequences and uses the trait's generic
//! linear-search fallback.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::traits::Snapshot;

impl<T> Snapshot<T> for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn index_of(&self, item: &T, from: usize, eq: &dyn Fn(&T, &T) -> bool) -> Option<usize> {
        if from >= self.len() {
            return None;
        }
        self[from..]
            .iter()
            .position(|candidate| eq(candidate, item))
            .map(|i| from + i)
    }
}

impl<T> Snapshot<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn index_of(&self, item: &T, from: usize, eq: &dyn Fn(&T, &T) -> bool) -> Option<usize> {
        self.as_slice().index_of(item, from, eq)
    }
}

impl<T> Snapshot<T> for Arc<[T]> {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn index_of(&self, item: &T, from: usize, eq: &dyn Fn(&T, &T) -> bool) -> Option<usize> {
        self.as_ref().index_of(item, from, eq)
    }
}

// Generic fallback shape: O(1) indexing, default linear `index_of`.
impl<T> Snapshot<T> for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}
