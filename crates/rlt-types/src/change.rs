//! Structural change notifications.
//!
//! A [`ListChange`] describes one contiguous edit to an ordered list, in the
//! coordinates of the list *after* all preceding changes of the same batch
//! have been applied. Applying a batch in order to a copy of the previous
//! list therefore reproduces the updated list exactly.

use serde::{Deserialize, Serialize};

/// The kind of structural action described by a [`ListChange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeAction {
    /// Items were inserted.
    Add,
    /// Items were removed.
    Remove,
    /// Items were replaced in place.
    Replace,
    /// Items were relocated without being added or removed.
    Move,
    /// The whole list was replaced.
    Reset,
}

/// A single structural change notification.
///
/// Indices are emission coordinates: each change is anchored where it applies
/// once every preceding change in its batch has been applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ListChange<T> {
    /// `items` were inserted starting at `at`.
    Add { items: Vec<T>, at: usize },
    /// `items` were removed starting at `at`.
    Remove { items: Vec<T>, at: usize },
    /// `old` was replaced by `new` starting at `at` (same length).
    Replace { old: Vec<T>, new: Vec<T>, at: usize },
    /// The contiguous block `items` moved from `from` to `to`.
    Move { items: Vec<T>, from: usize, to: usize },
    /// The whole list changed from `old` to `new`.
    Reset { old: Vec<T>, new: Vec<T> },
}

impl<T> ListChange<T> {
    /// An add of `items` starting at `at`.
    pub fn add_some(items: Vec<T>, at: usize) -> Self {
        Self::Add { items, at }
    }

    /// A removal of `items` starting at `at`.
    pub fn remove_some(items: Vec<T>, at: usize) -> Self {
        Self::Remove { items, at }
    }

    /// An in-place replacement of `old` by `new` starting at `at`.
    pub fn replace_some(old: Vec<T>, new: Vec<T>, at: usize) -> Self {
        Self::Replace { old, new, at }
    }

    /// A relocation of the block `items` from `from` to `to`.
    pub fn move_some(items: Vec<T>, from: usize, to: usize) -> Self {
        Self::Move { items, from, to }
    }

    /// A full replacement of `old` by `new`.
    pub fn reset(old: Vec<T>, new: Vec<T>) -> Self {
        Self::Reset { old, new }
    }

    /// The action kind of this change.
    pub fn action(&self) -> ChangeAction {
        match self {
            Self::Add { .. } => ChangeAction::Add,
            Self::Remove { .. } => ChangeAction::Remove,
            Self::Replace { .. } => ChangeAction::Replace,
            Self::Move { .. } => ChangeAction::Move,
            Self::Reset { .. } => ChangeAction::Reset,
        }
    }

    /// The items present before the change (empty for `Add`).
    ///
    /// For `Move` the relocated items are reported on both sides.
    pub fn old_items(&self) -> &[T] {
        match self {
            Self::Add { .. } => &[],
            Self::Remove { items, .. } | Self::Move { items, .. } => items,
            Self::Replace { old, .. } | Self::Reset { old, .. } => old,
        }
    }

    /// The items present after the change (empty for `Remove`).
    pub fn new_items(&self) -> &[T] {
        match self {
            Self::Remove { .. } => &[],
            Self::Add { items, .. } | Self::Move { items, .. } => items,
            Self::Replace { new, .. } | Self::Reset { new, .. } => new,
        }
    }

    /// Starting index of the affected items before the change, if meaningful.
    pub fn old_index(&self) -> Option<usize> {
        match self {
            Self::Remove { at, .. } | Self::Replace { at, .. } => Some(*at),
            Self::Move { from, .. } => Some(*from),
            Self::Add { .. } | Self::Reset { .. } => None,
        }
    }

    /// Starting index of the affected items after the change, if meaningful.
    pub fn new_index(&self) -> Option<usize> {
        match self {
            Self::Add { at, .. } | Self::Replace { at, .. } => Some(*at),
            Self::Move { to, .. } => Some(*to),
            Self::Remove { .. } | Self::Reset { .. } => None,
        }
    }

    /// Number of items affected by this change.
    ///
    /// For `Reset` this is the size of the new list.
    pub fn item_count(&self) -> usize {
        match self {
            Self::Add { items, .. }
            | Self::Remove { items, .. }
            | Self::Move { items, .. } => items.len(),
            Self::Replace { new, .. } | Self::Reset { new, .. } => new.len(),
        }
    }
}
