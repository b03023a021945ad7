//! Ready-made handlers.
//!
//! [`VecHandler`] applies every change to a live `Vec<T>` in order, which is
//! exactly the order-preservation contract: draining a chain over the handler
//! transforms the previous list into the updated list. [`CollectingHandler`]
//! just records what it is given.

use rlt_types::ListChange;

use crate::error::UpdateResult;
use crate::traits::UpdateHandler;

/// Applies one change to `target` in place.
///
/// # Panics
///
/// Panics if the change's indices do not fit `target`; change batches are
/// only valid against the exact list they were computed from.
pub fn apply_change<T: Clone>(target: &mut Vec<T>, change: &ListChange<T>) {
    match change {
        ListChange::Add { items, at } => {
            target.splice(*at..*at, items.iter().cloned());
        }
        ListChange::Remove { items, at } => {
            target.drain(*at..*at + items.len());
        }
        ListChange::Replace { new, at, .. } => {
            target[*at..*at + new.len()].clone_from_slice(new);
        }
        ListChange::Move { items, from, to } => {
            let moved: Vec<T> = target.drain(*from..*from + items.len()).collect();
            target.splice(*to..*to, moved);
        }
        ListChange::Reset { new, .. } => {
            *target = new.clone();
        }
    }
}

/// Handler that applies every change to a borrowed vector and records the
/// audible ones.
pub struct VecHandler<'a, T> {
    target: &'a mut Vec<T>,
    raised: Vec<ListChange<T>>,
}

impl<'a, T: Clone> VecHandler<'a, T> {
    /// A handler applying changes to `target`.
    pub fn new(target: &'a mut Vec<T>) -> Self {
        Self {
            target,
            raised: Vec::new(),
        }
    }

    /// The audible changes applied so far, in order.
    pub fn raised(&self) -> &[ListChange<T>] {
        &self.raised
    }

    /// Consumes the handler, returning the audible changes.
    pub fn into_raised(self) -> Vec<ListChange<T>> {
        self.raised
    }
}

impl<T: Clone> UpdateHandler<T> for VecHandler<'_, T> {
    fn raise(&mut self, change: &ListChange<T>) -> UpdateResult<()> {
        apply_change(self.target, change);
        self.raised.push(change.clone());
        Ok(())
    }

    fn apply_silently(&mut self, change: &ListChange<T>) -> UpdateResult<()> {
        apply_change(self.target, change);
        Ok(())
    }
}

/// Handler that records every notification without applying anything.
#[derive(Debug, Default)]
pub struct CollectingHandler<T> {
    raised: Vec<ListChange<T>>,
    silent: Vec<ListChange<T>>,
}

impl<T> CollectingHandler<T> {
    /// An empty recorder.
    pub fn new() -> Self {
        Self {
            raised: Vec::new(),
            silent: Vec::new(),
        }
    }

    /// Audible notifications, in order.
    pub fn raised(&self) -> &[ListChange<T>] {
        &self.raised
    }

    /// Silently-applied notifications, in order.
    pub fn silent(&self) -> &[ListChange<T>] {
        &self.silent
    }
}

impl<T: Clone> UpdateHandler<T> for CollectingHandler<T> {
    fn raise(&mut self, change: &ListChange<T>) -> UpdateResult<()> {
        self.raised.push(change.clone());
        Ok(())
    }

    fn apply_silently(&mut self, change: &ListChange<T>) -> UpdateResult<()> {
        self.silent.push(change.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_add() {
        let mut target = vec![1, 2];
        apply_change(&mut target, &ListChange::add_some(vec![9, 8], 1));
        assert_eq!(target, vec![1, 9, 8, 2]);
    }

    #[test]
    fn apply_remove() {
        let mut target = vec![1, 2, 3];
        apply_change(&mut target, &ListChange::remove_some(vec![1], 0));
        assert_eq!(target, vec![2, 3]);
    }

    #[test]
    fn apply_replace() {
        let mut target = vec![1, 2, 3];
        apply_change(&mut target, &ListChange::replace_some(vec![2, 3], vec![7, 8], 1));
        assert_eq!(target, vec![1, 7, 8]);
    }

    #[test]
    fn apply_move_forward_and_back() {
        let mut target = vec![1, 2, 3];
        apply_change(&mut target, &ListChange::move_some(vec![3], 2, 0));
        assert_eq!(target, vec![3, 1, 2]);

        apply_change(&mut target, &ListChange::move_some(vec![3], 0, 2));
        assert_eq!(target, vec![1, 2, 3]);
    }

    #[test]
    fn apply_move_block() {
        let mut target = vec![1, 2, 3, 4];
        apply_change(&mut target, &ListChange::move_some(vec![3, 4], 2, 0));
        assert_eq!(target, vec![3, 4, 1, 2]);
    }

    #[test]
    fn apply_reset() {
        let mut target = vec![1, 2, 3];
        apply_change(&mut target, &ListChange::reset(vec![1, 2, 3], vec![9]));
        assert_eq!(target, vec![9]);
    }

    #[test]
    fn vec_handler_applies_silent_changes_without_recording() {
        let mut target = vec![1, 2];
        let mut handler = VecHandler::new(&mut target);
        handler
            .apply_silently(&ListChange::replace_some(vec![2], vec![5], 1))
            .unwrap();
        handler.raise(&ListChange::add_some(vec![7], 2)).unwrap();

        assert_eq!(handler.raised().len(), 1);
        let raised = handler.into_raised();
        assert_eq!(raised[0], ListChange::add_some(vec![7], 2));
        assert_eq!(target, vec![1, 5, 7]);
    }

    #[test]
    fn collecting_handler_splits_audible_and_silent() {
        let mut handler = CollectingHandler::new();
        handler.raise(&ListChange::add_some(vec![1], 0)).unwrap();
        handler
            .apply_silently(&ListChange::replace_some(vec![1], vec![2], 0))
            .unwrap();

        assert_eq!(handler.raised().len(), 1);
        assert_eq!(handler.silent().len(), 1);
    }
}
