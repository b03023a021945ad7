//! Visitor and handler contracts.

use rlt_types::ListChange;

use crate::error::UpdateResult;
use crate::updater::UpdateCallbacks;

/// Per-item strategy invoked once per affected item while a change chain is
/// converted into dispatch nodes.
///
/// The conversion classifies every item exactly once as added, same,
/// replaced, or removed (or the whole transition as a reset). Each call may
/// register pre-commit and post-commit callbacks on the node being built;
/// the callbacks run later, during pump draining, never during conversion.
pub trait UpdateVisitor<T> {
    /// `item` is being inserted.
    fn add_item(&mut self, item: &T, callbacks: &mut UpdateCallbacks);

    /// The entity survived without a content change (it may have moved).
    fn same_item(&mut self, original: &T, updated: &T, callbacks: &mut UpdateCallbacks);

    /// The entity survived but its content changed.
    ///
    /// Returns `true` when the visitor applied the replacement internally
    /// (for example, a nested collection diffed in place). Handled items are
    /// excluded from audible notifications: their sub-range is applied
    /// silently, while the registered callbacks still run.
    fn replace_item(&mut self, original: &T, updated: &T, callbacks: &mut UpdateCallbacks)
        -> bool;

    /// `item` is being removed.
    fn remove_item(&mut self, item: &T, callbacks: &mut UpdateCallbacks);

    /// The whole list is being replaced (explicit fallback path only).
    fn reset(&mut self, old: &[T], new: &[T], callbacks: &mut UpdateCallbacks);
}

/// A visitor that registers no callbacks and never handles a replace.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopVisitor;

impl<T> UpdateVisitor<T> for NoopVisitor {
    fn add_item(&mut self, _item: &T, _callbacks: &mut UpdateCallbacks) {}

    fn same_item(&mut self, _original: &T, _updated: &T, _callbacks: &mut UpdateCallbacks) {}

    fn replace_item(&mut self, _original: &T, _updated: &T, _callbacks: &mut UpdateCallbacks)
        -> bool {
        false
    }

    fn remove_item(&mut self, _item: &T, _callbacks: &mut UpdateCallbacks) {}

    fn reset(&mut self, _old: &[T], _new: &[T], _callbacks: &mut UpdateCallbacks) {}
}

/// Consumer of the notifications produced while draining a chain.
pub trait UpdateHandler<T> {
    /// An observer-visible change: apply it and notify.
    fn raise(&mut self, change: &ListChange<T>) -> UpdateResult<()>;

    /// A structural change whose observers were already updated internally:
    /// apply it without notifying.
    fn apply_silently(&mut self, change: &ListChange<T>) -> UpdateResult<()>;
}
