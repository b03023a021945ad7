//! The ordered chain of typed change segments produced by one analysis.
//!
//! Segment anchors are emission coordinates: the analyzer folds the running
//! index offset of all preceding segments into each anchor, so applying the
//! segments' events in chain order to a copy of the previous list yields the
//! updated list.

use rlt_types::ListChange;
use rlt_update::{CollectionUpdater, UpdateCallbacks, UpdateNode, UpdateVisitor};

/// One contiguous structural edit.
///
/// `Same` covers entities of the unstable middle region that survived without
/// a content change: it produces no event, only visitor callbacks.
#[derive(Clone, Debug, PartialEq)]
pub enum ChangeSegment<T> {
    /// `items` appear at `at` in the updated list only.
    Add { at: usize, items: Vec<T> },
    /// `items` at `at` disappear from the previous list.
    Remove { at: usize, items: Vec<T> },
    /// Entities at `at` survive with changed content (`old` → `new`).
    Replace { at: usize, old: Vec<T>, new: Vec<T> },
    /// The contiguous block `items` relocates from `from` to `to`.
    Move { from: usize, to: usize, items: Vec<T> },
    /// Entities survive unchanged (`old` and `new` are the per-snapshot
    /// instances of the same entities, in order).
    Same { old: Vec<T>, new: Vec<T> },
}

impl<T: Clone> ChangeSegment<T> {
    /// The notification event for this segment, if it produces one.
    pub fn to_change(&self) -> Option<ListChange<T>> {
        match self {
            Self::Add { at, items } => Some(ListChange::add_some(items.clone(), *at)),
            Self::Remove { at, items } => Some(ListChange::remove_some(items.clone(), *at)),
            Self::Replace { at, old, new } => {
                Some(ListChange::replace_some(old.clone(), new.clone(), *at))
            }
            Self::Move { from, to, items } => {
                Some(ListChange::move_some(items.clone(), *from, *to))
            }
            Self::Same { .. } => None,
        }
    }
}

/// The ordered, non-overlapping diff between two snapshots.
///
/// A chain is built by one analyzer pass and consumed once, either as plain
/// events ([`events`](Self::events)) or as a dispatch chain with visitor
/// callbacks ([`into_updater`](Self::into_updater)).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChangeChain<T> {
    segments: Vec<ChangeSegment<T>>,
}

impl<T> ChangeChain<T> {
    pub(crate) fn from_segments(segments: Vec<ChangeSegment<T>>) -> Self {
        Self { segments }
    }

    /// The segments in emission order.
    pub fn segments(&self) -> &[ChangeSegment<T>] {
        &self.segments
    }

    /// Returns `true` if the snapshots were identical under the comparer.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl<T: Clone> ChangeChain<T> {
    /// The notification events of the chain, in order.
    ///
    /// `Same` segments emit nothing; everything else converts one-to-one.
    pub fn events(&self) -> Vec<ListChange<T>> {
        self.segments
            .iter()
            .filter_map(ChangeSegment::to_change)
            .collect()
    }

    /// Converts the chain into a dispatch chain, classifying every affected
    /// item through `visitor` exactly once.
    ///
    /// Replace segments may split: maximal runs of items whose replacement
    /// the visitor handled internally become silent nodes, unhandled runs
    /// become audible nodes, each at its own offset-adjusted index.
    pub fn into_updater<V: UpdateVisitor<T>>(self, visitor: &mut V) -> CollectionUpdater<T> {
        let mut nodes = Vec::with_capacity(self.segments.len());

        for segment in self.segments {
            match segment {
                ChangeSegment::Add { at, items } => {
                    let mut node = UpdateNode::with_change(ListChange::add_some(items.clone(), at));
                    for item in &items {
                        visitor.add_item(item, node.callbacks_mut());
                    }
                    nodes.push(node);
                }
                ChangeSegment::Remove { at, items } => {
                    let mut node =
                        UpdateNode::with_change(ListChange::remove_some(items.clone(), at));
                    for item in &items {
                        visitor.remove_item(item, node.callbacks_mut());
                    }
                    nodes.push(node);
                }
                ChangeSegment::Move { from, to, items } => {
                    // The moved entities' classification lives in the Same /
                    // Replace segments that follow; the move itself is purely
                    // structural.
                    nodes.push(UpdateNode::with_change(ListChange::move_some(
                        items, from, to,
                    )));
                }
                ChangeSegment::Same { old, new } => {
                    let mut node = UpdateNode::new();
                    for (original, updated) in old.iter().zip(&new) {
                        visitor.same_item(original, updated, node.callbacks_mut());
                    }
                    if !node.is_empty() {
                        nodes.push(node);
                    }
                }
                ChangeSegment::Replace { at, old, new } => {
                    convert_replace(at, &old, &new, visitor, &mut nodes);
                }
            }
        }

        CollectionUpdater::new(nodes)
    }
}

/// Splits a merged replace run into alternating audible and silent nodes.
fn convert_replace<T: Clone, V: UpdateVisitor<T>>(
    at: usize,
    old: &[T],
    new: &[T],
    visitor: &mut V,
    nodes: &mut Vec<UpdateNode<T>>,
) {
    debug_assert_eq!(old.len(), new.len());
    if old.is_empty() {
        return;
    }

    let mut run_start = 0;
    let mut run_handled = false;
    let mut run_callbacks = UpdateCallbacks::new();

    for i in 0..old.len() {
        let mut item_callbacks = UpdateCallbacks::new();
        let handled = visitor.replace_item(&old[i], &new[i], &mut item_callbacks);

        if i == 0 {
            run_handled = handled;
        } else if handled != run_handled {
            nodes.push(replace_node(
                at,
                old,
                new,
                run_start..i,
                run_handled,
                std::mem::take(&mut run_callbacks),
            ));
            run_start = i;
            run_handled = handled;
        }
        item_callbacks.merge_into(&mut run_callbacks);
    }

    nodes.push(replace_node(
        at,
        old,
        new,
        run_start..old.len(),
        run_handled,
        run_callbacks,
    ));
}

fn replace_node<T: Clone>(
    at: usize,
    old: &[T],
    new: &[T],
    range: std::ops::Range<usize>,
    handled: bool,
    mut callbacks: UpdateCallbacks,
) -> UpdateNode<T> {
    let change = ListChange::replace_some(
        old[range.clone()].to_vec(),
        new[range.clone()].to_vec(),
        at + range.start,
    );
    let mut node = if handled {
        UpdateNode::with_silent_change(change)
    } else {
        UpdateNode::with_change(change)
    };
    callbacks.merge_into(node.callbacks_mut());
    node
}
