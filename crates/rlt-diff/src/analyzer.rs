//! The diff algorithm.
//!
//! The analyzer aligns a previous and an updated snapshot in three steps:
//! a stable prefix/suffix skip (the cheap common case), a left-to-right
//! alignment walk over the unstable middle region, and a trailing removal of
//! whatever previous items were never consumed. Duplicate identities always
//! resolve to the leftmost unconsumed candidate, which makes the result
//! deterministic.

use rlt_snapshot::Snapshot;
use rlt_types::{ItemComparer, ListChange};
use rlt_update::{CollectionUpdater, UpdateNode, UpdateVisitor};
use tracing::debug;

use crate::chain::{ChangeChain, ChangeSegment};

/// Per-invocation configuration for the analyzer.
#[derive(Clone, Copy, Debug)]
pub struct AnalyzerOptions {
    /// Detect relocated entities and emit Move segments for them. When
    /// disabled, a displaced entity degrades to an Add at its new position
    /// plus a Remove of its old occurrence.
    pub detect_moves: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self { detect_moves: true }
    }
}

/// Computes the ordered diff between two snapshots.
///
/// The incremental path never produces a Reset; the full-replacement
/// fallback is only reachable through [`reset_updater`](Self::reset_updater).
#[derive(Clone, Debug)]
pub struct CollectionAnalyzer<T> {
    comparer: ItemComparer<T>,
    options: AnalyzerOptions,
}

impl<T: Clone + 'static> CollectionAnalyzer<T> {
    /// An analyzer with default options.
    pub fn new(comparer: ItemComparer<T>) -> Self {
        Self::with_options(comparer, AnalyzerOptions::default())
    }

    /// An analyzer with explicit options.
    pub fn with_options(comparer: ItemComparer<T>, options: AnalyzerOptions) -> Self {
        Self { comparer, options }
    }

    /// Computes the change chain turning `previous` into `updated`.
    ///
    /// Identical snapshots produce an empty chain. The comparer's identity
    /// function is consulted for alignment; its version function decides
    /// replace versus same for aligned entities.
    pub fn changes<P, U>(&self, previous: &P, updated: &U) -> ChangeChain<T>
    where
        P: Snapshot<T> + ?Sized,
        U: Snapshot<T> + ?Sized,
    {
        let prev_len = previous.len();
        let next_len = updated.len();

        // Stable prefix: same entity, same content, same position.
        let mut start = 0;
        while start < prev_len && start < next_len {
            let (a, b) = (previous.get(start), updated.get(start));
            if !self.comparer.is_same(a, b) || self.comparer.has_changed(a, b) {
                break;
            }
            start += 1;
        }

        // Stable suffix, bounded by what the prefix left over.
        let mut tail = 0;
        while tail < prev_len - start && tail < next_len - start {
            let (a, b) = (
                previous.get(prev_len - 1 - tail),
                updated.get(next_len - 1 - tail),
            );
            if !self.comparer.is_same(a, b) || self.comparer.has_changed(a, b) {
                break;
            }
            tail += 1;
        }

        let mut segments = Vec::new();
        self.walk_middle(
            previous,
            updated,
            start,
            prev_len - tail,
            next_len - tail,
            &mut segments,
        );

        debug!(
            previous = prev_len,
            updated = next_len,
            stable = start + tail,
            segments = segments.len(),
            "collection analyzed"
        );

        ChangeChain::from_segments(segments)
    }

    /// Analysis plus chain conversion: classifies every affected item through
    /// `visitor` and returns the dispatch chain.
    pub fn updater<P, U, V>(&self, previous: &P, updated: &U, visitor: &mut V) -> CollectionUpdater<T>
    where
        P: Snapshot<T> + ?Sized,
        U: Snapshot<T> + ?Sized,
        V: UpdateVisitor<T>,
    {
        self.changes(previous, updated).into_updater(visitor)
    }

    /// The explicit full-replacement fallback: one Reset node carrying both
    /// complete lists, bypassing incremental diffing.
    pub fn reset_updater<P, U, V>(
        &self,
        previous: &P,
        updated: &U,
        visitor: &mut V,
    ) -> CollectionUpdater<T>
    where
        P: Snapshot<T> + ?Sized,
        U: Snapshot<T> + ?Sized,
        V: UpdateVisitor<T>,
    {
        let old = previous.to_vec();
        let new = updated.to_vec();

        let mut node = UpdateNode::with_change(ListChange::reset(old.clone(), new.clone()));
        visitor.reset(&old, &new, node.callbacks_mut());

        CollectionUpdater::from_reset(vec![node])
    }

    /// Aligns the unstable region `previous[start..prev_end]` against
    /// `updated[start..next_end]`.
    ///
    /// `rest` holds the not-yet-consumed previous indices in order; `done`
    /// counts settled positions, so the emission index of `rest[k]` is
    /// `start + done + k`.
    fn walk_middle<P, U>(
        &self,
        previous: &P,
        updated: &U,
        start: usize,
        prev_end: usize,
        next_end: usize,
        segments: &mut Vec<ChangeSegment<T>>,
    ) where
        P: Snapshot<T> + ?Sized,
        U: Snapshot<T> + ?Sized,
    {
        let identity = |a: &T, b: &T| self.comparer.is_same(a, b);
        let mut rest: Vec<usize> = (start..prev_end).collect();
        let mut done = 0;
        let middle_len = next_end - start;

        while done < middle_len {
            let new_item = updated.get(start + done);

            if let Some(&head) = rest.first() {
                let old_item = previous.get(head);

                // Aligned entity: same or replaced in place.
                if self.comparer.is_same(old_item, new_item) {
                    if self.comparer.has_changed(old_item, new_item) {
                        push_replace(segments, start + done, old_item.clone(), new_item.clone());
                    } else {
                        push_same(segments, old_item.clone(), new_item.clone());
                    }
                    rest.remove(0);
                    done += 1;
                    continue;
                }

                // Previous entities absent from the remaining updated region
                // disappear here, as one contiguous run.
                let mut removed = Vec::new();
                while let Some(&candidate) = rest.first() {
                    let item = previous.get(candidate);
                    if self.comparer.is_same(item, new_item) {
                        break;
                    }
                    if updated
                        .index_of(item, start + done, &identity)
                        .filter(|&i| i < next_end)
                        .is_some()
                    {
                        break;
                    }
                    removed.push(item.clone());
                    rest.remove(0);
                }
                if !removed.is_empty() {
                    segments.push(ChangeSegment::Remove {
                        at: start + done,
                        items: removed,
                    });
                    // Re-examine alignment at the same position.
                    continue;
                }

                // The entity exists further down the previous list: pull the
                // maximal contiguous block forward. The leftmost unconsumed
                // candidate wins.
                if self.options.detect_moves {
                    let found = rest
                        .iter()
                        .skip(1)
                        .position(|&idx| self.comparer.is_same(previous.get(idx), new_item));
                    if let Some(offset) = found {
                        let k = offset + 1;
                        let mut block = 1;
                        while k + block < rest.len() && done + block < middle_len {
                            let idx = rest[k + block];
                            let next_item = updated.get(start + done + block);
                            if self.comparer.is_same(previous.get(idx), next_item) {
                                block += 1;
                            } else {
                                break;
                            }
                        }

                        let moved_idx: Vec<usize> = rest.drain(k..k + block).collect();
                        let items: Vec<T> = moved_idx
                            .iter()
                            .map(|&idx| previous.get(idx).clone())
                            .collect();
                        segments.push(ChangeSegment::Move {
                            from: start + done + k,
                            to: start + done,
                            items,
                        });

                        // Settle the moved entities in place.
                        for &idx in &moved_idx {
                            let old_item = previous.get(idx);
                            let upd_item = updated.get(start + done);
                            if self.comparer.has_changed(old_item, upd_item) {
                                push_replace(
                                    segments,
                                    start + done,
                                    old_item.clone(),
                                    upd_item.clone(),
                                );
                            } else {
                                push_same(segments, old_item.clone(), upd_item.clone());
                            }
                            done += 1;
                        }
                        continue;
                    }
                }
            }

            // A run of entities that exist only in the updated list.
            let at = start + done;
            let mut added = vec![new_item.clone()];
            done += 1;
            while done < middle_len {
                let item = updated.get(start + done);
                let known = rest
                    .iter()
                    .any(|&idx| self.comparer.is_same(previous.get(idx), item));
                if known {
                    break;
                }
                added.push(item.clone());
                done += 1;
            }
            segments.push(ChangeSegment::Add { at, items: added });
        }

        // Whatever previous entities were never consumed disappear at the
        // end of the region.
        if !rest.is_empty() {
            let items = rest
                .iter()
                .map(|&idx| previous.get(idx).clone())
                .collect();
            segments.push(ChangeSegment::Remove {
                at: start + done,
                items,
            });
        }
    }
}

/// Appends a replaced entity, merging into an immediately preceding
/// contiguous Replace segment.
fn push_replace<T>(segments: &mut Vec<ChangeSegment<T>>, at: usize, old_item: T, new_item: T) {
    if let Some(ChangeSegment::Replace {
        at: seg_at,
        old,
        new,
    }) = segments.last_mut()
    {
        if *seg_at + old.len() == at {
            old.push(old_item);
            new.push(new_item);
            return;
        }
    }
    segments.push(ChangeSegment::Replace {
        at,
        old: vec![old_item],
        new: vec![new_item],
    });
}

/// Appends a surviving unchanged entity, merging into an immediately
/// preceding Same segment.
fn push_same<T>(segments: &mut Vec<ChangeSegment<T>>, old_item: T, new_item: T) {
    if let Some(ChangeSegment::Same { old, new }) = segments.last_mut() {
        old.push(old_item);
        new.push(new_item);
        return;
    }
    segments.push(ChangeSegment::Same {
        old: vec![old_item],
        new: vec![new_item],
    });
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use proptest::prelude::*;
    use rlt_update::{apply_change, UpdateCallbacks, VecHandler};

    use super::*;

    /// Entity with a stable key and a content version.
    type Versioned = (i32, i32);

    fn versioned_analyzer() -> CollectionAnalyzer<Versioned> {
        let comparer = ItemComparer::by_identity(|a: &Versioned, b: &Versioned| a.0 == b.0)
            .and_version(|a: &Versioned, b: &Versioned| a == b);
        CollectionAnalyzer::new(comparer)
    }

    fn int_analyzer() -> CollectionAnalyzer<i32> {
        CollectionAnalyzer::new(ItemComparer::structural())
    }

    #[derive(Clone, Debug, Default)]
    struct Counts {
        pending: usize,
        added: usize,
        same: usize,
        replaced: usize,
        removed: usize,
        reset: usize,
    }

    /// Visitor enforcing the per-item two-phase state machine
    /// (unset → will → did) and counting classifications.
    struct TestVisitor<T> {
        counts: Rc<RefCell<Counts>>,
        handle: Box<dyn Fn(&T, &T) -> bool>,
    }

    impl<T> TestVisitor<T> {
        fn new() -> Self {
            Self {
                counts: Rc::default(),
                handle: Box::new(|_, _| false),
            }
        }

        fn counts(&self) -> Counts {
            self.counts.borrow().clone()
        }

        fn assert_all_raised(&self) {
            let c = self.counts.borrow();
            assert_eq!(
                c.pending,
                c.added + c.same + c.replaced + c.removed + c.reset,
                "some registered callbacks never ran"
            );
        }

        fn two_phase(
            &mut self,
            callbacks: &mut UpdateCallbacks,
            bump: impl Fn(&mut Counts) + 'static,
        ) {
            self.counts.borrow_mut().pending += 1;
            let state = Rc::new(Cell::new(0u8));
            let counts = Rc::clone(&self.counts);
            {
                let state = Rc::clone(&state);
                callbacks.before(move || {
                    assert_eq!(state.replace(1), 0, "pre-commit ran out of order");
                });
            }
            callbacks.after(move || {
                assert_eq!(state.replace(2), 1, "post-commit ran before pre-commit");
                bump(&mut counts.borrow_mut());
            });
        }
    }

    impl<T> UpdateVisitor<T> for TestVisitor<T> {
        fn add_item(&mut self, _item: &T, callbacks: &mut UpdateCallbacks) {
            self.two_phase(callbacks, |c| c.added += 1);
        }

        fn same_item(&mut self, _original: &T, _updated: &T, callbacks: &mut UpdateCallbacks) {
            self.counts.borrow_mut().pending += 1;
            let state = Rc::new(Cell::new(0u8));
            let counts = Rc::clone(&self.counts);
            callbacks.after(move || {
                assert_eq!(state.replace(1), 0, "same callback ran twice");
                counts.borrow_mut().same += 1;
            });
        }

        fn replace_item(
            &mut self,
            original: &T,
            updated: &T,
            callbacks: &mut UpdateCallbacks,
        ) -> bool {
            self.two_phase(callbacks, |c| c.replaced += 1);
            (self.handle)(original, updated)
        }

        fn remove_item(&mut self, _item: &T, callbacks: &mut UpdateCallbacks) {
            self.two_phase(callbacks, |c| c.removed += 1);
        }

        fn reset(&mut self, _old: &[T], _new: &[T], callbacks: &mut UpdateCallbacks) {
            self.two_phase(callbacks, |c| c.reset += 1);
        }
    }

    /// Runs the full pipeline: diff, convert through a state-machine visitor,
    /// drain into a live vector, and check the vector ends up equal to
    /// `updated`. Returns the audible events and the visitor counts.
    fn diff_and_apply<T>(
        analyzer: &CollectionAnalyzer<T>,
        previous: &[T],
        updated: &[T],
    ) -> (Vec<ListChange<T>>, Counts)
    where
        T: Clone + PartialEq + std::fmt::Debug + 'static,
    {
        let mut visitor = TestVisitor::new();
        let mut updater = analyzer.updater(previous, updated, &mut visitor);

        let mut target = previous.to_vec();
        let mut handler = VecHandler::new(&mut target);
        updater.drain(&mut handler).unwrap();
        let events = handler.into_raised();

        assert_eq!(target, updated, "applying the chain must reproduce the updated list");
        visitor.assert_all_raised();
        (events, visitor.counts())
    }

    #[test]
    fn identical_lists_produce_empty_chain_and_no_visitor_calls() {
        let analyzer = int_analyzer();
        assert!(analyzer.changes(&vec![1, 2, 3], &vec![1, 2, 3]).is_empty());

        let (events, counts) = diff_and_apply(&analyzer, &[1, 2, 3], &[1, 2, 3]);
        assert!(events.is_empty());
        assert_eq!(counts.pending, 0);
    }

    #[test]
    fn identical_lists_with_duplicates_are_still_empty() {
        let analyzer = int_analyzer();
        let (events, counts) = diff_and_apply(&analyzer, &[1, 2, 2, 3], &[1, 2, 2, 3]);
        assert!(events.is_empty());
        assert_eq!(counts.pending, 0);
    }

    #[test]
    fn both_empty_is_a_no_op() {
        let analyzer = int_analyzer();
        let (events, counts) = diff_and_apply(&analyzer, &[], &[]);
        assert!(events.is_empty());
        assert_eq!(counts.pending, 0);
    }

    #[test]
    fn append_to_tail_is_a_single_add() {
        let analyzer = int_analyzer();
        let (events, counts) = diff_and_apply(&analyzer, &[1, 2, 3], &[1, 2, 3, 4]);
        assert_eq!(events, vec![ListChange::add_some(vec![4], 3)]);
        assert_eq!(counts.added, 1);
        assert_eq!(counts.pending, 1);
    }

    #[test]
    fn drop_of_head_is_a_single_remove() {
        let analyzer = int_analyzer();
        let (events, counts) = diff_and_apply(&analyzer, &[1, 2, 3], &[2, 3]);
        assert_eq!(events, vec![ListChange::remove_some(vec![1], 0)]);
        assert_eq!(counts.removed, 1);
        assert_eq!(counts.pending, 1);
    }

    #[test]
    fn empty_to_nonempty_is_one_add_covering_the_range() {
        let analyzer = int_analyzer();
        let (events, counts) = diff_and_apply(&analyzer, &[], &[1, 2, 3]);
        assert_eq!(events, vec![ListChange::add_some(vec![1, 2, 3], 0)]);
        assert_eq!(counts.added, 3);
    }

    #[test]
    fn nonempty_to_empty_is_one_remove_covering_the_range() {
        let analyzer = int_analyzer();
        let (events, counts) = diff_and_apply(&analyzer, &[1, 2, 3], &[]);
        assert_eq!(events, vec![ListChange::remove_some(vec![1, 2, 3], 0)]);
        assert_eq!(counts.removed, 3);
    }

    #[test]
    fn version_change_is_a_replace_at_the_same_index() {
        let analyzer = versioned_analyzer();
        let (events, counts) = diff_and_apply(&analyzer, &[(1, 0)], &[(1, 1)]);
        assert_eq!(
            events,
            vec![ListChange::replace_some(vec![(1, 0)], vec![(1, 1)], 0)]
        );
        assert_eq!(counts.replaced, 1);
        assert_eq!(counts.pending, 1);
    }

    #[test]
    fn contiguous_version_changes_merge_into_one_replace() {
        let analyzer = versioned_analyzer();
        let (events, counts) = diff_and_apply(
            &analyzer,
            &[(1, 0), (2, 0), (3, 0)],
            &[(1, 1), (2, 1), (3, 1)],
        );
        assert_eq!(
            events,
            vec![ListChange::replace_some(
                vec![(1, 0), (2, 0), (3, 0)],
                vec![(1, 1), (2, 1), (3, 1)],
                0
            )]
        );
        assert_eq!(counts.replaced, 3);
    }

    #[test]
    fn pure_reorder_is_move_only() {
        let analyzer = int_analyzer();
        let (events, counts) = diff_and_apply(&analyzer, &[1, 2, 3], &[3, 1, 2]);

        assert_eq!(events, vec![ListChange::move_some(vec![3], 2, 0)]);
        assert!(events
            .iter()
            .all(|e| e.action() == rlt_types::ChangeAction::Move));
        // Every surviving entity is classified as same, none as add/remove.
        assert_eq!(counts.same, 3);
        assert_eq!(counts.pending, 3);
        assert_eq!(counts.added + counts.removed + counts.replaced, 0);
    }

    #[test]
    fn contiguous_block_moves_as_one_segment() {
        let analyzer = int_analyzer();
        let (events, counts) = diff_and_apply(&analyzer, &[1, 2, 3, 4, 5], &[4, 5, 1, 2, 3]);
        assert_eq!(events, vec![ListChange::move_some(vec![4, 5], 3, 0)]);
        assert_eq!(counts.same, 5);
    }

    #[test]
    fn moved_entity_with_changed_content_replaces_after_the_move() {
        let analyzer = versioned_analyzer();
        let (events, counts) = diff_and_apply(
            &analyzer,
            &[(1, 0), (2, 0), (3, 0)],
            &[(3, 1), (1, 0), (2, 0)],
        );
        assert_eq!(
            events,
            vec![
                ListChange::move_some(vec![(3, 0)], 2, 0),
                ListChange::replace_some(vec![(3, 0)], vec![(3, 1)], 0),
            ]
        );
        assert_eq!(counts.replaced, 1);
        assert_eq!(counts.same, 2);
    }

    #[test]
    fn duplicates_reconcile_to_one_add_and_one_remove() {
        let analyzer = int_analyzer();
        let (events, counts) = diff_and_apply(&analyzer, &[1, 1, 2], &[1, 2, 2]);
        assert_eq!(
            events,
            vec![
                ListChange::remove_some(vec![1], 1),
                ListChange::add_some(vec![2], 1),
            ]
        );
        assert_eq!(counts.added, 1);
        assert_eq!(counts.removed, 1);
        assert_eq!(counts.pending, 2);
    }

    #[test]
    fn leftmost_duplicate_is_consumed_first() {
        let analyzer = int_analyzer();
        let (events, _) = diff_and_apply(&analyzer, &[2, 1, 2], &[1, 2]);
        assert_eq!(events, vec![ListChange::remove_some(vec![2], 0)]);
    }

    #[test]
    fn interior_insertions_batch_into_one_add() {
        let analyzer = int_analyzer();
        let (events, _) = diff_and_apply(&analyzer, &[1, 4], &[1, 2, 3, 4]);
        assert_eq!(events, vec![ListChange::add_some(vec![2, 3], 1)]);
    }

    #[test]
    fn interior_removals_batch_into_one_remove() {
        let analyzer = int_analyzer();
        let (events, _) = diff_and_apply(&analyzer, &[1, 2, 3, 4], &[1, 4]);
        assert_eq!(events, vec![ListChange::remove_some(vec![2, 3], 1)]);
    }

    #[test]
    fn mixed_edits_keep_emission_order_applicable() {
        let analyzer = int_analyzer();
        let (events, _) = diff_and_apply(&analyzer, &[1, 2, 3, 4, 5], &[1, 3, 2, 6, 5]);
        assert_eq!(
            events,
            vec![
                ListChange::move_some(vec![3], 2, 1),
                ListChange::remove_some(vec![4], 3),
                ListChange::add_some(vec![6], 3),
            ]
        );
    }

    #[test]
    fn disabling_move_detection_degrades_to_add_plus_remove() {
        let analyzer = CollectionAnalyzer::with_options(
            ItemComparer::structural(),
            AnalyzerOptions {
                detect_moves: false,
            },
        );
        let (events, counts) = diff_and_apply(&analyzer, &[1, 2, 3], &[3, 1, 2]);
        assert_eq!(
            events,
            vec![
                ListChange::add_some(vec![3], 0),
                ListChange::remove_some(vec![3], 3),
            ]
        );
        assert_eq!(counts.added, 1);
        assert_eq!(counts.removed, 1);
        assert_eq!(counts.same, 2);
    }

    #[test]
    fn reset_fallback_emits_one_reset_with_both_lists() {
        let analyzer = int_analyzer();
        let mut visitor = TestVisitor::new();
        let mut updater = analyzer.reset_updater(&vec![1, 2], &vec![3], &mut visitor);

        let mut target = vec![1, 2];
        let mut handler = VecHandler::new(&mut target);
        updater.drain(&mut handler).unwrap();
        let events = handler.into_raised();

        assert_eq!(events, vec![ListChange::reset(vec![1, 2], vec![3])]);
        assert_eq!(target, vec![3]);
        assert_eq!(visitor.counts().reset, 1);
        visitor.assert_all_raised();
    }

    #[test]
    fn snapshots_of_different_shapes_can_be_diffed_together() {
        use std::sync::Arc;

        let analyzer = int_analyzer();
        let previous: Arc<[i32]> = Arc::from(vec![1, 2, 3]);
        let updated: std::collections::VecDeque<i32> = vec![1, 2, 3, 4].into();

        let events = analyzer.changes(&previous, &updated).events();
        assert_eq!(events, vec![ListChange::add_some(vec![4], 3)]);
    }

    #[test]
    #[should_panic(expected = "comparer failure")]
    fn comparer_panics_surface_to_the_caller() {
        let comparer = ItemComparer::by_identity(|_: &i32, _: &i32| panic!("comparer failure"));
        let analyzer = CollectionAnalyzer::new(comparer);
        let _ = analyzer.changes(&vec![1], &vec![2]);
    }

    proptest! {
        #[test]
        fn diffing_a_list_against_itself_is_idempotent(
            items in proptest::collection::vec(0u8..6, 0..12),
        ) {
            let analyzer = CollectionAnalyzer::new(ItemComparer::structural());
            prop_assert!(analyzer.changes(&items, &items).is_empty());
        }

        #[test]
        fn applying_events_in_order_reproduces_the_updated_list(
            previous in proptest::collection::vec(0u8..6, 0..12),
            updated in proptest::collection::vec(0u8..6, 0..12),
        ) {
            let analyzer = CollectionAnalyzer::new(ItemComparer::structural());
            let events = analyzer.changes(&previous, &updated).events();

            let mut target = previous.clone();
            for event in &events {
                apply_change(&mut target, event);
            }
            prop_assert_eq!(target, updated);
        }

        #[test]
        fn add_and_remove_counts_reconcile_with_the_length_difference(
            previous in proptest::collection::vec(0u8..6, 0..12),
            updated in proptest::collection::vec(0u8..6, 0..12),
        ) {
            let analyzer = CollectionAnalyzer::new(ItemComparer::structural());
            let events = analyzer.changes(&previous, &updated).events();

            let mut added = 0isize;
            let mut removed = 0isize;
            for event in &events {
                match event {
                    ListChange::Add { items, .. } => added += items.len() as isize,
                    ListChange::Remove { items, .. } => removed += items.len() as isize,
                    _ => {}
                }
            }
            prop_assert_eq!(
                added - removed,
                updated.len() as isize - previous.len() as isize
            );
        }

        #[test]
        fn move_detection_never_changes_the_outcome(
            previous in proptest::collection::vec(0u8..6, 0..10),
            updated in proptest::collection::vec(0u8..6, 0..10),
        ) {
            let analyzer = CollectionAnalyzer::with_options(
                ItemComparer::structural(),
                AnalyzerOptions { detect_moves: false },
            );
            let events = analyzer.changes(&previous, &updated).events();

            let mut target = previous.clone();
            for event in &events {
                apply_change(&mut target, event);
            }
            prop_assert_eq!(target, updated);
        }
    }
}
