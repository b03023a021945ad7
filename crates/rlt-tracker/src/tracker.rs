use rlt_diff::{AnalyzerOptions, CollectionAnalyzer};
use rlt_snapshot::Snapshot;
use rlt_types::{ItemComparer, ListChange};
use rlt_update::{NoopVisitor, UpdateResult, UpdateVisitor, VecHandler};
use tracing::debug;

/// High-level list tracking API.
///
/// Wraps a [`CollectionAnalyzer`] behind the two operations most callers
/// need: [`diff`](Self::diff) for the plain change events between two
/// snapshots, and [`sync`](Self::sync) to bring a live vector in line with an
/// updated snapshot while reporting what changed.
pub struct ListTracker<T> {
    analyzer: CollectionAnalyzer<T>,
}

impl<T: Clone + 'static> ListTracker<T> {
    /// A tracker diffing under `comparer` with default options.
    pub fn new(comparer: ItemComparer<T>) -> Self {
        Self {
            analyzer: CollectionAnalyzer::new(comparer),
        }
    }

    /// A tracker with explicit analyzer options.
    pub fn with_options(comparer: ItemComparer<T>, options: AnalyzerOptions) -> Self {
        Self {
            analyzer: CollectionAnalyzer::with_options(comparer, options),
        }
    }

    /// The underlying analyzer, for callers that need the full chain.
    pub fn analyzer(&self) -> &CollectionAnalyzer<T> {
        &self.analyzer
    }

    /// The change events turning `previous` into `updated`, in order.
    pub fn diff<P, U>(&self, previous: &P, updated: &U) -> Vec<ListChange<T>>
    where
        P: Snapshot<T> + ?Sized,
        U: Snapshot<T> + ?Sized,
    {
        self.analyzer.changes(previous, updated).events()
    }

    /// Brings `target` in line with `updated` and returns the audible
    /// change events that were applied, in order.
    pub fn sync(&self, target: &mut Vec<T>, updated: &[T]) -> UpdateResult<Vec<ListChange<T>>> {
        self.sync_with(target, updated, &mut NoopVisitor)
    }

    /// Like [`sync`](Self::sync), but classifies every affected item through
    /// `visitor` first. Replacements the visitor handles are applied without
    /// appearing in the returned events.
    pub fn sync_with<V>(
        &self,
        target: &mut Vec<T>,
        updated: &[T],
        visitor: &mut V,
    ) -> UpdateResult<Vec<ListChange<T>>>
    where
        V: UpdateVisitor<T>,
    {
        let mut updater = self.analyzer.updater(target, updated, visitor);
        let mut handler = VecHandler::new(target);
        updater.drain(&mut handler)?;
        let events = handler.into_raised();

        debug!(events = events.len(), len = target.len(), "list synchronized");
        Ok(events)
    }
}

impl<T: Clone + PartialEq + 'static> Default for ListTracker<T> {
    fn default() -> Self {
        Self::new(ItemComparer::structural())
    }
}
