//! Dispatch nodes and the pump that drains them.

use std::collections::VecDeque;
use std::fmt;

use rlt_types::{ChangeAction, ListChange};
use tracing::{debug, trace};

use crate::error::{UpdateError, UpdateResult};
use crate::traits::UpdateHandler;

type Callback = Box<dyn FnOnce()>;

/// Ordered pre-commit and post-commit callback lists for one dispatch node.
///
/// Callbacks run in registration order within their phase. Registration is
/// only possible while the node is being built; once the node is handed to
/// the pump there is no way to reach the lists again.
#[derive(Default)]
pub struct UpdateCallbacks {
    before: Vec<Callback>,
    after: Vec<Callback>,
}

impl UpdateCallbacks {
    /// An empty callback set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pre-commit callback, run before the node's notification.
    pub fn before(&mut self, callback: impl FnOnce() + 'static) {
        self.before.push(Box::new(callback));
    }

    /// Registers a post-commit callback, run after the node's notification.
    pub fn after(&mut self, callback: impl FnOnce() + 'static) {
        self.after.push(Box::new(callback));
    }

    /// Returns `true` if no callbacks are registered in either phase.
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }

    /// Moves every callback of `self` to the end of the matching phase of
    /// `target`, preserving registration order.
    pub fn merge_into(&mut self, target: &mut UpdateCallbacks) {
        target.before.append(&mut self.before);
        target.after.append(&mut self.after);
    }
}

impl fmt::Debug for UpdateCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateCallbacks")
            .field("before", &self.before.len())
            .field("after", &self.after.len())
            .finish()
    }
}

/// One unit of the dispatch sequence: at most one notification, plus the
/// callbacks that bracket it.
///
/// A change producing several notifications becomes several chained nodes,
/// never one node with several events.
#[derive(Debug, Default)]
pub struct UpdateNode<T> {
    change: Option<ListChange<T>>,
    silent: bool,
    callbacks: UpdateCallbacks,
}

impl<T> UpdateNode<T> {
    /// A node with no notification (callbacks only).
    pub fn new() -> Self {
        Self {
            change: None,
            silent: false,
            callbacks: UpdateCallbacks::new(),
        }
    }

    /// A node carrying an audible notification.
    pub fn with_change(change: ListChange<T>) -> Self {
        Self {
            change: Some(change),
            silent: false,
            callbacks: UpdateCallbacks::new(),
        }
    }

    /// A node carrying a silently-applied notification.
    pub fn with_silent_change(change: ListChange<T>) -> Self {
        Self {
            change: Some(change),
            silent: true,
            callbacks: UpdateCallbacks::new(),
        }
    }

    /// The node's notification, if any.
    pub fn change(&self) -> Option<&ListChange<T>> {
        self.change.as_ref()
    }

    /// Whether the notification is applied silently.
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Mutable access to the callback lists, for use while building.
    pub fn callbacks_mut(&mut self) -> &mut UpdateCallbacks {
        &mut self.callbacks
    }

    /// Returns `true` if the node carries neither a notification nor any
    /// callbacks.
    pub fn is_empty(&self) -> bool {
        self.change.is_none() && self.callbacks.is_empty()
    }
}

/// Single-consumer dispatch pump over an ordered node chain.
///
/// Nodes are consumed exactly once, in producer order, and the two-phase
/// discipline per node is strict: pre-commit callbacks, then the
/// notification, then post-commit callbacks. The `&mut self` receivers make
/// concurrent draining of one chain unrepresentable.
pub struct CollectionUpdater<T> {
    nodes: VecDeque<UpdateNode<T>>,
    from_reset: bool,
}

impl<T> CollectionUpdater<T> {
    /// A pump over nodes produced by the incremental diff path.
    pub fn new(nodes: Vec<UpdateNode<T>>) -> Self {
        Self {
            nodes: nodes.into(),
            from_reset: false,
        }
    }

    /// A pump over nodes produced by the explicit reset fallback. Only this
    /// constructor permits Reset notifications.
    pub fn from_reset(nodes: Vec<UpdateNode<T>>) -> Self {
        Self {
            nodes: nodes.into(),
            from_reset: true,
        }
    }

    /// Number of nodes not yet dispatched.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if every node has been dispatched.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Read-only view of the remaining nodes' notifications, in dispatch
    /// order, with their silent flag.
    pub fn changes(&self) -> impl Iterator<Item = (&ListChange<T>, bool)> {
        self.nodes
            .iter()
            .filter_map(|node| node.change().map(|change| (change, node.is_silent())))
    }

    /// Dispatches the next node, if any.
    ///
    /// Returns `Ok(true)` when a node was dispatched and more may remain,
    /// `Ok(false)` when the chain is exhausted. On error, callbacks already
    /// run stay run; the failing node's remaining phases are abandoned.
    pub fn step<H: UpdateHandler<T>>(&mut self, handler: &mut H) -> UpdateResult<bool> {
        let Some(node) = self.nodes.pop_front() else {
            return Ok(false);
        };

        let UpdateNode {
            change,
            silent,
            callbacks,
        } = node;

        for callback in callbacks.before {
            callback();
        }

        if let Some(change) = change {
            if change.action() == ChangeAction::Reset && !self.from_reset {
                return Err(UpdateError::UnexpectedReset);
            }
            trace!(action = ?change.action(), count = change.item_count(), silent, "dispatching change");
            if silent {
                handler.apply_silently(&change)?;
            } else {
                handler.raise(&change)?;
            }
        }

        for callback in callbacks.after {
            callback();
        }

        Ok(true)
    }

    /// Eagerly drains the whole chain through `handler`.
    pub fn drain<H: UpdateHandler<T>>(&mut self, handler: &mut H) -> UpdateResult<()> {
        let total = self.nodes.len();
        while self.step(handler)? {}
        debug!(nodes = total, "change chain drained");
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for CollectionUpdater<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionUpdater")
            .field("nodes", &self.nodes.len())
            .field("from_reset", &self.from_reset)
            .finish()
    }
}
