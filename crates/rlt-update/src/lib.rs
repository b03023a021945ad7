//! Two-phase dispatch for Reactive List Tracking (RLT) change chains.
//!
//! The analyzer produces an ordered chain of dispatch nodes; this crate
//! consumes it. Each node carries at most one change notification plus two
//! ordered callback lists. The pump drains nodes strictly in order: all
//! pre-commit callbacks, then the notification (raised audibly, or applied
//! silently when an observer delegated the update internally), then all
//! post-commit callbacks. Only then does it proceed to the next node.
//!
//! # Key Types
//!
//! - [`CollectionUpdater`] — The single-consumer dispatch pump
//! - [`UpdateNode`] / [`UpdateCallbacks`] — One dispatch unit and its callbacks
//! - [`UpdateVisitor`] — Per-item strategy registering callbacks during chain conversion
//! - [`UpdateHandler`] — Consumer of raised / silently-applied notifications
//! - [`VecHandler`] / [`CollectingHandler`] — Ready-made handlers
//! - [`UpdateError`] — Contract violations surfaced by the pump

pub mod apply;
pub mod error;
pub mod traits;
pub mod updater;

pub use apply::{apply_change, CollectingHandler, VecHandler};
pub use error::{UpdateError, UpdateResult};
pub use traits::{NoopVisitor, UpdateHandler, UpdateVisitor};
pub use updater::{CollectionUpdater, UpdateCallbacks, UpdateNode};
