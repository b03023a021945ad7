//! Foundation types for Reactive List Tracking (RLT).
//!
//! This crate provides the change-notification events and the pluggable item
//! comparer shared by the analyzer, the dispatch pump, and their consumers.
//! Every other RLT crate depends on `rlt-types`.
//!
//! # Key Types
//!
//! - [`ListChange`] — One structural change notification (add/remove/replace/move/reset)
//! - [`ChangeAction`] — The action kind carried by a [`ListChange`]
//! - [`ItemComparer`] — Identity equality plus optional version equality

pub mod change;
pub mod comparer;

pub use change::{ChangeAction, ListChange};
pub use comparer::{EqualityFn, ItemComparer};
