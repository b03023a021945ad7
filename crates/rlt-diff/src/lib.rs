//! Incremental ordered-collection diffing for Reactive List Tracking (RLT).
//!
//! Given snapshots of a previous and an updated list plus an
//! [`ItemComparer`](rlt_types::ItemComparer), the analyzer computes a minimal
//! ordered chain of typed change segments (add / remove / replace / move),
//! which converts into change-notification events or into a
//! [`CollectionUpdater`](rlt_update::CollectionUpdater) dispatch chain with
//! per-item visitor callbacks.
//!
//! # Key Types
//!
//! - [`CollectionAnalyzer`] — The diff algorithm
//! - [`AnalyzerOptions`] — Per-invocation configuration
//! - [`ChangeChain`] / [`ChangeSegment`] — The ordered diff result

pub mod analyzer;
pub mod chain;

pub use analyzer::{AnalyzerOptions, CollectionAnalyzer};
pub use chain::{ChangeChain, ChangeSegment};
